use crate::error::Result;
use crate::search::SearchEngine;
use crate::types::{DocId, Document, DocumentStatus};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one engine shared between threads.
///
/// Adding documents takes the write lock; searches share the read lock.
#[derive(Debug, Clone)]
pub struct SharedSearchEngine {
    inner: Arc<RwLock<SearchEngine>>,
}

impl SharedSearchEngine {
    pub fn new(engine: SearchEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    pub fn add_document(&self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.inner.write().add_document(id, text, status, ratings)
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_by_status(raw_query, status)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        self.inner.read().find_top_documents_with(raw_query, predicate)
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        self.inner.read().match_document(raw_query, id)
    }

    pub fn document_count(&self) -> usize { self.inner.read().document_count() }

    /// Run `f` with shared access, e.g. to drive a `RequestTracker`.
    pub fn with_read<R>(&self, f: impl FnOnce(&SearchEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<SearchEngine> for SharedSearchEngine {
    fn from(engine: SearchEngine) -> Self { Self::new(engine) }
}
