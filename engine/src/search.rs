use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::rank::Ranker;
use crate::stop_words::StopWords;
use crate::types::{DocId, Document, DocumentStatus};

/// In-memory TF-IDF search over short text documents.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine from a collection of stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_stop_words(StopWords::new(stop_words)?))
    }

    /// Create an engine from space-separated stop words.
    pub fn from_text(stop_words: &str) -> Result<Self> {
        Ok(Self::from_stop_words(StopWords::from_text(stop_words)?))
    }

    pub fn from_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words, index: InvertedIndex::new(), config: SearchConfig::default() }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SearchConfig { &self.config }
    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        self.index.add_document(id, text, status, ratings, &self.stop_words)
    }

    /// Search with a custom filter over (id, status, rating).
    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = Query::parse(raw_query)?;
        let docs = Ranker::new(&self.index, self.config).rank(&query, predicate);
        tracing::debug!(query = raw_query, hits = docs.len(), "find top documents");
        Ok(docs)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Search among active documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    /// Plus words of the query found in document `id`, in lexicographic order.
    ///
    /// A single matching minus word empties the list. The query is checked before the id,
    /// so a malformed query reports `MalformedQuery` even for an unknown document.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query)?;
        let meta = self.index.document_meta(id)?;
        if query.minus_words.iter().any(|word| self.index.contains(word, id)) {
            return Ok((Vec::new(), meta.status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|word| self.index.contains(word, id))
            .collect();
        Ok((matched, meta.status))
    }

    pub fn document_count(&self) -> usize { self.index.document_count() }

    /// Id of the `index`-th added document.
    pub fn get_document_id(&self, index: usize) -> Result<DocId> {
        self.index.document_id(index)
    }

    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.document_ids()
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }
}
