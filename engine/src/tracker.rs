use crate::config::TrackerConfig;
use crate::error::Result;
use crate::search::SearchEngine;
use crate::types::{DocId, Document, DocumentStatus};
use std::collections::VecDeque;

#[derive(Debug)]
struct QueryResult {
    timestamp: u64,
    is_empty: bool,
}

/// Counts requests with no results over a sliding window of recent requests.
///
/// Time is logical: every successful request advances the clock by one minute.
#[derive(Debug)]
pub struct RequestTracker<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<QueryResult>,
    current_time: u64,
    no_result_requests: usize,
    window_len: u64,
}

impl<'a> RequestTracker<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self {
            engine,
            requests: VecDeque::new(),
            current_time: 0,
            no_result_requests: 0,
            window_len: TrackerConfig::default().window_len,
        }
    }

    pub fn with_config(engine: &'a SearchEngine, config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { window_len: config.window_len, ..Self::new(engine) })
    }

    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let docs = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        let docs = self.engine.find_top_documents_by_status(raw_query, status)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let docs = self.engine.find_top_documents(raw_query)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    /// Requests in the current window that found nothing.
    pub fn get_no_result_requests(&self) -> usize { self.no_result_requests }

    /// Requests currently held in the window.
    pub fn len(&self) -> usize { self.requests.len() }
    pub fn is_empty(&self) -> bool { self.requests.is_empty() }

    fn record(&mut self, is_empty: bool) {
        self.current_time += 1;
        while let Some(front) = self.requests.front() {
            if self.current_time - front.timestamp < self.window_len {
                break;
            }
            if front.is_empty {
                self.no_result_requests -= 1;
            }
            tracing::trace!(timestamp = front.timestamp, now = self.current_time, "request left window");
            self.requests.pop_front();
        }
        self.requests.push_back(QueryResult { timestamp: self.current_time, is_empty });
        if is_empty {
            self.no_result_requests += 1;
        }
    }
}
