//! In-memory TF-IDF document search.
//!
//! Documents are short space-separated texts with a status and a list of ratings.
//! Queries are plain words plus `-word` exclusions; results are capped and ordered
//! by relevance, then rating. [`RequestTracker`] keeps a day-long window of how many
//! requests came back empty.

pub mod config;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
pub mod rank;
pub mod search;
pub mod shared;
pub mod stop_words;
pub mod tokenizer;
pub mod tracker;
pub mod types;

pub use config::{SearchConfig, TrackerConfig};
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use paginate::{paginate, Page, Paginator};
pub use query::Query;
pub use search::SearchEngine;
pub use shared::SharedSearchEngine;
pub use stop_words::StopWords;
pub use tracker::RequestTracker;
pub use types::{DocId, DocMeta, Document, DocumentStatus};
