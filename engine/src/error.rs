use crate::DocId;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the search engine.
///
/// Every variant is recoverable: a failed call leaves the engine exactly as it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A stop word (or a tracker setting) is unusable.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
    #[error("document id can't be negative: {0}")]
    InvalidId(DocId),
    #[error("document already exists: {0}")]
    DuplicateId(DocId),
    /// Nothing is left to index once stop words are removed.
    #[error("document {0} has no indexable words")]
    EmptyDocument(DocId),
    #[error("document {id} contains an invalid word: {word:?}")]
    InvalidDocumentText { id: DocId, word: String },
    #[error("incorrect query word: {token:?}")]
    MalformedQuery { token: String },
    #[error("document not found: {0}")]
    NotFound(DocId),
    #[error("index {index} is out of range for {len} documents")]
    IndexOutOfRange { index: usize, len: usize },
}
