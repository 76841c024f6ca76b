use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document identifier. Signed so callers can hand over raw ids; negatives are rejected.
pub type DocId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    #[serde(alias = "actual")]
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" | "actual" => Ok(Self::Active),
            "irrelevant" => Ok(Self::Irrelevant),
            "banned" => Ok(Self::Banned),
            "removed" => Ok(Self::Removed),
            other => Err(format!("unknown document status: {other}")),
        }
    }
}

/// Stored per document: averaged rating and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocMeta {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        Self { id, relevance, rating }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
