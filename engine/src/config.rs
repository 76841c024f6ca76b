use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
pub const RELEVANCE_EPSILON: f64 = 1e-6;
/// One logical minute per request, one day of requests.
pub const MIN_IN_DAY: u64 = 1440;

fn default_max_results() -> usize { MAX_RESULT_DOCUMENT_COUNT }
fn default_epsilon() -> f64 { RELEVANCE_EPSILON }
fn default_window_len() -> u64 { MIN_IN_DAY }

/// Ranking settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_max_results")]
    pub max_result_document_count: usize,
    /// Relevances closer than this are ranked by rating instead.
    #[serde(default = "default_epsilon")]
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_result_document_count: default_max_results(), relevance_epsilon: default_epsilon() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_window_len")]
    pub window_len: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { window_len: default_window_len() }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_len == 0 {
            return Err(Error::InvalidConfiguration { reason: "tracker window must be at least one request".into() });
        }
        Ok(())
    }
}
