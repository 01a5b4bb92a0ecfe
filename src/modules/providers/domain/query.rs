use serde::{Deserialize, Serialize};

/// A single provider search: keywords plus a free-text location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    pub keywords: String,
    pub location: String,
    pub results_per_page: u32,
}

impl JobQuery {
    pub const DEFAULT_RESULTS_PER_PAGE: u32 = 20;

    pub fn new(keywords: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            location: location.into(),
            results_per_page: Self::DEFAULT_RESULTS_PER_PAGE,
        }
    }

    /// Case-insensitive identity used when deduplicating the query plan.
    pub fn dedup_key(&self) -> (String, String) {
        (self.keywords.to_lowercase(), self.location.to_lowercase())
    }

    /// Human-readable form for log lines.
    pub fn describe(&self) -> String {
        match (self.keywords.is_empty(), self.location.is_empty()) {
            (false, false) => format!("{} @ {}", self.keywords, self.location),
            (false, true) => self.keywords.clone(),
            (true, false) => format!("anything @ {}", self.location),
            (true, true) => "anything, anywhere".to_string(),
        }
    }
}
