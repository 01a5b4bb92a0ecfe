//! Work arrangement detection from listing text.

use super::patterns::{
    DAYS_IN_OFFICE_PATTERN, HYBRID_PATTERNS, ONSITE_PATTERNS, REMOTE_FALSE_POSITIVE_PHRASES,
    REMOTE_HIGH_PATTERNS, REMOTE_MEDIUM_PATTERNS,
};
use crate::modules::providers::domain::ScrapedJob;
use crate::shared::domain::value_objects::RemoteType;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    High,
    Medium,
    Low,
}

/// Outcome of a classification: the arrangement plus which keyword
/// decided it, kept for auditing stored rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkTypeMatch {
    pub work_type: RemoteType,
    pub matched_keyword: Option<String>,
    pub confidence: MatchConfidence,
}

/// Margin around a medium-tier match searched for false-positive phrases
const FALSE_POSITIVE_WINDOW: usize = 20;

pub struct WorkTypeClassifier {
    onsite: Regex,
    hybrid: Regex,
    days_in_office: Regex,
    remote_high: Regex,
    remote_medium: Regex,
}

impl WorkTypeClassifier {
    pub fn new() -> Self {
        Self {
            onsite: Self::compile_tier(ONSITE_PATTERNS),
            hybrid: Self::compile_tier(HYBRID_PATTERNS),
            days_in_office: Self::compile_tier(&[DAYS_IN_OFFICE_PATTERN]),
            remote_high: Self::compile_tier(REMOTE_HIGH_PATTERNS),
            remote_medium: Self::compile_tier(REMOTE_MEDIUM_PATTERNS),
        }
    }

    fn compile_tier(patterns: &[&str]) -> Regex {
        let combined = patterns.join("|");
        Regex::new(&combined).unwrap_or_else(|e| panic!("invalid tier pattern: {}", e))
    }

    /// Tiers are checked strongest first; the first that fires wins.
    /// Explicit onsite language beats hybrid beats remote, so "hybrid,
    /// not fully remote" classifies as hybrid.
    pub fn classify(&self, job: &ScrapedJob) -> WorkTypeMatch {
        let haystack = Self::searchable_text(job);

        if let Some(keyword) = self.first_standalone_onsite_match(&haystack) {
            return WorkTypeMatch {
                work_type: RemoteType::Onsite,
                matched_keyword: Some(keyword),
                confidence: MatchConfidence::High,
            };
        }

        if let Some(matched) = self.hybrid.find(&haystack) {
            return WorkTypeMatch {
                work_type: RemoteType::Hybrid,
                matched_keyword: Some(matched.as_str().to_string()),
                confidence: MatchConfidence::High,
            };
        }

        if let Some(matched) = self.remote_high.find(&haystack) {
            return WorkTypeMatch {
                work_type: RemoteType::Remote,
                matched_keyword: Some(matched.as_str().to_string()),
                confidence: MatchConfidence::High,
            };
        }

        if let Some(keyword) = self.first_clean_medium_match(&haystack) {
            return WorkTypeMatch {
                work_type: RemoteType::Remote,
                matched_keyword: Some(keyword),
                confidence: MatchConfidence::Medium,
            };
        }

        // Some boards flag remoteness without saying so in the text
        if job.is_remote == Some(true) {
            return WorkTypeMatch {
                work_type: RemoteType::Remote,
                matched_keyword: Some("is_remote".to_string()),
                confidence: MatchConfidence::Low,
            };
        }

        WorkTypeMatch {
            work_type: RemoteType::Undetermined,
            matched_keyword: None,
            confidence: MatchConfidence::Low,
        }
    }

    fn searchable_text(job: &ScrapedJob) -> String {
        match &job.description {
            Some(description) => format!("{} {}", job.title, description).to_lowercase(),
            None => job.title.to_lowercase(),
        }
    }

    /// An office mention inside an "N days in the office" phrase is a
    /// hybrid signal, not an onsite requirement, and must not fire here
    fn first_standalone_onsite_match(&self, haystack: &str) -> Option<String> {
        let day_spans: Vec<(usize, usize)> = self
            .days_in_office
            .find_iter(haystack)
            .map(|matched| (matched.start(), matched.end()))
            .collect();

        self.onsite
            .find_iter(haystack)
            .find(|matched| {
                !day_spans
                    .iter()
                    .any(|(from, to)| matched.start() >= *from && matched.end() <= *to)
            })
            .map(|matched| matched.as_str().to_string())
    }

    /// First medium-tier match with no false-positive phrase nearby.
    /// One suppressed match does not disqualify the others.
    fn first_clean_medium_match(&self, haystack: &str) -> Option<String> {
        self.remote_medium
            .find_iter(haystack)
            .find(|matched| {
                let window =
                    Self::context_window(haystack, matched.start(), matched.end());
                !REMOTE_FALSE_POSITIVE_PHRASES
                    .iter()
                    .any(|phrase| window.contains(phrase))
            })
            .map(|matched| matched.as_str().to_string())
    }

    /// Slice around a match, widened to the nearest char boundaries so
    /// multibyte text cannot split a code point
    fn context_window(text: &str, start: usize, end: usize) -> &str {
        let mut from = start.saturating_sub(FALSE_POSITIVE_WINDOW);
        while from > 0 && !text.is_char_boundary(from) {
            from -= 1;
        }

        let mut to = (end + FALSE_POSITIVE_WINDOW).min(text.len());
        while to < text.len() && !text.is_char_boundary(to) {
            to += 1;
        }

        &text[from..to]
    }
}

impl Default for WorkTypeClassifier {
    fn default() -> Self {
        Self::new()
    }
}
