//! Deterministic listing fingerprints.
//!
//! The same role posted through different boards comes back with different
//! ids, casing, punctuation and suffixes. The fingerprint normalizes the
//! title, company and location into a stable key so those listings collapse
//! into one.

use crate::modules::providers::domain::ScrapedJob;
use regex::Regex;
use std::collections::HashMap;

/// Trailing legal-form tokens that boards attach inconsistently to the
/// same company ("Acme" vs "Acme Inc" vs "Acme Inc LLC")
const LEGAL_SUFFIX_PATTERN: &str =
    r"(?:\s+(?:inc|llc|ltd|corp|limited|corporation|gmbh|sp z o ?o|sa|ag))+$";

/// Spelling variants that survive normalization, keyed on their
/// normalized form ("Kraków" normalizes to "krakw")
const LOCATION_ALIASES: &[(&str, &str)] = &[
    ("londyn", "london"),
    ("nyc", "new york"),
    ("new york city", "new york"),
    ("sf", "san francisco"),
    ("warszawa", "warsaw"),
    ("krakw", "krakow"),
    ("gdask", "gdansk"),
    ("wrocaw", "wroclaw"),
    ("pozna", "poznan"),
    ("monachium", "munich"),
    ("pary", "paris"),
];

pub struct FingerprintGenerator {
    legal_suffixes: Regex,
    location_aliases: HashMap<&'static str, &'static str>,
}

impl FingerprintGenerator {
    pub fn new() -> Self {
        Self {
            legal_suffixes: Regex::new(LEGAL_SUFFIX_PATTERN)
                .unwrap_or_else(|e| panic!("invalid legal suffix pattern: {}", e)),
            location_aliases: LOCATION_ALIASES.iter().copied().collect(),
        }
    }

    /// Stable identity of a listing: normalized title, company and
    /// location joined with `-`. Missing fields contribute empty keys.
    pub fn fingerprint(&self, title: &str, company: &str, location: &str) -> String {
        format!(
            "{}-{}-{}",
            Self::normalize(title),
            self.company_key(company),
            self.location_key(location)
        )
    }

    pub fn fingerprint_job(&self, job: &ScrapedJob) -> String {
        self.fingerprint(
            &job.title,
            job.company_name.as_deref().unwrap_or(""),
            job.location.as_deref().unwrap_or(""),
        )
    }

    /// Lowercase, keep `[a-z0-9]` and spaces only, collapse whitespace
    fn normalize(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn company_key(&self, company: &str) -> String {
        let normalized = Self::normalize(company);
        let stripped = self.legal_suffixes.replace(&normalized, "");
        let stripped = stripped.trim();

        // A company that IS a legal form ("SA") keeps its name
        if stripped.is_empty() {
            normalized
        } else {
            stripped.to_string()
        }
    }

    /// First segment before `,` or `-`, normalized, then mapped through
    /// the alias table
    fn location_key(&self, location: &str) -> String {
        let first_segment = location.split([',', '-']).next().unwrap_or("");
        let normalized = Self::normalize(first_segment);

        match self.location_aliases.get(normalized.as_str()) {
            Some(canonical) => (*canonical).to_string(),
            None => normalized,
        }
    }
}

impl Default for FingerprintGenerator {
    fn default() -> Self {
        Self::new()
    }
}
