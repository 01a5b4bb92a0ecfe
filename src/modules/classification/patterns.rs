//! Keyword tiers for work arrangement detection.
//!
//! English and Polish variants live side by side; Polish stems rely on
//! `\w*` being Unicode-aware so declension endings match.

/// Explicit in-office language, strongest signal
pub(crate) const ONSITE_PATTERNS: &[&str] = &[
    r"\bon[\s-]?site\b",
    r"\bin[\s-]?office\b",
    r"\bin[\s-]?person\b",
    r"\bno remote\b",
    r"\boffice[\s-]based\b",
    r"\bstacjonarn\w*",
    r"\bw biurze\b",
];

/// "N days in the office" phrasing. Classifies as hybrid, and also
/// shields the office mention inside it from the onsite tier.
pub(crate) const DAYS_IN_OFFICE_PATTERN: &str =
    r"\b\d+\s*(?:days?|dni)\s+(?:in|w)\s+(?:the\s+)?(?:office|biurze)\b";

/// Mixed arrangements
pub(crate) const HYBRID_PATTERNS: &[&str] =
    &[r"\bhybrid\b", r"\bhybrydow\w*", DAYS_IN_OFFICE_PATTERN];

/// Unambiguous fully-remote language
pub(crate) const REMOTE_HIGH_PATTERNS: &[&str] = &[
    r"\bfully[\s-]remote\b",
    r"\b100%\s*remote\b",
    r"\bremote[\s-]first\b",
    r"\bremote[\s-]only\b",
    r"\bw pełni zdaln\w*",
    r"\b100%\s*zdaln\w*",
    r"\bcałkowicie zdaln\w*",
];

/// Weaker remote hints that need false-positive screening
pub(crate) const REMOTE_MEDIUM_PATTERNS: &[&str] = &[
    r"\bremote\b",
    r"\bzdaln\w*",
    r"\bwfh\b",
    r"\bwork from home\b",
    r"\bhome[\s-]office\b",
    r"\btelecommut\w*",
];

/// Phrases where "remote" is a technology, not an arrangement. A medium
/// tier match with one of these nearby is discarded.
pub(crate) const REMOTE_FALSE_POSITIVE_PHRASES: &[&str] = &[
    "remote sensing",
    "remote control",
    "remote desktop",
    "remote access",
    "remote server",
    "remote support",
    "remote monitoring",
    "remote management",
];
