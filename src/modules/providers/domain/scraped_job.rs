use crate::shared::domain::value_objects::JobSource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One provider result normalized into the common shape. Field presence
/// varies wildly between providers, so everything beyond the title is
/// optional; provider-specific extras ride along in `metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedJob {
    pub source: JobSource,
    pub source_id: Option<String>,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub is_remote: Option<bool>,
    pub company_logo_url: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub metadata: JsonValue,
}

impl ScrapedJob {
    pub fn new(source: JobSource, title: impl Into<String>) -> Self {
        Self {
            source,
            source_id: None,
            title: title.into(),
            company_name: None,
            location: None,
            description: None,
            url: None,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            is_remote: None,
            company_logo_url: None,
            skills: Vec::new(),
            experience_level: None,
            employment_type: None,
            posted_at: None,
            expires_at: None,
            metadata: JsonValue::Null,
        }
    }
}
