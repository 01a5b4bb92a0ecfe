/// Domain entities for stored job listings
///
/// A `JobListing` is a provider result that survived dedup and was
/// persisted; `NewJobListing` is the write-side payload built by the
/// ingest pipeline before insertion.
use crate::shared::domain::value_objects::{JobSource, RemoteType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Persisted job listing with database metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub remote_type: RemoteType,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub source: JobSource,
    pub source_id: Option<String>,
    pub source_url: Option<String>,
    pub dedup_hash: String,
    pub company_logo_url: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub source_metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing to be stored (before insertion to database)
#[derive(Debug, Clone)]
pub struct NewJobListing {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub remote_type: RemoteType,
    pub description: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub source: JobSource,
    pub source_id: Option<String>,
    pub source_url: Option<String>,
    pub dedup_hash: String,
    pub company_logo_url: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub source_metadata: Option<JsonValue>,
}

impl NewJobListing {
    /// Create a minimal listing; ingest fills the optional fields afterwards
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        remote_type: RemoteType,
        source: JobSource,
        dedup_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            remote_type,
            description: None,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            source,
            source_id: None,
            source_url: None,
            dedup_hash: dedup_hash.into(),
            company_logo_url: None,
            skills: Vec::new(),
            experience_level: None,
            employment_type: None,
            posted_at: None,
            expires_at: None,
            source_metadata: None,
        }
    }
}
