/// Diesel models for job_listings table
use crate::modules::listings::domain::entities::{JobListing, NewJobListing};
use crate::schema::job_listings;
use crate::shared::domain::value_objects::{JobSource, RemoteType};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Diesel model for inserting new listings
///
/// `created_at` and `updated_at` are omitted; the database fills them.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = job_listings)]
pub struct NewJobListingModel {
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
    pub skills: JsonValue,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub source_metadata: Option<JsonValue>,
}

impl NewJobListingModel {
    pub fn from_domain(listing: NewJobListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            company: listing.company,
            location: listing.location,
            remote_type: listing.remote_type,
            description: listing.description,
            salary_min: listing.salary_min,
            salary_max: listing.salary_max,
            salary_currency: listing.salary_currency,
            source: listing.source,
            source_id: listing.source_id,
            source_url: listing.source_url,
            dedup_hash: listing.dedup_hash,
            company_logo_url: listing.company_logo_url,
            skills: serde_json::to_value(&listing.skills)
                .unwrap_or_else(|_| JsonValue::Array(Vec::new())),
            experience_level: listing.experience_level,
            employment_type: listing.employment_type,
            posted_at: listing.posted_at,
            expires_at: listing.expires_at,
            source_metadata: listing.source_metadata,
        }
    }
}

/// Diesel model for querying stored listings
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = job_listings)]
pub struct JobListingModel {
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
    pub skills: JsonValue,
    pub experience_level: Option<String>,
    pub employment_type: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
    pub source_metadata: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobListingModel {
    /// Convert to domain JobListing
    pub fn to_domain(self) -> JobListing {
        JobListing {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            remote_type: self.remote_type,
            description: self.description,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            salary_currency: self.salary_currency,
            source: self.source,
            source_id: self.source_id,
            source_url: self.source_url,
            dedup_hash: self.dedup_hash,
            company_logo_url: self.company_logo_url,
            skills: serde_json::from_value::<Vec<String>>(self.skills).unwrap_or_default(),
            experience_level: self.experience_level,
            employment_type: self.employment_type,
            posted_at: self.posted_at,
            expires_at: self.expires_at,
            source_metadata: self.source_metadata,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_round_trip_through_json() {
        let mut listing = NewJobListing::new(
            "Rust Engineer",
            "Acme",
            "London",
            RemoteType::Remote,
            JobSource::Adzuna,
            "rust engineer-acme-london",
        );
        listing.skills = vec!["rust".to_string(), "tokio".to_string()];

        let model = NewJobListingModel::from_domain(listing);
        assert_eq!(model.skills, serde_json::json!(["rust", "tokio"]));
    }

    #[test]
    fn test_empty_skills_serialize_to_an_empty_array() {
        let listing = NewJobListing::new(
            "Rust Engineer",
            "Acme",
            "London",
            RemoteType::Remote,
            JobSource::Adzuna,
            "rust engineer-acme-london",
        );

        let model = NewJobListingModel::from_domain(listing);
        assert_eq!(model.skills, serde_json::json!([]));
    }

    #[test]
    fn test_to_domain_tolerates_malformed_skills() {
        let model = JobListingModel {
            id: Uuid::new_v4(),
            title: "Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "London".to_string(),
            remote_type: RemoteType::Hybrid,
            description: None,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            source: JobSource::Jooble,
            source_id: None,
            source_url: None,
            dedup_hash: "rust engineer-acme-london".to_string(),
            company_logo_url: None,
            skills: serde_json::json!({"not": "a list"}),
            experience_level: None,
            employment_type: None,
            posted_at: None,
            expires_at: None,
            source_metadata: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let listing = model.to_domain();
        assert!(listing.skills.is_empty());
    }
}
