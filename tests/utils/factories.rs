/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::Utc;
use jobsift::modules::preferences::SearchPreference;
use jobsift::modules::providers::ScrapedJob;
use jobsift::shared::domain::value_objects::JobSource;
use uuid::Uuid;

pub struct JobFactory {
    source: JobSource,
    source_id: Option<String>,
    title: String,
    company: Option<String>,
    location: Option<String>,
    description: Option<String>,
    url: Option<String>,
    salary: Option<(f64, f64, String)>,
    is_remote: Option<bool>,
    metadata: serde_json::Value,
}

impl Default for JobFactory {
    fn default() -> Self {
        Self {
            source: JobSource::Adzuna,
            source_id: None,
            title: "Test Job".to_string(),
            company: Some("Test Company".to_string()),
            location: Some("Test City".to_string()),
            description: None,
            url: None,
            salary: None,
            is_remote: None,
            metadata: serde_json::Value::Null,
        }
    }
}

impl JobFactory {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn from_source(mut self, source: JobSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_source_id(mut self, source_id: &str) -> Self {
        self.source_id = Some(source_id.to_string());
        self
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(company.to_string());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn without_company(mut self) -> Self {
        self.company = None;
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_salary(mut self, min: f64, max: f64, currency: &str) -> Self {
        self.salary = Some((min, max, currency.to_string()));
        self
    }

    pub fn with_remote_flag(mut self, is_remote: bool) -> Self {
        self.is_remote = Some(is_remote);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn build(self) -> ScrapedJob {
        let mut job = ScrapedJob::new(self.source, self.title);
        job.source_id = self.source_id;
        job.company_name = self.company;
        job.location = self.location;
        job.description = self.description;
        job.url = self.url;
        if let Some((min, max, currency)) = self.salary {
            job.salary_min = Some(min);
            job.salary_max = Some(max);
            job.salary_currency = Some(currency);
        }
        job.is_remote = self.is_remote;
        job.metadata = self.metadata;
        job
    }
}

/// Preference row with the given roles and locations
pub fn preference(roles: &[&str], locations: &[&str]) -> SearchPreference {
    SearchPreference {
        id: Uuid::new_v4(),
        target_roles: roles.iter().map(|s| s.to_string()).collect(),
        target_locations: locations.iter().map(|s| s.to_string()).collect(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
