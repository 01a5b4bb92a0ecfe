use super::dto::AdzunaJob;
use crate::modules::providers::domain::ScrapedJob;
use crate::shared::domain::value_objects::JobSource;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

pub struct AdzunaMapper;

impl AdzunaMapper {
    pub fn to_domain(job: AdzunaJob, currency: &str) -> ScrapedJob {
        let location = job
            .location
            .as_ref()
            .and_then(|loc| loc.display_name.clone());

        // Currency is not in the payload; it follows the country searched
        let salary_currency = (job.salary_min.is_some() || job.salary_max.is_some())
            .then(|| currency.to_string());

        let metadata = json!({
            "category": job.category.as_ref().and_then(|c| c.label.clone()),
            "category_tag": job.category.as_ref().and_then(|c| c.tag.clone()),
            "contract_type": job.contract_type,
            "salary_is_predicted": job.salary_is_predicted,
        });

        ScrapedJob {
            source: JobSource::Adzuna,
            source_id: job.id,
            title: job.title.unwrap_or_default(),
            company_name: job.company.and_then(|c| c.display_name),
            location,
            description: job.description,
            url: job.redirect_url,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            salary_currency,
            is_remote: None,
            company_logo_url: None,
            skills: Vec::new(),
            experience_level: None,
            employment_type: job.contract_time,
            posted_at: Self::parse_created(job.created.as_deref()),
            expires_at: None,
            metadata,
        }
    }

    /// `created` is ISO-8601, sometimes without an offset suffix
    fn parse_created(created: Option<&str>) -> Option<DateTime<Utc>> {
        let raw = created?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }
}
