use super::dto::{JsearchJob, JsearchRequiredExperience};
use crate::modules::providers::domain::ScrapedJob;
use crate::shared::domain::value_objects::JobSource;
use chrono::{DateTime, Utc};
use serde_json::json;

pub struct JsearchMapper;

impl JsearchMapper {
    pub fn to_domain(job: JsearchJob) -> ScrapedJob {
        let location = Self::join_location(&job);
        let experience_level = Self::experience_summary(job.job_required_experience.as_ref());

        let metadata = json!({
            "publisher": job.job_publisher,
            "salary_period": job.job_salary_period,
        });

        ScrapedJob {
            source: JobSource::Jsearch,
            source_id: job.job_id,
            title: job.job_title.unwrap_or_default(),
            company_name: job.employer_name.filter(|s| !s.is_empty()),
            location,
            description: job.job_description,
            url: job.job_apply_link,
            salary_min: job.job_min_salary,
            salary_max: job.job_max_salary,
            salary_currency: job.job_salary_currency.filter(|c| !c.is_empty()),
            is_remote: job.job_is_remote,
            company_logo_url: job.employer_logo.filter(|u| !u.is_empty()),
            skills: job.job_required_skills.unwrap_or_default(),
            experience_level,
            employment_type: job.job_employment_type.filter(|t| !t.is_empty()),
            posted_at: Self::parse_utc(job.job_posted_at_datetime_utc.as_deref()),
            expires_at: Self::parse_utc(job.job_offer_expiration_datetime_utc.as_deref()),
            metadata,
        }
    }

    /// City, state and country come split; the stored location joins the
    /// non-empty parts in that order
    fn join_location(job: &JsearchJob) -> Option<String> {
        let parts: Vec<&str> = [&job.job_city, &job.job_state, &job.job_country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }

    /// Months of required experience, verbatim; no bucketing into
    /// junior/mid/senior
    fn experience_summary(exp: Option<&JsearchRequiredExperience>) -> Option<String> {
        let exp = exp?;
        if exp.no_experience_required == Some(true) {
            return Some("none required".to_string());
        }
        exp.required_experience_in_months
            .filter(|months| *months > 0)
            .map(|months| format!("{} months", months))
    }

    fn parse_utc(raw: Option<&str>) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw?)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    }
}
