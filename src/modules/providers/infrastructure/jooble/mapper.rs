use super::dto::{JoobleId, JoobleJob};
use crate::modules::providers::domain::ScrapedJob;
use crate::shared::domain::value_objects::JobSource;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

pub struct JoobleMapper;

impl JoobleMapper {
    pub fn to_domain(job: JoobleJob) -> ScrapedJob {
        let metadata = json!({
            "salary_raw": job.salary.as_deref().filter(|s| !s.is_empty()),
            "listing_source": job.source,
        });

        ScrapedJob {
            source: JobSource::Jooble,
            source_id: job.id.map(JoobleId::into_string),
            title: job.title.unwrap_or_default(),
            company_name: job.company.filter(|c| !c.is_empty()),
            location: job.location.filter(|l| !l.is_empty()),
            description: job.snippet,
            url: job.link,
            // Salary stays in metadata as the raw string
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            is_remote: None,
            company_logo_url: None,
            skills: Vec::new(),
            experience_level: None,
            employment_type: job.job_type.filter(|t| !t.is_empty()),
            posted_at: Self::parse_updated(job.updated.as_deref()),
            expires_at: None,
            metadata,
        }
    }

    /// `updated` comes back as ISO-8601 with a 7-digit fraction and no
    /// offset ("2025-05-14T00:00:00.0000000"), occasionally with one
    fn parse_updated(updated: Option<&str>) -> Option<DateTime<Utc>> {
        let raw = updated?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> JoobleJob {
        JoobleJob {
            id: Some(JoobleId::Num(987654321)),
            title: Some("Backend Developer".to_string()),
            location: Some("Warszawa".to_string()),
            snippet: Some("Praca przy systemach płatności".to_string()),
            salary: Some("15 000 - 20 000 PLN".to_string()),
            source: Some("pracuj.pl".to_string()),
            job_type: Some("Pełny etat".to_string()),
            link: Some("https://jooble.org/jdp/987654321".to_string()),
            company: Some("FinTech Sp. z o.o.".to_string()),
            updated: Some("2025-05-14T00:00:00.0000000".to_string()),
        }
    }

    #[test]
    fn maps_a_full_payload() {
        let job = JoobleMapper::to_domain(sample_job());

        assert_eq!(job.source, JobSource::Jooble);
        assert_eq!(job.source_id.as_deref(), Some("987654321"));
        assert_eq!(job.title, "Backend Developer");
        assert_eq!(job.company_name.as_deref(), Some("FinTech Sp. z o.o."));
        assert_eq!(job.employment_type.as_deref(), Some("Pełny etat"));
        assert!(job.posted_at.is_some());
    }

    #[test]
    fn salary_text_lands_in_metadata_not_in_numeric_fields() {
        let job = JoobleMapper::to_domain(sample_job());

        assert!(job.salary_min.is_none());
        assert!(job.salary_max.is_none());
        assert!(job.salary_currency.is_none());
        assert_eq!(job.metadata["salary_raw"], "15 000 - 20 000 PLN");
    }

    #[test]
    fn string_ids_survive() {
        let mut dto = sample_job();
        dto.id = Some(JoobleId::Text("abc-123".to_string()));

        let job = JoobleMapper::to_domain(dto);
        assert_eq!(job.source_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn empty_strings_become_none() {
        let mut dto = sample_job();
        dto.company = Some(String::new());
        dto.location = Some(String::new());
        dto.job_type = Some(String::new());
        dto.salary = Some(String::new());

        let job = JoobleMapper::to_domain(dto);
        assert!(job.company_name.is_none());
        assert!(job.location.is_none());
        assert!(job.employment_type.is_none());
        assert_eq!(job.metadata["salary_raw"], serde_json::Value::Null);
    }
}
