use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsearchSearchResponse {
    pub status: Option<String>,
    pub request_id: Option<String>,
    #[serde(default)]
    pub data: Vec<JsearchJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsearchJob {
    pub job_id: Option<String>,
    pub job_title: Option<String>,
    pub employer_name: Option<String>,
    pub employer_logo: Option<String>,
    pub job_publisher: Option<String>,
    pub job_employment_type: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_description: Option<String>,
    pub job_is_remote: Option<bool>,
    pub job_posted_at_datetime_utc: Option<String>,
    pub job_city: Option<String>,
    pub job_state: Option<String>,
    pub job_country: Option<String>,
    pub job_min_salary: Option<f64>,
    pub job_max_salary: Option<f64>,
    pub job_salary_currency: Option<String>,
    pub job_salary_period: Option<String>,
    pub job_offer_expiration_datetime_utc: Option<String>,
    pub job_required_skills: Option<Vec<String>>,
    pub job_required_experience: Option<JsearchRequiredExperience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsearchRequiredExperience {
    pub no_experience_required: Option<bool>,
    pub required_experience_in_months: Option<i64>,
    pub experience_mentioned: Option<bool>,
    pub experience_preferred: Option<bool>,
}
