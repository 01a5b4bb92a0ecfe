use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdzunaSearchResponse {
    pub results: Vec<AdzunaJob>,
    pub count: Option<i64>,
}

/// One hit from /v1/api/jobs/{country}/search. Adzuna omits fields freely,
/// so everything is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdzunaJob {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub redirect_url: Option<String>,
    pub company: Option<AdzunaCompany>,
    pub location: Option<AdzunaLocation>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_is_predicted: Option<String>,
    pub contract_type: Option<String>,
    pub contract_time: Option<String>,
    pub category: Option<AdzunaCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdzunaCompany {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdzunaLocation {
    pub display_name: Option<String>,
    pub area: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdzunaCategory {
    pub label: Option<String>,
    pub tag: Option<String>,
}
