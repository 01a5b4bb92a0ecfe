use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoobleSearchResponse {
    #[serde(rename = "totalCount")]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub jobs: Vec<JoobleJob>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoobleJob {
    pub id: Option<JoobleId>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub snippet: Option<String>,
    /// Free text like "£40k - £50k per annum", never parsed into numbers
    pub salary: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub link: Option<String>,
    pub company: Option<String>,
    pub updated: Option<String>,
}

/// Jooble has served both numeric and string ids over time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JoobleId {
    Num(i64),
    Text(String),
}

impl JoobleId {
    pub fn into_string(self) -> String {
        match self {
            JoobleId::Num(n) => n.to_string(),
            JoobleId::Text(s) => s,
        }
    }
}
