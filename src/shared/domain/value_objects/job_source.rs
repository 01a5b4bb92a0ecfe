use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported job board providers, in priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::JobSource"]
pub enum JobSource {
    /// Adzuna REST API
    #[serde(rename = "adzuna")]
    #[db_rename = "adzuna"]
    Adzuna,
    /// Jooble POST API
    #[serde(rename = "jooble")]
    #[db_rename = "jooble"]
    Jooble,
    /// JSearch (RapidAPI)
    #[serde(rename = "jsearch")]
    #[db_rename = "jsearch"]
    Jsearch,
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobSource::Adzuna => "adzuna",
            JobSource::Jooble => "jooble",
            JobSource::Jsearch => "jsearch",
        };
        write!(f, "{}", name)
    }
}
