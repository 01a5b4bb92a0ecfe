use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work arrangement of a job listing, as resolved by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::RemoteType"]
#[serde(rename_all = "lowercase")]
pub enum RemoteType {
    Remote,
    Hybrid,
    Onsite,
    Undetermined,
}

impl fmt::Display for RemoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteType::Remote => "remote",
            RemoteType::Hybrid => "hybrid",
            RemoteType::Onsite => "onsite",
            RemoteType::Undetermined => "undetermined",
        };
        write!(f, "{}", name)
    }
}
