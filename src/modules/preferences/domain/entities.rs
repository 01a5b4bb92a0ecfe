/// Domain entities for stored search preferences
///
/// A preference row describes what one user wants the pipeline to look
/// for; the query builder expands roles x locations into the actual
/// search plan.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreference {
    pub id: Uuid,
    pub target_roles: Vec<String>,
    pub target_locations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SearchPreference {
    /// True when the row cannot contribute any query terms at all
    pub fn is_empty(&self) -> bool {
        self.target_roles.is_empty() && self.target_locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preference(roles: &[&str], locations: &[&str]) -> SearchPreference {
        SearchPreference {
            id: Uuid::new_v4(),
            target_roles: roles.iter().map(|s| s.to_string()).collect(),
            target_locations: locations.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_preference_with_roles_is_not_empty() {
        assert!(!preference(&["Backend Engineer"], &[]).is_empty());
        assert!(!preference(&[], &["Warsaw"]).is_empty());
    }

    #[test]
    fn test_preference_without_terms_is_empty() {
        assert!(preference(&[], &[]).is_empty());
    }
}
