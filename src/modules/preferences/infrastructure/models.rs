/// Diesel models for search_preferences table
use crate::modules::preferences::domain::entities::SearchPreference;
use crate::schema::search_preferences;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Diesel model for querying preference rows
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = search_preferences)]
pub struct SearchPreferenceModel {
    pub id: Uuid,
    pub target_roles: JsonValue,
    pub target_locations: JsonValue,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SearchPreferenceModel {
    /// Convert to domain SearchPreference
    pub fn to_domain(self) -> SearchPreference {
        SearchPreference {
            id: self.id,
            target_roles: decode_string_array(self.target_roles),
            target_locations: decode_string_array(self.target_locations),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Decode a jsonb array into strings, dropping entries of any other type
fn decode_string_array(value: JsonValue) -> Vec<String> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(roles: JsonValue, locations: JsonValue) -> SearchPreferenceModel {
        SearchPreferenceModel {
            id: Uuid::new_v4(),
            target_roles: roles,
            target_locations: locations,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_string_arrays_decode() {
        let preference = model(
            serde_json::json!(["Backend Engineer", "Rust Developer"]),
            serde_json::json!(["Warsaw"]),
        )
        .to_domain();

        assert_eq!(
            preference.target_roles,
            vec!["Backend Engineer", "Rust Developer"]
        );
        assert_eq!(preference.target_locations, vec!["Warsaw"]);
    }

    #[test]
    fn test_non_string_entries_are_skipped() {
        let preference = model(
            serde_json::json!(["Backend Engineer", 7, null, {"role": "DevOps"}]),
            serde_json::json!([true, "Remote"]),
        )
        .to_domain();

        assert_eq!(preference.target_roles, vec!["Backend Engineer"]);
        assert_eq!(preference.target_locations, vec!["Remote"]);
    }

    #[test]
    fn test_non_array_payloads_decode_to_empty() {
        let preference = model(
            serde_json::json!("Backend Engineer"),
            serde_json::json!({"locations": ["Warsaw"]}),
        )
        .to_domain();

        assert!(preference.target_roles.is_empty());
        assert!(preference.target_locations.is_empty());
    }
}
