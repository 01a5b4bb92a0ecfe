/// Query plan construction
///
/// Expands stored preferences into the list of provider searches one
/// cycle will actually issue. The fan-out is bounded by distinct
/// (keywords, location) intents, not by how many users share them.
use crate::modules::preferences::domain::entities::SearchPreference;
use crate::modules::providers::domain::JobQuery;
use std::collections::HashSet;

/// Cross product of roles x locations per preference, deduplicated
/// case-insensitively across all preferences in first-seen order.
///
/// An empty role or location list contributes a single empty string, so
/// a preference with only roles (or only locations) still yields queries.
pub fn build_queries(preferences: &[SearchPreference]) -> Vec<JobQuery> {
    let mut queries = Vec::new();
    let mut seen = HashSet::new();

    for preference in preferences {
        let roles = non_empty_or_blank(&preference.target_roles);
        let locations = non_empty_or_blank(&preference.target_locations);

        for role in &roles {
            for location in &locations {
                let query = JobQuery::new(role.trim(), location.trim());
                if seen.insert(query.dedup_key()) {
                    queries.push(query);
                }
            }
        }
    }

    queries
}

fn non_empty_or_blank(values: &[String]) -> Vec<&str> {
    if values.is_empty() {
        vec![""]
    } else {
        values.iter().map(String::as_str).collect()
    }
}
