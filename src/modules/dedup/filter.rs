use super::fingerprint::FingerprintGenerator;
use crate::modules::providers::domain::ScrapedJob;
use std::collections::HashSet;

/// Drop every job whose fingerprint is already stored or already appeared
/// earlier in this batch. Survivors come back paired with their
/// fingerprint, input order preserved.
pub fn filter_new_jobs(
    jobs: Vec<ScrapedJob>,
    fingerprints: &FingerprintGenerator,
    existing: &HashSet<String>,
) -> Vec<(ScrapedJob, String)> {
    let mut seen_in_batch: HashSet<String> = HashSet::new();
    let mut fresh = Vec::new();

    for job in jobs {
        let hash = fingerprints.fingerprint_job(&job);
        if existing.contains(&hash) {
            continue;
        }
        if !seen_in_batch.insert(hash.clone()) {
            continue;
        }
        fresh.push((job, hash));
    }

    fresh
}
