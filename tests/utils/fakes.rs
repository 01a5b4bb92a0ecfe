/// In-memory stand-ins for the pipeline's collaborators
///
/// Integration tests drive full ingest cycles against these instead of
/// live provider APIs and PostgreSQL, so every scenario is deterministic
/// and needs no network or database.
use async_trait::async_trait;
use chrono::Utc;
use jobsift::modules::listings::domain::entities::{JobListing, NewJobListing};
use jobsift::modules::listings::JobListingRepository;
use jobsift::modules::preferences::{SearchPreference, SearchPreferenceRepository};
use jobsift::modules::providers::{JobProviderClient, JobQuery, ScrapedJob};
use jobsift::shared::domain::value_objects::JobSource;
use jobsift::shared::errors::{AppError, AppResult};
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Provider client that replays a script of canned responses.
///
/// Each `search_jobs` call consumes the next batch; once the script is
/// exhausted further calls return empty.
pub struct ScriptedProviderClient {
    source: JobSource,
    available: bool,
    script: Mutex<VecDeque<AppResult<Vec<ScrapedJob>>>>,
    calls: AtomicUsize,
}

impl ScriptedProviderClient {
    pub fn returning(source: JobSource, batches: Vec<Vec<ScrapedJob>>) -> Self {
        Self {
            source,
            available: true,
            script: Mutex::new(batches.into_iter().map(Ok).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_one_batch(source: JobSource, jobs: Vec<ScrapedJob>) -> Self {
        Self::returning(source, vec![jobs])
    }

    pub fn unavailable(source: JobSource) -> Self {
        Self {
            source,
            available: false,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(source: JobSource, error: AppError) -> Self {
        Self {
            source,
            available: true,
            script: Mutex::new(VecDeque::from([Err(error)])),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobProviderClient for ScriptedProviderClient {
    fn source(&self) -> JobSource {
        self.source
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn search_jobs(&self, _query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().unwrap();
        script.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Preference repository backed by a fixed row set
pub struct StaticPreferenceRepository {
    rows: Vec<SearchPreference>,
    fail: bool,
}

impl StaticPreferenceRepository {
    pub fn with_rows(rows: Vec<SearchPreference>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl SearchPreferenceRepository for StaticPreferenceRepository {
    async fn load_all(&self) -> AppResult<Vec<SearchPreference>> {
        if self.fail {
            return Err(AppError::DatabaseError(
                "preference table unavailable".to_string(),
            ));
        }
        Ok(self.rows.clone())
    }
}

/// Listing repository over a plain Vec, mirroring the real upsert
/// semantics: rows are keyed on dedup_hash, a conflicting insert takes
/// the incoming values but keeps the stored row's id.
#[derive(Default)]
pub struct InMemoryListingRepository {
    rows: Mutex<Vec<JobListing>>,
    fail_lookup: AtomicBool,
    fail_upsert: AtomicBool,
    lookup_calls: AtomicUsize,
    upsert_calls: AtomicUsize,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_lookups(self) -> Self {
        self.fail_lookup.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_upserts(self) -> Self {
        self.fail_upsert.store(true, Ordering::SeqCst);
        self
    }

    /// Pre-populate the store, as if a previous cycle had inserted the row
    pub fn seed(&self, listing: NewJobListing) {
        let mut rows = self.rows.lock().unwrap();
        rows.push(materialize(listing));
    }

    pub fn stored(&self) -> Vec<JobListing> {
        self.rows.lock().unwrap().clone()
    }

    pub fn stored_by_hash(&self, hash: &str) -> Option<JobListing> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.dedup_hash == hash)
            .cloned()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobListingRepository for InMemoryListingRepository {
    async fn find_existing_hashes(&self, hashes: &[String]) -> AppResult<HashSet<String>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "fingerprint lookup unavailable".to_string(),
            ));
        }

        let rows = self.rows.lock().unwrap();
        let stored: HashSet<&str> = rows.iter().map(|row| row.dedup_hash.as_str()).collect();
        Ok(hashes
            .iter()
            .filter(|hash| stored.contains(hash.as_str()))
            .cloned()
            .collect())
    }

    async fn upsert_batch(&self, listings: Vec<NewJobListing>) -> AppResult<Vec<JobListing>> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "listing table unavailable".to_string(),
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        let mut affected = Vec::with_capacity(listings.len());

        for listing in listings {
            match rows
                .iter_mut()
                .find(|row| row.dedup_hash == listing.dedup_hash)
            {
                Some(existing) => {
                    let mut replacement = materialize(listing);
                    replacement.id = existing.id;
                    replacement.created_at = existing.created_at;
                    *existing = replacement.clone();
                    affected.push(replacement);
                }
                None => {
                    let row = materialize(listing);
                    rows.push(row.clone());
                    affected.push(row);
                }
            }
        }

        Ok(affected)
    }
}

fn materialize(listing: NewJobListing) -> JobListing {
    let now = Utc::now();
    JobListing {
        id: listing.id,
        title: listing.title,
        company: listing.company,
        location: listing.location,
        remote_type: listing.remote_type,
        description: listing.description,
        salary_min: listing.salary_min,
        salary_max: listing.salary_max,
        salary_currency: listing.salary_currency,
        source: listing.source,
        source_id: listing.source_id,
        source_url: listing.source_url,
        dedup_hash: listing.dedup_hash,
        company_logo_url: listing.company_logo_url,
        skills: listing.skills,
        experience_level: listing.experience_level,
        employment_type: listing.employment_type,
        posted_at: listing.posted_at,
        expires_at: listing.expires_at,
        source_metadata: listing.source_metadata,
        created_at: now,
        updated_at: now,
    }
}
