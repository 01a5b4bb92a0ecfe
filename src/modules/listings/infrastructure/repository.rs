/// Diesel-based implementation of JobListingRepository
///
/// Lookups and writes run on the blocking thread pool; the bulk upsert
/// keys on dedup_hash so a listing seen twice refreshes the stored row
/// instead of duplicating it.
use crate::log_debug;
use crate::modules::listings::domain::entities::{JobListing, NewJobListing};
use crate::modules::listings::domain::repository::JobListingRepository;
use crate::modules::listings::infrastructure::models::{JobListingModel, NewJobListingModel};
use crate::schema::job_listings;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::task;

pub struct JobListingRepositoryImpl {
    db: Arc<Database>,
}

impl JobListingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JobListingRepository for JobListingRepositoryImpl {
    async fn find_existing_hashes(&self, hashes: &[String]) -> AppResult<HashSet<String>> {
        if hashes.is_empty() {
            return Ok(HashSet::new());
        }

        let db = Arc::clone(&self.db);
        let wanted = hashes.to_vec();

        let found = task::spawn_blocking(move || -> AppResult<Vec<String>> {
            let mut conn = db.get_connection()?;

            let found = job_listings::table
                .filter(job_listings::dedup_hash.eq_any(&wanted))
                .select(job_listings::dedup_hash)
                .load::<String>(&mut conn)?;

            Ok(found)
        })
        .await??;

        Ok(found.into_iter().collect())
    }

    async fn upsert_batch(&self, listings: Vec<NewJobListing>) -> AppResult<Vec<JobListing>> {
        if listings.is_empty() {
            return Ok(vec![]);
        }

        log_debug!("Starting bulk save operation for {} listings", listings.len());
        let batch_start = std::time::Instant::now();

        let db = Arc::clone(&self.db);

        let saved_models = task::spawn_blocking(move || -> AppResult<Vec<JobListingModel>> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Vec<JobListingModel>, AppError, _>(|conn| {
                let records: Vec<NewJobListingModel> = listings
                    .into_iter()
                    .map(NewJobListingModel::from_domain)
                    .collect();

                let saved: Vec<JobListingModel> = diesel::insert_into(job_listings::table)
                    .values(&records)
                    .on_conflict(job_listings::dedup_hash)
                    .do_update()
                    .set((
                        job_listings::title.eq(diesel::upsert::excluded(job_listings::title)),
                        job_listings::company.eq(diesel::upsert::excluded(job_listings::company)),
                        job_listings::location.eq(diesel::upsert::excluded(job_listings::location)),
                        job_listings::remote_type
                            .eq(diesel::upsert::excluded(job_listings::remote_type)),
                        job_listings::description
                            .eq(diesel::upsert::excluded(job_listings::description)),
                        job_listings::salary_min
                            .eq(diesel::upsert::excluded(job_listings::salary_min)),
                        job_listings::salary_max
                            .eq(diesel::upsert::excluded(job_listings::salary_max)),
                        job_listings::salary_currency
                            .eq(diesel::upsert::excluded(job_listings::salary_currency)),
                        job_listings::source.eq(diesel::upsert::excluded(job_listings::source)),
                        job_listings::source_id
                            .eq(diesel::upsert::excluded(job_listings::source_id)),
                        job_listings::source_url
                            .eq(diesel::upsert::excluded(job_listings::source_url)),
                        job_listings::company_logo_url
                            .eq(diesel::upsert::excluded(job_listings::company_logo_url)),
                        job_listings::skills.eq(diesel::upsert::excluded(job_listings::skills)),
                        job_listings::experience_level
                            .eq(diesel::upsert::excluded(job_listings::experience_level)),
                        job_listings::employment_type
                            .eq(diesel::upsert::excluded(job_listings::employment_type)),
                        job_listings::posted_at
                            .eq(diesel::upsert::excluded(job_listings::posted_at)),
                        job_listings::expires_at
                            .eq(diesel::upsert::excluded(job_listings::expires_at)),
                        job_listings::source_metadata
                            .eq(diesel::upsert::excluded(job_listings::source_metadata)),
                        job_listings::updated_at.eq(chrono::Utc::now()),
                    ))
                    .get_results::<JobListingModel>(conn)?;

                Ok(saved)
            })
        })
        .await??;

        log_debug!(
            "Bulk listing upsert completed in {:.2}ms for {} records",
            batch_start.elapsed().as_secs_f64() * 1000.0,
            saved_models.len()
        );

        Ok(saved_models
            .into_iter()
            .map(JobListingModel::to_domain)
            .collect())
    }
}
