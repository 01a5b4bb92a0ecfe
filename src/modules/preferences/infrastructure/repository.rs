/// Diesel-based implementation of SearchPreferenceRepository
use crate::modules::preferences::domain::entities::SearchPreference;
use crate::modules::preferences::domain::repository::SearchPreferenceRepository;
use crate::modules::preferences::infrastructure::models::SearchPreferenceModel;
use crate::schema::search_preferences;
use crate::shared::errors::AppResult;
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

pub struct SearchPreferenceRepositoryImpl {
    db: Arc<Database>,
}

impl SearchPreferenceRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SearchPreferenceRepository for SearchPreferenceRepositoryImpl {
    async fn load_all(&self) -> AppResult<Vec<SearchPreference>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<SearchPreferenceModel>> {
            let mut conn = db.get_connection()?;

            let models = search_preferences::table
                .order(search_preferences::created_at.asc())
                .load::<SearchPreferenceModel>(&mut conn)?;

            Ok(models)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(SearchPreferenceModel::to_domain)
            .collect())
    }
}
