use crate::modules::providers::domain::{CountryResolver, JobQuery, ScrapedJob};
use crate::modules::providers::infrastructure::http::ProviderHttpClient;
use crate::modules::providers::traits::JobProviderClient;
use crate::shared::domain::value_objects::JobSource;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_warn};
use async_trait::async_trait;
use serde_json::json;
use std::env;
use std::sync::Arc;

use super::dto::JoobleSearchResponse;
use super::mapper::JoobleMapper;

pub struct JoobleClient {
    http: ProviderHttpClient,
    country_resolver: Arc<CountryResolver>,
    api_key: Option<String>,
}

impl JoobleClient {
    pub fn new(api_key: Option<String>, country_resolver: Arc<CountryResolver>) -> AppResult<Self> {
        if api_key.is_none() {
            log_warn!("Jooble API key not configured, client will be skipped");
        }

        Ok(Self {
            http: ProviderHttpClient::for_jooble()?,
            country_resolver,
            api_key,
        })
    }

    pub fn from_env(country_resolver: Arc<CountryResolver>) -> AppResult<Self> {
        let api_key = env::var("JOOBLE_API_KEY").ok().filter(|k| !k.is_empty());
        Self::new(api_key, country_resolver)
    }

    async fn fetch_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        let Some(api_key) = &self.api_key else {
            return Ok(Vec::new());
        };

        // The country picks the subdomain, so searches with no resolvable
        // country have no endpoint to go to
        let Some(country) = self.country_resolver.resolve(&query.location) else {
            log_debug!(
                "Jooble: no supported country for location '{}', skipping",
                query.location
            );
            return Ok(Vec::new());
        };

        let url = format!("https://{}.jooble.org/api/{}", country, api_key);
        let body = json!({
            "keywords": query.keywords,
            "location": query.location,
            "page": "1",
        });

        let response: JoobleSearchResponse = self.http.post_json(&url, &body, "search jobs").await?;

        log_debug!(
            "Jooble returned {} jobs (of {} total) for '{}'",
            response.jobs.len(),
            response.total_count.unwrap_or_default(),
            query.describe()
        );

        Ok(response.jobs.into_iter().map(JoobleMapper::to_domain).collect())
    }
}

#[async_trait]
impl JobProviderClient for JoobleClient {
    fn source(&self) -> JobSource {
        JobSource::Jooble
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        match self.fetch_jobs(query).await {
            Ok(jobs) => Ok(jobs),
            // 403 from Jooble means a blocked or exhausted key, not a
            // transient fault; it was already classified non-retryable
            Err(AppError::Unauthorized(msg)) => {
                log_warn!(
                    "Jooble blocked the request ({}); check JOOBLE_API_KEY and quota",
                    msg
                );
                Ok(Vec::new())
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Jooble search for '{}'", query.describe()),
                );
                Ok(Vec::new())
            }
        }
    }
}
