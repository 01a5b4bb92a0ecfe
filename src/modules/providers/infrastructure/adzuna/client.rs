use crate::modules::providers::domain::{CountryResolver, JobQuery, ScrapedJob};
use crate::modules::providers::infrastructure::http::ProviderHttpClient;
use crate::modules::providers::traits::JobProviderClient;
use crate::shared::domain::value_objects::JobSource;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_warn};
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

use super::dto::AdzunaSearchResponse;
use super::mapper::AdzunaMapper;

const ADZUNA_BASE_URL: &str = "https://api.adzuna.com";

#[derive(Debug, Clone)]
pub struct AdzunaCredentials {
    pub app_id: String,
    pub app_key: String,
}

pub struct AdzunaClient {
    http: ProviderHttpClient,
    base_url: String,
    country_resolver: Arc<CountryResolver>,
    credentials: Option<AdzunaCredentials>,
}

impl AdzunaClient {
    pub fn new(
        credentials: Option<AdzunaCredentials>,
        country_resolver: Arc<CountryResolver>,
    ) -> AppResult<Self> {
        if credentials.is_none() {
            log_warn!("Adzuna credentials not configured, client will be skipped");
        }

        Ok(Self {
            http: ProviderHttpClient::for_adzuna()?,
            base_url: ADZUNA_BASE_URL.to_string(),
            country_resolver,
            credentials,
        })
    }

    /// Read ADZUNA_APP_ID / ADZUNA_APP_KEY; both must be present and
    /// non-empty for the client to report itself available.
    pub fn from_env(country_resolver: Arc<CountryResolver>) -> AppResult<Self> {
        let credentials = match (env::var("ADZUNA_APP_ID"), env::var("ADZUNA_APP_KEY")) {
            (Ok(app_id), Ok(app_key)) if !app_id.is_empty() && !app_key.is_empty() => {
                Some(AdzunaCredentials { app_id, app_key })
            }
            _ => None,
        };

        Self::new(credentials, country_resolver)
    }

    async fn fetch_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        let Some(credentials) = &self.credentials else {
            return Ok(Vec::new());
        };

        // Country lives in the URL path, so an unresolvable location means
        // there is nothing sensible to ask for
        let Some(country) = self.country_resolver.resolve(&query.location) else {
            log_debug!(
                "Adzuna: no supported country for location '{}', skipping",
                query.location
            );
            return Ok(Vec::new());
        };

        let url = format!(
            "{}/v1/api/jobs/{}/search/1?app_id={}&app_key={}&results_per_page={}&what={}&where={}",
            self.base_url,
            country,
            urlencoding::encode(&credentials.app_id),
            urlencoding::encode(&credentials.app_key),
            query.results_per_page,
            urlencoding::encode(&query.keywords),
            urlencoding::encode(&query.location),
        );

        let response: AdzunaSearchResponse = self.http.get_json(&url, "search jobs").await?;

        log_debug!(
            "Adzuna returned {} jobs (of {} total) for '{}'",
            response.results.len(),
            response.count.unwrap_or_default(),
            query.describe()
        );

        let currency = self.country_resolver.currency_for(country);
        Ok(response
            .results
            .into_iter()
            .map(|job| AdzunaMapper::to_domain(job, currency))
            .collect())
    }
}

#[async_trait]
impl JobProviderClient for AdzunaClient {
    fn source(&self) -> JobSource {
        JobSource::Adzuna
    }

    fn is_available(&self) -> bool {
        self.credentials.is_some()
    }

    async fn search_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        match self.fetch_jobs(query).await {
            Ok(jobs) => Ok(jobs),
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("Adzuna search for '{}'", query.describe()),
                );
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Arc<CountryResolver> {
        Arc::new(CountryResolver::new())
    }

    #[test]
    fn unavailable_without_credentials() {
        let client = AdzunaClient::new(None, resolver()).unwrap();
        assert!(!client.is_available());
        assert_eq!(client.source(), JobSource::Adzuna);
    }

    #[test]
    fn available_with_credentials() {
        let client = AdzunaClient::new(
            Some(AdzunaCredentials {
                app_id: "id".to_string(),
                app_key: "key".to_string(),
            }),
            resolver(),
        )
        .unwrap();
        assert!(client.is_available());
    }

    #[tokio::test]
    async fn search_without_credentials_returns_empty() {
        let client = AdzunaClient::new(None, resolver()).unwrap();
        let jobs = client
            .search_jobs(&JobQuery::new("rust", "London"))
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }

    #[tokio::test]
    async fn unresolvable_location_skips_the_call() {
        let client = AdzunaClient::new(
            Some(AdzunaCredentials {
                app_id: "id".to_string(),
                app_key: "key".to_string(),
            }),
            resolver(),
        )
        .unwrap();

        // No HTTP happens here: the resolver rejects the location first
        let jobs = client
            .search_jobs(&JobQuery::new("rust", "Atlantis"))
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }
}
