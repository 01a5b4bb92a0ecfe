use crate::modules::providers::domain::{JobQuery, ScrapedJob};
use crate::modules::providers::infrastructure::http::ProviderHttpClient;
use crate::modules::providers::traits::JobProviderClient;
use crate::shared::domain::value_objects::JobSource;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_warn};
use async_trait::async_trait;
use std::env;

use super::dto::JsearchSearchResponse;
use super::mapper::JsearchMapper;

const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

pub struct JsearchClient {
    http: Option<ProviderHttpClient>,
    base_url: String,
}

impl JsearchClient {
    pub fn new(api_key: Option<&str>, api_host: &str) -> AppResult<Self> {
        let http = match api_key {
            Some(key) if !key.is_empty() => Some(ProviderHttpClient::for_jsearch(key, api_host)?),
            _ => {
                log_warn!("JSearch API key not configured, client will be skipped");
                None
            }
        };

        Ok(Self {
            http,
            base_url: format!("https://{}", api_host),
        })
    }

    /// Read JSEARCH_API_KEY and JSEARCH_API_HOST (host falls back to the
    /// public RapidAPI endpoint)
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("JSEARCH_API_KEY").ok().filter(|k| !k.is_empty());
        let api_host =
            env::var("JSEARCH_API_HOST").unwrap_or_else(|_| DEFAULT_JSEARCH_HOST.to_string());
        Self::new(api_key.as_deref(), &api_host)
    }

    async fn fetch_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        let Some(http) = &self.http else {
            return Ok(Vec::new());
        };

        // JSearch takes one free-text query; the location rides inside it
        let search_text = if query.location.is_empty() {
            query.keywords.clone()
        } else {
            format!("{} in {}", query.keywords, query.location)
        };

        let url = format!("{}/search", self.base_url);
        let params = [
            ("query", search_text),
            ("page", "1".to_string()),
            ("num_pages", "10".to_string()),
        ];

        let response: JsearchSearchResponse =
            http.get_json_with_query(&url, &params, "search jobs").await?;

        log_debug!(
            "JSearch returned {} jobs for '{}'",
            response.data.len(),
            query.describe()
        );

        Ok(response
            .data
            .into_iter()
            .map(JsearchMapper::to_domain)
            .collect())
    }
}

#[async_trait]
impl JobProviderClient for JsearchClient {
    fn source(&self) -> JobSource {
        JobSource::Jsearch
    }

    fn is_available(&self) -> bool {
        self.http.is_some()
    }

    async fn search_jobs(&self, query: &JobQuery) -> AppResult<Vec<ScrapedJob>> {
        match self.fetch_jobs(query).await {
            Ok(jobs) => Ok(jobs),
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("JSearch search for '{}'", query.describe()),
                );
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_without_api_key() {
        let client = JsearchClient::new(None, DEFAULT_JSEARCH_HOST).unwrap();
        assert!(!client.is_available());
        assert_eq!(client.source(), JobSource::Jsearch);
    }

    #[test]
    fn available_with_api_key() {
        let client = JsearchClient::new(Some("key"), DEFAULT_JSEARCH_HOST).unwrap();
        assert!(client.is_available());
    }

    #[tokio::test]
    async fn search_without_api_key_returns_empty() {
        let client = JsearchClient::new(None, DEFAULT_JSEARCH_HOST).unwrap();
        let jobs = client
            .search_jobs(&JobQuery::new("rust developer", ""))
            .await
            .unwrap();
        assert!(jobs.is_empty());
    }
}
