//! HTTP client shared by all job board adapters
//!
//! Wraps a reqwest client with a token-bucket rate limiter and the common
//! retry logic so individual adapters only describe their endpoints.

use super::retry::{truncate_body, CommonHttpHandler, RetryConfig};
use crate::shared::errors::{AppError, AppResult};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use std::num::NonZeroU32;
use std::time::Duration;

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = "jobsift/1.0 (https://github.com/your-repo/jobsift)";

/// HTTP client that handles rate limiting and retries for one provider
pub struct ProviderHttpClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    retry_config: RetryConfig,
    provider_name: String,
}

impl ProviderHttpClient {
    /// Create a new client for the Adzuna API
    pub fn for_adzuna() -> AppResult<Self> {
        Ok(Self::new(
            "Adzuna",
            CommonHttpHandler::create_http_client(15, USER_AGENT)?,
            // Adzuna free tier: ~25 req/min = 0.4 req/sec average
            Self::create_rate_limiter(0.4, 2),
            RetryConfig::default(),
        ))
    }

    /// Create a new client for the Jooble API
    pub fn for_jooble() -> AppResult<Self> {
        Ok(Self::new(
            "Jooble",
            CommonHttpHandler::create_http_client(15, USER_AGENT)?,
            // Jooble recommends staying under 1 req/sec
            Self::create_rate_limiter(1.0, 2),
            RetryConfig::default(),
        ))
    }

    /// Create a new client for the JSearch API on RapidAPI. The key and
    /// host travel as default headers on every request.
    pub fn for_jsearch(api_key: &str, api_host: &str) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-RapidAPI-Key",
            HeaderValue::from_str(api_key)
                .map_err(|e| AppError::InvalidInput(format!("Invalid JSearch API key: {}", e)))?,
        );
        headers.insert(
            "X-RapidAPI-Host",
            HeaderValue::from_str(api_host)
                .map_err(|e| AppError::InvalidInput(format!("Invalid JSearch API host: {}", e)))?,
        );

        Ok(Self::new(
            "JSearch",
            // JSearch fans the search out to upstream boards, responses can
            // take a while; the 30s ceiling keeps slow pages retryable
            CommonHttpHandler::create_http_client_with_headers(30, USER_AGENT, headers)?,
            // RapidAPI free tier is tight: 0.5 req/sec with minimal burst
            Self::create_rate_limiter(0.5, 1),
            RetryConfig::patient(),
        ))
    }

    /// Create a rate limiter with specified requests per second and burst capacity
    fn create_rate_limiter(requests_per_second: f64, burst_size: u32) -> DirectRateLimiter {
        // Convert rate to duration between requests
        let duration = if requests_per_second > 0.0 {
            Duration::from_secs_f64(1.0 / requests_per_second)
        } else {
            Duration::MAX // Effectively disable if rate is 0
        };

        let burst = NonZeroU32::new(burst_size.max(1)).unwrap();
        let quota = Quota::with_period(duration).unwrap().allow_burst(burst);

        GovernorRateLimiter::direct(quota)
    }

    /// Create a custom client
    pub fn new(
        provider_name: &str,
        client: Client,
        rate_limiter: DirectRateLimiter,
        retry_config: RetryConfig,
    ) -> Self {
        Self {
            client,
            rate_limiter,
            retry_config,
            provider_name: provider_name.to_string(),
        }
    }

    /// Make a GET request with rate limiting and retries
    pub async fn get_json<T>(&self, url: &str, operation: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let response = CommonHttpHandler::execute_with_retry(
            || self.client.get(url).send(),
            &self.retry_config,
            &self.provider_name,
            operation,
        )
        .await?;

        self.parse_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_json_with_query<T>(
        &self,
        url: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let response = CommonHttpHandler::execute_with_retry(
            || self.client.get(url).query(params).send(),
            &self.retry_config,
            &self.provider_name,
            operation,
        )
        .await?;

        self.parse_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post_json<T>(&self, url: &str, body: &Value, operation: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        let response = CommonHttpHandler::execute_with_retry(
            || self.client.post(url).json(body).send(),
            &self.retry_config,
            &self.provider_name,
            operation,
        )
        .await?;

        self.parse_response(response).await
    }

    /// Parse the response body as JSON, keeping a snippet for diagnostics
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate_body(&response_text)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging)
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    /// Get provider name
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}
