pub mod client;
pub mod retry;

pub use client::ProviderHttpClient;
pub use retry::{CommonHttpHandler, RetryConfig, RetryUtil};
