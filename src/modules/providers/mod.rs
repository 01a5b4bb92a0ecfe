pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

pub use application::{AggregatorConfig, JobAggregator};
pub use domain::{CountryResolver, JobQuery, ScrapedJob};
pub use infrastructure::{AdzunaClient, JoobleClient, JsearchClient};
pub use traits::JobProviderClient;
