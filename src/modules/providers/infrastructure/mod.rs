pub mod adzuna;
pub mod http;
pub mod jooble;
pub mod jsearch;

pub use adzuna::AdzunaClient;
pub use http::ProviderHttpClient;
pub use jooble::JoobleClient;
pub use jsearch::JsearchClient;
