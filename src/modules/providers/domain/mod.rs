pub mod country;
pub mod query;
pub mod scraped_job;

pub use country::CountryResolver;
pub use query::JobQuery;
pub use scraped_job::ScrapedJob;
