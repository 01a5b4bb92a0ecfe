pub mod classification;
pub mod dedup;
pub mod ingest;
pub mod listings;
pub mod preferences;
pub mod providers;
