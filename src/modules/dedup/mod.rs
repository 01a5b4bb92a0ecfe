pub mod filter;
pub mod fingerprint;

pub use filter::filter_new_jobs;
pub use fingerprint::FingerprintGenerator;
