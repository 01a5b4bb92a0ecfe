pub mod entities;
pub mod repository;

pub use entities::{JobListing, NewJobListing};
pub use repository::JobListingRepository;
