pub mod entities;
pub mod repository;

pub use entities::SearchPreference;
pub use repository::SearchPreferenceRepository;
