// Shared kernel: infrastructure and domain concepts used across modules

pub mod database;        // Connection pool + embedded migrations
pub mod domain;          // Shared value objects
pub mod errors;          // Shared error types
pub mod utils;           // Logging, pacing

// Re-exports for convenience
pub use database::Database;
