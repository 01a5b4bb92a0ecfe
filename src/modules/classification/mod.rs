pub mod classifier;
mod patterns;

pub use classifier::{MatchConfidence, WorkTypeClassifier, WorkTypeMatch};
