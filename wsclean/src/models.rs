// src/models.rs
pub mod cleanup_stats;
pub mod file_outcome;

pub use cleanup_stats::CleanupStats;
pub use file_outcome::{FileOutcome, FileStatus};
