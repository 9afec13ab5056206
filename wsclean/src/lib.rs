// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

pub use cli::{Args, run};
pub use crate::core::normalizer::{LineEnding, Normalized, normalize_content, normalize_line, normalize_lines, split_lines};
pub use crate::core::processor::cleanup_file;
pub use crate::core::walker::{SOURCE_EXTENSIONS, SourceFilter, cleanup_dir, cleanup_dir_with};
pub use error::FileProcessingError;
pub use models::{CleanupStats, FileOutcome, FileStatus};
