// src/models/file_outcome.rs
use std::fmt;
use std::path::PathBuf;

use crate::error::FileProcessingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The file was rewritten.
    Cleaned,
    /// The file already satisfied the rules and was not touched.
    Unchanged,
}

/// What happened to one scanned file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<FileStatus, FileProcessingError>,
}

impl FileOutcome {
    #[inline]
    #[must_use]
    pub const fn is_cleaned(&self) -> bool {
        matches!(self.result, Ok(FileStatus::Cleaned))
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.result {
            Ok(FileStatus::Cleaned) => write!(f, "Cleaned: {path}"),
            Ok(FileStatus::Unchanged) => write!(f, "No cleanup needed: {path}"),
            Err(err) => write!(f, "Failed to process {path}: {err}"),
        }
    }
}
