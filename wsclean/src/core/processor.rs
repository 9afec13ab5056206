// src/core/processor.rs
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::normalizer::{normalize_content, Normalized};
use crate::error::FileProcessingError;
use crate::models::{FileOutcome, FileStatus};

/// Reads `path` as UTF-8, normalizes its lines and rewrites it in place
/// when anything changed.
///
/// Errors are captured in the returned [`FileOutcome`] rather than
/// propagated, so one bad file never stops a directory walk. A file that
/// needs no changes is never opened for writing.
#[inline]
#[must_use]
pub fn cleanup_file(path: &Path) -> FileOutcome {
    let result = clean(path);
    match &result {
        Ok(status) => debug!(path = %path.display(), ?status, "processed file"),
        Err(err) => warn!(path = %path.display(), error = %err, "failed to process file"),
    }
    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

fn clean(path: &Path) -> Result<FileStatus, FileProcessingError> {
    let content = read_utf8(path)?;
    let normalized = normalize_content(&content);
    if !normalized.changed {
        return Ok(FileStatus::Unchanged);
    }
    write_lines(path, normalized).map_err(|source| FileProcessingError::Write { source })?;
    Ok(FileStatus::Cleaned)
}

fn read_utf8(path: &Path) -> Result<String, FileProcessingError> {
    let bytes = fs::read(path).map_err(|source| FileProcessingError::Read { source })?;
    String::from_utf8(bytes).map_err(|source| FileProcessingError::Decode { source })
}

// Plain truncate-and-write; an interrupted run may leave this one file partial.
fn write_lines(path: &Path, normalized: Normalized) -> std::io::Result<()> {
    fs::write(path, normalized.into_content())
}
