// src/core/walker.rs
use anyhow::{Context as _, Result, bail};
use glob::Pattern;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::processor::cleanup_file;
use crate::models::{CleanupStats, FileOutcome};

/// File extensions treated as C/C++ sources.
pub const SOURCE_EXTENSIONS: [&str; 6] = ["cpp", "h", "hpp", "c", "cc", "cxx"];

/// Matches file names against `*.<ext>` for every entry of [`SOURCE_EXTENSIONS`].
#[derive(Debug)]
pub struct SourceFilter {
    patterns: Vec<Pattern>,
}

impl SourceFilter {
    /// Compiles the extension patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the built-in patterns is not valid glob syntax.
    pub fn new() -> Result<Self> {
        let patterns = SOURCE_EXTENSIONS
            .iter()
            .map(|ext| {
                let glob = format!("*.{ext}");
                Pattern::new(&glob).with_context(|| format!("Invalid source pattern: {glob}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Case-sensitive match on a bare file name.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(file_name))
    }

    /// Only regular files qualify; symlinks and directories named like
    /// sources are skipped. A link pointing into the tree is covered when
    /// the walk reaches its target.
    #[must_use]
    pub fn is_source_file(&self, entry: &DirEntry) -> bool {
        if !entry.file_type().is_file() {
            return false;
        }
        match entry.file_name().to_str() {
            Some(name) => self.matches(name),
            None => {
                debug!(path = %entry.path().display(), "skipping non UTF-8 file name");
                false
            }
        }
    }
}

/// Resolves `dir` against the current working directory.
///
/// # Errors
///
/// Returns an error if `dir` is relative and the current directory cannot
/// be determined.
pub fn resolve_root(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to resolve the current working directory")?;
    if dir == Path::new(".") {
        Ok(cwd)
    } else {
        Ok(cwd.join(dir))
    }
}

/// Cleans every source file below `root` and prints one status line per file.
///
/// # Errors
///
/// Fails only when `root` is missing, is not a directory or cannot be
/// listed. Problems with individual files or nested directories are
/// reported and skipped.
#[inline]
pub fn cleanup_dir(root: &Path) -> Result<CleanupStats> {
    cleanup_dir_with(root, |outcome| println!("{outcome}"))
}

/// Like [`cleanup_dir`] but hands each [`FileOutcome`] to `on_file`
/// instead of printing it.
///
/// # Errors
///
/// See [`cleanup_dir`].
pub fn cleanup_dir_with<F>(root: &Path, mut on_file: F) -> Result<CleanupStats>
where
    F: FnMut(&FileOutcome),
{
    let metadata = fs::metadata(root)
        .with_context(|| format!("Cannot access directory: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Not a directory: {}", root.display());
    }

    let filter = SourceFilter::new()?;
    let mut stats = CleanupStats::new();
    info!(root = %root.display(), "scanning for source files");

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(err)
                    .with_context(|| format!("Failed to read directory: {}", root.display()));
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !filter.is_source_file(&entry) {
            continue;
        }

        let outcome = cleanup_file(entry.path());
        on_file(&outcome);
        stats.record(&outcome);
    }

    Ok(stats)
}
