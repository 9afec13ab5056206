// src/models/cleanup_stats.rs
use crate::models::{FileOutcome, FileStatus};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    pub total: u64,
    pub cleaned: u64,
    pub failed: u64,
}

impl CleanupStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            cleaned: 0,
            failed: 0,
        }
    }

    /// Files that were scanned but not rewritten. Failures count here too.
    #[inline]
    #[must_use]
    pub const fn unchanged(&self) -> u64 {
        self.total.saturating_sub(self.cleaned)
    }

    #[inline]
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.total = self.total.saturating_add(1);
        match outcome.result {
            Ok(FileStatus::Cleaned) => self.cleaned = self.cleaned.saturating_add(1),
            Ok(FileStatus::Unchanged) => {}
            Err(_) => self.failed = self.failed.saturating_add(1),
        }
    }
}
