//! Pure progress aggregation over a snapshot of records.
//!
//! # Responsibility
//! - Derive percent-complete and the pending subset from an in-memory
//!   snapshot, with no I/O and no store access.
//!
//! # Invariants
//! - Results are deterministic for a given snapshot and may be stale
//!   relative to concurrent store writes.
//! - The empty snapshot aggregates to 0 percent; never divides by zero.

use crate::model::record::{HomeworkRecord, Status};
use serde::Serialize;

/// Floor percentage of completion across a snapshot, `0..=100`.
///
/// `floor(sum(status) / (count * 10) * 100)`; `0` for an empty snapshot.
pub fn percent_complete(records: &[HomeworkRecord]) -> u8 {
    if records.is_empty() {
        return 0;
    }
    let sum: u64 = records
        .iter()
        .map(|record| u64::from(record.status.value()))
        .sum();
    let denominator = records.len() as u64 * u64::from(Status::DONE);
    (sum * 100 / denominator) as u8
}

/// Records still needing work (`status < 10`), input order preserved.
pub fn pending(records: &[HomeworkRecord]) -> Vec<&HomeworkRecord> {
    records.iter().filter(|record| record.is_pending()).collect()
}

/// Per-child progress summary, one UI tab worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildProgress {
    /// Child this summary belongs to.
    pub child: String,
    /// Number of records attributed to the child.
    pub total: usize,
    /// Floor completion percentage across those records.
    pub percent: u8,
    /// Records still needing work, store order preserved.
    pub pending: Vec<HomeworkRecord>,
}

impl ChildProgress {
    /// Summarizes a per-child snapshot.
    ///
    /// Callers pass records already filtered to one child; the snapshot is
    /// not re-filtered here.
    pub fn from_records(child: impl Into<String>, records: &[HomeworkRecord]) -> Self {
        Self {
            child: child.into(),
            total: records.len(),
            percent: percent_complete(records),
            pending: pending(records).into_iter().cloned().collect(),
        }
    }
}
