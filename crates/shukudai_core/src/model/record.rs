//! Homework record model.
//!
//! # Responsibility
//! - Define `HomeworkRecord` and the `Status` completion scale.
//! - Validate write requests before they reach any store.
//!
//! # Invariants
//! - `id` is unique, positive and strictly increasing across additions.
//! - `status` stays inside `0..=10`; `10` means fully done.
//! - `deadline` uses the fixed `YYYY/MM/DD` sheet format.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DEADLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}/\d{2}/\d{2}$").expect("valid deadline regex"));

/// Stable identifier for a homework record.
///
/// Assigned by the repository as `max existing id + 1`; never reused because
/// records are never deleted.
pub type RecordId = u64;

/// Completion level of one homework item, `0` (not started) to `10` (done).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(u8);

impl Status {
    /// Highest status value; records at this level count as finished.
    pub const DONE: u8 = 10;

    /// Builds a status from an untrusted integer.
    ///
    /// # Errors
    /// - `StatusOutOfRange` when `value` is outside `0..=10`.
    pub fn new(value: i64) -> Result<Self, RecordValidationError> {
        if (0..=i64::from(Self::DONE)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RecordValidationError::StatusOutOfRange(value))
        }
    }

    /// Returns the raw `0..=10` value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this status denotes a fully done item.
    pub fn is_done(self) -> bool {
        self.0 == Self::DONE
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical homework record as stored in the sheet.
///
/// Field order matches the fixed sheet column order
/// `[id, child, content, deadline, status, memo]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    /// Stable record ID, immutable after creation.
    pub id: RecordId,
    /// Child the homework belongs to; member of the configured roster.
    pub child: String,
    /// Free-text description of the homework.
    pub content: String,
    /// Due date in `YYYY/MM/DD` form.
    pub deadline: String,
    /// Completion level. The only field `update_status` may change.
    pub status: Status,
    /// Optional free-text memo; may be empty.
    pub memo: String,
}

impl HomeworkRecord {
    /// Returns whether this record still needs work (`status < 10`).
    pub fn is_pending(&self) -> bool {
        !self.status.is_done()
    }
}

/// Write request for a new homework record.
///
/// The record ID is assigned by the repository; callers never pick one.
/// `status` is kept raw here so out-of-contract input is rejected by
/// [`NewHomework::validate`] before any store interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHomework {
    pub child: String,
    pub content: String,
    pub deadline: String,
    pub status: i64,
    pub memo: String,
}

impl NewHomework {
    /// Validates this request against the configured child roster.
    ///
    /// # Invariants
    /// - Must be called before any store mutation (fail-fast, no partial
    ///   writes).
    /// - `content` emptiness is expected but deliberately not enforced.
    ///
    /// # Errors
    /// - `EmptyRoster` when no children are configured.
    /// - `UnknownChild` when `child` is not in the roster.
    /// - `StatusOutOfRange` when `status` is outside `0..=10`.
    /// - `BadDeadline` when `deadline` is not `YYYY/MM/DD`.
    pub fn validate(&self, roster: &[String]) -> Result<Status, RecordValidationError> {
        if roster.is_empty() {
            return Err(RecordValidationError::EmptyRoster);
        }
        if !roster.iter().any(|name| name == &self.child) {
            return Err(RecordValidationError::UnknownChild(self.child.clone()));
        }
        if !DEADLINE_RE.is_match(&self.deadline) {
            return Err(RecordValidationError::BadDeadline(self.deadline.clone()));
        }
        Status::new(self.status)
    }
}

/// Contract violations in caller-supplied record data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Status outside the `0..=10` completion scale.
    StatusOutOfRange(i64),
    /// Child name not part of the configured roster.
    UnknownChild(String),
    /// Deadline not in `YYYY/MM/DD` form.
    BadDeadline(String),
    /// No children configured; every add would be unattributable.
    EmptyRoster,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StatusOutOfRange(value) => {
                write!(f, "status `{value}` is outside the allowed range 0..=10")
            }
            Self::UnknownChild(name) => write!(f, "unknown child: `{name}`"),
            Self::BadDeadline(value) => {
                write!(f, "deadline `{value}` does not match YYYY/MM/DD")
            }
            Self::EmptyRoster => write!(f, "child roster is empty"),
        }
    }
}

impl Error for RecordValidationError {}
