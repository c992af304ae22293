//! Domain model for homework records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, repository and
//!   reporting layers.
//!
//! # Invariants
//! - Every record is identified by a stable positive integer `RecordId`.
//! - Records are append-only: never deleted, never reordered.

pub mod record;
