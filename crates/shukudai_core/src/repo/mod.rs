//! Repository layer over the raw row store.
//!
//! # Responsibility
//! - Enforce domain rules (id assignment, status range, child roster) on
//!   top of the three-operation store contract.
//! - Keep sheet column arithmetic out of service/business orchestration.
//!
//! # Invariants
//! - Write paths validate before any store mutation (no partial writes).
//! - Read paths reject malformed persisted rows instead of masking them.

pub mod homework_repo;
