//! Core domain logic for the household homework tracker.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;
pub mod store;

pub use config::{ColumnLabels, ConfigValidationError, TrackerConfig, COLUMN_COUNT, STATUS_COLUMN};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{HomeworkRecord, NewHomework, RecordId, RecordValidationError, Status};
pub use repo::homework_repo::{HomeworkRepository, RepoError, RepoResult, WriteOutcome};
pub use report::{pending, percent_complete, ChildProgress};
pub use service::homework_service::HomeworkService;
pub use store::{MemoryRowStore, NamedRow, RowStore, SqliteRowStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
