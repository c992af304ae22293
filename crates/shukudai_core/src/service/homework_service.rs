//! Homework use-case service.
//!
//! # Responsibility
//! - Provide stable add/list/update entry points for dashboard callers.
//! - Assemble per-child progress views from repository snapshots.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or id assignment.
//! - Progress views are computed from one snapshot per call; they may be
//!   stale relative to concurrent writers.

use crate::model::record::{HomeworkRecord, NewHomework, RecordId};
use crate::repo::homework_repo::{HomeworkRepository, RepoResult, WriteOutcome};
use crate::report::ChildProgress;
use crate::store::RowStore;

/// Use-case wrapper over the homework repository.
pub struct HomeworkService<S: RowStore> {
    repo: HomeworkRepository<S>,
}

impl<S: RowStore> HomeworkService<S> {
    /// Creates a service over a configured repository.
    pub fn new(repo: HomeworkRepository<S>) -> Self {
        Self { repo }
    }

    /// Adds one homework record; see `HomeworkRepository::add`.
    pub fn add(&self, request: &NewHomework) -> RepoResult<WriteOutcome> {
        self.repo.add(request)
    }

    /// Overwrites one record's status; see `HomeworkRepository::update_status`.
    pub fn update_status(&self, id: RecordId, new_status: i64) -> RepoResult<WriteOutcome> {
        self.repo.update_status(id, new_status)
    }

    /// Returns every record in store order.
    pub fn list_all(&self) -> RepoResult<Vec<HomeworkRecord>> {
        self.repo.list_all()
    }

    /// Returns one child's records in store order.
    pub fn list_by_child(&self, name: &str) -> RepoResult<Vec<HomeworkRecord>> {
        self.repo.list_by_child(name)
    }

    /// Returns the progress summary for one child.
    ///
    /// The name is not checked against the roster; an unknown name yields an
    /// empty summary, matching an exact-match filter over the sheet.
    pub fn progress_for_child(&self, name: &str) -> RepoResult<ChildProgress> {
        let records = self.repo.list_by_child(name)?;
        Ok(ChildProgress::from_records(name, &records))
    }

    /// Returns one progress summary per configured roster child.
    ///
    /// One sheet read serves all summaries, so every tab reflects the same
    /// snapshot.
    pub fn overview(&self) -> RepoResult<Vec<ChildProgress>> {
        let records = self.repo.list_all()?;
        let summaries = self
            .repo
            .config()
            .children
            .iter()
            .map(|child| {
                let theirs: Vec<HomeworkRecord> = records
                    .iter()
                    .filter(|record| &record.child == child)
                    .cloned()
                    .collect();
                ChildProgress::from_records(child.clone(), &theirs)
            })
            .collect();
        Ok(summaries)
    }
}
