//! Homework repository: typed CRUD over the sheet row store.
//!
//! # Responsibility
//! - Map raw sheet rows to `HomeworkRecord` and back.
//! - Assign record ids (`max existing + 1`) and locate rows for updates.
//!
//! # Invariants
//! - Appended cells follow the fixed column order
//!   `[id, child, content, deadline, status, memo]`.
//! - `update_status` touches exactly one cell: fixed status column 5 of the
//!   matched row.
//! - Id assignment is best-effort under concurrent adders; two writers
//!   reading the same max id will append colliding ids. Known race, not
//!   resolved here.

use crate::config::{ConfigValidationError, TrackerConfig, STATUS_COLUMN};
use crate::model::record::{HomeworkRecord, NewHomework, RecordId, RecordValidationError, Status};
use crate::store::{NamedRow, RowStore, StoreError, FIRST_DATA_ROW};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for homework persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller-supplied value outside the contract; nothing was written.
    Validation(RecordValidationError),
    /// Persisted sheet data does not match the expected shape.
    Schema(String),
    /// No record carries the referenced id.
    NotFound(RecordId),
    /// Row-store failure (transport, index).
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Schema(message) => write!(f, "invalid persisted sheet data: {message}"),
            Self::NotFound(id) => write!(f, "homework record not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Schema(_) => None,
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Synchronous outcome of a successful write operation.
///
/// Replaces the one-shot "just added" / "just updated" session flags of the
/// original UI with a plain return value the caller renders once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// A record was appended under the returned id.
    Added(RecordId),
    /// The status of the record with the returned id was overwritten.
    Updated(RecordId),
}

/// Domain repository over any `RowStore` backend.
pub struct HomeworkRepository<S: RowStore> {
    store: S,
    config: TrackerConfig,
}

impl<S: RowStore> HomeworkRepository<S> {
    /// Builds a repository after validating the tracker configuration.
    pub fn try_new(store: S, config: TrackerConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Returns the active tracker configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns every record, in store (= insertion) order.
    ///
    /// # Errors
    /// - `Schema` when a column is missing or a value fails to parse.
    /// - `Store` on transport failure.
    pub fn list_all(&self) -> RepoResult<Vec<HomeworkRecord>> {
        let rows = self.store.fetch_all()?;
        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(self.parse_record(row)?);
        }
        Ok(records)
    }

    /// Returns records whose `child` exactly matches `name`, store order kept.
    pub fn list_by_child(&self, name: &str) -> RepoResult<Vec<HomeworkRecord>> {
        let mut records = self.list_all()?;
        records.retain(|record| record.child == name);
        Ok(records)
    }

    /// Adds one homework record, assigning the next free id.
    ///
    /// # Contract
    /// - Validation runs before any store call; a rejected request leaves
    ///   the sheet untouched.
    /// - Returns `WriteOutcome::Added(id)` with `id = max existing + 1`
    ///   (`1` on an empty sheet).
    pub fn add(&self, request: &NewHomework) -> RepoResult<WriteOutcome> {
        let status = request.validate(&self.config.children)?;

        let max_id = self
            .list_all()?
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0);
        let new_id = max_id + 1;

        let cells = [
            new_id.to_string(),
            request.child.clone(),
            request.content.clone(),
            request.deadline.clone(),
            status.to_string(),
            request.memo.clone(),
        ];
        self.store.append(&cells)?;

        info!(
            "event=homework_add module=repo status=ok id={new_id} child={}",
            request.child
        );
        Ok(WriteOutcome::Added(new_id))
    }

    /// Overwrites the status of the record with `id`.
    ///
    /// # Contract
    /// - `Validation` for a status outside `0..=10`, before any store call.
    /// - `NotFound` when no record carries `id`; the sheet stays untouched.
    /// - On success only the status cell of the matched row changes.
    pub fn update_status(&self, id: RecordId, new_status: i64) -> RepoResult<WriteOutcome> {
        let status = Status::new(new_status)?;

        let records = self.list_all()?;
        let position = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(RepoError::NotFound(id))?;

        // Snapshot position 0 sits at sheet row 2, right below the header.
        let row = position + FIRST_DATA_ROW;
        self.store
            .update_cell(row, STATUS_COLUMN, &status.to_string())?;

        info!("event=homework_update_status module=repo status=ok id={id} new_status={status}");
        Ok(WriteOutcome::Updated(id))
    }

    fn parse_record(&self, row: &NamedRow) -> RepoResult<HomeworkRecord> {
        let labels = &self.config.columns;

        let id_text = named_cell(row, &labels.id)?;
        let id: RecordId = id_text.parse().map_err(|_| {
            RepoError::Schema(format!(
                "invalid id value `{id_text}` in column `{}`",
                labels.id
            ))
        })?;

        let status_text = named_cell(row, &labels.status)?;
        let status_value: i64 = status_text.parse().map_err(|_| {
            RepoError::Schema(format!(
                "invalid status value `{status_text}` in column `{}`",
                labels.status
            ))
        })?;
        let status = Status::new(status_value).map_err(|_| {
            RepoError::Schema(format!(
                "stored status `{status_value}` is outside 0..=10 in column `{}`",
                labels.status
            ))
        })?;

        Ok(HomeworkRecord {
            id,
            child: named_cell(row, &labels.child)?.to_string(),
            content: named_cell(row, &labels.content)?.to_string(),
            deadline: named_cell(row, &labels.deadline)?.to_string(),
            status,
            memo: named_cell(row, &labels.memo)?.to_string(),
        })
    }
}

fn named_cell<'row>(row: &'row NamedRow, label: &str) -> RepoResult<&'row str> {
    row.get(label)
        .map(String::as_str)
        .ok_or_else(|| RepoError::Schema(format!("missing column `{label}`")))
}
