//! Row-store abstraction over the homework sheet.
//!
//! # Responsibility
//! - Define the narrow three-operation contract every tabular backend must
//!   satisfy: `fetch_all`, `append`, `update_cell`.
//! - Keep backend details (memory, SQLite) out of domain code.
//!
//! # Invariants
//! - Row 1 is the header and is never a valid `update_cell` target.
//! - Data rows start at row 2 and keep insertion order.
//! - Transport failures are surfaced as `Connection`, never swallowed.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryRowStore;
pub use sqlite::SqliteRowStore;

/// Sheet row holding the column names.
pub const HEADER_ROW: usize = 1;
/// First row that may hold record data.
pub const FIRST_DATA_ROW: usize = 2;

/// One data row keyed by header column name.
pub type NamedRow = BTreeMap<String, String>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by row-store backends.
#[derive(Debug)]
pub enum StoreError {
    /// Backend unreachable or refused the operation (transport/auth).
    Connection(String),
    /// `row` does not address an existing data row (header is row 1).
    RowIndex { row: usize },
    /// `column` is outside the sheet width.
    ColumnIndex { column: usize },
    /// Appended row has the wrong number of cells.
    RowWidth { expected: usize, actual: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(message) => write!(f, "store connection failed: {message}"),
            Self::RowIndex { row } => write!(
                f,
                "row {row} is not an existing data row (header is row {HEADER_ROW}, \
                 data starts at row {FIRST_DATA_ROW})"
            ),
            Self::ColumnIndex { column } => {
                write!(f, "column {column} is outside the sheet width")
            }
            Self::RowWidth { expected, actual } => write!(
                f,
                "appended row has {actual} cells, sheet expects {expected}"
            ),
        }
    }
}

impl Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Connection(value.to_string())
    }
}

/// Contract for a table of rows in a remote or local tabular store.
///
/// Mirrors the worksheet surface of the hosted-spreadsheet original: read
/// everything, append one row, overwrite one cell. Narrow by design so the
/// backend stays swappable between a remote sheet, a local file and a
/// relational table.
pub trait RowStore {
    /// Returns every data row, in store order, keyed by header column name.
    ///
    /// Read-only; an empty sheet yields an empty sequence.
    fn fetch_all(&self) -> StoreResult<Vec<NamedRow>>;

    /// Appends one row of cells at the end of the table.
    ///
    /// # Errors
    /// - `RowWidth` when `cells` does not match the sheet width.
    /// - `Connection` on transport failure; the remote API does not
    ///   guarantee exactly-once semantics on retry.
    fn append(&self, cells: &[String]) -> StoreResult<()>;

    /// Overwrites a single cell. `row` and `column` are 1-based.
    ///
    /// # Errors
    /// - `RowIndex` when `row` is the header or past the last data row.
    /// - `ColumnIndex` when `column` is outside the sheet width.
    /// - `Connection` on transport failure.
    fn update_cell(&self, row: usize, column: usize, value: &str) -> StoreResult<()>;
}

impl<S: RowStore + ?Sized> RowStore for &S {
    fn fetch_all(&self) -> StoreResult<Vec<NamedRow>> {
        (**self).fetch_all()
    }

    fn append(&self, cells: &[String]) -> StoreResult<()> {
        (**self).append(cells)
    }

    fn update_cell(&self, row: usize, column: usize, value: &str) -> StoreResult<()> {
        (**self).update_cell(row, column, value)
    }
}
