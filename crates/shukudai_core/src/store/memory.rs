//! In-memory row store for tests and offline probes.
//!
//! # Responsibility
//! - Provide a faithful in-process stand-in for the remote sheet.
//! - Allow tests to simulate transport loss and inspect raw rows.
//!
//! # Invariants
//! - Data rows keep insertion order; nothing is removed or reordered.
//! - While offline, every operation fails with `Connection` and the rows
//!   stay untouched.

use super::{NamedRow, RowStore, StoreError, StoreResult, FIRST_DATA_ROW, HEADER_ROW};
use std::cell::{Cell, RefCell};

/// Row store backed by a plain vector of cell rows.
pub struct MemoryRowStore {
    header: Vec<String>,
    rows: RefCell<Vec<Vec<String>>>,
    offline: Cell<bool>,
}

impl MemoryRowStore {
    /// Creates an empty sheet with the given header row.
    pub fn new<I, T>(header: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: RefCell::new(Vec::new()),
            offline: Cell::new(false),
        }
    }

    /// Creates a sheet pre-seeded with data rows, bypassing width checks.
    ///
    /// Intended for tests that need malformed or legacy rows in place.
    pub fn with_rows<I, T>(header: I, rows: Vec<Vec<String>>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = Self::new(header);
        *store.rows.borrow_mut() = rows;
        store
    }

    /// Simulates losing (or regaining) the connection to the backend.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Returns a copy of the raw data rows, for unchanged-store assertions.
    pub fn snapshot(&self) -> Vec<Vec<String>> {
        self.rows.borrow().clone()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.get() {
            Err(StoreError::Connection("store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl RowStore for MemoryRowStore {
    fn fetch_all(&self) -> StoreResult<Vec<NamedRow>> {
        self.check_online()?;

        let rows = self.rows.borrow();
        let mut named = Vec::with_capacity(rows.len());
        for cells in rows.iter() {
            let mut row = NamedRow::new();
            for (index, name) in self.header.iter().enumerate() {
                // Short rows read as empty cells, like the hosted sheet.
                let value = cells.get(index).cloned().unwrap_or_default();
                row.insert(name.clone(), value);
            }
            named.push(row);
        }
        Ok(named)
    }

    fn append(&self, cells: &[String]) -> StoreResult<()> {
        self.check_online()?;

        if cells.len() != self.header.len() {
            return Err(StoreError::RowWidth {
                expected: self.header.len(),
                actual: cells.len(),
            });
        }
        self.rows.borrow_mut().push(cells.to_vec());
        Ok(())
    }

    fn update_cell(&self, row: usize, column: usize, value: &str) -> StoreResult<()> {
        self.check_online()?;

        let mut rows = self.rows.borrow_mut();
        if row <= HEADER_ROW || row >= FIRST_DATA_ROW + rows.len() {
            return Err(StoreError::RowIndex { row });
        }
        if column == 0 || column > self.header.len() {
            return Err(StoreError::ColumnIndex { column });
        }

        let cells = &mut rows[row - FIRST_DATA_ROW];
        if cells.len() < self.header.len() {
            cells.resize(self.header.len(), String::new());
        }
        cells[column - 1] = value.to_string();
        Ok(())
    }
}
