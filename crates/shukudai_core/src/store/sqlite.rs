//! SQLite-backed row store.
//!
//! # Responsibility
//! - Persist the sheet as one generic `sheet_cells(row_idx, col_idx, value)`
//!   table, keeping the store schema-agnostic.
//! - Seed the header row on first use of an empty sheet.
//!
//! # Invariants
//! - An existing header row is authoritative and is never rewritten.
//! - Append allocates `max(row_idx) + 1`, so store order is insertion order.

use super::{NamedRow, RowStore, StoreError, StoreResult, HEADER_ROW};
use rusqlite::{params, Connection, OptionalExtension};

/// Row store persisted in a relational `sheet_cells` table.
pub struct SqliteRowStore<'conn> {
    conn: &'conn Connection,
    width: usize,
}

impl<'conn> SqliteRowStore<'conn> {
    /// Wraps an opened connection, seeding the header when the sheet is empty.
    ///
    /// `header` is only written when no header row exists yet; a sheet that
    /// already carries one keeps it unchanged, and any mismatch with the
    /// expected schema surfaces later as a repository-level schema error.
    pub fn try_new<T: AsRef<str>>(conn: &'conn Connection, header: &[T]) -> StoreResult<Self> {
        let existing_width: usize = conn.query_row(
            "SELECT COUNT(*) FROM sheet_cells WHERE row_idx = ?1;",
            [HEADER_ROW],
            |row| row.get(0),
        )?;

        if existing_width > 0 {
            return Ok(Self {
                conn,
                width: existing_width,
            });
        }

        let tx = conn.unchecked_transaction()?;
        for (index, name) in header.iter().enumerate() {
            tx.execute(
                "INSERT INTO sheet_cells (row_idx, col_idx, value) VALUES (?1, ?2, ?3);",
                params![HEADER_ROW, index + 1, name.as_ref()],
            )?;
        }
        tx.commit()?;

        Ok(Self {
            conn,
            width: header.len(),
        })
    }
}

impl RowStore for SqliteRowStore<'_> {
    fn fetch_all(&self) -> StoreResult<Vec<NamedRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT row_idx, col_idx, value
             FROM sheet_cells
             ORDER BY row_idx ASC, col_idx ASC;",
        )?;
        let mut rows = stmt.query([])?;

        let mut header: Vec<String> = Vec::new();
        let mut named: Vec<NamedRow> = Vec::new();
        let mut current_row: usize = 0;

        while let Some(cell) = rows.next()? {
            let row_idx: usize = cell.get(0)?;
            let col_idx: usize = cell.get(1)?;
            let value: String = cell.get(2)?;

            if row_idx == HEADER_ROW {
                if col_idx > header.len() {
                    header.resize(col_idx, String::new());
                }
                header[col_idx - 1] = value;
                continue;
            }

            if row_idx != current_row {
                current_row = row_idx;
                named.push(NamedRow::new());
            }
            if let Some(name) = header.get(col_idx - 1) {
                if let Some(row) = named.last_mut() {
                    row.insert(name.clone(), value);
                }
            }
        }

        // Cells can be sparse; make sure every row exposes every column.
        for row in &mut named {
            for name in &header {
                row.entry(name.clone()).or_default();
            }
        }
        Ok(named)
    }

    fn append(&self, cells: &[String]) -> StoreResult<()> {
        if cells.len() != self.width {
            return Err(StoreError::RowWidth {
                expected: self.width,
                actual: cells.len(),
            });
        }

        let tx = self.conn.unchecked_transaction()?;
        let next_row: usize = tx.query_row(
            "SELECT COALESCE(MAX(row_idx), 0) + 1 FROM sheet_cells;",
            [],
            |row| row.get(0),
        )?;
        for (index, value) in cells.iter().enumerate() {
            tx.execute(
                "INSERT INTO sheet_cells (row_idx, col_idx, value) VALUES (?1, ?2, ?3);",
                params![next_row, index + 1, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn update_cell(&self, row: usize, column: usize, value: &str) -> StoreResult<()> {
        if row <= HEADER_ROW {
            return Err(StoreError::RowIndex { row });
        }
        if column == 0 || column > self.width {
            return Err(StoreError::ColumnIndex { column });
        }

        let exists: Option<usize> = self
            .conn
            .query_row(
                "SELECT row_idx FROM sheet_cells WHERE row_idx = ?1 LIMIT 1;",
                [row],
                |r| r.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(StoreError::RowIndex { row });
        }

        self.conn.execute(
            "INSERT OR REPLACE INTO sheet_cells (row_idx, col_idx, value)
             VALUES (?1, ?2, ?3);",
            params![row, column, value],
        )?;
        Ok(())
    }
}
