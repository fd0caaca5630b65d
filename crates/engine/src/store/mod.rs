//! Row store adapter.
//!
//! The engine never talks to a concrete backend: it sees a [`RowStore`] that
//! can create a table, return every row of a table and append a row. Two
//! backends ship with the crate:
//!
//! - [`MemoryStore`]: process-local tables, used by tests and throwaway runs.
//! - [`CsvWorkbook`]: a directory with one CSV file per table, the header
//!   line playing the role of a spreadsheet's frozen first row.
//!
//! Calls are blocking; the [`Engine`](crate::Engine) moves them off the async
//! runtime.

use thiserror::Error;

use crate::row::{Row, Table};

pub use memory::MemoryStore;
pub use workbook::CsvWorkbook;

mod memory;
mod workbook;

/// Errors raised by a [`RowStore`] backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("table \"{0}\" not found")]
    TableNotFound(Table),
    #[error("table \"{0}\" has no header row")]
    MissingHeaders(Table),
    #[error("store lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type ResultStore<T> = Result<T, StoreError>;

/// A named-table row store.
pub trait RowStore: Send + Sync + core::fmt::Debug {
    /// Create `table` with its header row if it does not exist yet.
    ///
    /// Returns `true` when the table was created.
    fn ensure_table(&self, table: Table) -> ResultStore<bool>;

    /// Every row of `table`, in store order.
    fn fetch_rows(&self, table: Table) -> ResultStore<Vec<Row>>;

    /// Append `row` at the end of `table`.
    fn append_row(&self, table: Table, row: Row) -> ResultStore<()>;
}
