use std::{
    fs::{self, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
    sync::RwLock,
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use super::{ResultStore, RowStore, StoreError};
use crate::row::{Row, Table};

/// [`RowStore`] backed by a directory of CSV files, one per table.
///
/// The first line of every file is the header row; cells are matched to
/// columns by header name, so columns may be reordered or extended by hand
/// without breaking reads or appends.
#[derive(Debug)]
pub struct CsvWorkbook {
    root: PathBuf,
    /// Readers share it; `ensure_table` and `append_row` hold it exclusively.
    lock: RwLock<()>,
}

impl CsvWorkbook {
    /// Open (creating if needed) the workbook directory at `root`.
    pub fn open(root: impl Into<PathBuf>) -> ResultStore<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            lock: RwLock::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn table_path(&self, table: Table) -> PathBuf {
        self.root.join(format!("{}.csv", table.name()))
    }

    fn existing_table_path(&self, table: Table) -> ResultStore<PathBuf> {
        let path = self.table_path(table);
        if !path.is_file() {
            return Err(StoreError::TableNotFound(table));
        }
        Ok(path)
    }

    fn read_headers(table: Table, path: &Path) -> ResultStore<StringRecord> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(StoreError::MissingHeaders(table));
        }
        Ok(headers)
    }
}

impl RowStore for CsvWorkbook {
    fn ensure_table(&self, table: Table) -> ResultStore<bool> {
        let _guard = self.lock.write().map_err(|_| StoreError::Poisoned)?;
        let path = self.table_path(table);
        if path.is_file() {
            return Ok(false);
        }

        let mut writer = WriterBuilder::new().from_path(&path)?;
        writer.write_record(table.headers())?;
        writer.flush()?;
        Ok(true)
    }

    fn fetch_rows(&self, table: Table) -> ResultStore<Vec<Row>> {
        let _guard = self.lock.read().map_err(|_| StoreError::Poisoned)?;
        let path = self.existing_table_path(table)?;
        let mut reader = ReaderBuilder::new().flexible(true).from_path(&path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row: Row = headers
                .iter()
                .zip(record.iter())
                .map(|(header, cell)| (header.trim(), cell))
                .collect();
            // Blank lines in a hand-edited sheet are not records.
            if row.is_empty() {
                continue;
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn append_row(&self, table: Table, row: Row) -> ResultStore<()> {
        let _guard = self.lock.write().map_err(|_| StoreError::Poisoned)?;
        let path = self.existing_table_path(table)?;
        let headers = Self::read_headers(table, &path)?;

        for (column, _) in row.iter() {
            if !headers.iter().any(|h| h.trim() == column) {
                tracing::warn!("dropping column \"{column}\" not present in table {table}");
            }
        }

        let mut file = OpenOptions::new().read(true).append(true).open(&path)?;
        if file.metadata()?.len() > 0 {
            file.seek(SeekFrom::End(-1))?;
            let mut last = [0u8; 1];
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(headers.iter().map(|h| row.text(h.trim())))?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workbook() -> CsvWorkbook {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../target/test_workbooks")
            .join(uuid::Uuid::new_v4().to_string());
        CsvWorkbook::open(root).unwrap()
    }

    #[test]
    fn ensure_table_writes_header_row_once() {
        let book = workbook();
        assert!(book.ensure_table(Table::DebtCredit).unwrap());
        assert!(!book.ensure_table(Table::DebtCredit).unwrap());

        let contents = fs::read_to_string(book.root().join("DebtCredit.csv")).unwrap();
        assert_eq!(contents.lines().next(), Some("Date,Type,Party,Amount,Status,DueDate"));
        assert_eq!(contents.lines().count(), 1);
    }

    #[test]
    fn rows_round_trip_by_header_name() {
        let book = workbook();
        book.ensure_table(Table::Transactions).unwrap();
        book.append_row(
            Table::Transactions,
            Row::new()
                .with("Date", "2024-03-05")
                .with("Type", "Expense")
                .with("Category", "Food, drinks")
                .with("Amount", "15.50"),
        )
        .unwrap();

        let rows = book.fetch_rows(Table::Transactions).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("Category"), "Food, drinks");
        assert_eq!(rows[0].text("Amount"), "15.50");
        assert_eq!(rows[0].text("Note"), "");
    }

    #[test]
    fn append_follows_the_file_column_order() {
        let book = workbook();
        let path = book.root().join("Budget.csv");
        fs::write(&path, "Category,Month,Target,Used,Remaining").unwrap();

        book.append_row(
            Table::Budget,
            Row::new()
                .with("Month", "2024-03")
                .with("Category", "Food")
                .with("Target", "100.00"),
        )
        .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().nth(1), Some("Food,2024-03,100.00,,"));
        let rows = book.fetch_rows(Table::Budget).unwrap();
        assert_eq!(rows[0].text("Month"), "2024-03");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let book = workbook();
        let path = book.root().join("Transactions.csv");
        fs::write(
            &path,
            "Date,Type,Category,Amount,Note\n,,,,\n2024-01-01,Income,Salary,10,\n",
        )
        .unwrap();
        assert_eq!(book.fetch_rows(Table::Transactions).unwrap().len(), 1);
    }

    #[test]
    fn concurrent_reads_never_see_partial_records() {
        let book = std::sync::Arc::new(workbook());
        book.ensure_table(Table::Transactions).unwrap();

        let writer = {
            let book = book.clone();
            std::thread::spawn(move || {
                for i in 0..200 {
                    book.append_row(
                        Table::Transactions,
                        Row::new()
                            .with("Date", "2024-03-05")
                            .with("Type", "Expense")
                            .with("Category", format!("Category {i}"))
                            .with("Amount", "1.00")
                            .with("Note", "a note long enough to span a buffer flush"),
                    )
                    .unwrap();
                }
            })
        };

        for _ in 0..200 {
            for row in book.fetch_rows(Table::Transactions).unwrap() {
                assert_eq!(row.text("Note"), "a note long enough to span a buffer flush");
            }
        }
        writer.join().unwrap();
        assert_eq!(book.fetch_rows(Table::Transactions).unwrap().len(), 200);
    }

    #[test]
    fn missing_table_is_reported() {
        let book = workbook();
        assert!(matches!(
            book.fetch_rows(Table::SavingsInvestment),
            Err(StoreError::TableNotFound(Table::SavingsInvestment))
        ));
        assert!(matches!(
            book.append_row(Table::SavingsInvestment, Row::new()),
            Err(StoreError::TableNotFound(Table::SavingsInvestment))
        ));
    }
}
