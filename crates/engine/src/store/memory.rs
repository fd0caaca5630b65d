use std::{collections::HashMap, sync::RwLock};

use super::{ResultStore, RowStore, StoreError};
use crate::row::{Row, Table};

/// In-memory [`RowStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `rows` in `table`.
    #[must_use]
    pub fn with_rows(self, table: Table, rows: Vec<Row>) -> Self {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(table, rows);
        }
        self
    }
}

impl RowStore for MemoryStore {
    fn ensure_table(&self, table: Table) -> ResultStore<bool> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        if tables.contains_key(&table) {
            return Ok(false);
        }
        tables.insert(table, Vec::new());
        Ok(true)
    }

    fn fetch_rows(&self, table: Table) -> ResultStore<Vec<Row>> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        tables
            .get(&table)
            .cloned()
            .ok_or(StoreError::TableNotFound(table))
    }

    fn append_row(&self, table: Table, row: Row) -> ResultStore<()> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        tables
            .get_mut(&table)
            .ok_or(StoreError::TableNotFound(table))?
            .push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_is_an_error() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.fetch_rows(Table::Budget),
            Err(StoreError::TableNotFound(Table::Budget))
        ));
        assert!(store.append_row(Table::Budget, Row::new()).is_err());
    }

    #[test]
    fn ensure_table_is_idempotent() {
        let store = MemoryStore::new();
        assert!(store.ensure_table(Table::Transactions).unwrap());
        store
            .append_row(Table::Transactions, Row::new().with("Amount", "1"))
            .unwrap();
        assert!(!store.ensure_table(Table::Transactions).unwrap());
        assert_eq!(store.fetch_rows(Table::Transactions).unwrap().len(), 1);
    }

    #[test]
    fn appends_keep_order() {
        let store = MemoryStore::new().with_rows(Table::Transactions, Vec::new());
        for amount in ["1", "2", "3"] {
            store
                .append_row(Table::Transactions, Row::new().with("Amount", amount))
                .unwrap();
        }
        let amounts: Vec<_> = store
            .fetch_rows(Table::Transactions)
            .unwrap()
            .iter()
            .map(|r| r.text("Amount").to_string())
            .collect();
        assert_eq!(amounts, ["1", "2", "3"]);
    }
}
