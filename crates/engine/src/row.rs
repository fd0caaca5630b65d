//! Row primitives.
//!
//! A [`Row`] is one line of a [`Table`]: a mapping from column header to the
//! cell text, exactly as the store holds it. Typed records are built on top
//! of rows leniently, so a row never fails to load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The tables of the bookkeeping workbook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Table {
    Transactions,
    Budget,
    DebtCredit,
    SavingsInvestment,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Transactions,
        Table::Budget,
        Table::DebtCredit,
        Table::SavingsInvestment,
    ];

    /// Name of the table in the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transactions => "Transactions",
            Self::Budget => "Budget",
            Self::DebtCredit => "DebtCredit",
            Self::SavingsInvestment => "SavingsInvestment",
        }
    }

    /// Header row written when the table is created.
    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Transactions => &["Date", "Type", "Category", "Amount", "Note"],
            Self::Budget => &["Month", "Category", "Target", "Used", "Remaining"],
            Self::DebtCredit => &["Date", "Type", "Party", "Amount", "Status", "DueDate"],
            Self::SavingsInvestment => &["Date", "Type", "Party", "Amount", "Target", "Return"],
        }
    }
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One stored row: column header → cell text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(BTreeMap<String, String>);

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.0.insert(column.to_string(), value.into());
    }

    /// Cell text, `None` when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Cell text, empty when the column is absent.
    #[must_use]
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_read_as_empty() {
        let row = Row::new().with("Amount", "10");
        assert_eq!(row.text("Amount"), "10");
        assert_eq!(row.text("Note"), "");
        assert_eq!(row.get("Note"), None);
    }

    #[test]
    fn blank_cells_make_an_empty_row() {
        let row: Row = [("Date", " "), ("Amount", "")].into_iter().collect();
        assert!(row.is_empty());
        assert!(!Row::new().with("Type", "Income").is_empty());
    }

    #[test]
    fn every_table_has_a_distinct_name() {
        let mut names: Vec<_> = Table::ALL.iter().map(|t| t.name()).collect();
        names.dedup();
        assert_eq!(names.len(), 4);
        assert_eq!(Table::DebtCredit.to_string(), "DebtCredit");
    }
}
