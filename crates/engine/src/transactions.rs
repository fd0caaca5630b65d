//! Transaction primitives.
//!
//! A `Transaction` is one line of the ledger: money that came in (`Income`)
//! or went out (`Expense`) on a date, under a free-text category.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, row::Row};

const DATE: &str = "Date";
const TYPE: &str = "Type";
const CATEGORY: &str = "Category";
const AMOUNT: &str = "Amount";
const NOTE: &str = "Note";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidKind(format!(
                "invalid transaction type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date cell as stored; see [`Transaction::date`].
    pub date: String,
    /// `None` when the stored type label is not recognised.
    pub kind: Option<TransactionKind>,
    pub category: String,
    pub amount: MoneyCents,
    pub note: String,
}

impl Transaction {
    /// Build a transaction from a stored row. Never fails: unknown labels
    /// become `None` and bad amounts become zero.
    pub fn from_row(row: &Row) -> Self {
        Self {
            date: row.text(DATE).trim().to_string(),
            kind: TransactionKind::try_from(row.text(TYPE)).ok(),
            category: row.text(CATEGORY).to_string(),
            amount: MoneyCents::coerce(row.text(AMOUNT)),
            note: row.text(NOTE).to_string(),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(DATE, self.date.as_str())
            .with(TYPE, self.kind.map(TransactionKind::as_str).unwrap_or_default())
            .with(CATEGORY, self.category.as_str())
            .with(AMOUNT, self.amount.to_string())
            .with(NOTE, self.note.as_str())
    }

    /// Calendar date of the transaction, if the date cell parses.
    ///
    /// Accepted forms: `2024-03-05`, `2024/03/05`, `2024-03-05 10:30:00` and
    /// RFC 3339 timestamps (the local date part is used).
    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn is(&self, kind: TransactionKind) -> bool {
        self.kind == Some(kind)
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Input for a new ledger line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionNew {
    pub date: String,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: MoneyCents,
    pub note: Option<String>,
}

impl From<TransactionNew> for Transaction {
    fn from(value: TransactionNew) -> Self {
        Self {
            date: value.date.trim().to_string(),
            kind: Some(value.kind),
            category: value.category,
            amount: value.amount,
            note: value.note.unwrap_or_default(),
        }
    }
}
