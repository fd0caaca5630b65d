//! Debts (money owed by the user) and credits (money owed to the user).

use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, row::Row};

const DATE: &str = "Date";
const TYPE: &str = "Type";
const PARTY: &str = "Party";
const AMOUNT: &str = "Amount";
const STATUS: &str = "Status";
const DUE_DATE: &str = "DueDate";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtCreditKind {
    Debt,
    Credit,
}

impl DebtCreditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debt => "Debt",
            Self::Credit => "Credit",
        }
    }
}

impl TryFrom<&str> for DebtCreditKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Debt" => Ok(Self::Debt),
            "Credit" => Ok(Self::Credit),
            other => Err(EngineError::InvalidKind(format!(
                "invalid debt/credit type: {other}"
            ))),
        }
    }
}

/// Settlement status. Anything stored other than `Paid` is outstanding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtStatus {
    #[default]
    Unpaid,
    Paid,
}

impl DebtStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
        }
    }

    pub fn from_cell(value: &str) -> Self {
        if value.trim() == Self::Paid.as_str() {
            Self::Paid
        } else {
            Self::Unpaid
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtCredit {
    pub date: String,
    pub kind: Option<DebtCreditKind>,
    pub party: String,
    pub amount: MoneyCents,
    /// Status label as stored, e.g. `Unpaid`, `Paid` or a hand-written note.
    pub status: String,
    /// Empty when no due date was given.
    pub due_date: String,
}

impl DebtCredit {
    pub fn from_row(row: &Row) -> Self {
        Self {
            date: row.text(DATE).trim().to_string(),
            kind: DebtCreditKind::try_from(row.text(TYPE)).ok(),
            party: row.text(PARTY).to_string(),
            amount: MoneyCents::coerce(row.text(AMOUNT)),
            status: row.text(STATUS).trim().to_string(),
            due_date: row.text(DUE_DATE).trim().to_string(),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(DATE, self.date.as_str())
            .with(TYPE, self.kind.map(DebtCreditKind::as_str).unwrap_or_default())
            .with(PARTY, self.party.as_str())
            .with(AMOUNT, self.amount.to_string())
            .with(STATUS, self.status.as_str())
            .with(DUE_DATE, self.due_date.as_str())
    }

    pub fn settlement(&self) -> DebtStatus {
        DebtStatus::from_cell(&self.status)
    }

    /// Outstanding records of `kind`: the ones that count toward totals.
    pub fn is_outstanding(&self, kind: DebtCreditKind) -> bool {
        self.kind == Some(kind) && self.settlement() != DebtStatus::Paid
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebtCreditNew {
    pub date: String,
    pub kind: DebtCreditKind,
    pub party: String,
    pub amount: MoneyCents,
    pub due_date: Option<String>,
}

impl From<DebtCreditNew> for DebtCredit {
    fn from(value: DebtCreditNew) -> Self {
        Self {
            date: value.date.trim().to_string(),
            kind: Some(value.kind),
            party: value.party,
            amount: value.amount,
            status: DebtStatus::Unpaid.as_str().to_string(),
            due_date: value.due_date.unwrap_or_default().trim().to_string(),
        }
    }
}
