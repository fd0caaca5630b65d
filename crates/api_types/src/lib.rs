use serde::{Deserialize, Serialize};

/// An amount as sent by a client: either a JSON number or a string.
///
/// The server reads it leniently; anything that is not a non-negative
/// decimal counts as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Decimal text of the amount, as it would be typed into a sheet cell.
    ///
    /// Numbers are written in full, never rounded, so `12.345` and
    /// `"12.345"` read the same way.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) if value.is_finite() => value.to_string(),
            Self::Number(_) => String::new(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Body of a `201 Created` response: the stored record.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created<T> {
    pub message: String,
    pub record: T,
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionNew {
        pub date: String,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
        #[serde(default)]
        pub category: String,
        #[serde(default)]
        pub amount: AmountInput,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionView {
        pub date: String,
        /// `null` when the stored label is not a known type.
        #[serde(rename = "type")]
        pub kind: Option<TransactionKind>,
        pub category: String,
        pub amount: f64,
        pub note: String,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetNew {
        /// Budget month, e.g. `2024-03`.
        pub month: String,
        pub category: String,
        #[serde(default)]
        pub target: AmountInput,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetView {
        pub month: String,
        pub category: String,
        pub target: f64,
        pub used: f64,
        pub remaining: f64,
    }
}

pub mod debt {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum DebtCreditKind {
        Debt,
        Credit,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtCreditNew {
        pub date: String,
        #[serde(rename = "type")]
        pub kind: DebtCreditKind,
        pub party: String,
        #[serde(default)]
        pub amount: AmountInput,
        pub due_date: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DebtCreditView {
        pub date: String,
        #[serde(rename = "type")]
        pub kind: Option<DebtCreditKind>,
        pub party: String,
        pub amount: f64,
        /// Stored label; only `Paid` settles a record.
        pub status: String,
        pub due_date: String,
    }
}

pub mod savings {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum SavingsKind {
        Savings,
        Investment,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsInvestmentNew {
        pub date: String,
        #[serde(rename = "type")]
        pub kind: SavingsKind,
        pub party: String,
        #[serde(default)]
        pub amount: AmountInput,
        pub target: Option<AmountInput>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SavingsInvestmentView {
        pub date: String,
        #[serde(rename = "type")]
        pub kind: Option<SavingsKind>,
        pub party: String,
        pub amount: f64,
        pub target: f64,
        pub return_amount: f64,
    }
}

pub mod stats {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DashboardSummary {
        pub income: f64,
        pub expense: f64,
        pub balance: f64,
        pub total_debt: f64,
        pub total_credit: f64,
        pub total_savings: f64,
        pub total_investment: f64,
    }

    /// Query string of the monthly report. Missing parts default to the
    /// current month.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct MonthlyReportQuery {
        pub year: Option<i32>,
        pub month: Option<u32>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct MonthlyReport {
        pub period: String,
        pub income: f64,
        pub expense: f64,
        pub balance: f64,
        pub expense_by_category: HashMap<String, f64>,
    }
}
