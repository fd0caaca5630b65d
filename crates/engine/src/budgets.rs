//! Monthly budget lines.

use serde::{Deserialize, Serialize};

use crate::{MoneyCents, row::Row};

const MONTH: &str = "Month";
const CATEGORY: &str = "Category";
const TARGET: &str = "Target";
const USED: &str = "Used";
const REMAINING: &str = "Remaining";

/// Spending target for one category in one month.
///
/// `used` and `remaining` are whatever the sheet says; nothing recomputes
/// them when transactions are added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub month: String,
    pub category: String,
    pub target: MoneyCents,
    pub used: MoneyCents,
    pub remaining: MoneyCents,
}

impl BudgetLine {
    pub fn from_row(row: &Row) -> Self {
        Self {
            month: row.text(MONTH).trim().to_string(),
            category: row.text(CATEGORY).to_string(),
            target: MoneyCents::coerce(row.text(TARGET)),
            used: MoneyCents::coerce(row.text(USED)),
            remaining: MoneyCents::coerce(row.text(REMAINING)),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(MONTH, self.month.as_str())
            .with(CATEGORY, self.category.as_str())
            .with(TARGET, self.target.to_string())
            .with(USED, self.used.to_string())
            .with(REMAINING, self.remaining.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetNew {
    pub month: String,
    pub category: String,
    pub target: MoneyCents,
}

impl From<BudgetNew> for BudgetLine {
    fn from(value: BudgetNew) -> Self {
        Self {
            month: value.month.trim().to_string(),
            category: value.category,
            target: value.target,
            used: MoneyCents::ZERO,
            remaining: value.target,
        }
    }
}
