//! Savings and investment positions.

use serde::{Deserialize, Serialize};

use crate::{EngineError, MoneyCents, row::Row};

const DATE: &str = "Date";
const TYPE: &str = "Type";
const PARTY: &str = "Party";
const AMOUNT: &str = "Amount";
const TARGET: &str = "Target";
const RETURN: &str = "Return";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SavingsKind {
    Savings,
    Investment,
}

impl SavingsKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Investment => "Investment",
        }
    }
}

impl TryFrom<&str> for SavingsKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Savings" => Ok(Self::Savings),
            "Investment" => Ok(Self::Investment),
            other => Err(EngineError::InvalidKind(format!(
                "invalid savings/investment type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInvestment {
    pub date: String,
    pub kind: Option<SavingsKind>,
    /// Bank, fund or instrument name.
    pub party: String,
    pub amount: MoneyCents,
    pub target: MoneyCents,
    pub return_amount: MoneyCents,
}

impl SavingsInvestment {
    pub fn from_row(row: &Row) -> Self {
        Self {
            date: row.text(DATE).trim().to_string(),
            kind: SavingsKind::try_from(row.text(TYPE)).ok(),
            party: row.text(PARTY).to_string(),
            amount: MoneyCents::coerce(row.text(AMOUNT)),
            target: MoneyCents::coerce(row.text(TARGET)),
            return_amount: MoneyCents::coerce(row.text(RETURN)),
        }
    }

    pub fn to_row(&self) -> Row {
        Row::new()
            .with(DATE, self.date.as_str())
            .with(TYPE, self.kind.map(SavingsKind::as_str).unwrap_or_default())
            .with(PARTY, self.party.as_str())
            .with(AMOUNT, self.amount.to_string())
            .with(TARGET, self.target.to_string())
            .with(RETURN, self.return_amount.to_string())
    }

    pub fn is(&self, kind: SavingsKind) -> bool {
        self.kind == Some(kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavingsInvestmentNew {
    pub date: String,
    pub kind: SavingsKind,
    pub party: String,
    pub amount: MoneyCents,
    pub target: Option<MoneyCents>,
}

impl From<SavingsInvestmentNew> for SavingsInvestment {
    fn from(value: SavingsInvestmentNew) -> Self {
        Self {
            date: value.date.trim().to_string(),
            kind: Some(value.kind),
            party: value.party,
            amount: value.amount,
            target: value.target.unwrap_or_default(),
            return_amount: MoneyCents::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_on_creation() {
        let record = SavingsInvestment::from(SavingsInvestmentNew {
            date: "2024-03-01".to_string(),
            kind: SavingsKind::Investment,
            party: "Index fund".to_string(),
            amount: MoneyCents::new(50_000),
            target: None,
        });
        assert_eq!(record.target, MoneyCents::ZERO);
        assert_eq!(record.return_amount, MoneyCents::ZERO);

        let row = record.to_row();
        assert_eq!(row.text("Return"), "0.00");
        assert_eq!(SavingsInvestment::from_row(&row), record);
    }

    #[test]
    fn unknown_type_is_kept_as_none() {
        let record = SavingsInvestment::from_row(&Row::new().with("Type", "Crypto"));
        assert_eq!(record.kind, None);
        assert!(!record.is(SavingsKind::Savings));
        assert!(!record.is(SavingsKind::Investment));
    }
}
