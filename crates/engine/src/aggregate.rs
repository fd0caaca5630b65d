//! Ledger aggregation.
//!
//! Pure reductions from record slices to summaries. Nothing here touches the
//! store: callers fetch a snapshot, convert rows to records and hand the
//! slices over. Row order never affects a result.

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    MoneyCents,
    debts::{DebtCredit, DebtCreditKind},
    savings::{SavingsInvestment, SavingsKind},
    transactions::{Transaction, TransactionKind},
};

/// Overall position across the ledger, debts and savings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub income: MoneyCents,
    pub expense: MoneyCents,
    /// `income - expense`; the only field that can be negative.
    pub balance: MoneyCents,
    /// Outstanding (not `Paid`) debts.
    pub total_debt: MoneyCents,
    /// Outstanding (not `Paid`) credits.
    pub total_credit: MoneyCents,
    pub total_savings: MoneyCents,
    pub total_investment: MoneyCents,
}

/// Income and expense for one calendar month.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// `"{year}-{month}"`, month not zero-padded.
    pub period: String,
    pub income: MoneyCents,
    pub expense: MoneyCents,
    pub balance: MoneyCents,
    /// Expense totals keyed by the exact category text.
    pub expense_by_category: HashMap<String, MoneyCents>,
}

fn sum_where<T>(
    items: &[T],
    amount: impl Fn(&T) -> MoneyCents,
    keep: impl Fn(&T) -> bool,
) -> MoneyCents {
    items
        .iter()
        .filter(|item| keep(*item))
        .fold(MoneyCents::ZERO, |acc, item| acc + amount(item))
}

/// Totals for the dashboard.
pub fn dashboard_summary(
    transactions: &[Transaction],
    debts: &[DebtCredit],
    savings: &[SavingsInvestment],
) -> DashboardSummary {
    let income = sum_where(transactions, |t| t.amount, |t| t.is(TransactionKind::Income));
    let expense = sum_where(transactions, |t| t.amount, |t| t.is(TransactionKind::Expense));

    DashboardSummary {
        income,
        expense,
        balance: income - expense,
        total_debt: sum_where(debts, |d| d.amount, |d| {
            d.is_outstanding(DebtCreditKind::Debt)
        }),
        total_credit: sum_where(debts, |d| d.amount, |d| {
            d.is_outstanding(DebtCreditKind::Credit)
        }),
        total_savings: sum_where(savings, |s| s.amount, |s| s.is(SavingsKind::Savings)),
        total_investment: sum_where(savings, |s| s.amount, |s| s.is(SavingsKind::Investment)),
    }
}

/// Report for the transactions dated in `year`-`month` (1-indexed).
///
/// `month` is not range-checked: a month outside 1..=12 matches nothing and
/// yields an empty report. Transactions without a parsable date are skipped.
pub fn monthly_report(transactions: &[Transaction], year: i32, month: u32) -> MonthlyReport {
    let mut report = MonthlyReport {
        period: format!("{year}-{month}"),
        ..Default::default()
    };

    let in_period = transactions.iter().filter(|tx| {
        tx.date()
            .is_some_and(|date| date.year() == year && date.month() == month)
    });

    for tx in in_period {
        match tx.kind {
            Some(TransactionKind::Income) => report.income += tx.amount,
            Some(TransactionKind::Expense) => {
                report.expense += tx.amount;
                *report
                    .expense_by_category
                    .entry(tx.category.clone())
                    .or_default() += tx.amount;
            }
            None => {}
        }
    }

    report.balance = report.income - report.expense;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debts::DebtStatus;

    fn tx(date: &str, kind: Option<TransactionKind>, category: &str, amount: i64) -> Transaction {
        Transaction {
            date: date.to_string(),
            kind,
            category: category.to_string(),
            amount: MoneyCents::new(amount),
            note: String::new(),
        }
    }

    fn income(date: &str, amount: i64) -> Transaction {
        tx(date, Some(TransactionKind::Income), "Salary", amount)
    }

    fn expense(date: &str, category: &str, amount: i64) -> Transaction {
        tx(date, Some(TransactionKind::Expense), category, amount)
    }

    fn debt(kind: DebtCreditKind, amount: i64, status: DebtStatus) -> DebtCredit {
        DebtCredit {
            date: String::new(),
            kind: Some(kind),
            party: "Someone".to_string(),
            amount: MoneyCents::new(amount),
            status: status.as_str().to_string(),
            due_date: String::new(),
        }
    }

    fn saving(kind: SavingsKind, amount: i64) -> SavingsInvestment {
        SavingsInvestment {
            date: String::new(),
            kind: Some(kind),
            party: "Bank".to_string(),
            amount: MoneyCents::new(amount),
            target: MoneyCents::ZERO,
            return_amount: MoneyCents::ZERO,
        }
    }

    fn march_ledger() -> Vec<Transaction> {
        vec![
            income("2024-03-05", 1_000_000),
            expense("2024-03-10", "Food", 150_000),
            expense("2024-04-01", "Food", 50_000),
        ]
    }

    #[test]
    fn monthly_report_scenario() {
        let report = monthly_report(&march_ledger(), 2024, 3);

        assert_eq!(report.period, "2024-3");
        assert_eq!(report.income, MoneyCents::new(1_000_000));
        assert_eq!(report.expense, MoneyCents::new(150_000));
        assert_eq!(report.balance, MoneyCents::new(850_000));
        assert_eq!(
            report.expense_by_category,
            HashMap::from([("Food".to_string(), MoneyCents::new(150_000))])
        );
    }

    #[test]
    fn monthly_report_skips_undated_and_other_periods() {
        let ledger = vec![
            expense("", "Food", 1),
            expense("soon", "Food", 2),
            expense("2023-03-10", "Food", 4),
            expense("2024-02-29", "Food", 8),
            expense("2024-03-31", "Rent", 16),
        ];
        let report = monthly_report(&ledger, 2024, 3);
        assert_eq!(report.expense, MoneyCents::new(16));
        assert_eq!(report.expense_by_category.len(), 1);
        assert_eq!(report.expense_by_category["Rent"], MoneyCents::new(16));
    }

    #[test]
    fn out_of_range_month_matches_nothing() {
        for month in [0, 13] {
            let report = monthly_report(&march_ledger(), 2024, month);
            assert_eq!(report.period, format!("2024-{month}"));
            assert_eq!(report.income, MoneyCents::ZERO);
            assert!(report.expense_by_category.is_empty());
        }
    }

    #[test]
    fn category_totals_sum_to_expense() {
        let ledger = vec![
            expense("2024-05-01", "Food", 1_250),
            expense("2024-05-02", "Transport", 300),
            expense("2024-05-03", "Food", 75),
            expense("2024-05-04", "food", 10),
            expense("2024-05-05", "", 5),
            income("2024-05-06", 9_999),
        ];
        let report = monthly_report(&ledger, 2024, 5);

        let by_category = report
            .expense_by_category
            .values()
            .fold(MoneyCents::ZERO, |acc, v| acc + *v);
        assert_eq!(by_category, report.expense);
        // Category keys are exact strings.
        assert_eq!(report.expense_by_category["Food"], MoneyCents::new(1_325));
        assert_eq!(report.expense_by_category["food"], MoneyCents::new(10));
        assert_eq!(report.expense_by_category[""], MoneyCents::new(5));
    }

    #[test]
    fn unknown_kinds_are_ignored() {
        let ledger = vec![tx("2024-03-01", None, "Misc", 500)];
        assert_eq!(dashboard_summary(&ledger, &[], &[]), DashboardSummary::default());
        let report = monthly_report(&ledger, 2024, 3);
        assert_eq!(report.expense, MoneyCents::ZERO);
        assert!(report.expense_by_category.is_empty());
    }

    #[test]
    fn paid_records_never_count() {
        let debts = vec![
            debt(DebtCreditKind::Debt, 200_000, DebtStatus::Unpaid),
            debt(DebtCreditKind::Debt, 100_000, DebtStatus::Paid),
            debt(DebtCreditKind::Credit, 999_999, DebtStatus::Paid),
            debt(DebtCreditKind::Credit, 40_000, DebtStatus::Unpaid),
        ];
        let summary = dashboard_summary(&[], &debts, &[]);
        assert_eq!(summary.total_debt, MoneyCents::new(200_000));
        assert_eq!(summary.total_credit, MoneyCents::new(40_000));
    }

    #[test]
    fn dashboard_totals_every_table() {
        let savings = vec![
            saving(SavingsKind::Savings, 300),
            saving(SavingsKind::Investment, 700),
            saving(SavingsKind::Savings, 50),
        ];
        let summary = dashboard_summary(&march_ledger(), &[], &savings);
        assert_eq!(summary.income, MoneyCents::new(1_000_000));
        assert_eq!(summary.expense, MoneyCents::new(200_000));
        assert_eq!(summary.balance, summary.income - summary.expense);
        assert_eq!(summary.total_savings, MoneyCents::new(350));
        assert_eq!(summary.total_investment, MoneyCents::new(700));
    }

    #[test]
    fn balance_can_go_negative() {
        let ledger = vec![income("2024-01-01", 100), expense("2024-01-02", "Rent", 250)];
        assert_eq!(dashboard_summary(&ledger, &[], &[]).balance, MoneyCents::new(-150));
        assert_eq!(monthly_report(&ledger, 2024, 1).balance, MoneyCents::new(-150));
    }

    #[test]
    fn dashboard_ignores_row_order() {
        let mut ledger = march_ledger();
        ledger.push(expense("2024-06-01", "Fun", 33));
        let debts = vec![
            debt(DebtCreditKind::Debt, 5, DebtStatus::Unpaid),
            debt(DebtCreditKind::Credit, 7, DebtStatus::Unpaid),
        ];
        let forward = dashboard_summary(&ledger, &debts, &[]);

        ledger.reverse();
        let mut debts = debts;
        debts.reverse();
        assert_eq!(dashboard_summary(&ledger, &debts, &[]), forward);
    }

    #[test]
    fn empty_inputs_give_zeroes() {
        assert_eq!(dashboard_summary(&[], &[], &[]), DashboardSummary::default());

        let report = monthly_report(&[], 2024, 3);
        assert_eq!(report.income, MoneyCents::ZERO);
        assert_eq!(report.expense, MoneyCents::ZERO);
        assert_eq!(report.balance, MoneyCents::ZERO);
        assert!(report.expense_by_category.is_empty());
    }

    #[test]
    fn blank_amount_cells_contribute_nothing() {
        use crate::row::Row;

        let rows = [
            Row::new()
                .with("Date", "2024-03-01")
                .with("Type", "Expense")
                .with("Category", "Food")
                .with("Amount", ""),
            Row::new()
                .with("Date", "2024-03-02")
                .with("Type", "Expense")
                .with("Category", "Food"),
            Row::new()
                .with("Date", "2024-03-03")
                .with("Type", "Expense")
                .with("Category", "Food")
                .with("Amount", "12"),
        ];
        let ledger: Vec<_> = rows.iter().map(Transaction::from_row).collect();
        let report = monthly_report(&ledger, 2024, 3);
        assert_eq!(report.expense, MoneyCents::new(1_200));
        assert_eq!(report.expense_by_category["Food"], MoneyCents::new(1_200));
    }
}
