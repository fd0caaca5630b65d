//! Dashboard and report API endpoints

use api_types::stats::{DashboardSummary, MonthlyReport, MonthlyReportQuery};
use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Datelike, Utc};

use crate::{ServerError, server::ServerState};

/// Handle requests for the overall dashboard totals
pub async fn dashboard(
    State(state): State<ServerState>,
) -> Result<Json<DashboardSummary>, ServerError> {
    let summary = state.engine.dashboard().await?;

    Ok(Json(DashboardSummary {
        income: summary.income.as_major(),
        expense: summary.expense.as_major(),
        balance: summary.balance.as_major(),
        total_debt: summary.total_debt.as_major(),
        total_credit: summary.total_credit.as_major(),
        total_savings: summary.total_savings.as_major(),
        total_investment: summary.total_investment.as_major(),
    }))
}

/// Handle requests for a monthly report; the period defaults to the
/// current UTC month.
pub async fn monthly_report(
    State(state): State<ServerState>,
    Query(query): Query<MonthlyReportQuery>,
) -> Result<Json<MonthlyReport>, ServerError> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let report = state.engine.monthly_report(year, month).await?;

    Ok(Json(MonthlyReport {
        period: report.period,
        income: report.income.as_major(),
        expense: report.expense.as_major(),
        balance: report.balance.as_major(),
        expense_by_category: report
            .expense_by_category
            .into_iter()
            .map(|(category, total)| (category, total.as_major()))
            .collect(),
    }))
}
