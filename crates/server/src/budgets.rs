//! Budget API endpoints

use api_types::{
    Created,
    budget::{BudgetNew, BudgetView},
};
use axum::{Json, extract::State, http::StatusCode};
use engine::MoneyCents;

use crate::{ServerError, server::ServerState};

fn map_budget(line: engine::BudgetLine) -> BudgetView {
    BudgetView {
        month: line.month,
        category: line.category,
        target: line.target.as_major(),
        used: line.used.as_major(),
        remaining: line.remaining.as_major(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let budgets = state
        .engine
        .budgets()
        .await?
        .into_iter()
        .map(map_budget)
        .collect();

    Ok(Json(budgets))
}

/// New budget lines start with nothing used and the whole target remaining.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetNew>,
) -> Result<(StatusCode, Json<Created<BudgetView>>), ServerError> {
    if payload.month.trim().is_empty() {
        return Err(ServerError::Generic("month required".to_string()));
    }

    let line = state
        .engine
        .new_budget(engine::BudgetNew {
            month: payload.month,
            category: payload.category,
            target: MoneyCents::coerce(&payload.target.as_text()),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "budget saved".to_string(),
            record: map_budget(line),
        }),
    ))
}
