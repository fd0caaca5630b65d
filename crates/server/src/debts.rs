//! Debt/credit API endpoints

use api_types::{
    Created,
    debt::{DebtCreditKind as ApiKind, DebtCreditNew, DebtCreditView},
};
use axum::{Json, extract::State, http::StatusCode};
use engine::MoneyCents;

use crate::{ServerError, server::ServerState};

fn map_kind(kind: engine::DebtCreditKind) -> ApiKind {
    match kind {
        engine::DebtCreditKind::Debt => ApiKind::Debt,
        engine::DebtCreditKind::Credit => ApiKind::Credit,
    }
}

fn map_record(record: engine::DebtCredit) -> DebtCreditView {
    DebtCreditView {
        date: record.date,
        kind: record.kind.map(map_kind),
        party: record.party,
        amount: record.amount.as_major(),
        status: record.status,
        due_date: record.due_date,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<DebtCreditView>>, ServerError> {
    let records = state
        .engine
        .debts_credits()
        .await?
        .into_iter()
        .map(map_record)
        .collect();

    Ok(Json(records))
}

/// New records are always stored as `Unpaid`.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DebtCreditNew>,
) -> Result<(StatusCode, Json<Created<DebtCreditView>>), ServerError> {
    let kind = match payload.kind {
        ApiKind::Debt => engine::DebtCreditKind::Debt,
        ApiKind::Credit => engine::DebtCreditKind::Credit,
    };

    let record = state
        .engine
        .new_debt_credit(engine::DebtCreditNew {
            date: payload.date,
            kind,
            party: payload.party,
            amount: MoneyCents::coerce(&payload.amount.as_text()),
            due_date: payload.due_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "debt/credit saved".to_string(),
            record: map_record(record),
        }),
    ))
}
