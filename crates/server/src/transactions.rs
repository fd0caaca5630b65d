//! Transactions API endpoints

use api_types::{
    Created,
    transaction::{TransactionKind as ApiKind, TransactionNew, TransactionView},
};
use axum::{Json, extract::State, http::StatusCode};
use engine::MoneyCents;

use crate::{ServerError, server::ServerState};

fn map_kind(kind: engine::TransactionKind) -> ApiKind {
    match kind {
        engine::TransactionKind::Income => ApiKind::Income,
        engine::TransactionKind::Expense => ApiKind::Expense,
    }
}

fn map_transaction(tx: engine::Transaction) -> TransactionView {
    TransactionView {
        date: tx.date,
        kind: tx.kind.map(map_kind),
        category: tx.category,
        amount: tx.amount.as_major(),
        note: tx.note,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let transactions = state
        .engine
        .transactions()
        .await?
        .into_iter()
        .map(map_transaction)
        .collect();

    Ok(Json(transactions))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionNew>,
) -> Result<(StatusCode, Json<Created<TransactionView>>), ServerError> {
    let kind = match payload.kind {
        ApiKind::Income => engine::TransactionKind::Income,
        ApiKind::Expense => engine::TransactionKind::Expense,
    };

    let tx = state
        .engine
        .new_transaction(engine::TransactionNew {
            date: payload.date,
            kind,
            category: payload.category,
            amount: MoneyCents::coerce(&payload.amount.as_text()),
            note: payload.note,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "transaction saved".to_string(),
            record: map_transaction(tx),
        }),
    ))
}
