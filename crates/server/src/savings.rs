//! Savings/investment API endpoints

use api_types::{
    Created,
    savings::{SavingsInvestmentNew, SavingsInvestmentView, SavingsKind as ApiKind},
};
use axum::{Json, extract::State, http::StatusCode};
use engine::MoneyCents;

use crate::{ServerError, server::ServerState};

fn map_kind(kind: engine::SavingsKind) -> ApiKind {
    match kind {
        engine::SavingsKind::Savings => ApiKind::Savings,
        engine::SavingsKind::Investment => ApiKind::Investment,
    }
}

fn map_record(record: engine::SavingsInvestment) -> SavingsInvestmentView {
    SavingsInvestmentView {
        date: record.date,
        kind: record.kind.map(map_kind),
        party: record.party,
        amount: record.amount.as_major(),
        target: record.target.as_major(),
        return_amount: record.return_amount.as_major(),
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SavingsInvestmentView>>, ServerError> {
    let records = state
        .engine
        .savings_investments()
        .await?
        .into_iter()
        .map(map_record)
        .collect();

    Ok(Json(records))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SavingsInvestmentNew>,
) -> Result<(StatusCode, Json<Created<SavingsInvestmentView>>), ServerError> {
    let kind = match payload.kind {
        ApiKind::Savings => engine::SavingsKind::Savings,
        ApiKind::Investment => engine::SavingsKind::Investment,
    };

    let record = state
        .engine
        .new_savings_investment(engine::SavingsInvestmentNew {
            date: payload.date,
            kind,
            party: payload.party,
            amount: MoneyCents::coerce(&payload.amount.as_text()),
            target: payload
                .target
                .map(|target| MoneyCents::coerce(&target.as_text())),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "savings/investment saved".to_string(),
            record: map_record(record),
        }),
    ))
}
