use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{router, run_with_listener};

mod budgets;
mod debts;
mod savings;
mod server;
mod statistics;
mod transactions;

pub mod types {
    pub mod transaction {
        pub use api_types::transaction::{TransactionKind, TransactionNew, TransactionView};
    }

    pub mod budget {
        pub use api_types::budget::{BudgetNew, BudgetView};
    }

    pub mod debt {
        pub use api_types::debt::{DebtCreditKind, DebtCreditNew, DebtCreditView};
    }

    pub mod savings {
        pub use api_types::savings::{SavingsInvestmentNew, SavingsInvestmentView, SavingsKind};
    }

    pub mod stats {
        pub use api_types::stats::{DashboardSummary, MonthlyReport, MonthlyReportQuery};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        // Reserved: handlers coerce amounts and take typed labels from the
        // body, so today these only come from strict engine parsing.
        EngineError::InvalidAmount(_) | EngineError::InvalidKind(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EngineError::Store(_) | EngineError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Store(store_err) => {
            tracing::error!("store error: {store_err}");
            "internal server error".to_string()
        }
        EngineError::Task(task_err) => {
            tracing::error!("engine task error: {task_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
