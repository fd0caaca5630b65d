use axum::{Router, routing::get};

use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::{budgets, debts, savings, statistics, transactions};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

async fn health() -> &'static str {
    "ok"
}

/// Build the API router over `engine`.
///
/// Cross-origin requests are allowed from any origin so a separately hosted
/// frontend can call the API.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/api/budgets", get(budgets::list).post(budgets::create))
        .route("/api/debts-credits", get(debts::list).post(debts::create))
        .route(
            "/api/savings-investments",
            get(savings::list).post(savings::create),
        )
        .route("/api/dashboard", get(statistics::dashboard))
        .route("/api/report", get(statistics::monthly_report))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}
