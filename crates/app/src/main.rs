use std::error::Error;

use settings::Store;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "kasbook={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let engine = match build_engine(&settings.store).await {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to initialize store: {err}");
            return Err(err);
        }
    };

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    Ok(())
}

async fn build_engine(
    config: &Store,
) -> Result<engine::Engine, Box<dyn Error + Send + Sync>> {
    let builder = engine::Engine::builder();
    let builder = match config {
        Store::Memory => {
            tracing::warn!("using in-memory store, data is lost on exit");
            builder.store(engine::MemoryStore::new())
        }
        Store::Csv { path } => {
            tracing::info!("using CSV workbook at {path}");
            builder.store(engine::CsvWorkbook::open(path)?)
        }
    };

    Ok(builder.build().await?)
}
