//! Settings for the application.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. TOML file (`config/kasbook.toml`, or `--config <path>`), optional
//! 3. environment, prefixed `KASBOOK_` with `__` between levels
//!    (`KASBOOK_SERVER__PORT=8080`)
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/kasbook.toml";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Store {
    Memory,
    Csv { path: String },
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub store: Store,
}

#[derive(Debug, Parser)]
#[command(name = "kasbook", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
}

/// `KASBOOK_` then `__` between levels: `KASBOOK_SERVER__PORT`.
fn environment() -> Environment {
    Environment::with_prefix("KASBOOK")
        .prefix_separator("_")
        .separator("__")
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::load(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH))
    }

    fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &str, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 3000)?
            .set_default("store.kind", "csv")?
            .set_default("store.path", "data")?
            .add_source(File::with_name(path).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }
}
