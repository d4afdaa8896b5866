pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod infra;
pub mod ui;

use config::AppConfig;
use error::AppError;
use infra::{init_db, DbPool};

/// Install the `env_logger` backend. `RUST_LOG` still refines per-module filters.
pub fn init_logging(cfg: &AppConfig) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(cfg.log_level)
        .parse_env(env_logger::Env::default());
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

/// Open the database named by the config.
pub fn open(cfg: &AppConfig) -> Result<DbPool, AppError> {
    log::info!("DB path: {:?}", cfg.db_path);
    init_db(&cfg.db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })
}
