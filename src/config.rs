//! Runtime configuration.

use crate::app::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use log::LevelFilter;
use std::path::PathBuf;

const APP_DIR: &str = "com.drugrecords.app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub page_size: i64,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: app_data_dir().join("app.db"),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Overlay explicit settings on the defaults.
    pub fn resolve(
        db_path: Option<PathBuf>,
        page_size: Option<i64>,
        log_level: Option<&str>,
    ) -> Result<Self, AppError> {
        let mut cfg = Self::default();
        if let Some(path) = db_path {
            cfg.db_path = path;
        }
        if let Some(size) = page_size {
            if size < 1 {
                return Err(AppError::Validation(format!(
                    "page size must be >= 1, got {}",
                    size
                )));
            }
            cfg.page_size = size;
        }
        if let Some(level) = log_level {
            cfg.log_level = parse_log_level(level)?;
        }
        Ok(cfg)
    }
}

pub fn app_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, AppError> {
    level.trim().parse::<LevelFilter>().map_err(|_| {
        AppError::Validation(format!(
            "Invalid log level: {}. Valid levels: OFF, ERROR, WARN, INFO, DEBUG, TRACE",
            level
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = AppConfig::resolve(None, None, None).unwrap();
        assert_eq!(cfg.page_size, 6);
        assert!(cfg.db_path.ends_with("com.drugrecords.app/app.db"));
    }

    #[test]
    fn overrides_apply() {
        let cfg = AppConfig::resolve(Some(PathBuf::from("/tmp/x.db")), Some(10), Some("debug"))
            .unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/x.db"));
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        assert_eq!(parse_log_level("WARN").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_log_level("loud").unwrap_err().code(), "VALIDATION_ERROR");
    }

    #[test]
    fn zero_page_size_rejected() {
        let err = AppConfig::resolve(None, Some(0), None).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
