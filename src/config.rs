/// Runtime settings resolved from CLI flags, environment and defaults.
use std::path::PathBuf;

use crate::cli::Cli;
use crate::db;
use crate::palette::{CategoryOptions, DEFAULT_ALL_LABEL, DEFAULT_TOP_CATEGORIES};

pub const DB_ENV: &str = "SWATCHBOOK_DB";
pub const LOG_ENV: &str = "SWATCHBOOK_LOG";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_level: String,
    pub categories: CategoryOptions,
}

impl Settings {
    pub fn resolve(cli: &Cli) -> Self {
        Self::resolve_with_env(cli, |key| std::env::var(key).ok())
    }

    /// Flags win over the environment, which wins over defaults.
    /// `--top 0` lifts the cap on ranked categories.
    pub fn resolve_with_env(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = cli
            .db
            .clone()
            .or_else(|| env(DB_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(db::default_db_path);
        let log_level = cli
            .log_level
            .clone()
            .or_else(|| env(LOG_ENV).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let top_n = match cli.top {
            Some(0) => None,
            Some(n) => Some(n),
            None => Some(DEFAULT_TOP_CATEGORIES),
        };
        let all_label = cli
            .all_label
            .clone()
            .unwrap_or_else(|| DEFAULT_ALL_LABEL.to_string());

        Self {
            db_path,
            log_level,
            categories: CategoryOptions { top_n, all_label },
        }
    }

    /// The log file lives next to the database.
    pub fn log_path(&self) -> PathBuf {
        match self.db_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join("swatchbook.log"),
            _ => PathBuf::from("swatchbook.log"),
        }
    }
}
