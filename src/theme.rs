/// Light/dark theme state, persisted through an injected store.
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Where the chosen theme survives between runs.
pub trait ThemeStore {
    fn get_persisted_theme(&self) -> Result<Option<ThemeMode>>;
    fn set_persisted_theme(&self, mode: ThemeMode) -> Result<()>;
}

/// The active theme. Built once at startup and handed to whoever needs it.
pub struct ThemeContext {
    mode: ThemeMode,
    store: Box<dyn ThemeStore>,
}

impl ThemeContext {
    /// Reads the persisted theme once. A missing or unreadable value falls back to dark.
    pub fn init(store: Box<dyn ThemeStore>) -> Self {
        let mode = match store.get_persisted_theme() {
            Ok(Some(mode)) => mode,
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                warn!(%err, "failed to read persisted theme");
                ThemeMode::default()
            }
        };
        info!(theme = %mode, "theme initialised");
        Self { mode, store }
    }

    pub fn get(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        self.store.set_persisted_theme(mode)
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.set(next)?;
        Ok(next)
    }
}
