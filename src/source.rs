/// Record source: where color and project snapshots come from.
use std::rc::Rc;

use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

use crate::db;
use crate::theme::{ThemeMode, ThemeStore};
use crate::types::{ColorRecord, Tag};

pub trait RecordSource {
    fn fetch_colors(&self) -> Result<Vec<ColorRecord>>;
    fn fetch_project_tags(&self) -> Result<Vec<Tag>>;
}

/// Record source backed by the local SQLite database.
pub struct SqliteSource {
    conn: Rc<Connection>,
}

impl SqliteSource {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }
}

impl RecordSource for SqliteSource {
    fn fetch_colors(&self) -> Result<Vec<ColorRecord>> {
        let colors = db::query_colors(&self.conn)?;
        debug!(count = colors.len(), "fetched colors");
        Ok(colors)
    }

    fn fetch_project_tags(&self) -> Result<Vec<Tag>> {
        db::query_project_tags(&self.conn)
    }
}

/// Theme persistence in the `settings` table.
pub struct SqliteThemeStore {
    conn: Rc<Connection>,
}

impl SqliteThemeStore {
    pub fn new(conn: Rc<Connection>) -> Self {
        Self { conn }
    }
}

impl ThemeStore for SqliteThemeStore {
    fn get_persisted_theme(&self) -> Result<Option<ThemeMode>> {
        match db::query_setting(db::THEME_KEY, &self.conn)? {
            Some(value) => Ok(Some(value.parse()?)),
            None => Ok(None),
        }
    }

    fn set_persisted_theme(&self, mode: ThemeMode) -> Result<()> {
        db::update_setting(db::THEME_KEY, mode.as_str(), &self.conn)
    }
}
