/// Database module with color, tag and settings queries and migrations.
mod color;
mod migrations;
mod seed;
mod settings;
mod tag;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rand::RngExt;
use rusqlite::Connection;

// Re-export all public functions
pub use color::{
    check_color_exists, count_colors, create_color, delete_color, import_color, query_colors,
};
pub use seed::seed_if_empty;
pub use settings::{THEME_KEY, query_setting, update_setting};
pub use tag::{create_tag, ensure_tag, query_project_tags, query_tag_id, query_tags};

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(db_path)?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

pub fn init_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the default database path inside the user's data directory.
/// Falls back to `./swatchbook.db` when no data dir is found.
pub fn default_db_path() -> PathBuf {
    match data_dir() {
        Some(dir) => dir.join("swatchbook.db"),
        None => PathBuf::from("swatchbook.db"),
    }
}

/// `<data_local_dir>/swatchbook`, if the platform has one.
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("swatchbook"))
}

/// Random 15 character id in the style of hosted record stores.
pub(crate) fn new_record_id() -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..15)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_ids_have_expected_shape() {
        let id = new_record_id();
        assert_eq!(id.len(), 15);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_ne!(id, new_record_id());
    }

    #[test]
    fn colors_round_trip_with_tags_in_order() {
        let conn = init_in_memory().expect("init");
        let labels = vec!["Chat".to_string(), "project:alpha".to_string(), "Chat".to_string()];
        let id = create_color("#2196F3", &labels, &conn).expect("create");

        let colors = query_colors(&conn).expect("query");
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].id, id);
        let stored = colors[0].tags.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
        assert_eq!(stored, vec!["Chat", "project:alpha", "Chat"]);
        assert_eq!(query_tags(&conn).expect("tags").len(), 2);
    }

    #[test]
    fn project_tags_are_prefixed_only() {
        let conn = init_in_memory().expect("init");
        create_color("#111111", &["GUI".to_string(), "project:beta".to_string()], &conn)
            .expect("create");
        create_color("#222222", &["project:alpha".to_string()], &conn).expect("create");
        let projects = query_project_tags(&conn).expect("projects");
        let labels = projects.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["project:alpha", "project:beta"]);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let conn = init_in_memory().expect("init");
        create_color("#111111", &["GUI".to_string()], &conn).expect("create");
        conn.execute(
            "INSERT INTO colors (id, hex_code, created_at) VALUES ('bad', 'blue', '2026-01-01T00:00:00+00:00')",
            [],
        )
        .expect("insert bad row");
        let colors = query_colors(&conn).expect("query");
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].hex_code, "#111111");
    }

    #[test]
    fn import_keeps_ids_and_skips_existing() {
        use crate::types::{ColorRecord, Tag};

        let conn = init_in_memory().expect("init");
        let record = ColorRecord {
            id: "c1".to_string(),
            hex_code: "#ABCDEF".to_string(),
            tags: vec![Tag {
                id: "t1".to_string(),
                label: "Chat".to_string(),
            }],
        };
        assert!(import_color(&record, &conn).expect("import"));
        assert!(!import_color(&record, &conn).expect("reimport"));
        assert_eq!(query_tag_id("Chat", &conn).expect("tag"), Some("t1".to_string()));
        assert!(delete_color("c1", &conn).expect("delete"));
        assert!(!check_color_exists("c1", &conn).expect("exists"));
    }

    #[test]
    fn settings_upsert() {
        let conn = init_in_memory().expect("init");
        assert_eq!(query_setting(THEME_KEY, &conn).expect("read"), None);
        update_setting(THEME_KEY, "light", &conn).expect("write");
        update_setting(THEME_KEY, "dark", &conn).expect("overwrite");
        assert_eq!(
            query_setting(THEME_KEY, &conn).expect("read"),
            Some("dark".to_string())
        );
    }

    #[test]
    fn file_database_is_created() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("swatchbook.db");
        init(&path).expect("init");
        assert!(path.exists());
    }
}
