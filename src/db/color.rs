/// Color database queries, including the color -> tags expansion.
use anyhow::Result;
use chrono::Local;
use rusqlite::Connection;
use tracing::warn;

use crate::palette::record::validate_record;
use crate::types::{ColorId, ColorRecord};

use super::new_record_id;
use super::tag::{ensure_tag, query_tags_for_color};

/// Inserts a color with the given tag labels; unknown labels become new tags.
pub fn create_color(hex_code: &str, labels: &[String], conn: &Connection) -> Result<ColorId> {
    let tx = conn.unchecked_transaction()?;
    let id = insert_color(hex_code, labels, &tx)?;
    tx.commit()?;
    Ok(id)
}

/// Inserts without a transaction of its own; callers that batch inserts
/// provide one.
pub(crate) fn insert_color(hex_code: &str, labels: &[String], conn: &Connection) -> Result<ColorId> {
    let id = new_record_id();
    conn.execute(
        "INSERT INTO colors (id, hex_code, created_at) VALUES (?1, ?2, ?3)",
        (&id, hex_code, Local::now().to_rfc3339()),
    )?;
    for (position, label) in labels.iter().enumerate() {
        let tag_id = ensure_tag(label, None, conn)?;
        conn.execute(
            "INSERT INTO color_tags (color_id, tag_id, position) VALUES (?1, ?2, ?3)",
            (&id, &tag_id, position as i64),
        )?;
    }
    Ok(id)
}

/// Stores an already mapped record, keeping its ids where they are free.
/// Returns `false` when a color with the same id already exists.
pub fn import_color(record: &ColorRecord, conn: &Connection) -> Result<bool> {
    let id = if record.id.is_empty() {
        new_record_id()
    } else {
        if check_color_exists(&record.id, conn)? {
            return Ok(false);
        }
        record.id.clone()
    };

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO colors (id, hex_code, created_at) VALUES (?1, ?2, ?3)",
        (&id, &record.hex_code, Local::now().to_rfc3339()),
    )?;
    for (position, tag) in record.tags.iter().enumerate() {
        let tag_id = ensure_tag(&tag.label, Some(&tag.id), &tx)?;
        tx.execute(
            "INSERT INTO color_tags (color_id, tag_id, position) VALUES (?1, ?2, ?3)",
            (&id, &tag_id, position as i64),
        )?;
    }
    tx.commit()?;
    Ok(true)
}

pub fn check_color_exists(id: &str, conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT COUNT(*) FROM colors WHERE id = ?1")?;
    let count: i64 = stmt.query_row([id], |row| row.get(0))?;
    Ok(count > 0)
}

pub fn delete_color(id: &str, conn: &Connection) -> Result<bool> {
    conn.execute("DELETE FROM color_tags WHERE color_id = ?1", [id])?;
    let removed = conn.execute("DELETE FROM colors WHERE id = ?1", [id])?;
    Ok(removed > 0)
}

pub fn count_colors(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM colors", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Loads every color with its tags expanded in stored order.
/// Rows that fail validation are logged and left out.
pub fn query_colors(conn: &Connection) -> Result<Vec<ColorRecord>> {
    let mut stmt = conn.prepare("SELECT id, hex_code FROM colors ORDER BY created_at, rowid")?;
    let rows = stmt.query_map([], |row| {
        Ok(ColorRecord {
            id: row.get(0)?,
            hex_code: row.get(1)?,
            tags: Vec::new(),
        })
    })?;
    let mut colors = Vec::new();
    for row in rows {
        let mut color = row?;
        color.tags = query_tags_for_color(&color.id, conn)?;
        match validate_record(color) {
            Ok(color) => colors.push(color),
            Err(err) => warn!(%err, "skipping malformed color row"),
        }
    }
    Ok(colors)
}
