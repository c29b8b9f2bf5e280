/// Tag database queries.
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

use crate::types::{PROJECT_PREFIX, Tag, TagId};

use super::new_record_id;

pub fn create_tag(label: &str, conn: &Connection) -> Result<TagId> {
    let id = new_record_id();
    conn.execute(
        "INSERT INTO tags (id, label) VALUES (?1, ?2)",
        (&id, label),
    )?;
    Ok(id)
}

pub fn query_tag_id(label: &str, conn: &Connection) -> Result<Option<TagId>> {
    let id = conn
        .query_row("SELECT id FROM tags WHERE label = ?1", [label], |row| row.get(0))
        .optional()?;
    Ok(id)
}

/// Returns the id of the tag with `label`, creating the tag when it is new.
/// `preferred_id` is used for a new tag unless it is empty or already taken.
pub fn ensure_tag(label: &str, preferred_id: Option<&str>, conn: &Connection) -> Result<TagId> {
    if let Some(id) = query_tag_id(label, conn)? {
        return Ok(id);
    }
    let Some(preferred) = preferred_id.filter(|id| !id.is_empty()) else {
        return create_tag(label, conn);
    };
    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM tags WHERE id = ?1)",
        [preferred],
        |row| row.get(0),
    )?;
    if taken {
        return create_tag(label, conn);
    }
    conn.execute(
        "INSERT INTO tags (id, label) VALUES (?1, ?2)",
        (preferred, label),
    )?;
    Ok(preferred.to_string())
}

pub fn query_tags(conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare("SELECT id, label FROM tags ORDER BY label")?;
    let rows = stmt.query_map([], |row| {
        Ok(Tag {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;
    let mut tags = Vec::new();
    for row in rows {
        tags.push(row?);
    }
    Ok(tags)
}

/// Tags whose label carries the `project:` prefix.
pub fn query_project_tags(conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt =
        conn.prepare("SELECT id, label FROM tags WHERE substr(label, 1, ?1) = ?2 ORDER BY label")?;
    let rows = stmt.query_map((PROJECT_PREFIX.len() as i64, PROJECT_PREFIX), |row| {
        Ok(Tag {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;
    let mut tags = Vec::new();
    for row in rows {
        tags.push(row?);
    }
    Ok(tags)
}

pub fn query_tags_for_color(color_id: &str, conn: &Connection) -> Result<Vec<Tag>> {
    let mut stmt = conn.prepare(
        "
        SELECT t.id, t.label
        FROM color_tags ct
        JOIN tags t ON t.id = ct.tag_id
        WHERE ct.color_id = ?1
        ORDER BY ct.position",
    )?;
    let rows = stmt.query_map([color_id], |row| {
        Ok(Tag {
            id: row.get(0)?,
            label: row.get(1)?,
        })
    })?;
    let mut tags = Vec::new();
    for row in rows {
        tags.push(row?);
    }
    Ok(tags)
}
