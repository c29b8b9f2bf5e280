/// Boundary mapping from loosely typed payloads into `ColorRecord` values.
///
/// Backends deliver colors as JSON objects shaped like
/// `{"id": "...", "hexCode": "#RRGGBB", "expand": {"tags": [{"id": "...", "tag": "Chat"}]}}`,
/// sometimes with `tags` inline as objects or plain strings. Nothing is
/// trusted as well-typed: every entry goes through [`map_record`], and a
/// malformed entry is skipped instead of failing the whole batch.
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::color::is_valid_hex;
use crate::types::{ColorRecord, Tag};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("record has no hex code")]
    MissingHex,
    #[error("invalid hex code: {0}")]
    InvalidHex(String),
    #[error("tags are not a sequence")]
    TagsNotSequence,
    #[error("tag at index {0} has no label")]
    MissingTagLabel(usize),
}

/// Result of mapping a batch: the valid records plus what was skipped and why.
#[derive(Debug, Default)]
pub struct MappedRecords {
    pub records: Vec<ColorRecord>,
    pub skipped: Vec<(usize, RecordError)>,
}

pub fn map_records(values: &[Value]) -> MappedRecords {
    let mut mapped = MappedRecords::default();
    for (index, value) in values.iter().enumerate() {
        match map_record(value) {
            Ok(record) => mapped.records.push(record),
            Err(err) => {
                warn!(index, %err, "skipping malformed color record");
                mapped.skipped.push((index, err));
            }
        }
    }
    mapped
}

pub fn map_record(value: &Value) -> Result<ColorRecord, RecordError> {
    let object = value.as_object().ok_or(RecordError::NotAnObject)?;

    let id = object.get("id").map(scalar_to_string).unwrap_or_default();
    let hex_code = object
        .get("hexCode")
        .or_else(|| object.get("hex_code"))
        .and_then(Value::as_str)
        .ok_or(RecordError::MissingHex)?;

    let tags = match tag_values(object) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| map_tag(index, item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(RecordError::TagsNotSequence),
    };

    validate_record(ColorRecord {
        id,
        hex_code: hex_code.trim().to_string(),
        tags,
    })
}

/// Checks a record that is already typed, e.g. one assembled from database rows.
pub fn validate_record(record: ColorRecord) -> Result<ColorRecord, RecordError> {
    if record.hex_code.is_empty() {
        return Err(RecordError::MissingHex);
    }
    if !is_valid_hex(&record.hex_code) {
        return Err(RecordError::InvalidHex(record.hex_code));
    }
    if let Some(index) = record.tags.iter().position(|tag| tag.label.trim().is_empty()) {
        return Err(RecordError::MissingTagLabel(index));
    }
    Ok(record)
}

// Expanded relations win over the raw `tags` field, which may only hold ids.
fn tag_values(object: &Map<String, Value>) -> Option<&Value> {
    object
        .get("expand")
        .and_then(|expand| expand.get("tags"))
        .or_else(|| object.get("tags"))
}

fn map_tag(index: usize, value: &Value) -> Result<Tag, RecordError> {
    match value {
        Value::String(label) => Ok(Tag {
            id: label.clone(),
            label: label.clone(),
        }),
        Value::Object(fields) => {
            let label = fields
                .get("tag")
                .or_else(|| fields.get("label"))
                .and_then(Value::as_str)
                .ok_or(RecordError::MissingTagLabel(index))?;
            let id = fields
                .get("id")
                .map(scalar_to_string)
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| label.to_string());
            Ok(Tag {
                id,
                label: label.to_string(),
            })
        }
        _ => Err(RecordError::MissingTagLabel(index)),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
