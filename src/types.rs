use serde::{Deserialize, Serialize};

pub type ColorId = String;
pub type TagId = String;
pub type CategoryId = String;
pub type ProjectId = String;

/// Sentinel category/project id that matches every color.
pub const ALL_ID: &str = "all";

/// Label prefix marking a tag as project membership.
pub const PROJECT_PREFIX: &str = "project:";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

impl Tag {
    pub fn is_project(&self) -> bool {
        self.label.starts_with(PROJECT_PREFIX)
    }
}

/// A single swatch as delivered by the record source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub id: ColorId,
    pub hex_code: String,
    pub tags: Vec<Tag>,
}

impl ColorRecord {
    /// Tag labels with duplicates removed, in order of first appearance.
    pub fn distinct_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            if !labels.contains(&tag.label.as_str()) {
                labels.push(tag.label.as_str());
            }
        }
        labels
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.tags.iter().any(|tag| tag.label == label)
    }
}

/// A derived, counted grouping of colors shown as a chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: String,
    pub count: usize,
}

impl Category {
    pub fn is_all(&self) -> bool {
        self.id == ALL_ID
    }
}
