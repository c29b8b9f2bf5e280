/// Color filtering by category, project and free-text search.
use std::collections::HashSet;

use crate::types::{ALL_ID, ColorRecord};

/// Structural identity of a record: upper-cased hex plus its sorted distinct labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueKey {
    hex_code: String,
    labels: Vec<String>,
}

impl ValueKey {
    pub fn of(color: &ColorRecord) -> Self {
        let mut labels = color
            .distinct_labels()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        labels.sort();
        Self {
            hex_code: color.hex_code.to_ascii_uppercase(),
            labels,
        }
    }
}

/// Tracks records already emitted, by id and by value.
#[derive(Default)]
pub struct Dedup {
    ids: HashSet<String>,
    values: HashSet<ValueKey>,
}

impl Dedup {
    /// Returns `true` the first time a record is seen under either key.
    pub fn insert(&mut self, color: &ColorRecord) -> bool {
        let value = ValueKey::of(color);
        let id_seen = !color.id.is_empty() && self.ids.contains(&color.id);
        if id_seen || self.values.contains(&value) {
            return false;
        }
        if !color.id.is_empty() {
            self.ids.insert(color.id.clone());
        }
        self.values.insert(value);
        true
    }
}

/// Returns the colors matching all three predicates, deduplicated, in input order.
///
/// `None`, `""` and `"all"` for the category or project select everything.
/// The project is compared verbatim against tag labels, so callers pass the
/// `project:` prefixed form. The search is a case-insensitive substring match
/// against the hex code and every tag label.
pub fn filter_colors(
    colors: &[ColorRecord],
    selected_category: Option<&str>,
    selected_project: Option<&str>,
    search_query: &str,
) -> Vec<ColorRecord> {
    let category = active_selector(selected_category);
    let project = active_selector(selected_project);
    let query = search_query.to_lowercase();

    let mut dedup = Dedup::default();
    colors
        .iter()
        .filter(|color| category.is_none_or(|id| color.has_label(id)))
        .filter(|color| project.is_none_or(|id| color.has_label(id)))
        .filter(|color| matches_search(color, &query))
        .filter(|color| dedup.insert(color))
        .cloned()
        .collect()
}

/// Removes repeated records while keeping the first occurrence.
pub fn dedup_colors(colors: &[ColorRecord]) -> Vec<ColorRecord> {
    filter_colors(colors, None, None, "")
}

fn active_selector(selector: Option<&str>) -> Option<&str> {
    selector.filter(|id| !id.is_empty() && *id != ALL_ID)
}

fn matches_search(color: &ColorRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    color.hex_code.to_lowercase().contains(query)
        || color
            .tags
            .iter()
            .any(|tag| tag.label.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tag;

    fn color(id: &str, hex: &str, labels: &[&str]) -> ColorRecord {
        ColorRecord {
            id: id.to_string(),
            hex_code: hex.to_string(),
            tags: labels
                .iter()
                .map(|label| Tag {
                    id: format!("t-{label}"),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    fn sample() -> Vec<ColorRecord> {
        vec![
            color("1", "#FF0000", &["Primary", "Red"]),
            color("2", "#00FF00", &["Primary", "Green"]),
        ]
    }

    fn hexes(colors: &[ColorRecord]) -> Vec<&str> {
        colors.iter().map(|color| color.hex_code.as_str()).collect()
    }

    #[test]
    fn category_and_search_combine() {
        let result = filter_colors(&sample(), Some("Primary"), None, "green");
        assert_eq!(hexes(&result), vec!["#00FF00"]);
    }

    #[test]
    fn all_selectors_return_everything() {
        assert_eq!(filter_colors(&sample(), Some("all"), None, "").len(), 2);
        assert_eq!(filter_colors(&sample(), None, Some("all"), "").len(), 2);
        assert_eq!(filter_colors(&sample(), Some(""), Some(""), "").len(), 2);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(filter_colors(&[], Some("all"), None, "").is_empty());
    }

    #[test]
    fn search_matches_hex_case_insensitively() {
        let result = filter_colors(&sample(), None, None, "ff0000");
        assert_eq!(hexes(&result), vec!["#FF0000"]);
        let result = filter_colors(&sample(), None, None, "ff00");
        assert_eq!(hexes(&result), vec!["#FF0000", "#00FF00"]);
        let result = filter_colors(&sample(), None, None, "#00fF");
        assert_eq!(hexes(&result), vec!["#00FF00"]);
    }

    #[test]
    fn unknown_category_matches_nothing() {
        assert!(filter_colors(&sample(), Some("Blue"), None, "").is_empty());
    }

    #[test]
    fn project_is_compared_verbatim() {
        let colors = vec![
            color("1", "#111111", &["Chat", "project:alpha"]),
            color("2", "#222222", &["Chat", "project:beta"]),
        ];
        let result = filter_colors(&colors, Some("Chat"), Some("project:alpha"), "");
        assert_eq!(hexes(&result), vec!["#111111"]);
        assert!(filter_colors(&colors, None, Some("alpha"), "").is_empty());
    }

    #[test]
    fn repeated_ids_and_values_are_dropped() {
        let colors = vec![
            color("1", "#ABCDEF", &["Chat", "Info"]),
            color("1", "#ABCDEF", &["Chat", "Info"]),
            color("2", "#abcdef", &["Info", "Chat", "Info"]),
            color("1", "#000000", &["Other"]),
            color("3", "#ABCDEF", &["Chat"]),
        ];
        let result = filter_colors(&colors, None, None, "");
        let ids = result.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn records_without_id_dedup_by_value() {
        let colors = vec![
            color("", "#123456", &["A"]),
            color("", "#123456", &["A"]),
            color("", "#123456", &["B"]),
        ];
        assert_eq!(dedup_colors(&colors).len(), 2);
    }
}
