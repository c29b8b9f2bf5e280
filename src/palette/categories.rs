/// Category derivation: counts, ranking and display names for the chip bar.
use std::collections::{HashMap, HashSet};

use crate::types::{ALL_ID, Category, CategoryId, ColorRecord, PROJECT_PREFIX};

/// Number of ranked categories shown next to `all` unless configured otherwise.
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

pub const DEFAULT_ALL_LABEL: &str = "All Colors";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptions {
    /// Maximum number of non-`all` categories. `None` keeps every non-empty one.
    pub top_n: Option<usize>,
    pub all_label: String,
}

impl Default for CategoryOptions {
    fn default() -> Self {
        Self {
            top_n: Some(DEFAULT_TOP_CATEGORIES),
            all_label: DEFAULT_ALL_LABEL.to_string(),
        }
    }
}

/// Derives `[all, ...ranked]` from the color set.
///
/// Without a `vocabulary` every distinct tag label is a candidate. Candidates
/// are counted by membership (a label repeated on one record counts once),
/// empty ones are dropped, and the rest are ranked by count descending with
/// ties broken by id ascending before truncation to `options.top_n`.
pub fn derive_categories(
    colors: &[ColorRecord],
    vocabulary: Option<&[CategoryId]>,
    options: &CategoryOptions,
) -> Vec<Category> {
    let counts = label_counts(colors);

    let candidates: HashSet<&str> = match vocabulary {
        Some(ids) => ids.iter().map(String::as_str).collect(),
        None => counts.keys().copied().collect(),
    };

    let mut ranked = candidates
        .into_iter()
        .filter(|id| *id != ALL_ID)
        .filter_map(|id| {
            let count = counts.get(id).copied().unwrap_or(0);
            (count > 0).then_some((id, count))
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|(a_id, a_count), (b_id, b_count)| {
        b_count.cmp(a_count).then_with(|| a_id.cmp(b_id))
    });
    if let Some(limit) = options.top_n {
        ranked.truncate(limit);
    }

    let mut categories = Vec::with_capacity(ranked.len() + 1);
    categories.push(Category {
        id: ALL_ID.to_string(),
        display_name: options.all_label.clone(),
        count: colors.len(),
    });
    categories.extend(ranked.into_iter().map(|(id, count)| Category {
        id: id.to_string(),
        display_name: title_case(id),
        count,
    }));
    categories
}

/// Distinct non-project labels across `colors`, for use as a category vocabulary.
pub fn category_vocabulary(colors: &[ColorRecord]) -> Vec<CategoryId> {
    let mut seen = HashSet::new();
    let mut vocabulary = Vec::new();
    for color in colors {
        for label in color.distinct_labels() {
            if label.starts_with(PROJECT_PREFIX) {
                continue;
            }
            if seen.insert(label) {
                vocabulary.push(label.to_string());
            }
        }
    }
    vocabulary
}

fn label_counts(colors: &[ColorRecord]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for color in colors {
        for label in color.distinct_labels() {
            *counts.entry(label).or_insert(0) += 1;
        }
    }
    counts
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// Words are delimited by whitespace or punctuation, which is kept as is.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() || ch.is_ascii_punctuation() {
            result.push(ch);
            word_start = true;
        } else if word_start {
            result.extend(ch.to_uppercase());
            word_start = false;
        } else {
            result.extend(ch.to_lowercase());
        }
    }
    result
}
