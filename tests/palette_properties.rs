use std::collections::HashSet;

use proptest::collection::vec;
use proptest::prelude::*;

use swatchbook::palette::{
    CategoryOptions, DEFAULT_TOP_CATEGORIES, ValueKey, derive_categories, filter_colors,
};
use swatchbook::types::{ALL_ID, ColorRecord, Tag};

const LABELS: &[&str] = &[
    "Chat", "GUI", "Info", "Warning", "Primary", "Red", "project:alpha", "project:beta",
];
const HEXES: &[&str] = &["#FF0000", "#00FF00", "#0000FF", "#ff0000", "#FFAA00"];
const IDS: &[&str] = &["", "a", "b", "c", "d", "e"];
const QUERIES: &[&str] = &["", "ff", "chat", "PROJECT", "#00"];
const NARROWING_QUERIES: &[&str] = &["ff", "chat", "alpha", "#0000"];

fn tag_strategy() -> impl Strategy<Value = Tag> {
    prop::sample::select(LABELS).prop_map(|label| Tag {
        id: format!("t-{label}"),
        label: label.to_string(),
    })
}

fn color_strategy() -> impl Strategy<Value = ColorRecord> {
    (
        prop::sample::select(IDS),
        prop::sample::select(HEXES),
        vec(tag_strategy(), 0..4),
    )
        .prop_map(|(id, hex, tags)| ColorRecord {
            id: id.to_string(),
            hex_code: hex.to_string(),
            tags,
        })
}

fn selector_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some(ALL_ID)),
        prop::sample::select(LABELS).prop_map(Some),
    ]
}

fn assert_no_duplicates(colors: &[ColorRecord]) {
    let mut ids = HashSet::new();
    let mut values = HashSet::new();
    for color in colors {
        if !color.id.is_empty() {
            assert!(ids.insert(color.id.clone()), "duplicate id {}", color.id);
        }
        assert!(values.insert(ValueKey::of(color)), "duplicate value {color:?}");
    }
}

proptest! {
    #[test]
    fn exactly_one_all_entry_counting_every_record(colors in vec(color_strategy(), 0..24)) {
        let categories = derive_categories(&colors, None, &CategoryOptions::default());
        let all = categories.iter().filter(|c| c.id == ALL_ID).collect::<Vec<_>>();
        prop_assert_eq!(all.len(), 1);
        prop_assert_eq!(all[0].count, colors.len());
        prop_assert_eq!(categories[0].id.as_str(), ALL_ID);
    }

    #[test]
    fn ranked_categories_are_non_empty_sorted_and_capped(colors in vec(color_strategy(), 0..24)) {
        let categories = derive_categories(&colors, None, &CategoryOptions::default());
        let ranked = &categories[1..];
        prop_assert!(ranked.len() <= DEFAULT_TOP_CATEGORIES);
        for category in ranked {
            prop_assert!(category.count > 0);
        }
        for pair in ranked.windows(2) {
            let ordered = pair[0].count > pair[1].count
                || (pair[0].count == pair[1].count && pair[0].id < pair[1].id);
            prop_assert!(ordered, "{:?} before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn filter_output_is_a_duplicate_free_subset(
        colors in vec(color_strategy(), 0..24),
        category in selector_strategy(),
        project in selector_strategy(),
        query in prop::sample::select(QUERIES),
    ) {
        let filtered = filter_colors(&colors, category, project, query);
        for color in &filtered {
            prop_assert!(colors.contains(color));
        }
        assert_no_duplicates(&filtered);
    }

    #[test]
    fn selecting_all_keeps_every_distinct_record(colors in vec(color_strategy(), 0..24)) {
        let filtered = filter_colors(&colors, Some(ALL_ID), None, "");
        let kept_ids = filtered.iter().map(|c| c.id.as_str()).collect::<HashSet<_>>();
        let kept_values = filtered.iter().map(ValueKey::of).collect::<HashSet<_>>();
        for color in &colors {
            let represented = (!color.id.is_empty() && kept_ids.contains(color.id.as_str()))
                || kept_values.contains(&ValueKey::of(color));
            prop_assert!(represented, "{color:?} was dropped");
        }
    }

    #[test]
    fn adding_predicates_never_grows_the_result(
        colors in vec(color_strategy(), 0..24),
        category in selector_strategy(),
        project in selector_strategy(),
        query in prop::sample::select(NARROWING_QUERIES),
    ) {
        let category_only = filter_colors(&colors, category, None, "");
        let with_project = filter_colors(&colors, category, project, "");
        let with_search = filter_colors(&colors, category, project, query);
        prop_assert!(category_only.len() >= with_project.len());
        prop_assert!(with_project.len() >= with_search.len());
    }
}

fn color(hex: &str, labels: &[&str]) -> ColorRecord {
    ColorRecord {
        id: String::new(),
        hex_code: hex.to_string(),
        tags: labels
            .iter()
            .map(|label| Tag {
                id: String::new(),
                label: label.to_string(),
            })
            .collect(),
    }
}

#[test]
fn primary_red_green_example() {
    let colors = vec![
        color("#FF0000", &["Primary", "Red"]),
        color("#00FF00", &["Primary", "Green"]),
    ];
    let categories = derive_categories(&colors, None, &CategoryOptions::default());
    let summary = categories
        .iter()
        .map(|c| (c.id.as_str(), c.count))
        .collect::<Vec<_>>();
    assert_eq!(
        summary,
        vec![("all", 2), ("Primary", 2), ("Green", 1), ("Red", 1)]
    );

    let filtered = filter_colors(&colors, Some("Primary"), None, "green");
    assert_eq!(filtered, vec![colors[1].clone()]);
}

#[test]
fn empty_palette_is_an_empty_result() {
    assert!(filter_colors(&[], Some(ALL_ID), None, "").is_empty());
}

#[test]
fn repeated_tag_counts_once() {
    let colors = vec![color("#FF0000", &["Primary", "Primary"])];
    let categories = derive_categories(&colors, None, &CategoryOptions::default());
    assert_eq!(categories[1].id, "Primary");
    assert_eq!(categories[1].count, 1);
}
