use std::rc::Rc;

use serde_json::json;

use swatchbook::db;
use swatchbook::palette::{self, CategoryOptions, record::map_records};
use swatchbook::source::{RecordSource, SqliteSource, SqliteThemeStore};
use swatchbook::theme::{ThemeContext, ThemeMode};

#[test]
fn imported_records_survive_a_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("palette.db");

    let payload = vec![
        json!({"id": "c1", "hexCode": "#ff5555", "tags": ["Chat", "Warning", "project:alpha"]}),
        json!({"id": "c2", "hexCode": "#55FF55", "expand": {"tags": [{"id": "t9", "tag": "Chat"}]}}),
        json!({"id": "c3", "tags": ["Info"]}),
        json!({"id": "c4", "hexCode": "#5555FF", "tags": "Info"}),
    ];
    let mapped = map_records(&payload);
    assert_eq!(mapped.records.len(), 2);
    assert_eq!(mapped.skipped.len(), 2);

    {
        let conn = db::init(&path).expect("init");
        for record in &mapped.records {
            assert!(db::import_color(record, &conn).expect("import"));
        }
        assert!(!db::import_color(&mapped.records[0], &conn).expect("reimport"));
    }

    let conn = Rc::new(db::init(&path).expect("reopen"));
    let source = SqliteSource::new(conn.clone());
    let colors = source.fetch_colors().expect("colors");
    assert_eq!(
        colors.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        vec!["c1", "c2"]
    );
    assert_eq!(colors[0].hex_code, "#ff5555");

    let vocabulary = palette::category_vocabulary(&colors);
    let categories = palette::derive_categories(
        &colors,
        Some(vocabulary.as_slice()),
        &CategoryOptions::default(),
    );
    let summary = categories
        .iter()
        .map(|c| (c.id.as_str(), c.count))
        .collect::<Vec<_>>();
    assert_eq!(summary, vec![("all", 2), ("Chat", 2), ("Warning", 1)]);

    let projects = source.fetch_project_tags().expect("projects");
    assert_eq!(projects.len(), 1);
    let alpha = palette::filter_colors(&colors, None, Some(projects[0].label.as_str()), "");
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].id, "c1");
}

#[test]
fn theme_choice_is_remembered() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("palette.db");

    {
        let conn = Rc::new(db::init(&path).expect("init"));
        let mut theme = ThemeContext::init(Box::new(SqliteThemeStore::new(conn)));
        assert_eq!(theme.get(), ThemeMode::Dark);
        assert_eq!(theme.toggle().expect("toggle"), ThemeMode::Light);
    }

    let conn = Rc::new(db::init(&path).expect("reopen"));
    let theme = ThemeContext::init(Box::new(SqliteThemeStore::new(conn)));
    assert_eq!(theme.get(), ThemeMode::Light);
}

#[test]
fn seeded_palette_is_filterable() {
    let conn = Rc::new(db::init_in_memory().expect("init"));
    let seeded = db::seed_if_empty(&conn).expect("seed");
    assert!(seeded > 0);

    let colors = SqliteSource::new(conn).fetch_colors().expect("colors");
    assert_eq!(colors.len(), seeded);
    let categories = palette::derive_categories(&colors, None, &CategoryOptions::default());
    assert_eq!(categories[0].count, seeded);
    assert!(categories.len() <= 6);
    assert!(palette::filter_colors(&colors, None, None, "zzzz-no-match").is_empty());
}
