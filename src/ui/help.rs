use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(theme, "Global"));
    lines.extend(section_lines(
        theme,
        &[
            "q: Quit",
            "?: Toggle help",
            "t: Toggle light/dark theme",
            "r: Reload colors",
            "esc: Close help or clear search",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Palette"));
    lines.extend(section_lines(
        theme,
        &[
            "Arrows: Move between swatches",
            "Home/End: First/last swatch",
            "Enter or c: Copy hex code to clipboard",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Filters"));
    lines.extend(section_lines(
        theme,
        &[
            "Tab/Shift+Tab: Next/previous category (clears search)",
            "p/P: Next/previous project",
            "/: Search by hex code or tag",
        ],
    ));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Search"));
    lines.extend(section_lines(
        theme,
        &[
            "Type to filter as you go",
            "Enter: Keep query",
            "Esc: Clear query",
        ],
    ));

    Text::from(lines)
}

fn section_title(theme: Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(theme: Theme, items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
