use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::Theme;
use crate::app::App;
use crate::palette::title_case;
use crate::types::PROJECT_PREFIX;

/// Category chips, e.g. ` All Colors 51 ` followed by the ranked tags.
pub fn category_line(app: &App, theme: Theme) -> Line<'_> {
    let mut spans = vec![Span::styled("  ", Style::default())];
    for (index, category) in app.categories.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let active = category.id == app.selected_category;
        let (name_style, count_style) = if active {
            let style = Style::default()
                .fg(theme.on_highlight())
                .bg(theme.highlight())
                .add_modifier(Modifier::BOLD);
            (style, style)
        } else {
            (
                Style::default().fg(theme.text()),
                Style::default().fg(theme.accent()),
            )
        };
        spans.push(Span::styled(format!(" {} ", category.display_name), name_style));
        spans.push(Span::styled(format!("{} ", category.count), count_style));
        if category.is_all() && app.categories.len() > 1 {
            spans.push(Span::styled(" |", Style::default().fg(theme.dim())));
        }
    }
    Line::from(spans)
}

/// Project selector: `All` plus every project tag, without the label prefix.
pub fn project_line(app: &App, theme: Theme) -> Line<'_> {
    let mut spans = vec![Span::styled(
        "  Project: ",
        Style::default().fg(theme.dim()),
    )];
    if app.project_tags.is_empty() {
        spans.push(Span::styled("none", Style::default().fg(theme.dim())));
        return Line::from(spans);
    }
    for (index, option) in app.project_options().into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let name = option
            .as_deref()
            .map(project_display_name)
            .unwrap_or_else(|| "All".to_string());
        let style = if option == app.selected_project {
            Style::default()
                .fg(theme.selection_marker())
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dim())
        };
        spans.push(Span::styled(name, style));
    }
    Line::from(spans)
}

pub fn project_display_name(label: &str) -> String {
    title_case(label.strip_prefix(PROJECT_PREFIX).unwrap_or(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_names_drop_prefix() {
        assert_eq!(project_display_name("project:alpha"), "Alpha");
        assert_eq!(project_display_name("project:dark mode"), "Dark Mode");
        assert_eq!(project_display_name("misc"), "Misc");
    }
}
