mod categories;
mod help;
mod helpers;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppView};
use theme::Theme;

const SEARCH_PLACEHOLDER: &str = "Search by hex code or tags (e.g. Chat, GUI, Info, Warning)...";

/// Swatch columns that fit a terminal `width` cells wide.
pub fn grid_columns(width: u16) -> usize {
    swatches::columns_for(width.saturating_sub(2))
}

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::new(app.theme_mode());
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(swatches::SWATCH_HEIGHT + 2),
            Constraint::Length(3),
        ])
        .split(area);

    let header = Paragraph::new(Text::from(header_line(app, theme)))
        .alignment(Alignment::Left)
        .block(panel(theme));
    frame.render_widget(header, layout[0]);

    let filters = Paragraph::new(Text::from(vec![
        search_line(app, theme),
        categories::category_line(app, theme),
        categories::project_line(app, theme),
    ]))
    .block(panel(theme).title(" Filters "));
    frame.render_widget(filters, layout[1]);

    match app.view {
        AppView::Palette => {
            let title = format!(" Colors ({}) ", app.filtered.len());
            let block = panel(theme).title(title);
            let inner = block.inner(layout[2]);
            frame.render_widget(block, layout[2]);
            swatches::render_grid(frame, inner, app, theme);
        }
        AppView::Help => {
            let body = Paragraph::new(help::build_help_text(theme))
                .style(Style::default().fg(theme.text()))
                .alignment(Alignment::Left)
                .block(panel(theme).title(" Help "));
            frame.render_widget(body, layout[2]);
        }
    }

    let footer = Paragraph::new(Text::from(footer_line(app, theme)))
        .alignment(Alignment::Left)
        .block(panel(theme));
    frame.render_widget(footer, layout[3]);
}

fn panel(theme: Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(theme.secondary()).bg(theme.background()))
}

fn header_line(app: &App, theme: Theme) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            "  Color Palette  ",
            Style::default()
                .fg(Color::Black)
                .bg(theme.primary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            "Pick a swatch and press Enter to copy its hex code",
            Style::default().fg(theme.dim()),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{} theme]", app.theme_mode()),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn search_line(app: &App, theme: Theme) -> Line<'_> {
    let mut spans = vec![Span::styled(
        "  Search: ",
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD),
    )];
    if app.search_active {
        spans.push(Span::styled(
            app.search_query.as_str(),
            Style::default().fg(theme.text()),
        ));
        spans.push(Span::styled("_", Style::default().fg(theme.highlight())));
    } else if app.search_query.is_empty() {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(theme.dim()),
        ));
    } else {
        spans.push(Span::styled(
            app.search_query.as_str(),
            Style::default().fg(theme.text()),
        ));
        spans.push(Span::styled(
            "  (/ to edit, esc to clear)",
            Style::default().fg(theme.dim()),
        ));
    }
    Line::from(spans)
}

fn footer_line(app: &App, theme: Theme) -> Line<'_> {
    let summary = match &app.status {
        Some(status) => Span::styled(status.as_str(), Style::default().fg(theme.accent())),
        None => Span::styled(
            format!(
                "{} of {} colors",
                app.filtered.len(),
                app.colors.len()
            ),
            Style::default().fg(theme.text()),
        ),
    };
    let hints = if app.search_active {
        "type: Filter  Enter: Keep  esc: Clear"
    } else {
        "Tab: Category  p: Project  /: Search  Enter: Copy  t: Theme  ?: Help  q: Quit"
    };
    Line::from(vec![
        Span::raw("  "),
        summary,
        Span::raw("   "),
        Span::styled(hints, Style::default().fg(theme.dim())),
    ])
}
