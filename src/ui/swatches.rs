use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{clamp_name, hex_to_color};
use super::theme::Theme;
use crate::app::App;
use crate::color::contrast_color;
use crate::palette::title_case;
use crate::types::ColorRecord;

/// Width of one grid cell, including the gap to its right neighbour.
pub const SWATCH_WIDTH: u16 = 22;
pub const SWATCH_HEIGHT: u16 = 6;

/// Number of swatches that fit side by side in `width` cells.
pub fn columns_for(width: u16) -> usize {
    usize::from((width / SWATCH_WIDTH).max(1))
}

/// First grid row to draw so that `selected_row` stays on screen.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    }
}

pub fn render_grid(frame: &mut Frame, area: Rect, app: &App, theme: Theme) {
    if app.filtered.is_empty() {
        let empty = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No colors found matching your search",
                Style::default().fg(theme.dim()),
            )),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let columns = columns_for(area.width);
    let visible_rows = usize::from(area.height / SWATCH_HEIGHT);
    let first_row = first_visible_row(app.selected_swatch_index / columns, visible_rows);

    for (index, color) in app.filtered.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows.max(1) {
            break;
        }
        let col = index % columns;
        let cell = Rect {
            x: area.x + col as u16 * SWATCH_WIDTH,
            y: area.y + row as u16 * SWATCH_HEIGHT,
            width: SWATCH_WIDTH - 1,
            height: SWATCH_HEIGHT,
        }
        .intersection(area);
        if cell.is_empty() {
            continue;
        }
        let selected = index == app.selected_swatch_index;
        let copied = app.is_recently_copied(color);
        frame.render_widget(swatch(color, selected, copied, theme), cell);
    }
}

fn swatch(color: &ColorRecord, selected: bool, copied: bool, theme: Theme) -> Paragraph<'_> {
    let background = hex_to_color(&color.hex_code).unwrap_or(theme.dim());
    let foreground = hex_to_color(contrast_color(&color.hex_code)).unwrap_or(theme.text());
    let inner_width = usize::from(SWATCH_WIDTH - 3);

    let tags = color
        .distinct_labels()
        .into_iter()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![Line::from(Span::styled(
        color.hex_code.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !tags.is_empty() {
        lines.push(Line::from(tags));
    }
    if copied {
        lines.push(Line::from(Span::styled(
            clamp_name("Copied!", inner_width),
            Style::default().add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )));
    }

    let block = if selected {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(
                Style::default()
                    .fg(theme.highlight())
                    .add_modifier(Modifier::BOLD),
            )
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(foreground))
    };

    Paragraph::new(Text::from(lines))
        .style(Style::default().fg(foreground).bg(background))
        .wrap(Wrap { trim: true })
        .block(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_at_least_one_column() {
        assert_eq!(columns_for(0), 1);
        assert_eq!(columns_for(SWATCH_WIDTH - 1), 1);
        assert_eq!(columns_for(SWATCH_WIDTH * 4 + 3), 4);
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(3, 3), 1);
        assert_eq!(first_visible_row(9, 0), 9);
    }
}
