use chrono::{DateTime, Duration, Local};
use crossterm::event::KeyCode;
use tracing::warn;

use crate::clipboard::ClipboardSink;
use crate::palette::{self, CategoryOptions};
use crate::source::RecordSource;
use crate::theme::{ThemeContext, ThemeMode};
use crate::types::{ALL_ID, Category, CategoryId, ColorRecord, ProjectId, Tag};

use super::{AppEvent, AppView};

/// How long the "Copied!" marker stays on a swatch.
const COPIED_MARKER_SECONDS: i64 = 2;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    source: Box<dyn RecordSource>,
    clipboard: Box<dyn ClipboardSink>,
    pub theme: ThemeContext,
    pub category_options: CategoryOptions,
    pub colors: Vec<ColorRecord>,
    pub project_tags: Vec<Tag>,
    pub categories: Vec<Category>,
    pub filtered: Vec<ColorRecord>,
    pub selected_category: CategoryId,
    pub selected_project: Option<ProjectId>,
    pub search_query: String,
    pub search_active: bool,
    pub selected_swatch_index: usize,
    pub grid_columns: usize,
    /// The swatch copied last and when. Hex codes repeat, so the whole record is kept.
    pub copied: Option<(ColorRecord, DateTime<Local>)>,
    pub status: Option<String>,
}

impl App {
    pub fn new(
        source: Box<dyn RecordSource>,
        clipboard: Box<dyn ClipboardSink>,
        theme: ThemeContext,
        category_options: CategoryOptions,
    ) -> Self {
        let mut app = Self {
            running: true,
            view: AppView::Palette,
            source,
            clipboard,
            theme,
            category_options,
            colors: Vec::new(),
            project_tags: Vec::new(),
            categories: Vec::new(),
            filtered: Vec::new(),
            selected_category: ALL_ID.to_string(),
            selected_project: None,
            search_query: String::new(),
            search_active: false,
            selected_swatch_index: 0,
            grid_columns: 1,
            copied: None,
            status: None,
        };

        app.load_snapshot();

        app
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.expire_copied_marker(Local::now()),
            AppEvent::KeyPress(key) => self.handle_key(key),
            AppEvent::Resize(columns) => self.set_grid_columns(columns),
            AppEvent::Quit => self.running = false,
        }
    }

    pub fn set_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns.max(1);
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn selected_color(&self) -> Option<&ColorRecord> {
        self.filtered.get(self.selected_swatch_index)
    }

    /// `true` while the "Copied!" marker should show on `color`.
    pub fn is_recently_copied(&self, color: &ColorRecord) -> bool {
        self.copied.as_ref().is_some_and(|(copied, _)| copied == color)
    }

    /// `None` followed by every project label, in the order `p` cycles through them.
    pub fn project_options(&self) -> Vec<Option<ProjectId>> {
        let mut options = vec![None];
        options.extend(self.project_tags.iter().map(|tag| Some(tag.label.clone())));
        options
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.search_active {
            self.handle_search_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('?') => {
                self.view = match self.view {
                    AppView::Help => AppView::Palette,
                    AppView::Palette => AppView::Help,
                };
            }
            KeyCode::Esc => {
                if self.view == AppView::Help {
                    self.view = AppView::Palette;
                } else if !self.search_query.is_empty() {
                    self.search_query.clear();
                    self.recompute();
                }
                self.clear_status();
            }
            _ if self.view == AppView::Help => {}
            KeyCode::Char('/') => self.search_active = true,
            KeyCode::Tab => self.cycle_category(true),
            KeyCode::BackTab => self.cycle_category(false),
            KeyCode::Char('p') => self.cycle_project(true),
            KeyCode::Char('P') => self.cycle_project(false),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => self.load_snapshot(),
            KeyCode::Enter | KeyCode::Char('c') => self.copy_selected(),
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => self.move_selection(-(self.grid_columns as isize)),
            KeyCode::Down => self.move_selection(self.grid_columns as isize),
            KeyCode::Home => self.selected_swatch_index = 0,
            KeyCode::End => {
                self.selected_swatch_index = self.filtered.len().saturating_sub(1);
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.search_active = false;
                self.search_query.clear();
                self.recompute();
            }
            KeyCode::Enter => self.search_active = false,
            KeyCode::Backspace | KeyCode::Delete => {
                self.search_query.pop();
                self.recompute();
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return;
                }
                self.search_query.push(ch);
                self.recompute();
            }
            _ => {}
        }
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    /// Refetches colors and projects. A failed fetch keeps the previous snapshot.
    fn load_snapshot(&mut self) {
        match self.source.fetch_colors() {
            Ok(colors) => {
                self.colors = palette::dedup_colors(&colors);
                self.clear_status();
            }
            Err(err) => {
                warn!(%err, "failed to fetch colors");
                self.status = Some(format!("Failed to load colors: {err}"));
            }
        }
        match self.source.fetch_project_tags() {
            Ok(tags) => self.project_tags = tags,
            Err(err) => {
                warn!(%err, "failed to fetch project tags");
                self.status = Some(format!("Failed to load projects: {err}"));
            }
        }
        self.recompute();
    }

    /// Rebuilds the chips and the grid from the current snapshot and selection.
    fn recompute(&mut self) {
        let vocabulary = palette::category_vocabulary(&self.colors);
        self.categories = palette::derive_categories(
            &self.colors,
            Some(vocabulary.as_slice()),
            &self.category_options,
        );

        if !self.categories.iter().any(|c| c.id == self.selected_category) {
            self.selected_category = ALL_ID.to_string();
        }
        let project_known = self
            .selected_project
            .as_ref()
            .is_none_or(|project| self.project_tags.iter().any(|tag| &tag.label == project));
        if !project_known {
            self.selected_project = None;
        }

        self.filtered = palette::filter_colors(
            &self.colors,
            Some(self.selected_category.as_str()),
            self.selected_project.as_deref(),
            &self.search_query,
        );
        if self.selected_swatch_index >= self.filtered.len() {
            self.selected_swatch_index = self.filtered.len().saturating_sub(1);
        }
    }

    /// Selecting a category starts a fresh search.
    fn select_category(&mut self, id: CategoryId) {
        self.selected_category = id;
        self.search_query.clear();
        self.selected_swatch_index = 0;
        self.recompute();
    }

    fn cycle_category(&mut self, forward: bool) {
        if self.categories.is_empty() {
            return;
        }
        let current = self
            .categories
            .iter()
            .position(|c| c.id == self.selected_category)
            .unwrap_or(0);
        let next = cycle_index(current, self.categories.len(), forward);
        let id = self.categories[next].id.clone();
        self.select_category(id);
    }

    fn cycle_project(&mut self, forward: bool) {
        let options = self.project_options();
        let current = options
            .iter()
            .position(|option| *option == self.selected_project)
            .unwrap_or(0);
        let next = cycle_index(current, options.len(), forward);
        self.selected_project = options[next].clone();
        self.selected_swatch_index = 0;
        self.recompute();
    }

    fn move_selection(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        let target = self.selected_swatch_index as isize + delta;
        self.selected_swatch_index = target.clamp(0, last as isize) as usize;
    }

    fn copy_selected(&mut self) {
        let Some(color) = self.selected_color().cloned() else {
            self.status = Some("No color selected.".to_string());
            return;
        };
        match self.clipboard.copy_to_clipboard(&color.hex_code) {
            Ok(()) => {
                self.status = Some(format!("Copied {} to clipboard.", color.hex_code));
                self.copied = Some((color, Local::now()));
            }
            Err(err) => {
                warn!(%err, "clipboard copy failed");
                self.status = Some(format!("Copy failed: {err}"));
            }
        }
    }

    fn expire_copied_marker(&mut self, now: DateTime<Local>) {
        let expired = self.copied.as_ref().is_some_and(|(_, at)| {
            now.signed_duration_since(*at) >= Duration::seconds(COPIED_MARKER_SECONDS)
        });
        if expired {
            self.copied = None;
        }
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(mode) => self.status = Some(format!("Switched to {mode} theme.")),
            Err(err) => {
                warn!(%err, "failed to persist theme");
                self.status = Some(format!("Failed to save theme: {err}"));
            }
        }
    }
}

fn cycle_index(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
