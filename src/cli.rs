/// CLI argument parsing and command handling.
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusqlite::Connection;
use tracing::info;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::Settings;
use crate::palette::{self, CategoryOptions, record::map_records};
use crate::source::{RecordSource, SqliteSource, SqliteThemeStore};
use crate::theme::{ThemeContext, ThemeMode};
use crate::types::{ALL_ID, PROJECT_PREFIX};
use crate::{color, db};

#[derive(Parser, Debug)]
#[command(
    name = "swatchbook",
    version,
    about = "Swatchbook - A terminal-based color palette viewer"
)]
pub struct Cli {
    /// Database file (defaults to $SWATCHBOOK_DB or the user data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
    /// Number of ranked categories to show, 0 for all
    #[arg(long, global = true)]
    pub top: Option<usize>,
    /// Label of the catch-all category
    #[arg(long, global = true)]
    pub all_label: Option<String>,
    /// Log filter, e.g. `debug` or `swatchbook=trace`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Color {
        #[command(subcommand)]
        command: ColorCommand,
    },
    Tag {
        #[command(subcommand)]
        command: TagCommand,
    },
    /// Print the colors matching the given filters
    List {
        #[arg(short = 'c', long = "category")]
        category: Option<String>,
        #[arg(short = 'p', long = "project")]
        project: Option<String>,
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,
    },
    /// Print categories with their counts
    Categories {
        /// Show every non-empty category instead of the top ones
        #[arg(long)]
        all: bool,
    },
    /// Print project tags
    Projects,
    /// Import colors from a JSON array of records
    Import { file: PathBuf },
    /// Print every color as JSON
    Export,
    /// Copy a hex code to the clipboard. On Linux the command stays running
    /// until another program replaces the clipboard contents, since X11 and
    /// Wayland drop them when the owning process exits.
    Copy { hex: String },
    /// Show or set the persisted theme
    Theme { mode: Option<String> },
}

#[derive(Subcommand, Debug)]
pub enum ColorCommand {
    Add {
        hex: Option<String>,
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommand {
    Add { label: String },
}

/// Execute a CLI command against the database.
pub fn run(command: Command, conn: &Rc<Connection>, settings: &Settings) -> Result<()> {
    match command {
        Command::Color {
            command: ColorCommand::Add { hex, tags },
        } => handle_color_add(hex, tags, conn)?,
        Command::Color {
            command: ColorCommand::Remove { id },
        } => handle_color_remove(&id, conn)?,
        Command::Tag {
            command: TagCommand::Add { label },
        } => handle_tag_add(&label, conn)?,
        Command::List {
            category,
            project,
            search,
        } => handle_list(category, project, &search, conn)?,
        Command::Categories { all } => handle_categories(all, conn, settings)?,
        Command::Projects => handle_projects(conn)?,
        Command::Import { file } => handle_import(&file, conn)?,
        Command::Export => handle_export(conn)?,
        Command::Copy { hex } => handle_copy(&hex)?,
        Command::Theme { mode } => handle_theme(mode, conn)?,
    }
    Ok(())
}

fn handle_color_add(hex: Option<String>, tags: Vec<String>, conn: &Connection) -> Result<()> {
    let hex_code = match hex {
        Some(value) => match color::normalize_hex(&value) {
            Some(hex_code) => hex_code,
            None => {
                println!("Invalid color format. Please provide a hex code like #RRGGBB.");
                return Ok(());
            }
        },
        None => color::random_color(),
    };
    let labels = tags
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>();
    let id = db::create_color(&hex_code, &labels, conn)?;
    info!(%id, %hex_code, "color added");
    println!("Added {hex_code} ({id})");
    Ok(())
}

fn handle_color_remove(id: &str, conn: &Connection) -> Result<()> {
    if db::delete_color(id, conn)? {
        println!("Removed color '{id}'");
    } else {
        println!("Color '{id}' not found");
    }
    Ok(())
}

fn handle_tag_add(label: &str, conn: &Connection) -> Result<()> {
    let label = label.trim();
    if label.is_empty() {
        println!("Tag label is required.");
        return Ok(());
    }
    if db::query_tag_id(label, conn)?.is_some() {
        println!("Tag '{label}' already exists.");
        return Ok(());
    }
    let id = db::create_tag(label, conn)?;
    info!(%id, label, "tag added");
    println!("Added tag '{label}'");
    Ok(())
}

fn handle_list(
    category: Option<String>,
    project: Option<String>,
    search: &str,
    conn: &Rc<Connection>,
) -> Result<()> {
    let colors = SqliteSource::new(conn.clone()).fetch_colors()?;
    let project = project.map(|name| project_label(&name));
    let filtered =
        palette::filter_colors(&colors, category.as_deref(), project.as_deref(), search);
    if filtered.is_empty() {
        println!("No colors found matching your search");
        return Ok(());
    }
    for color in filtered {
        let labels = color
            .distinct_labels()
            .into_iter()
            .map(palette::title_case)
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}  {:<15}  {labels}", color.hex_code, color.id);
    }
    Ok(())
}

fn handle_categories(all: bool, conn: &Rc<Connection>, settings: &Settings) -> Result<()> {
    let colors = SqliteSource::new(conn.clone()).fetch_colors()?;
    let options = if all {
        CategoryOptions {
            top_n: None,
            ..settings.categories.clone()
        }
    } else {
        settings.categories.clone()
    };
    let vocabulary = palette::category_vocabulary(&colors);
    for category in palette::derive_categories(&colors, Some(vocabulary.as_slice()), &options) {
        println!("{:<24} {:>5}", category.display_name, category.count);
    }
    Ok(())
}

fn handle_projects(conn: &Rc<Connection>) -> Result<()> {
    let projects = SqliteSource::new(conn.clone()).fetch_project_tags()?;
    if projects.is_empty() {
        println!("No project tags found. Tag a color with 'project:<name>' to create one.");
    }
    for project in projects {
        println!("{}", project.label);
    }
    Ok(())
}

fn handle_import(file: &Path, conn: &Connection) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    let entries = match payload {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(mut object) => match object.remove("items") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => anyhow::bail!("expected a JSON array or an object with an 'items' array"),
        },
        _ => anyhow::bail!("expected a JSON array or an object with an 'items' array"),
    };

    let mapped = map_records(&entries);
    let mut imported = 0;
    let mut existing = 0;
    for record in palette::dedup_colors(&mapped.records) {
        if db::import_color(&record, conn)? {
            imported += 1;
        } else {
            existing += 1;
        }
    }
    info!(imported, existing, skipped = mapped.skipped.len(), "import finished");
    println!(
        "Imported {imported} colors ({existing} already present, {} malformed skipped)",
        mapped.skipped.len()
    );
    for (index, err) in &mapped.skipped {
        println!("  entry {index}: {err}");
    }
    Ok(())
}

fn handle_export(conn: &Rc<Connection>) -> Result<()> {
    let colors = SqliteSource::new(conn.clone()).fetch_colors()?;
    println!("{}", serde_json::to_string_pretty(&colors)?);
    Ok(())
}

fn handle_copy(hex: &str) -> Result<()> {
    let Some(hex_code) = color::normalize_hex(hex) else {
        println!("Invalid color format. Please provide a hex code like #RRGGBB.");
        return Ok(());
    };
    let mut clipboard = SystemClipboard::held();
    if clipboard.holds_until_replaced() {
        println!(
            "Serving {hex_code} on the clipboard until something else is copied (Ctrl+C to stop)"
        );
    }
    clipboard.copy_to_clipboard(&hex_code)?;
    println!("Copied {hex_code}");
    Ok(())
}

fn handle_theme(mode: Option<String>, conn: &Rc<Connection>) -> Result<()> {
    let mut theme = ThemeContext::init(Box::new(SqliteThemeStore::new(conn.clone())));
    match mode {
        Some(value) => {
            let mode: ThemeMode = value.parse()?;
            theme.set(mode)?;
            println!("Theme set to {mode}");
        }
        None => println!("{}", theme.get()),
    }
    Ok(())
}

/// Adds the `project:` prefix to a bare project name.
pub fn project_label(name: &str) -> String {
    let name = name.trim();
    if name == ALL_ID || name.starts_with(PROJECT_PREFIX) {
        name.to_string()
    } else {
        format!("{PROJECT_PREFIX}{name}")
    }
}
