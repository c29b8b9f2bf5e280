/// Default palette written into a fresh database.
use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

use super::color::{count_colors, insert_color};
use super::settings::{query_setting, update_setting};

const SEEDED_KEY: &str = "seeded";

/// Minecraft chat and GUI palette.
const DEFAULT_PALETTE: &[(&str, &[&str])] = &[
    // Chat
    ("#E8F5E9", &["Chat", "Info", "Light", "Background"]),
    ("#2196F3", &["Chat", "Info", "Primary"]),
    ("#1976D2", &["Chat", "Info", "Dark"]),
    ("#FFF3E0", &["Chat", "Warning", "Light", "Background"]),
    ("#FF9800", &["Chat", "Warning", "Primary"]),
    ("#F57C00", &["Chat", "Warning", "Dark"]),
    ("#FFEBEE", &["Chat", "Error", "Light", "Background"]),
    ("#F44336", &["Chat", "Error", "Primary"]),
    ("#D32F2F", &["Chat", "Error", "Dark"]),
    ("#E8F5E9", &["Chat", "Success", "Light", "Background"]),
    ("#4CAF50", &["Chat", "Success", "Primary"]),
    ("#388E3C", &["Chat", "Success", "Dark"]),
    ("#EFEBE9", &["Chat", "Locked", "Light", "Background"]),
    ("#795548", &["Chat", "Locked", "Primary"]),
    ("#5D4037", &["Chat", "Locked", "Dark"]),
    ("#84ACCE", &["Chat", "Info", "Light"]),
    ("#006494", &["Chat", "Info", "Primary"]),
    ("#665687", &["Chat", "Info", "Dark"]),
    ("#F9DC5C", &["Chat", "Warning", "Light"]),
    ("#FA824C", &["Chat", "Warning", "Primary"]),
    ("#B084CC", &["Chat", "Warning", "Dark"]),
    ("#CB8589", &["Chat", "Error", "Light"]),
    ("#ED254E", &["Chat", "Error", "Primary"]),
    ("#6F2DBD", &["Chat", "Error", "Dark"]),
    ("#ACFCD9", &["Chat", "Success", "Light"]),
    ("#9FD356", &["Chat", "Success", "Primary"]),
    ("#466365", &["Chat", "Success", "Dark"]),
    ("#EFD6AC", &["Chat", "Locked", "Light"]),
    ("#342E37", &["Chat", "Locked", "Primary"]),
    ("#04151F", &["Chat", "Locked", "Dark"]),
    // GUI
    ("#D8E1FF", &["GUI", "Special", "White"]),
    ("#DDE8B9", &["GUI", "Special", "Lime"]),
    ("#D7D9B1", &["GUI", "Special", "Vanilla"]),
    ("#B298DC", &["GUI", "Special", "Wisteria"]),
    ("#1E1E1E", &["GUI", "Background", "Dark", "Primary"]),
    ("#2D2D2D", &["GUI", "Background", "Dark", "Secondary"]),
    ("#424242", &["GUI", "Border", "Dark"]),
    ("#616161", &["GUI", "Button", "Default"]),
    ("#757575", &["GUI", "Button", "Hover"]),
    ("#4A4A4A", &["GUI", "Button", "Pressed"]),
    ("#9E9E9E", &["GUI", "Button", "Disabled"]),
    ("#64B5F6", &["GUI", "Selection", "Primary"]),
    ("#2196F3", &["GUI", "Selection", "Secondary"]),
    ("#373737", &["GUI", "Inventory", "Slot", "Default"]),
    ("#4A4A4A", &["GUI", "Inventory", "Slot", "Hover"]),
    ("#1E1E1E", &["GUI", "Inventory", "Slot", "Selected"]),
    ("#778D9F", &["GUI", "Item", "Title", "Name"]),
    ("#94AFC6", &["GUI", "Item", "Lore", "Description"]),
    ("#FFD700", &["GUI", "Special", "Gold"]),
    ("#B9F2FF", &["GUI", "Special", "Diamond"]),
    ("#A0522D", &["GUI", "Special", "Bronze"]),
];

/// Seeds the default palette the first time a database without colors is opened.
/// A palette the user emptied later stays empty. Returns the number of colors inserted.
/// The flag and the colors are written in one transaction, so a failed seed
/// leaves nothing behind and is retried on the next start.
pub fn seed_if_empty(conn: &Connection) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    if query_setting(SEEDED_KEY, &tx)?.is_some() {
        return Ok(0);
    }
    update_setting(SEEDED_KEY, "1", &tx)?;
    if count_colors(&tx)? > 0 {
        tx.commit()?;
        return Ok(0);
    }
    for (hex_code, labels) in DEFAULT_PALETTE {
        let labels = labels.iter().map(|label| label.to_string()).collect::<Vec<_>>();
        insert_color(hex_code, &labels, &tx)?;
    }
    tx.commit()?;
    info!(count = DEFAULT_PALETTE.len(), "seeded default palette");
    Ok(DEFAULT_PALETTE.len())
}
