/// Color utilities for swatches and UI.
use rand::RngExt;

/// Validate if a string is a valid hex color (e.g., #RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    s.starts_with('#') && s.len() == 7 && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Accepts `RRGGBB` or `#RRGGBB` in any case and returns `#RRGGBB` upper-cased.
pub fn normalize_hex(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", digits.to_ascii_uppercase()))
    } else {
        None
    }
}

pub fn hex_to_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Black or white, whichever reads better on top of `hex`.
pub fn contrast_color(hex: &str) -> &'static str {
    let Some((r, g, b)) = hex_to_rgb(hex) else {
        return "#FFFFFF";
    };
    // Weighted brightness scaled by 1000, compared without truncating.
    let brightness = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    if brightness > 128_000 { "#000000" } else { "#FFFFFF" }
}

/// Generate a random color from a predefined palette.
pub fn random_color() -> String {
    const PALETTE: &[&str] = &[
        "#FF5733", "#33FF57", "#3357FF", "#F333FF", "#33FFF5", "#F5FF33", "#FF33A8",
        "#A833FF", "#33FFA8", "#FFA833", "#FF3380", "#8033FF", "#33FF80", "#FF8033",
    ];
    let mut rng = rand::rng();
    PALETTE[rng.random_range(0..PALETTE.len())].to_string()
}
