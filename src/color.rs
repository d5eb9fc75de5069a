/// Color utilities for graph series.
use rand::RngExt;

/// Validate if a string is a valid hex color (e.g., #RRGGBB or RRGGBB).
pub fn is_valid_hex(s: &str) -> bool {
    let hex = s.strip_prefix('#').unwrap_or(s);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Render a random 24-bit RGB value as exactly six hex digits.
pub fn random_hex(rng: &mut impl RngExt) -> String {
    format!("{:06x}", rng.random_range(0..0x0100_0000u32))
}
