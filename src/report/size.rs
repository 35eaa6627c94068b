//! Byte counts for humans, and minimum-size thresholds from them

/// Format a byte count with decimal units, the way file browsers show sizes
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = 1_000_000.0;
    const GB: f64 = 1_000_000_000.0;

    let value = bytes as f64;
    match bytes {
        0 => "Zero KB".to_string(),
        1 => "1 byte".to_string(),
        2..=999 => format!("{} bytes", bytes),
        1_000..=999_499 => format!("{:.0} KB", value / KB),
        999_500..=999_949_999 => format!("{:.1} MB", value / MB),
        _ => format!("{:.2} GB", value / GB),
    }
}

/// Parse `<integer><B|KB|MB|GB>?` into bytes, using binary multipliers.
///
/// Whitespace is allowed between number and unit, and the unit is case
/// insensitive. Returns `None` for anything else.
pub fn parse_size(input: &str) -> Option<u64> {
    let input = input.trim();
    let digits_end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if digits_end == 0 {
        return None;
    }

    let value: u64 = input[..digits_end].parse().ok()?;
    let multiplier: u64 = match input[digits_end..].trim_start().to_uppercase().as_str() {
        "" | "B" => 1,
        "KB" => 1024,
        "MB" => 1024 * 1024,
        "GB" => 1024 * 1024 * 1024,
        _ => return None,
    };

    value.checked_mul(multiplier)
}
