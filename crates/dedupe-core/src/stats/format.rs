//! Display formatting for byte counts and savings.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Formats a byte count in the largest unit whose magnitude is at least 1.
///
/// Values are rounded to two decimal places with trailing zeros removed.
/// Anything past the gigabyte range is still shown in GB.
///
/// ```
/// use dedupe_core::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{} {}", trim_fraction(value, 2), UNITS[unit])
}

/// Share of `total_size` saved by deduplication, as a percentage with one decimal.
///
/// Returns `"0"` when nothing is stored.
pub fn savings_percentage(total_size: u64, saved_size: u64) -> String {
    if total_size == 0 {
        return "0".to_string();
    }
    let pct = saved_size as f64 / total_size as f64 * 100.0;
    format!("{:.1}", round_half_up(pct, 1))
}

/// Rounds to `places` decimals with ties going away from zero.
///
/// `format!` alone rounds exact ties to even (`1.125` would become `1.12`).
fn round_half_up(value: f64, places: usize) -> f64 {
    let scale = 10_f64.powi(places as i32);
    (value * scale).round() / scale
}

fn trim_fraction(value: f64, places: usize) -> String {
    let fixed = format!("{:.places$}", round_half_up(value, places));
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
