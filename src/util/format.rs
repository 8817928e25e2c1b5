//! Formatting utility functions.
//!
//! Human-readable sizes for the status line.

use crate::view::line_count;

/// Format byte count as human-readable string.
///
/// # Examples
/// ```
/// use hexlens::util::format::format_bytes;
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Status line summary: size, exact byte count and number of display lines.
pub fn file_summary(len: usize) -> String {
    let lines = line_count(len);
    format!(
        "{} // {len} bytes // {lines} {}",
        format_bytes(len as u64),
        if lines == 1 { "line" } else { "lines" }
    )
}
