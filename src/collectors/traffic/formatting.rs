//! Formatting utilities for traffic data
//!
//! This module turns raw byte counts and byte rates into human-readable strings
//! with binary (1024-based) unit prefixes. Totals and rates share one scale so
//! the status line reads consistently.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
const LAST_UNIT: &str = "TB";

/// Formats a byte value with the first unit that keeps it below 1024
///
/// Walks `B`, `KB`, `MB`, `GB`, dividing by 1024 at each step, and falls
/// through to `TB` when the value never drops below 1024. Always renders
/// exactly two decimals.
///
/// Negative values always land on `B` because they compare below 1024. NaN
/// never compares below 1024 and so lands on `TB`.
///
/// # Arguments
///
/// * `bytes` - Byte count as a floating-point value
///
/// # Returns
///
/// The scaled value with two decimals followed by its unit
///
/// # Examples
///
/// ```
/// use traffic_watcher::collectors::traffic::formatting::format_bytes;
///
/// assert_eq!(format_bytes(0.0), "0.00 B");
/// assert_eq!(format_bytes(1023.0), "1023.00 B");
/// assert_eq!(format_bytes(1536.0), "1.50 KB");
/// assert_eq!(format_bytes(1048576.0), "1.00 MB");
/// assert_eq!(format_bytes(1099511627776.0), "1.00 TB");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    let mut value = bytes;
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} {LAST_UNIT}")
}

/// Formats a throughput in bytes per second, e.g. `"1.00 KB/s"`
///
/// # Arguments
///
/// * `bytes_per_sec` - Rate in bytes per second
///
/// # Returns
///
/// [`format_bytes`] of the rate with a `/s` suffix
///
/// ```
/// use traffic_watcher::collectors::traffic::formatting::format_rate;
///
/// assert_eq!(format_rate(1024.0), "1.00 KB/s");
/// ```
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}
