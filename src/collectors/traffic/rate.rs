//! Rate estimation between consecutive samples
//!
//! Time anomalies and counter resets are absorbed rather than reported: both
//! produce a zero rate for the affected interval.

use log::{debug, warn};

use crate::collectors::traffic::sample::{Rate, Sample};

/// Estimates throughput between `previous` and `current`
///
/// # Arguments
///
/// * `current` - The sample just taken
/// * `previous` - The sample it supersedes
///
/// # Returns
///
/// Sent and received bytes per second, never negative
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tokio::time::Instant;
/// use traffic_watcher::collectors::traffic::{Rate, Sample, estimate};
///
/// let start = Instant::now();
/// let previous = Sample::new(1000, 2000, start);
/// let current = Sample::new(2024, 3024, start + Duration::from_secs(1));
///
/// assert_eq!(estimate(&current, &previous), Rate::new(1024.0, 1024.0));
/// assert_eq!(estimate(&previous, &current), Rate::ZERO);
/// ```
///
/// # Policy
///
/// - **Non-positive interval**: if `current` was not taken strictly after
///   `previous`, both rates are exactly zero.
/// - **Counter reset**: a direction whose counter went down reports zero for
///   this interval. A genuine reset cannot be told apart from the clamp.
/// - **Normal increase**: `(current - previous) / elapsed_secs`.
pub fn estimate(current: &Sample, previous: &Sample) -> Rate {
    let elapsed = current
        .timestamp
        .checked_duration_since(previous.timestamp)
        .unwrap_or_default();

    if elapsed.is_zero() {
        warn!(
            "Non-positive sampling interval between samples (current={:?}, previous={:?}) - reporting zero rate",
            current.timestamp, previous.timestamp
        );
        return Rate::ZERO;
    }

    let elapsed_secs = elapsed.as_secs_f64();

    if current.sent_bytes < previous.sent_bytes || current.recv_bytes < previous.recv_bytes {
        debug!(
            "Counter reset absorbed (sent: {} -> {}, recv: {} -> {})",
            previous.sent_bytes, current.sent_bytes, previous.recv_bytes, current.recv_bytes
        );
    }

    Rate::new(
        calculate_rate(current.sent_bytes, previous.sent_bytes, elapsed_secs),
        calculate_rate(current.recv_bytes, previous.recv_bytes, elapsed_secs),
    )
}

/// Bytes per second for one direction, clamped to zero
///
/// # Arguments
///
/// * `current` - Cumulative counter at the later reading
/// * `previous` - Cumulative counter at the earlier reading
/// * `elapsed_secs` - Seconds between the readings
///
/// # Returns
///
/// `(current - previous) / elapsed_secs`, or `0.0` when the counter went down
/// or the interval is not positive
///
/// # Examples
///
/// ```
/// use traffic_watcher::collectors::traffic::calculate_rate;
///
/// assert_eq!(calculate_rate(3072, 1024, 2.0), 1024.0);
/// assert_eq!(calculate_rate(1024, 3072, 2.0), 0.0);
/// assert_eq!(calculate_rate(3072, 1024, 0.0), 0.0);
/// ```
pub fn calculate_rate(current: u64, previous: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 || elapsed_secs.is_nan() {
        return 0.0;
    }
    current.saturating_sub(previous) as f64 / elapsed_secs
}
