//! Text for everything the monitor prints
//!
//! Kept free of I/O so the exact wording can be tested without a terminal.

use crate::collectors::traffic::{CounterReading, Rate, Sample, format_bytes, format_rate};

pub const CONTINUOUS_BANNER: [&str; 3] = [
    "Network Traffic Tracker (Functional)",
    "====================================",
    "Press Ctrl+C to stop",
];

pub const STOP_NOTICE: &str = "Tracking stopped.";

/// Wall-clock label used at the start of each status line
pub fn clock_label() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// `HH:MM:SS | Sent: <total> (<rate>) | Recv: <total> (<rate>)`
pub fn status_line(clock: &str, sample: &Sample, rate: &Rate) -> String {
    format!(
        "{clock} | Sent: {} ({}) | Recv: {} ({})",
        format_bytes(sample.sent_bytes as f64),
        format_rate(rate.sent_bytes_per_sec),
        format_bytes(sample.recv_bytes as f64),
        format_rate(rate.recv_bytes_per_sec),
    )
}

pub fn final_totals_line(reading: &CounterReading) -> String {
    format!(
        "Final totals - Sent: {}, Received: {}",
        format_bytes(reading.sent_bytes as f64),
        format_bytes(reading.recv_bytes as f64),
    )
}

/// Header followed by the sent, received and total lines
pub fn snapshot_lines(reading: &CounterReading) -> [String; 4] {
    [
        "Current Network Stats:".to_string(),
        format!("  Bytes Sent: {}", format_bytes(reading.sent_bytes as f64)),
        format!(
            "  Bytes Received: {}",
            format_bytes(reading.recv_bytes as f64)
        ),
        format!("  Total: {}", format_bytes(reading.total_bytes() as f64)),
    ]
}
