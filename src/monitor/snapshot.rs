//! One-shot snapshot of the cumulative counters

use std::io::Write;

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::collectors::counters::CounterSource;
use crate::collectors::traffic::{CounterReading, TrafficError};
use crate::monitor::render::snapshot_lines;

/// How a snapshot is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable view of a single reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotReport {
    pub timestamp: DateTime<Local>,
    pub sent_bytes: u64,
    pub recv_bytes: u64,
    pub total_bytes: u64,
}

impl SnapshotReport {
    pub fn new(reading: CounterReading, timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            sent_bytes: reading.sent_bytes,
            recv_bytes: reading.recv_bytes,
            total_bytes: reading.total_bytes(),
        }
    }
}

/// Takes one reading and writes it in the requested format
pub fn write_snapshot<S, W>(
    source: &mut S,
    out: &mut W,
    format: SnapshotFormat,
) -> Result<CounterReading, TrafficError>
where
    S: CounterSource + ?Sized,
    W: Write + ?Sized,
{
    let reading = source.read()?;
    debug!(
        "Snapshot reading: sent={} recv={} ({format:?})",
        reading.sent_bytes, reading.recv_bytes
    );

    match format {
        SnapshotFormat::Text => {
            for line in snapshot_lines(&reading) {
                writeln!(out, "{line}")?;
            }
        }
        SnapshotFormat::Json => {
            let report = SnapshotReport::new(reading, Local::now());
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    out.flush()?;

    Ok(reading)
}
