//! Traffic samples and derived rates
//!
//! A [`Sample`] is one point-in-time reading of the cumulative counters, stamped
//! with a monotonic instant. A [`Rate`] is derived from two consecutive samples
//! and only lives for one display cycle.

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Raw cumulative counters as returned by a counter source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterReading {
    /// Total bytes sent across all interfaces
    pub sent_bytes: u64,
    /// Total bytes received across all interfaces
    pub recv_bytes: u64,
}

impl CounterReading {
    pub fn new(sent_bytes: u64, recv_bytes: u64) -> Self {
        Self {
            sent_bytes,
            recv_bytes,
        }
    }

    /// Sent plus received, saturating at `u64::MAX`
    pub fn total_bytes(&self) -> u64 {
        self.sent_bytes.saturating_add(self.recv_bytes)
    }
}

/// One reading of the cumulative counters at a monotonic instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub sent_bytes: u64,
    pub recv_bytes: u64,
    pub timestamp: Instant,
}

impl Sample {
    pub fn new(sent_bytes: u64, recv_bytes: u64, timestamp: Instant) -> Self {
        Self {
            sent_bytes,
            recv_bytes,
            timestamp,
        }
    }

    /// Stamps a raw reading with the given instant
    pub fn from_reading(reading: CounterReading, timestamp: Instant) -> Self {
        Self::new(reading.sent_bytes, reading.recv_bytes, timestamp)
    }

    pub fn reading(&self) -> CounterReading {
        CounterReading::new(self.sent_bytes, self.recv_bytes)
    }
}

/// Throughput between two samples, in bytes per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rate {
    pub sent_bytes_per_sec: f64,
    pub recv_bytes_per_sec: f64,
}

impl Rate {
    pub const ZERO: Rate = Rate {
        sent_bytes_per_sec: 0.0,
        recv_bytes_per_sec: 0.0,
    };

    pub fn new(sent_bytes_per_sec: f64, recv_bytes_per_sec: f64) -> Self {
        Self {
            sent_bytes_per_sec,
            recv_bytes_per_sec,
        }
    }

    /// Component-wise maximum, used to track peaks over a session
    pub fn max(self, other: Rate) -> Rate {
        Rate {
            sent_bytes_per_sec: self.sent_bytes_per_sec.max(other.sent_bytes_per_sec),
            recv_bytes_per_sec: self.recv_bytes_per_sec.max(other.recv_bytes_per_sec),
        }
    }
}
