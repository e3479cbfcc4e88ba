//! Cumulative network counter sources
//!
//! A [`CounterSource`] returns the bytes sent and received across all network
//! interfaces combined. The system implementation is backed by `sysinfo`.

use log::{debug, trace, warn};
use sysinfo::Networks;

use crate::collectors::traffic::{CounterReading, TrafficError};

/// Anything that can report cumulative sent/received byte counters
///
/// Reads must have no side effects beyond reflecting the live counters.
pub trait CounterSource {
    fn read(&mut self) -> Result<CounterReading, TrafficError>;
}

impl<S: CounterSource + ?Sized> CounterSource for Box<S> {
    fn read(&mut self) -> Result<CounterReading, TrafficError> {
        (**self).read()
    }
}

/// Reads interface totals from the operating system via `sysinfo`
#[derive(Debug)]
pub struct SystemCounterSource {
    networks: Networks,
    read_count: u64,
}

impl SystemCounterSource {
    /// Opens the system counters, failing if they cannot be queried at all
    pub fn new() -> Result<Self, TrafficError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(TrafficError::DependencyUnavailable {
                reason: format!(
                    "interface statistics are not supported on {}",
                    std::env::consts::OS
                ),
            });
        }

        let networks = Networks::new_with_refreshed_list();
        if networks.is_empty() {
            return Err(TrafficError::DependencyUnavailable {
                reason: "no network interfaces found".to_string(),
            });
        }

        debug!(
            "Opened system counter source with {} interfaces",
            networks.len()
        );

        Ok(Self {
            networks,
            read_count: 0,
        })
    }
}

impl CounterSource for SystemCounterSource {
    fn read(&mut self) -> Result<CounterReading, TrafficError> {
        // refresh(true) also drops interfaces that went away
        self.networks.refresh(true);
        self.read_count += 1;

        // Interfaces can all go down mid-run; report zero totals and let the
        // rate clamp absorb the drop like any other counter reset
        if self.networks.is_empty() {
            warn!(
                "Counter read #{}: no network interfaces present, reporting zero totals",
                self.read_count
            );
            return Ok(CounterReading::default());
        }

        let reading = sum_interfaces(
            self.networks
                .iter()
                .map(|(_, data)| (data.total_transmitted(), data.total_received())),
        );

        trace!(
            "Counter read #{}: sent={} recv={} across {} interfaces",
            self.read_count,
            reading.sent_bytes,
            reading.recv_bytes,
            self.networks.len()
        );

        Ok(reading)
    }
}

/// Sums per-interface `(sent, received)` totals, saturating on overflow
pub fn sum_interfaces<I>(totals: I) -> CounterReading
where
    I: IntoIterator<Item = (u64, u64)>,
{
    totals
        .into_iter()
        .fold(CounterReading::default(), |acc, (sent, recv)| {
            CounterReading::new(
                acc.sent_bytes.saturating_add(sent),
                acc.recv_bytes.saturating_add(recv),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_interfaces() {
        let reading = sum_interfaces(vec![(100, 200), (1, 2), (0, 0)]);
        assert_eq!(reading, CounterReading::new(101, 202));
    }

    #[test]
    fn test_sum_interfaces_empty() {
        assert_eq!(sum_interfaces(Vec::new()), CounterReading::default());
    }

    #[test]
    fn test_sum_interfaces_saturates() {
        let reading = sum_interfaces(vec![(u64::MAX, 1), (5, u64::MAX)]);
        assert_eq!(reading, CounterReading::new(u64::MAX, u64::MAX));
    }

    #[test]
    fn test_system_source_reads_are_non_decreasing() {
        // Hosts without visible interfaces report unavailability, which is fine
        let Ok(mut source) = SystemCounterSource::new() else {
            return;
        };

        let first = source.read();
        let second = source.read();
        if let (Ok(first), Ok(second)) = (first, second) {
            assert!(second.sent_bytes >= first.sent_bytes);
            assert!(second.recv_bytes >= first.recv_bytes);
        }
    }

    #[test]
    fn test_boxed_source_delegates() {
        struct Fixed;
        impl CounterSource for Fixed {
            fn read(&mut self) -> Result<CounterReading, TrafficError> {
                Ok(CounterReading::new(7, 9))
            }
        }

        let mut boxed: Box<dyn CounterSource> = Box::new(Fixed);
        assert_eq!(boxed.read().unwrap(), CounterReading::new(7, 9));
    }
}
