//! Error types for traffic collection
//!
//! Counter resets and non-positive time intervals are deliberately absent here:
//! the rate estimator absorbs both as a zero rate.

use thiserror::Error;

/// Errors raised while reading counters or driving the sampling loop
#[derive(Debug, Error)]
pub enum TrafficError {
    /// The OS counter source cannot be queried at all
    #[error("network counters are unavailable: {reason}")]
    DependencyUnavailable { reason: String },

    /// A zero sampling interval would spin the loop without sleeping
    #[error("sampling interval must be at least 1 second (got {interval_secs})")]
    InvalidInterval { interval_secs: u64 },

    /// Writing to the terminal failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// A JSON report could not be produced
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The settings file or environment could not be parsed
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

impl TrafficError {
    /// Returns guidance for the operator, if there is anything they can do
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            TrafficError::DependencyUnavailable { .. } => Some(
                "Network counters are read through the operating system's interface statistics. \
Run on Linux, macOS, Windows or FreeBSD with at least one network interface visible \
(inside containers, make sure the network namespace is not disabled).",
            ),
            TrafficError::InvalidInterval { .. } => {
                Some("Pass --interval 1 or higher, or fix interval_secs in the settings file.")
            }
            TrafficError::Settings(_) => {
                Some("Check the file given with --config and any TRAFFIC_WATCHER_* variables.")
            }
            TrafficError::Output(_) | TrafficError::Serialization(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_unavailable_message() {
        let error = TrafficError::DependencyUnavailable {
            reason: "no network interfaces found".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "network counters are unavailable: no network interfaces found"
        );
        assert!(error.remediation().is_some());
    }

    #[test]
    fn test_invalid_interval_message() {
        let error = TrafficError::InvalidInterval { interval_secs: 0 };

        assert!(error.to_string().contains("got 0"));
        assert!(error.remediation().unwrap().contains("--interval"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: TrafficError = io_error.into();

        assert!(matches!(error, TrafficError::Output(_)));
        assert_eq!(error.remediation(), None);
    }
}
