//! Monitoring modes
//!
//! - `sampling_loop`: continuous mode with an overwritten status line
//! - `snapshot`: one-shot mode
//! - `render`: the text both modes print

pub mod render;
pub mod sampling_loop;
pub mod snapshot;

pub use sampling_loop::{DEFAULT_INTERVAL, SamplingLoop, SessionSummary, StopReason};
pub use snapshot::{SnapshotFormat, SnapshotReport, write_snapshot};
