pub mod counters;
pub mod traffic;

pub use counters::{CounterSource, SystemCounterSource};
pub use traffic::{CounterReading, Rate, Sample, TrafficError};
