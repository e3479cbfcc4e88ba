//! Traffic sampling primitives
//!
//! - `sample`: counter readings, timestamped samples and derived rates
//! - `rate`: rate estimation between consecutive samples
//! - `formatting`: byte and rate formatting
//! - `errors`: error taxonomy for collection and monitoring

pub mod errors;
pub mod formatting;
pub mod rate;
pub mod sample;

pub use errors::TrafficError;
pub use formatting::{format_bytes, format_rate};
pub use rate::{calculate_rate, estimate};
pub use sample::{CounterReading, Rate, Sample};
