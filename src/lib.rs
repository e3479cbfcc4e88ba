//! Watches total network traffic on the local machine.
//!
//! Cumulative sent/received byte counters are sampled on a fixed interval,
//! turned into throughput rates and rendered as a single status line.

pub mod cli;
pub mod collectors;
pub mod config;
pub mod monitor;
