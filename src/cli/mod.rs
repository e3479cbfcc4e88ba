pub mod commands;
pub mod menu;
pub mod startup;
pub mod traffic_commands;

pub use commands::Cli;
pub use startup::{report_failure, require_counter_source};
pub use traffic_commands::TrafficCommandHandler;
