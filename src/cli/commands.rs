use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Main CLI structure for the traffic-watcher application
/// Without a subcommand the interactive menu is shown
#[derive(Parser, Debug)]
#[command(author = "Kaipo Chen")]
#[command(version)] // Automatically uses version from Cargo.toml
#[command(about = "Network Traffic Tracker - watch total bytes sent and received with live throughput")]
#[command(long_about = "Traffic Watcher samples the operating system's cumulative network counters, \
summed over every interface, and shows running totals alongside throughput rates. \
Run without a subcommand for the interactive menu.")]
pub struct Cli {
    /// Optional TOML settings file
    #[arg(short, long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Continuous monitoring with a self-updating status line
    #[command(about = "Start continuous monitoring")]
    #[command(long_about = "Prints one status line that is rewritten every interval with the \
current totals and throughput. Press Ctrl+C to stop and print the final totals.\n\n\
Examples:\n  \
tw watch                              # Sample every second\n  \
tw watch --interval 5                 # Sample every 5 seconds\n  \
tw watch --count 10                   # Stop after 10 samples")]
    Watch {
        /// How often to sample (in seconds)
        #[arg(short = 'i', long, help = "Sampling interval in seconds")]
        interval: Option<u64>,

        /// Stop after this many samples instead of waiting for Ctrl+C
        #[arg(short = 'n', long, help = "Stop after this many samples")]
        count: Option<u64>,
    },

    /// One-time view of the cumulative counters
    #[command(about = "Show current totals once")]
    Snapshot {
        /// Emit a JSON report instead of text
        #[arg(long, help = "Print the snapshot as JSON")]
        json: bool,
    },
}
