use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::cli::commands::Commands;
use crate::cli::menu::{MenuChoice, prompt_choice};
use crate::collectors::counters::CounterSource;
use crate::config::Settings;
use crate::monitor::{SamplingLoop, SessionSummary, SnapshotFormat, write_snapshot};

/// Runs the monitoring modes selected from the command line or the menu
pub struct TrafficCommandHandler<S, W> {
    source: S,
    out: W,
    settings: Settings,
    cancel: CancellationToken,
    cancel_on_ctrl_c: bool,
}

impl<S: CounterSource, W: Write> TrafficCommandHandler<S, W> {
    /// `cancel` stops continuous monitoring; the binary wires it to Ctrl+C
    pub fn new(source: S, out: W, settings: Settings, cancel: CancellationToken) -> Self {
        Self {
            source,
            out,
            settings,
            cancel,
            cancel_on_ctrl_c: false,
        }
    }

    /// Cancels continuous monitoring when the process receives Ctrl+C
    ///
    /// The listener is only installed once monitoring starts, so Ctrl+C at the
    /// menu prompt still terminates the process.
    pub fn with_ctrl_c(mut self) -> Self {
        self.cancel_on_ctrl_c = true;
        self
    }

    /// Dispatches a parsed subcommand, falling back to the interactive menu
    pub async fn handle<R: BufRead>(self, command: Option<Commands>, input: &mut R) -> Result<W> {
        match command {
            Some(Commands::Watch { interval, count }) => {
                let (_, out) = self.handle_watch(interval, count).await?;
                Ok(out)
            }
            Some(Commands::Snapshot { json }) => self.handle_snapshot(json),
            None => self.handle_menu(input).await,
        }
    }

    pub async fn handle_watch(
        self,
        interval: Option<u64>,
        count: Option<u64>,
    ) -> Result<(SessionSummary, W)> {
        let settings = self
            .settings
            .with_overrides(interval, count, false)
            .context("Invalid monitoring options")?;

        if self.cancel_on_ctrl_c {
            listen_for_ctrl_c(self.cancel.clone());
        }

        let mut sampler = SamplingLoop::new(self.source, self.out, settings.interval())
            .with_max_samples(settings.max_samples);
        let summary = sampler
            .run_continuous(&self.cancel)
            .await
            .context("Continuous monitoring failed")?;

        info!(
            "Session peak rates: sent={:.0} B/s, recv={:.0} B/s over {} samples",
            summary.peak.sent_bytes_per_sec, summary.peak.recv_bytes_per_sec, summary.samples
        );

        let (_, out) = sampler.into_parts();
        Ok((summary, out))
    }

    pub fn handle_snapshot(mut self, json: bool) -> Result<W> {
        let format = if json || self.settings.json {
            SnapshotFormat::Json
        } else {
            SnapshotFormat::Text
        };

        write_snapshot(&mut self.source, &mut self.out, format)
            .context("Failed to take network snapshot")?;
        Ok(self.out)
    }

    pub async fn handle_menu<R: BufRead>(mut self, input: &mut R) -> Result<W> {
        let choice =
            prompt_choice(input, &mut self.out).context("Failed to read menu choice")?;

        match choice {
            Some(MenuChoice::Monitor) => {
                let (_, out) = self.handle_watch(None, None).await?;
                Ok(out)
            }
            Some(MenuChoice::Snapshot) => self.handle_snapshot(false),
            Some(MenuChoice::Exit) => {
                writeln!(self.out, "Goodbye!")?;
                Ok(self.out)
            }
            None => {
                writeln!(self.out, "Invalid choice!")?;
                Ok(self.out)
            }
        }
    }
}

fn listen_for_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                debug!("Ctrl+C received, stopping continuous monitoring");
                cancel.cancel();
            }
            Err(e) => warn!("Unable to listen for Ctrl+C: {e}"),
        }
    });
}
