//! Continuous sampling loop
//!
//! The loop owns the previous sample as a local and replaces it at the end of
//! every iteration. Cancellation is observed while waiting for the next tick,
//! which is the only suspension point.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use log::{debug, info, trace, warn};
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;

use crate::collectors::counters::CounterSource;
use crate::collectors::traffic::{CounterReading, Rate, Sample, TrafficError, estimate};
use crate::monitor::render::{
    CONTINUOUS_BANNER, STOP_NOTICE, clock_label, final_totals_line, status_line,
};

/// Default time between samples
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Why a continuous run reached its STOPPED state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The operator interrupted the run
    Cancelled,
    /// The configured number of samples was rendered
    SampleLimit,
}

/// What a finished continuous run observed
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Status lines rendered, not counting the seed or final readings
    pub samples: u64,
    pub seed: Sample,
    /// The reading taken after stopping, shown as the final totals
    pub last: Sample,
    pub peak: Rate,
    pub stop_reason: StopReason,
}

impl SessionSummary {
    pub fn elapsed(&self) -> Duration {
        self.last
            .timestamp
            .checked_duration_since(self.seed.timestamp)
            .unwrap_or_default()
    }

    /// Bytes moved between the seed and final readings
    ///
    /// Saturates at zero if a counter reset happened during the session.
    pub fn transferred(&self) -> CounterReading {
        CounterReading::new(
            self.last.sent_bytes.saturating_sub(self.seed.sent_bytes),
            self.last.recv_bytes.saturating_sub(self.seed.recv_bytes),
        )
    }
}

/// Drives periodic reads from a counter source and renders a status line
pub struct SamplingLoop<S, W> {
    source: S,
    out: W,
    interval: Duration,
    max_samples: Option<u64>,
}

impl<S: CounterSource, W: Write> SamplingLoop<S, W> {
    pub fn new(source: S, out: W, interval: Duration) -> Self {
        Self {
            source,
            out,
            interval,
            max_samples: None,
        }
    }

    /// Stops on its own after rendering `max_samples` status lines
    pub fn with_max_samples(mut self, max_samples: Option<u64>) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn into_parts(self) -> (S, W) {
        (self.source, self.out)
    }

    /// Runs until `cancel` fires or the sample limit is reached
    ///
    /// The stop notice and final totals are written exactly once on either
    /// path. A counter source failure aborts the run immediately.
    ///
    /// # Arguments
    ///
    /// * `cancel` - Token checked while waiting for each tick
    ///
    /// # Returns
    ///
    /// A [`SessionSummary`] once STOPPED, or the first counter or output error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tokio_util::sync::CancellationToken;
    /// use traffic_watcher::collectors::SystemCounterSource;
    /// use traffic_watcher::monitor::{DEFAULT_INTERVAL, SamplingLoop};
    ///
    /// # async fn watch() -> Result<(), traffic_watcher::collectors::TrafficError> {
    /// let source = SystemCounterSource::new()?;
    /// let mut sampler = SamplingLoop::new(source, std::io::stdout(), DEFAULT_INTERVAL)
    ///     .with_max_samples(Some(5));
    /// let summary = sampler.run_continuous(&CancellationToken::new()).await?;
    /// println!("peak received: {} B/s", summary.peak.recv_bytes_per_sec);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_continuous(
        &mut self,
        cancel: &CancellationToken,
    ) -> Result<SessionSummary, TrafficError> {
        for line in CONTINUOUS_BANNER {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;

        let seed = self.take_sample()?;
        info!(
            "Continuous monitoring started (interval={:?}, max_samples={:?}, seed_sent={}, seed_recv={})",
            self.interval, self.max_samples, seed.sent_bytes, seed.recv_bytes
        );

        let mut previous = seed;
        let mut peak = Rate::ZERO;
        let mut samples = 0u64;

        let stop_reason = loop {
            if self.max_samples.is_some_and(|max| samples >= max) {
                break StopReason::SampleLimit;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => break StopReason::Cancelled,
                _ = sleep(self.interval) => {}
            }

            let current = match self.take_sample() {
                Ok(sample) => sample,
                Err(e) => {
                    // Leave the terminal on a fresh line before surfacing the error
                    if let Err(write_error) = writeln!(self.out) {
                        warn!("Failed to terminate status line after read error: {write_error}");
                    }
                    return Err(e);
                }
            };
            let rate = estimate(&current, &previous);
            self.render_status(&current, &rate)?;

            peak = peak.max(rate);
            samples += 1;
            previous = current;
        };

        self.finish(seed, samples, peak, stop_reason)
    }

    fn take_sample(&mut self) -> Result<Sample, TrafficError> {
        let reading = self.source.read()?;
        Ok(Sample::from_reading(reading, Instant::now()))
    }

    fn render_status(&mut self, sample: &Sample, rate: &Rate) -> Result<(), TrafficError> {
        let line = status_line(&clock_label(), sample, rate);
        trace!("Rendering status line: {line}");

        queue!(
            self.out,
            MoveToColumn(0),
            Print(line),
            Clear(ClearType::UntilNewLine)
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(
        &mut self,
        seed: Sample,
        samples: u64,
        peak: Rate,
        stop_reason: StopReason,
    ) -> Result<SessionSummary, TrafficError> {
        debug!("Sampling stopped after {samples} samples ({stop_reason:?})");

        // Terminates the status line, then a blank line before the notice
        writeln!(self.out)?;
        writeln!(self.out)?;
        writeln!(self.out, "{STOP_NOTICE}")?;

        let last = self.take_sample()?;
        writeln!(self.out, "{}", final_totals_line(&last.reading()))?;
        self.out.flush()?;

        let summary = SessionSummary {
            samples,
            seed,
            last,
            peak,
            stop_reason,
        };

        info!(
            "Continuous monitoring stopped: samples={}, elapsed={:.1}s, transferred_sent={}, transferred_recv={}",
            summary.samples,
            summary.elapsed().as_secs_f64(),
            summary.transferred().sent_bytes,
            summary.transferred().recv_bytes
        );

        Ok(summary)
    }
}
