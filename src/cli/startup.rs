//! Process-level outcomes for the `tw` binary
//!
//! Failures are written to the given stream together with any remediation
//! hint the underlying [`TrafficError`] carries, and mapped to exit status 1.

use std::io::Write;
use std::process::ExitCode;

use log::error;

use crate::collectors::traffic::TrafficError;

/// Checks that the counter source opened before any menu or monitoring
///
/// # Arguments
///
/// * `opened` - Result of opening the counter source
/// * `err_out` - Stream for the diagnostic, normally stderr
///
/// # Returns
///
/// The source when it opened, otherwise `ExitCode::FAILURE` after the
/// diagnostic and its remediation hint have been written
pub fn require_counter_source<S, W>(
    opened: Result<S, TrafficError>,
    err_out: &mut W,
) -> Result<S, ExitCode>
where
    W: Write + ?Sized,
{
    opened.map_err(|e| {
        error!("Startup check failed: {e}");
        write_diagnostic(err_out, &format!("{e}"), Some(&e));
        ExitCode::FAILURE
    })
}

/// Reports a fatal error from a run and returns the failing exit status
///
/// The first [`TrafficError`] in the context chain supplies the hint.
pub fn report_failure<W>(failure: &anyhow::Error, err_out: &mut W) -> ExitCode
where
    W: Write + ?Sized,
{
    error!("Fatal error: {failure:#}");
    let cause = failure
        .chain()
        .find_map(|e| e.downcast_ref::<TrafficError>());
    write_diagnostic(err_out, &format!("{failure:#}"), cause);
    ExitCode::FAILURE
}

fn write_diagnostic<W>(err_out: &mut W, message: &str, cause: Option<&TrafficError>)
where
    W: Write + ?Sized,
{
    let mut text = format!("Error: {message}\n");
    if let Some(hint) = cause.and_then(TrafficError::remediation) {
        text.push_str(hint);
        text.push('\n');
    }
    // Nowhere left to report a failure to write the diagnostic itself
    if let Err(e) = err_out.write_all(text.as_bytes()).and_then(|()| err_out.flush()) {
        error!("Failed to write diagnostic: {e}");
    }
}
