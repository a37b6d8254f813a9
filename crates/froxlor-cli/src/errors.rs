//! Top-level errors of the CLI runtime.

use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Errors that abort the CLI before or during the prompt loop.
///
/// Remote command failures never appear here; they are normalised into
/// error responses and rendered inside the loop.
#[derive(Debug, Error)]
pub enum AppError {
    /// Argument parsing failed (or help/version output was requested).
    #[error("{0}")]
    CliUsage(#[from] clap::Error),
    /// The tracing subscriber could not be installed.
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    /// Reading from or writing to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
