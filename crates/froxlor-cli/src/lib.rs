//! Command-line interface runtime for the Froxlor panel.
//!
//! The crate owns argument parsing, configuration assembly, telemetry
//! bootstrap, and the interactive prompt loop. Everything is exercised
//! through injected IO streams and an [`ApiClient`] seam, so the binary
//! entrypoint stays a thin wrapper and tests can substitute both the
//! terminal and the remote API.

use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use froxlor_config::{Config, LogFormat, SocketEndpoint};

mod client;
mod errors;
mod output;
mod params;
mod shell;
mod telemetry;

pub use client::{ApiClient, ClientError, SocketClient};
pub use errors::AppError;
pub use telemetry::TelemetryError;

use shell::Shell;

/// Flags recognised by the `froxlor` binary.
///
/// Every knob falls back to an environment variable and then to the
/// platform default, so an interactive session usually needs no flags at
/// all.
#[derive(Parser, Debug)]
#[command(
    name = "froxlor",
    about = "Interactive shell for the Froxlor server-management panel",
    version
)]
struct Cli {
    /// Endpoint of the panel API (`unix://<path>` or `tcp://<host>:<port>`).
    #[arg(long, value_name = "ENDPOINT", env = "FROXLOR_API_SOCKET")]
    api_endpoint: Option<SocketEndpoint>,
    /// Log filter expression in tracing `EnvFilter` syntax.
    #[arg(long, value_name = "FILTER", env = "FROXLOR_LOG_FILTER")]
    log_filter: Option<String>,
    /// Log output format (`compact` or `json`).
    #[arg(long, value_name = "FORMAT", env = "FROXLOR_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(endpoint) = self.api_endpoint {
            config.api_endpoint = endpoint;
        }
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, R, W, E>(args: I, input: R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    match try_run(args, input, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, R, W>(args: I, input: R, stdout: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
{
    let cli = Cli::try_parse_from(args)?;
    let config = cli.into_config();
    telemetry::initialise(&config)?;

    let client = SocketClient::new(config.api_endpoint().clone());
    Shell::new(input, stdout, client).run()
}
