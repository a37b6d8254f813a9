//! Binary entrypoint for the Froxlor shell.
//!
//! The binary locks the real standard streams and delegates to
//! [`froxlor_cli::run`], which loads configuration, initialises telemetry,
//! and drives the interactive prompt loop against the configured panel API
//! endpoint.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    froxlor_cli::run(std::env::args_os(), stdin, &mut stdout, &mut stderr)
}
