//! The interactive prompt loop.
//!
//! Each input line is classified as a meta-command (interpreted locally) or
//! a remote command (forwarded to the panel API). Classification happens
//! before any parameter parsing. The loop only terminates on `.quit` or end
//! of input; every failure short of a terminal I/O error is reported and
//! the prompt shown again.

use std::io::{BufRead, Write};

use froxlor_api_types::{ApiRequest, ApiResponse};

use crate::client::ApiClient;
use crate::errors::AppError;
use crate::output::{render_response, warn_block};
use crate::params::parse_params;

/// Version string reported by `.version` and the startup banner.
pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prompt shown before every input line.
pub(crate) const PROMPT: &str = "froxlor> ";

/// Sentinel character introducing meta-commands.
const META_SENTINEL: char = '.';

/// The closed set of locally interpreted commands.
const META_COMMANDS: &[&str] = &[".help", ".info", ".version", ".quit"];

const HELP_LINES: &[&str] = &[
    ".help\t\t\tshow this help-screen",
    ".info\t\t\toutput information about Froxlor-CLI",
    ".version\t\tshow version",
    ".quit\t\t\texit the Froxlor-CLI",
];

const INFO_LINES: &[&str] = &[
    "Froxlor-CLI is a shell interface to the server-management-panel Froxlor",
    "",
    "It was designed to perform various Froxlor actions in case you either",
    "do not have access to the Froxlor webinterface anymore (webserver misconfigured)",
    "or you prefer working on a shell :)",
];

enum LoopControl {
    Continue,
    Quit,
}

/// Drives the read-eval-print loop over injected streams and client.
pub(crate) struct Shell<R, W, C> {
    input: R,
    output: W,
    client: C,
}

impl<R, W, C> Shell<R, W, C>
where
    R: BufRead,
    W: Write,
    C: ApiClient,
{
    pub(crate) const fn new(input: R, output: W, client: C) -> Self {
        Self {
            input,
            output,
            client,
        }
    }

    /// Runs the loop until `.quit` or end of input.
    pub(crate) fn run(&mut self) -> Result<(), AppError> {
        writeln!(
            self.output,
            "Starting Froxlor-CLI version {VERSION}...\n"
        )?;
        writeln!(self.output, "Type '.help' for a list of commands\n")?;

        let mut line = String::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // End of input behaves like `.quit`.
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            }
            match self.handle_line(&line)? {
                LoopControl::Continue => {}
                LoopControl::Quit => return Ok(()),
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> Result<LoopControl, AppError> {
        let input = line.trim();
        if input.is_empty() {
            self.unknown_command(None)?;
            return Ok(LoopControl::Continue);
        }

        let token = input.split(' ').next().unwrap_or(input);
        if token.starts_with(META_SENTINEL) && !META_COMMANDS.contains(&token) {
            self.unknown_command(Some(token))?;
            return Ok(LoopControl::Continue);
        }

        match token {
            ".help" => self.show_lines(HELP_LINES)?,
            ".info" => self.show_lines(INFO_LINES)?,
            ".version" => {
                warn_block(
                    &mut self.output,
                    &[format!("Froxlor-CLI version {VERSION}")],
                )?;
            }
            ".quit" => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(LoopControl::Quit);
            }
            command => self.forward_command(command, input)?,
        }
        Ok(LoopControl::Continue)
    }

    /// Forwards a remote command, normalising client failures into an error
    /// response so both take the same rendering path.
    fn forward_command(&mut self, command: &str, input: &str) -> Result<(), AppError> {
        let arguments = input
            .get(command.len()..)
            .map(str::trim)
            .filter(|rest| !rest.is_empty());
        let request = match arguments {
            Some(rest) => ApiRequest::with_params(command, parse_params(rest)),
            None => ApiRequest::bare(command),
        };

        tracing::debug!(command = %request.command, "forwarding api command");
        let response = self
            .client
            .send(&request)
            .unwrap_or_else(|error| ApiResponse::transport_failure(error.to_string()));
        render_response(&mut self.output, &response)?;
        Ok(())
    }

    fn unknown_command(&mut self, token: Option<&str>) -> Result<(), AppError> {
        match token {
            Some(name) => writeln!(self.output, "Unknown command '{name}'")?,
            None => writeln!(self.output, "Unknown command")?,
        }
        writeln!(self.output, "Type '.help' for a list of commands\n")?;
        self.output.flush()?;
        Ok(())
    }

    fn show_lines(&mut self, lines: &[&str]) -> Result<(), AppError> {
        let owned: Vec<String> = lines.iter().map(|line| (*line).to_owned()).collect();
        warn_block(&mut self.output, &owned)?;
        Ok(())
    }
}
