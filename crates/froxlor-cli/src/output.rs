//! Rendering of warning blocks and API responses.

use std::io::{self, Write};

use froxlor_api_types::ApiResponse;

/// Fixed first line of every remote-error block.
pub(crate) const ERROR_HEADER: &str = "There was an error in your request!";

const EMPTY_WARNING: &str = "EMPTY WARNING! Should *not* happen!";

/// Writes a `*`-framed warning block, one message per line.
pub(crate) fn warn_block<W>(writer: &mut W, lines: &[String]) -> io::Result<()>
where
    W: Write,
{
    write!(writer, "\n*")?;
    if lines.is_empty() {
        write!(writer, "\n* {EMPTY_WARNING}")?;
    } else {
        for line in lines {
            write!(writer, "\n* {line}")?;
        }
    }
    write!(writer, "\n*\n\n")?;
    writer.flush()
}

/// Renders an API response: the body alone on success, an error block
/// otherwise.
pub(crate) fn render_response<W>(writer: &mut W, response: &ApiResponse) -> io::Result<()>
where
    W: Write,
{
    if response.is_success() {
        let body = serde_json::to_string_pretty(&response.body)
            .unwrap_or_else(|_| response.body.to_string());
        writeln!(writer, "{body}")?;
        return writer.flush();
    }

    let mut lines = Vec::with_capacity(2 + response.header.detailed_messages.len());
    lines.push(ERROR_HEADER.to_owned());
    lines.push(format!(
        "{}: {}",
        response.header.code, response.header.description
    ));
    lines.extend(response.header.detailed_messages.iter().cloned());
    warn_block(writer, &lines)
}
