//! Parser for `name=value` command parameters.
//!
//! The grammar matches the panel shell's historical behaviour:
//!
//! - assignments are split at a space that immediately precedes an
//!   `identifier=` pattern, so unquoted values may contain spaces;
//! - values are trimmed, then stripped of one symmetric pair of double or
//!   single quotes (an unmatched quote is left alone);
//! - a value wrapped in `{`/`}` is parsed as a comma-separated list of
//!   further assignments into a one-level nested map.
//!
//! Known boundary: nesting is limited to exactly one level. The comma split
//! inside a brace value does not track inner braces, so a sub-map value that
//! is itself brace-wrapped is preserved verbatim as a scalar rather than
//! parsed further.

use std::collections::BTreeMap;

use froxlor_api_types::{ParamMap, ParamValue};

/// Parses the argument portion of a command line into a parameter map.
///
/// A repeated parameter name overwrites the earlier value. Tokens without
/// an `=` are ignored.
#[must_use]
pub(crate) fn parse_params(input: &str) -> ParamMap {
    let mut params = ParamMap::new();
    for assignment in split_assignments(input) {
        let Some((name, raw_value)) = assignment.split_once('=') else {
            continue;
        };
        params.insert(name.trim().to_owned(), parse_value(raw_value));
    }
    params
}

/// Splits the input at every space directly followed by `identifier=`.
///
/// Brace depth is tracked so the spaces inside a `{...}` value do not break
/// the value apart.
fn split_assignments(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    for (index, character) in input.char_indices() {
        match character {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 => {
                let boundary = index + 1;
                let Some(rest) = input.get(boundary..) else {
                    continue;
                };
                if starts_with_assignment(rest) {
                    if let Some(part) = input.get(start..index) {
                        if !part.is_empty() {
                            parts.push(part);
                        }
                    }
                    start = boundary;
                }
            }
            _ => {}
        }
    }
    if let Some(tail) = input.get(start..) {
        if !tail.is_empty() {
            parts.push(tail);
        }
    }
    parts
}

/// Checks for the `identifier=` lookahead (identifier, optional spaces, `=`).
fn starts_with_assignment(rest: &str) -> bool {
    let mut chars = rest.chars().peekable();
    let mut identifier_len = 0usize;
    while matches!(chars.peek(), Some(c) if c.is_ascii_alphanumeric() || *c == '_') {
        chars.next();
        identifier_len += 1;
    }
    if identifier_len == 0 {
        return false;
    }
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
    chars.peek() == Some(&'=')
}

fn parse_value(raw: &str) -> ParamValue {
    let unquoted = strip_symmetric_quotes(raw.trim());
    match unquoted
        .strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
    {
        Some(inner) => ParamValue::Map(parse_submap(inner)),
        None => ParamValue::scalar(unquoted),
    }
}

/// Parses the interior of a brace value as comma-separated assignments.
///
/// Elements without an `=` are dropped. Values keep any brace wrapping they
/// carry; see the module docs for the depth limit.
fn parse_submap(inner: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    for element in inner.split(',') {
        let Some((name, raw_value)) = element.split_once('=') else {
            continue;
        };
        let value = strip_symmetric_quotes(raw_value.trim());
        entries.insert(name.trim().to_owned(), value.to_owned());
    }
    entries
}

/// Strips one matching pair of leading/trailing quote characters.
fn strip_symmetric_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(stripped) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return stripped;
        }
    }
    value
}
