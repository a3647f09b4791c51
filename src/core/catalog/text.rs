//! Catalog text format, version 1.
//!
//! ```text
//! # THIS FILE IS GENERATED. DO NOT CHANGE IT.
//! #% trans-catalog 1
//!
//! "hello.world" = "hello.world"
//! "say 'hi'" = "say 'hi'"  # app/Http/routes.php:120
//! ```
//!
//! - Lines starting with `#` are comments. `#% trans-catalog N` declares the
//!   format version; a file without one is read as version 1.
//! - Blank lines are ignored.
//! - Every other line is `<key> = <value>`, optionally followed by a `#`
//!   comment. Keys and values are JSON string literals, so quotes,
//!   backslashes and newlines survive a round trip unchanged.
//! - A key repeated within one file keeps its first position and last value.
//! - Control characters in comments are written escaped (`\n`), so every
//!   entry stays on one line.

use thiserror::Error;

use super::Catalog;

pub const EXTENSION: &str = "tcat";
pub const FORMAT_VERSION: u32 = 1;

const VERSION_PREFIX: &str = "#% trans-catalog";

pub const GENERATED_BANNER: &str = "# THIS FILE IS GENERATED. DO NOT CHANGE IT.";
pub const UPDATED_BANNER: &str = "# THIS FILE WAS UPDATED BY TRANSLATION COLLECTOR.";

/// One line of catalog output.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Renders entries under `banner`, one per line, in the order given.
pub fn render<'a>(banner: &str, entries: impl IntoIterator<Item = Entry<'a>>) -> String {
    let mut out = format!("{}\n{} {}\n\n", banner, VERSION_PREFIX, FORMAT_VERSION);

    for entry in entries {
        out.push_str(&quote(entry.key));
        out.push_str(" = ");
        out.push_str(&quote(entry.value));
        if let Some(comment) = entry.comment {
            out.push_str("  # ");
            push_comment(&mut out, comment);
        }
        out.push('\n');
    }

    out
}

/// Renders a whole catalog without per-entry comments.
pub fn render_catalog(banner: &str, catalog: &Catalog) -> String {
    render(
        banner,
        catalog.iter().map(|(key, value)| Entry {
            key,
            value,
            comment: None,
        }),
    )
}

pub fn parse(content: &str) -> Result<Catalog, ParseError> {
    let mut catalog = Catalog::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if let Some(version) = line.strip_prefix(VERSION_PREFIX) {
            check_version(version.trim(), line_no)?;
            continue;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, rest) = take_literal(line, line_no)?;
        let rest = rest
            .trim_start()
            .strip_prefix('=')
            .ok_or_else(|| ParseError::new(line_no, "expected '=' after key"))?;
        let (value, rest) = take_literal(rest.trim_start(), line_no)?;

        let rest = rest.trim_start();
        if !rest.is_empty() && !rest.starts_with('#') {
            return Err(ParseError::new(
                line_no,
                format!("unexpected text after value: {}", rest),
            ));
        }

        catalog.insert(key, value);
    }

    Ok(catalog)
}

fn check_version(version: &str, line_no: usize) -> Result<(), ParseError> {
    match version.parse::<u32>() {
        Ok(FORMAT_VERSION) => Ok(()),
        Ok(other) => Err(ParseError::new(
            line_no,
            format!("unsupported catalog version {}", other),
        )),
        Err(_) => Err(ParseError::new(
            line_no,
            format!("invalid catalog version: {}", version),
        )),
    }
}

fn push_comment(out: &mut String, comment: &str) {
    for c in comment.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
}

fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// Splits a leading JSON string literal off `input`.
fn take_literal(input: &str, line_no: usize) -> Result<(String, &str), ParseError> {
    if !input.starts_with('"') {
        return Err(ParseError::new(line_no, "expected a quoted string"));
    }

    let bytes = input.as_bytes();
    let mut pos = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'"' => {
                let literal = &input[..=pos];
                let value: String = serde_json::from_str(literal)
                    .map_err(|e| ParseError::new(line_no, format!("invalid string: {}", e)))?;
                return Ok((value, &input[pos + 1..]));
            }
            _ => pos += 1,
        }
    }

    Err(ParseError::new(line_no, "unterminated string"))
}
