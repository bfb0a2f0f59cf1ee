//! Header block parsing.
//!
//! A header block opens on the first line of the document with `---`,
//! carries `key: value` lines, and closes with another `---` line.
//! Parsing is lenient: anything that is not a recognized `key: value`
//! pair is skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use draftindex_shared::HeaderFields;

/// Line that opens and closes a header block (trailing whitespace allowed).
const DELIMITER: &str = "---";

/// Extract the recognized header fields from raw document text.
///
/// Returns empty fields when the document does not start with a complete
/// header block.
pub fn parse_header(text: &str) -> HeaderFields {
    static KV_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^(title|date|summary)\s*:\s*(.*)$").expect("valid regex")
    });

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(body) = header_body(text) else {
        return HeaderFields::default();
    };

    let mut fields = HeaderFields::default();
    for line in body {
        let Some(caps) = KV_RE.captures(line.trim()) else {
            trace!(line, "skipping header line");
            continue;
        };

        let value = unquote(caps[2].trim()).to_string();
        // Later duplicates overwrite earlier ones.
        match caps[1].to_ascii_lowercase().as_str() {
            "title" => fields.title = Some(value),
            "date" => fields.date = Some(value),
            "summary" => fields.summary = Some(value),
            _ => {}
        }
    }

    fields
}

/// Lines between the opening and closing delimiters, or `None` if the text
/// has no complete header block at its start.
fn header_body(text: &str) -> Option<Vec<&str>> {
    let mut lines = text.lines();
    if !is_delimiter(lines.next()?) {
        return None;
    }

    let mut body = Vec::new();
    for line in lines {
        if is_delimiter(line) {
            return Some(body);
        }
        body.push(line);
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Remove one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
