//! Reading touch files.
//!
//! One touch per line: `<length> <call-string> [notes...]`. Blank lines
//! and lines starting with `#` are skipped.

use std::path::Path;

use touchcheck_core::TouchRecord;

use crate::error::CliError;

/// A record together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberedRecord {
    pub line: usize,
    pub record: TouchRecord,
}

pub(crate) fn read_touch_file(path: &Path) -> Result<Vec<NumberedRecord>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_touch_file(&text, path)?;
    tracing::info!(file = %path.display(), touches = records.len(), "read touch file");
    Ok(records)
}

pub(crate) fn parse_touch_file(text: &str, path: &Path) -> Result<Vec<NumberedRecord>, CliError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = parse_line(trimmed).map_err(|reason| CliError::TouchLine {
            path: path.to_path_buf(),
            line: idx + 1,
            text: line.to_owned(),
            reason,
        })?;
        records.push(NumberedRecord {
            line: idx + 1,
            record,
        });
    }
    Ok(records)
}

fn parse_line(line: &str) -> Result<TouchRecord, &'static str> {
    let (length, rest) = split_token(line);
    if !length.bytes().all(|b| b.is_ascii_digit()) {
        return Err("length must be a number");
    }
    let length: usize = length.parse().map_err(|_| "length is out of range")?;

    let (call_string, notes) = split_token(rest);
    if call_string.is_empty() {
        return Err("missing call-string");
    }
    let notes = (!notes.is_empty()).then_some(notes);
    Ok(TouchRecord::new(length, call_string, notes))
}

/// Split off the first whitespace-delimited token; the remainder is trimmed.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], s[end..].trim()),
        None => (s, ""),
    }
}
