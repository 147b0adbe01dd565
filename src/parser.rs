use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{FilterError, Result};

/// Dotted identifier: non-empty segments, optional leading and trailing dot.
/// A trailing dot pins the prefix to a segment boundary (".1.3." does not cover ".1.31").
static PREFIX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\.?[^\s.]+(?:\.[^\s.]+)*\.?$").expect("PREFIX_PATTERN: hardcoded regex is invalid")
});

/// Parse a prefix list from text.
///
/// One prefix per line; `#` starts a comment and blank lines are skipped.
/// Duplicate prefixes are dropped, keeping the first.
///
/// Only the dotted shape is checked here; characters are validated on insertion.
pub fn parse_prefixes(text: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut prefixes = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !PREFIX_PATTERN.is_match(line) {
            return Err(FilterError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid prefix format: {}", line),
            });
        }

        if seen.insert(line) {
            prefixes.push(line.to_string());
        }
    }

    Ok(prefixes)
}

/// Parse a prefix list from a file.
pub fn parse_prefixes_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        FilterError::ParseError(format!(
            "Failed to read prefix file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_prefixes(&text)
}
