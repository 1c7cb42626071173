//! Loader for `.properties` style `key=value` content.
//!
//! Responsibilities:
//! - Split content into logical lines (comments, blank lines, continuations).
//! - Split each logical line into key and value, decoding escapes.
//!
//! Does NOT handle:
//! - Multi-document content; everything lands in a single property source.
//! - Placeholder expansion inside values.
//!
//! Invariants:
//! - Content is never trimmed beyond the leading whitespace of each line.
//! - Parse errors carry a line number, never line content.

use std::str::Chars;

use super::{PropertySource, PropertySourceLoader};
use crate::error::ConfigDataError;

/// Parses Java-style properties: `key=value`, `key: value` or `key value`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertiesPropertySourceLoader;

impl PropertySourceLoader for PropertiesPropertySourceLoader {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["properties"]
    }

    fn load(&self, name: &str, content: &str) -> Result<PropertySource, ConfigDataError> {
        let mut source = PropertySource::new(name);
        for (line_number, line) in logical_lines(content) {
            let (raw_key, raw_value) = split_key_value(&line);
            let key = unescape(raw_key).ok_or_else(|| malformed_escape(name, line_number))?;
            let value = unescape(raw_value).ok_or_else(|| malformed_escape(name, line_number))?;
            source.insert(key, value);
        }
        Ok(source)
    }
}

fn malformed_escape(source_name: &str, line_number: usize) -> ConfigDataError {
    ConfigDataError::Parse {
        source_name: source_name.to_string(),
        message: format!("malformed \\uXXXX escape on line {}", line_number),
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Physical lines split on `\n`, `\r\n` or a lone `\r`.
fn physical_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

/// Logical lines with the 1-based number of the physical line they start on.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let lines = physical_lines(content);
    let mut logical = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line_number = i + 1;
        let line = lines[i].trim_start_matches(is_blank);
        i += 1;
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut joined = line.to_string();
        while ends_with_continuation(&joined) {
            joined.pop();
            match lines.get(i) {
                Some(next) => {
                    joined.push_str(next.trim_start_matches(is_blank));
                    i += 1;
                }
                None => break,
            }
        }
        logical.push((line_number, joined));
    }
    logical
}

/// Split at the first unescaped `=`, `:` or blank.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                return (&line[..i], line[i + 1..].trim_start_matches(is_blank));
            }
            c if is_blank(c) => {
                let rest = line[i..].trim_start_matches(is_blank);
                let rest = rest
                    .strip_prefix(['=', ':'])
                    .map(|r| r.trim_start_matches(is_blank))
                    .unwrap_or(rest);
                return (&line[..i], rest);
            }
            _ => {}
        }
    }
    (line, "")
}

fn read_hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(&hex, 16).ok()
}

/// Decode escapes. Returns `None` on a malformed `\u` escape.
fn unescape(raw: &str) -> Option<String> {
    if !raw.contains('\\') {
        return Some(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let code = read_hex4(&mut chars)?;
                if (0xD800..0xDC00).contains(&code) {
                    // High surrogate: only valid when a low surrogate escape follows.
                    let mut lookahead = chars.clone();
                    if lookahead.next() != Some('\\') || lookahead.next() != Some('u') {
                        return None;
                    }
                    let low = read_hex4(&mut lookahead)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return None;
                    }
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined)?);
                    chars = lookahead;
                } else {
                    out.push(char::from_u32(code)?);
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Some(out)
}
