//! Reading and writing the KDE flavour of INI.
use std::fmt::Write as _;
use std::path::Path;

use super::document::Document;
use crate::error::ConfigError;
use crate::operations::FileSystemOps;

/// Parse KDE INI content into a [`Document`].
///
/// Format:
/// ```ini
/// # comment
/// [Group 1][Group 2]
/// Key=Value
/// Other Key = spaced value
/// ```
///
/// Headers and keys preserve their original case. Keys and values are trimmed;
/// everything after the first `=` is the value, including any `#`. A repeated
/// header continues the earlier section and a repeated key overwrites the
/// earlier value.
///
/// # Examples
///
/// ```
/// use kcfg::config::ini::parse_str;
///
/// let doc = parse_str("[Group 1][Group 2][Group 3]\nKey1=One\nKey2=Two\n").unwrap();
/// assert_eq!(doc.get("Group 1][Group 2][Group 3", "Key2"), Some("Two"));
/// ```
///
/// # Errors
///
/// Returns [`ConfigError::Syntax`] if:
/// - An entry appears outside of a section header
/// - A line is neither a header, a comment, nor a `key=value` pair
/// - A key is empty
pub fn parse_str(content: &str) -> Result<Document, ConfigError> {
    let mut doc = Document::new();
    let mut current: Option<String> = None;

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = parse_raw_header(trimmed) {
            doc.insert_section(header);
            current = Some(header.to_string());
        } else if let Some(ref section) = current {
            let (key, value) = parse_kv_line(trimmed).ok_or_else(|| ConfigError::Syntax {
                line: line_num + 1,
                message: format!("invalid key-value pair: {trimmed}"),
            })?;
            doc.set(section, key, &unescape_value(value));
        } else {
            return Err(ConfigError::Syntax {
                line: line_num + 1,
                message: format!("entry outside of section: {trimmed}"),
            });
        }
    }

    Ok(doc)
}

/// Render a [`Document`] the way KDE writes config files.
///
/// Each section is a `[header]` line, its `key=value` entries without padding
/// around `=`, then a blank line. Values are escaped so that line breaks and
/// edge whitespace survive a re-read.
///
/// # Examples
///
/// ```
/// use kcfg::config::document::Document;
/// use kcfg::config::ini::render;
///
/// let mut doc = Document::new();
/// doc.set("Group", "Key", "Value");
/// assert_eq!(render(&doc), "[Group]\nKey=Value\n\n");
/// ```
#[must_use]
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for section in doc.sections() {
        let _ = writeln!(out, "[{}]", section.header);
        for (key, value) in &section.entries {
            let _ = writeln!(out, "{key}={}", escape_value(value));
        }
        out.push('\n');
    }
    out
}

/// Load a config file, treating a missing file as an empty document.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load(fs: &dyn FileSystemOps, path: &Path) -> Result<Document, ConfigError> {
    let content = fs.read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    content.as_deref().map_or_else(|| Ok(Document::new()), parse_str)
}

/// Render `doc` and write it to `path`, replacing the previous contents.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(fs: &dyn FileSystemOps, path: &Path, doc: &Document) -> Result<(), ConfigError> {
    fs.write(path, &render(doc))
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse a `[header]` line preserving original case and inner brackets.
fn parse_raw_header(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

/// Encode a value for a single `key=value` line.
///
/// Backslash, newline, carriage return and tab use backslash escapes. A space
/// at either end becomes `\s`, as values are trimmed on read.
fn escape_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' if i == 0 || i == last => out.push_str("\\s"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode the escapes written by [`escape_value`].
///
/// Unknown escapes and a trailing lone backslash are kept as written.
fn unescape_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('s') => out.push(' '),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Parse a `key=value` line, splitting on the first `=`.
///
/// # Examples
///
/// - `"Sort by=Name"` → `("Sort by", "Name")`
/// - `"Color = 112,111,110"` → `("Color", "112,111,110")`
/// - `"Url=a=b"` → `("Url", "a=b")`
fn parse_kv_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}
