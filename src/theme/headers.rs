//! `Key: value` header parsing for theme files.
//!
//! Both `style.css` and pattern files identify themselves through
//! colon-separated fields in a leading comment block. Only the first
//! 8KB of a file is considered, matching the platform that defined the
//! format.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

const HEADER_BYTES: usize = 8192;

static HEADER_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:[ \t]*<\?php)?[ \t/*#@]*([A-Za-z][A-Za-z0-9 ]*?):[ \t]*(.*)$").unwrap()
});

/// Read the slice of `path` that may contain header fields.
pub fn read_header_block(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let head = &bytes[..bytes.len().min(HEADER_BYTES)];
    Ok(String::from_utf8_lossy(head).into_owned())
}

/// Extract every `Key: value` field from a header block into a map
/// keyed by lowercased field name. The first occurrence of a key wins,
/// so fields in the leading comment shadow look-alike lines further
/// down. Callers look up the keys they know; stray matches from file
/// bodies stay unread.
pub fn header_fields(block: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for captures in HEADER_FIELD.captures_iter(block) {
        let key = captures[1].trim().to_ascii_lowercase();
        let value = clean_header_value(&captures[2]);
        fields.entry(key).or_insert(value);
    }
    fields
}

/// Look up one field by its canonical name; absent fields read as "".
pub fn field<'a>(fields: &'a HashMap<String, String>, key: &str) -> &'a str {
    fields
        .get(&key.to_ascii_lowercase())
        .map(String::as_str)
        .unwrap_or("")
}

fn clean_header_value(raw: &str) -> String {
    let mut value = raw;
    if let Some(idx) = value.find("*/") {
        value = &value[..idx];
    }
    if let Some(idx) = value.find("?>") {
        value = &value[..idx];
    }
    value.trim().to_string()
}
