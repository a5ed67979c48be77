//! Pattern artifacts and the filesystem pattern registry.
//!
//! Patterns live as `patterns/*.php` files whose leading comment block
//! carries their identity. The registry scans the active theme first,
//! then the parent theme, skipping any slug it has already seen, and
//! addresses entries by a derived numeric id so callers never deal in
//! file paths.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use glob::glob;

use crate::theme::headers;

/// Whether pattern instances stay linked to the pattern file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Unsynced,
}

impl SyncStatus {
    /// Header-file spelling of the status.
    pub fn as_header(self) -> &'static str {
        match self {
            SyncStatus::Synced => "yes",
            SyncStatus::Unsynced => "no",
        }
    }

    fn from_header(value: &str) -> Self {
        if value == "yes" {
            SyncStatus::Synced
        } else {
            SyncStatus::Unsynced
        }
    }
}

/// A pattern's portable identity and body.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternArtifact {
    pub slug: String,
    pub title: String,
    pub categories: Vec<String>,
    pub sync: SyncStatus,
    pub content: String,
}

/// A pattern found on disk, addressable through the registry.
#[derive(Debug, Clone)]
pub struct RegisteredPattern {
    pub id: String,
    pub path: PathBuf,
    pub description: String,
    pub pattern: PatternArtifact,
}

/// Registry id for a slug: a fixed prefix plus the slug's CRC-32, so
/// ids are stable across runs and machines.
pub fn pattern_id(slug: &str) -> String {
    format!("8888{}", crc32(slug.as_bytes()))
}

/// Render a pattern in the on-disk file format: a header comment block
/// followed by the body. Empty fields keep their header lines so the
/// format stays uniform.
pub fn render_pattern_file(pattern: &PatternArtifact) -> String {
    format!(
        "<?php\n/**\n* Title: {}\n* Slug: {}\n* Categories: {}\n* Synced: {}\n*/\n?>\n{}",
        pattern.title,
        pattern.slug,
        pattern.categories.join(", "),
        pattern.sync.as_header(),
        pattern.content,
    )
}

/// Filesystem-backed pattern registry over one or two theme layers.
pub struct PatternRegistry {
    patterns: Vec<RegisteredPattern>,
}

impl PatternRegistry {
    /// Scan `theme_dir` (and `parent_theme_dir` when given) for pattern
    /// files. The active theme is scanned first; later files reusing an
    /// already-seen slug are skipped, as are files without a Slug
    /// header.
    pub fn scan(theme_dir: &Path, parent_theme_dir: Option<&Path>) -> Result<Self> {
        let mut patterns: Vec<RegisteredPattern> = Vec::new();
        let mut dirs = vec![theme_dir];
        if let Some(parent) = parent_theme_dir {
            dirs.push(parent);
        }

        for dir in dirs {
            let expr = dir.join("patterns").join("*.php");
            let Some(expr) = expr.to_str() else {
                bail!("Pattern directory path is not valid UTF-8: {}", expr.display());
            };
            for entry in glob(expr).with_context(|| format!("Invalid pattern glob: {expr}"))? {
                let path = entry.context("Failed to read pattern directory entry")?;
                let Some(registered) = load_pattern(&path)? else {
                    continue;
                };
                let seen = patterns
                    .iter()
                    .any(|known| known.pattern.slug == registered.pattern.slug);
                if !seen {
                    patterns.push(registered);
                }
            }
        }
        Ok(Self { patterns })
    }

    pub fn list(&self) -> &[RegisteredPattern] {
        &self.patterns
    }

    /// Look up one pattern by its derived id.
    pub fn get(&self, id: &str) -> Option<&RegisteredPattern> {
        self.patterns.iter().find(|pattern| pattern.id == id)
    }

    /// Replace the body of the pattern with `id`, keeping its header,
    /// and rewrite its file.
    pub fn update(&mut self, id: &str, content: &str) -> Result<&RegisteredPattern> {
        let Some(registered) = self.patterns.iter_mut().find(|pattern| pattern.id == id) else {
            bail!("No pattern with id {}", id);
        };
        registered.pattern.content = content.to_string();
        let rendered = render_pattern_file(&registered.pattern);
        fs::write(&registered.path, rendered)
            .with_context(|| format!("Failed to write file: {}", registered.path.display()))?;
        Ok(registered)
    }

    /// Remove the pattern with `id` from disk and from the registry.
    pub fn delete(&mut self, id: &str) -> Result<RegisteredPattern> {
        let Some(index) = self.patterns.iter().position(|pattern| pattern.id == id) else {
            bail!("No pattern with id {}", id);
        };
        let registered = self.patterns.remove(index);
        fs::remove_file(&registered.path)
            .with_context(|| format!("Failed to delete file: {}", registered.path.display()))?;
        Ok(registered)
    }
}

fn load_pattern(path: &Path) -> Result<Option<RegisteredPattern>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let fields = headers::header_fields(&text);

    let slug = headers::field(&fields, "Slug").to_string();
    if slug.is_empty() {
        return Ok(None);
    }

    Ok(Some(RegisteredPattern {
        id: pattern_id(&slug),
        path: path.to_path_buf(),
        description: headers::field(&fields, "Description").to_string(),
        pattern: PatternArtifact {
            title: headers::field(&fields, "Title").to_string(),
            categories: split_list(headers::field(&fields, "Categories")),
            sync: SyncStatus::from_header(headers::field(&fields, "Synced")),
            content: pattern_body(&text),
            slug,
        },
    }))
}

/// Body of a pattern file: everything after the header's closing `?>`
/// and the newline glued to it. Files without a `?>` are all body.
fn pattern_body(text: &str) -> String {
    match text.find("?>") {
        Some(idx) => {
            let after = &text[idx + 2..];
            let after = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);
            after.to_string()
        }
        None => text.to_string(),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

static CRC_TABLE: LazyLock<[u32; 256]> = LazyLock::new(|| {
    let mut table = [0u32; 256];
    for (n, slot) in table.iter_mut().enumerate() {
        let mut c = n as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 { 0xEDB88320 ^ (c >> 1) } else { c >> 1 };
        }
        *slot = c;
    }
    table
});

/// CRC-32 (IEEE), the polynomial behind the reference platform's
/// `crc32()`. Ids derived from it match ids derived there.
fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFFFFFFu32;
    for &byte in bytes {
        crc = CRC_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    crc ^ 0xFFFFFFFF
}
