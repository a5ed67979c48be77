//! Package writer: staged assembly with an atomic publish.
//!
//! Every artifact lands in a fresh staging directory next to the
//! target first; one final rename moves the finished package into
//! place. Two exports racing to the same target cannot interleave
//! files that way; the loser's rename fails instead of corrupting the
//! published package. A failed export leaves its staging directory
//! behind for inspection and never touches the target.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};

use crate::theme::patterns::{PatternArtifact, render_pattern_file};
use crate::theme::store::DocumentKind;

#[derive(Debug)]
pub struct PackageWriter {
    target: PathBuf,
    staging: PathBuf,
    force: bool,
}

impl PackageWriter {
    /// Open a staging directory next to `target`. Without `force`, an
    /// existing target fails fast here, before any pipeline work.
    pub fn create(target: &Path, force: bool) -> Result<Self> {
        if target.exists() && !force {
            bail!(
                "Output directory already exists: {}\nHint: pass --force to replace it.",
                target.display()
            );
        }
        let staging = staging_path(target)?;
        fs::create_dir_all(&staging)
            .with_context(|| format!("Failed to create directory: {}", staging.display()))?;
        Ok(Self {
            target: target.to_path_buf(),
            staging,
            force,
        })
    }

    /// Staging root, for collaborators that place their own files
    /// (media materialization).
    pub fn staging_dir(&self) -> &Path {
        &self.staging
    }

    /// Write one document under its kind directory.
    pub fn write_document(&self, kind: DocumentKind, slug: &str, content: &str) -> Result<()> {
        let path = self
            .staging
            .join(kind.dir_name())
            .join(format!("{slug}.html"));
        self.write_at(&path, content)
    }

    /// Write one pattern file under `patterns/`.
    pub fn write_pattern(&self, file_stem: &str, pattern: &PatternArtifact) -> Result<()> {
        let path = self.staging.join("patterns").join(format!("{file_stem}.php"));
        self.write_at(&path, &render_pattern_file(pattern))
    }

    /// Write a file directly under the package root.
    pub fn write_root_file(&self, name: &str, content: &str) -> Result<()> {
        self.write_at(&self.staging.join(name), content)
    }

    /// Move the staged package over the target. With `force` an
    /// existing target is removed first.
    pub fn publish(self) -> Result<PathBuf> {
        if self.target.exists() {
            if !self.force {
                bail!("Output directory already exists: {}", self.target.display());
            }
            fs::remove_dir_all(&self.target).with_context(|| {
                format!("Failed to remove directory: {}", self.target.display())
            })?;
        }
        fs::rename(&self.staging, &self.target).with_context(|| {
            format!("Failed to move staged export to {}", self.target.display())
        })?;
        Ok(self.target)
    }

    fn write_at(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Hidden sibling of the target, unique per process and instant.
fn staging_path(target: &Path) -> Result<PathBuf> {
    let Some(name) = target.file_name().and_then(|name| name.to_str()) else {
        bail!("Invalid output directory: {}", target.display());
    };
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(0);
    let staging_name = format!(".{}.staging-{}-{}", name, process::id(), nanos);
    Ok(match target.parent() {
        Some(parent) => parent.join(staging_name),
        None => PathBuf::from(staging_name),
    })
}
