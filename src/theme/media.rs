//! Media localization: detaching content from a site's upload URLs.
//!
//! Exported markup must not point at the source site, so every
//! absolute media URL is rewritten to a theme-relative reference and
//! recorded in a manifest. Materialization later copies the referenced
//! files into the package's assets directory from the local media
//! library. The rewritten reference embeds `<?php`, which is what
//! routes media-bearing documents through pattern extraction.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use walkdir::WalkDir;

/// Where copied media lands inside the exported package.
pub const ASSETS_SUBDIR: &str = "assets/images";

static MEDIA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s"'<>]+\.(?:png|jpe?g|gif|webp|svg|avif)"#).unwrap()
});

/// One media file referenced by exported content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    pub source_url: String,
    pub file_name: String,
}

/// Collaborator that localizes media references and materializes the
/// files behind them.
pub trait Media {
    /// Rewrite absolute media URLs in `content` to theme-relative
    /// references and return the manifest of rewritten sources.
    fn localize(&self, content: &str) -> (String, Vec<MediaRef>);

    /// Copy manifest entries into `assets_dir`. Entries that cannot be
    /// found locally come back as warnings; missing media never aborts
    /// an export.
    fn materialize(&self, manifest: &[MediaRef], assets_dir: &Path) -> Result<Vec<String>>;
}

/// [`Media`] backed by a local media library directory. Works without
/// one too: URLs are still rewritten, and materialization reports
/// every entry as missing.
pub struct LocalMedia {
    uploads_dir: Option<PathBuf>,
    uploads_base_url: Option<String>,
}

impl LocalMedia {
    pub fn new(uploads_dir: Option<PathBuf>, uploads_base_url: Option<String>) -> Self {
        Self {
            uploads_dir,
            uploads_base_url,
        }
    }

    fn find_source(&self, media: &MediaRef) -> Option<PathBuf> {
        let uploads_dir = self.uploads_dir.as_deref()?;

        // Preferred: map the URL path under the uploads base URL onto
        // the library directory.
        if let Some(base) = &self.uploads_base_url {
            if let Some(rest) = media.source_url.strip_prefix(base.trim_end_matches('/')) {
                let relative = rest.trim_start_matches('/');
                if !relative.contains("..") {
                    let candidate = uploads_dir.join(relative);
                    if candidate.is_file() {
                        return Some(candidate);
                    }
                }
            }
        }

        // Fallback: first file in the library with the same name.
        WalkDir::new(uploads_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .find(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_str() == Some(media.file_name.as_str())
            })
            .map(|entry| entry.into_path())
    }
}

impl Media for LocalMedia {
    fn localize(&self, content: &str) -> (String, Vec<MediaRef>) {
        let mut manifest: Vec<MediaRef> = Vec::new();
        let localized = MEDIA_URL.replace_all(content, |captures: &regex::Captures<'_>| {
            let url = captures[0].to_string();
            let file_name = basename(&url);
            if !manifest.iter().any(|media| media.source_url == url) {
                manifest.push(MediaRef {
                    source_url: url,
                    file_name: file_name.clone(),
                });
            }
            format!(
                "<?php echo esc_url( get_stylesheet_directory_uri() ); ?>/{ASSETS_SUBDIR}/{file_name}"
            )
        });
        (localized.into_owned(), manifest)
    }

    fn materialize(&self, manifest: &[MediaRef], assets_dir: &Path) -> Result<Vec<String>> {
        if manifest.is_empty() {
            return Ok(Vec::new());
        }
        fs::create_dir_all(assets_dir)
            .with_context(|| format!("Failed to create directory: {}", assets_dir.display()))?;

        let mut warnings = Vec::new();
        for media in manifest {
            match self.find_source(media) {
                Some(source) => {
                    let target = assets_dir.join(&media.file_name);
                    fs::copy(&source, &target).with_context(|| {
                        format!(
                            "Failed to copy {} to {}",
                            source.display(),
                            target.display()
                        )
                    })?;
                }
                None => warnings.push(format!("Media not found locally: {}", media.source_url)),
            }
        }
        Ok(warnings)
    }
}

fn basename(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}
