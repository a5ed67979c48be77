//! Document store: the merged template/part listing an export reads.
//!
//! Three layers contribute documents: the parent theme (when the
//! active theme is a child), the active theme, and user customization
//! files. Later layers supersede earlier ones slug by slug, mirroring
//! how the running site resolves which template to use. The listing is
//! read fresh for every export.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::theme::media::MediaRef;
use crate::theme::patterns::PatternArtifact;

/// Document kinds the exporter handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Template,
    TemplatePart,
}

impl DocumentKind {
    /// Directory holding this kind inside a theme.
    pub fn dir_name(self) -> &'static str {
        match self {
            DocumentKind::Template => "templates",
            DocumentKind::TemplatePart => "parts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Template => "template",
            DocumentKind::TemplatePart => "part",
        }
    }
}

/// Where a document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Shipped by the active theme or its parent.
    Builtin,
    /// Saved from the site editor into the customizations layer.
    UserCustomized,
}

/// One template or part, as loaded from disk and carried through the
/// export pipeline.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub slug: String,
    pub kind: DocumentKind,
    pub origin: Origin,
    pub content: String,
    pub media: Vec<MediaRef>,
    pub pattern: Option<PatternArtifact>,
}

/// Read-only view over the three document layers.
pub struct DocumentStore<'a> {
    theme_dir: &'a Path,
    parent_theme_dir: Option<&'a Path>,
    customizations_dir: &'a Path,
}

impl<'a> DocumentStore<'a> {
    pub fn new(
        theme_dir: &'a Path,
        parent_theme_dir: Option<&'a Path>,
        customizations_dir: &'a Path,
    ) -> Self {
        Self {
            theme_dir,
            parent_theme_dir,
            customizations_dir,
        }
    }

    /// Merged document list for one kind, ordered by slug.
    pub fn list(&self, kind: DocumentKind) -> Result<Vec<TemplateDocument>> {
        let mut merged = BTreeMap::new();
        if let Some(parent) = self.parent_theme_dir {
            collect_layer(&parent.join(kind.dir_name()), kind, Origin::Builtin, &mut merged)?;
        }
        collect_layer(
            &self.theme_dir.join(kind.dir_name()),
            kind,
            Origin::Builtin,
            &mut merged,
        )?;
        collect_layer(
            &self.customizations_dir.join(kind.dir_name()),
            kind,
            Origin::UserCustomized,
            &mut merged,
        )?;
        Ok(merged.into_values().collect())
    }

    /// Merged list across both kinds: templates first, then parts.
    pub fn list_all(&self) -> Result<Vec<TemplateDocument>> {
        let mut documents = self.list(DocumentKind::Template)?;
        documents.extend(self.list(DocumentKind::TemplatePart)?);
        Ok(documents)
    }

    /// Every user-customized document file currently on disk. Parts
    /// come first, matching the order they get cleared in.
    pub fn user_customized_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for kind in [DocumentKind::TemplatePart, DocumentKind::Template] {
            let dir = self.customizations_dir.join(kind.dir_name());
            if !dir.is_dir() {
                continue;
            }
            let mut layer = document_files(&dir)?;
            layer.sort();
            paths.extend(layer);
        }
        Ok(paths)
    }
}

fn collect_layer(
    dir: &Path,
    kind: DocumentKind,
    origin: Origin,
    merged: &mut BTreeMap<String, TemplateDocument>,
) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }
    for path in document_files(dir)? {
        let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        merged.insert(
            slug.to_string(),
            TemplateDocument {
                slug: slug.to_string(),
                kind,
                origin,
                content,
                media: Vec::new(),
                pattern: None,
            },
        );
    }
    Ok(())
}

fn document_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "html") && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
