use std::path::PathBuf;

use clap::ValueEnum;

use crate::theme::meta::ThemeMeta;

/// Which documents an export includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scope {
    /// Every template and part, builtin or customized.
    All,
    /// Builtins shipped by the active theme itself, plus customizations.
    Current,
    /// User customizations only.
    User,
}

/// Metadata for the theme package being produced.
#[derive(Debug, Clone, Default)]
pub struct TargetMeta {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub author: String,
    pub author_uri: String,
    pub theme_uri: String,
    pub version: String,
}

/// Everything the pipeline stages may consult for one export run.
///
/// Stages receive this explicitly; none of them reads ambient process
/// state, so two contexts can describe two different exports side by
/// side.
#[derive(Debug, Clone)]
pub struct ExportContext {
    pub scope: Scope,
    /// Active theme metadata parsed from its style.css.
    pub theme: ThemeMeta,
    /// Metadata for the exported package.
    pub target: TargetMeta,
    /// Replacement identifier for the active text domain, when renaming.
    pub namespace: Option<String>,
    pub theme_dir: PathBuf,
    pub parent_theme_dir: Option<PathBuf>,
    pub customizations_dir: PathBuf,
    pub uploads_dir: Option<PathBuf>,
    pub uploads_base_url: Option<String>,
    pub verbose: bool,
}

impl ExportContext {
    /// Text domain written into gettext calls. The namespace rewrite
    /// retargets these afterwards when a new identifier is set.
    pub fn text_domain(&self) -> &str {
        &self.theme.text_domain
    }

    /// Namespace prefix for derived pattern slugs.
    pub fn effective_namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(&self.theme.text_domain)
    }
}
