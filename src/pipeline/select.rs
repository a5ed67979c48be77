//! Scope filtering: which documents take part in an export.

use std::path::Path;

use super::context::Scope;
use crate::theme::store::{DocumentKind, Origin, TemplateDocument};

/// Answers whether the active theme ships a given document on disk.
///
/// The production impl checks the theme directory; tests substitute a
/// fixed answer.
pub trait ThemeBaseline {
    fn has_document(&self, kind: DocumentKind, slug: &str) -> bool;
}

/// Baseline backed by the active theme's template directories.
pub struct ThemeDirBaseline<'a> {
    pub theme_dir: &'a Path,
}

impl ThemeBaseline for ThemeDirBaseline<'_> {
    fn has_document(&self, kind: DocumentKind, slug: &str) -> bool {
        self.theme_dir
            .join(kind.dir_name())
            .join(format!("{}.html", slug))
            .exists()
    }
}

/// Apply the scope rules to a document list, preserving order.
///
/// User-customized documents are exported under every scope. Builtins
/// depend on the scope: dropped for `User`, kept for `Current` only
/// when the active theme itself materializes the file, always kept for
/// `All`.
pub fn filter(
    docs: Vec<TemplateDocument>,
    scope: Scope,
    baseline: &dyn ThemeBaseline,
) -> Vec<TemplateDocument> {
    docs.into_iter()
        .filter(|doc| should_include(doc, scope, baseline))
        .collect()
}

fn should_include(doc: &TemplateDocument, scope: Scope, baseline: &dyn ThemeBaseline) -> bool {
    if doc.origin == Origin::UserCustomized {
        return true;
    }
    match scope {
        Scope::User => false,
        Scope::Current => baseline.has_document(doc.kind, &doc.slug),
        Scope::All => true,
    }
}
