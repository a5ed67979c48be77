//! The transformation pipeline.
//!
//! Documents flow through a fixed stage order: scope filtering, dash
//! decoding, media localization, gettext escaping, sanitization,
//! patternization, and an optional namespace rewrite at the end. Every
//! stage is a pure function over the document plus the run's
//! [`ExportContext`]; nothing here touches the filesystem.

pub mod context;
pub mod decode;
pub mod escape;
pub mod namespace;
pub mod patternize;
pub mod sanitize;
pub mod select;

use crate::pipeline::context::ExportContext;
use crate::pipeline::select::ThemeDirBaseline;
use crate::theme::media::Media;
use crate::theme::store::{DocumentKind, TemplateDocument};

/// Documents after the full transformation chain, split by kind.
pub struct ExportOutput {
    pub templates: Vec<TemplateDocument>,
    pub parts: Vec<TemplateDocument>,
}

/// Run every pipeline stage over the given documents.
pub fn export(ctx: &ExportContext, media: &dyn Media, docs: Vec<TemplateDocument>) -> ExportOutput {
    let baseline = ThemeDirBaseline {
        theme_dir: &ctx.theme_dir,
    };
    let docs = select::filter(docs, ctx.scope, &baseline);

    let mut output = ExportOutput {
        templates: Vec::new(),
        parts: Vec::new(),
    };
    for mut doc in docs {
        transform(ctx, media, &mut doc);
        match doc.kind {
            DocumentKind::Template => output.templates.push(doc),
            DocumentKind::TemplatePart => output.parts.push(doc),
        }
    }
    output
}

fn transform(ctx: &ExportContext, media: &dyn Media, doc: &mut TemplateDocument) {
    doc.content = decode::decode_dashes(&doc.content);

    let (content, manifest) = media.localize(&doc.content);
    doc.content = content;
    doc.media = manifest;

    doc.content = escape::escape_text(&doc.content, ctx.text_domain());
    doc.content = sanitize::sanitize(&doc.content);
    patternize::patternize(doc, ctx.effective_namespace());

    // The rewrite runs after patternization so it reaches both the
    // final markup and the extracted pattern body.
    if let Some(new_namespace) = &ctx.namespace {
        doc.content = namespace::rewrite_namespace(&doc.content, ctx.text_domain(), new_namespace);
        if let Some(pattern) = &mut doc.pattern {
            pattern.content =
                namespace::rewrite_namespace(&pattern.content, ctx.text_domain(), new_namespace);
        }
    }
}
