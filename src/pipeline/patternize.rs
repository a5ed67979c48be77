//! Offloading of code-bearing documents into patterns.
//!
//! Template and part files hold static markup; anything carrying a
//! `<?php` marker cannot execute there. Such content moves wholesale
//! into a pattern artifact (patterns are code files) and the document
//! shrinks to a single reference block pointing at it.

use serde_json::{Map, Value};

use crate::block::{serialize_block, BlockNode};
use crate::theme::patterns::{PatternArtifact, SyncStatus};
use crate::theme::store::TemplateDocument;

/// Move the document's content into an unsynced pattern when it carries
/// embedded code. `namespace` prefixes the pattern slug so patterns
/// from different themes cannot collide. Documents without code pass
/// through untouched.
pub fn patternize(doc: &mut TemplateDocument, namespace: &str) {
    if !doc.content.contains("<?php") {
        return;
    }

    let slug = format!("{namespace}/{}", doc.slug);
    let content = std::mem::take(&mut doc.content);

    let mut attrs = Map::new();
    attrs.insert("slug".to_string(), Value::String(slug.clone()));
    let link = BlockNode::named("core/pattern", attrs);

    doc.content = serialize_block(&link);
    doc.pattern = Some(PatternArtifact {
        slug,
        title: String::new(),
        categories: Vec::new(),
        sync: SyncStatus::Unsynced,
        content,
    });
}
