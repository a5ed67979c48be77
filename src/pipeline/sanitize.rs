//! Removal of environment-bound attributes before export.
//!
//! Live documents reference their site: template parts pin the active
//! theme's slug, navigations point at a stored menu post, media blocks
//! carry attachment ids, query blocks carry per-page state. None of
//! those survive a move to another install, so each rule strips the
//! binding while leaving the rest of the block alone.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::block::{parse, serialize, visit, BlockNode};

static WP_IMAGE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"wp-image-\d+").unwrap());

/// One scrubbing rule: which block types it covers and the edit to run.
struct Rule {
    block_types: &'static [&'static str],
    apply: fn(&mut BlockNode),
}

static RULES: &[Rule] = &[
    Rule {
        block_types: &["core/template-part"],
        apply: remove_theme_binding,
    },
    Rule {
        block_types: &["core/navigation"],
        apply: remove_menu_reference,
    },
    Rule {
        block_types: &["core/image", "core/cover"],
        apply: remove_attachment_identity,
    },
    Rule {
        block_types: &["core/query"],
        apply: remove_query_state,
    },
];

/// Strip environment-specific attributes from every block in `content`,
/// nested blocks included. Blocks matching no rule pass through
/// untouched; running the pass twice changes nothing further.
pub fn sanitize(content: &str) -> String {
    let mut blocks = parse(content);
    for path in visit::paths(&blocks) {
        if let Some(block) = visit::get_mut(&mut blocks, &path) {
            apply_rules(block);
        }
    }
    serialize(&blocks)
}

fn apply_rules(block: &mut BlockNode) {
    let Some(name) = block.name.clone() else {
        return;
    };
    for rule in RULES {
        if rule.block_types.contains(&name.as_str()) {
            (rule.apply)(block);
        }
    }
}

fn remove_theme_binding(block: &mut BlockNode) {
    block.attrs.remove("theme");
}

fn remove_menu_reference(block: &mut BlockNode) {
    block.attrs.remove("ref");
}

fn remove_attachment_identity(block: &mut BlockNode) {
    block.attrs.remove("id");

    let Some(Value::String(class)) = block.attrs.get("className") else {
        return;
    };
    let stripped = WP_IMAGE_CLASS.replace_all(class, "");
    let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        block.attrs.remove("className");
    } else {
        block
            .attrs
            .insert("className".to_string(), Value::String(normalized));
    }
}

fn remove_query_state(block: &mut BlockNode) {
    block.attrs.remove("taxQuery");
    block.attrs.remove("queryId");
}
