//! Gettext wrapping for translatable block text.
//!
//! Exported themes ship their copy through the localization layer, so
//! literal text inside translatable blocks becomes
//! `<?php echo __('TEXT', 'text-domain');?>`. Only paragraph blocks opt
//! in for now; the list is the extension point for more block types.
//!
//! The literal fragment is re-parsed with an HTML parser, so markup the
//! parser considers malformed comes back repaired. That can reshape
//! unusual content and is a known fidelity limit of this pass.

use scraper::{ElementRef, Html};

use crate::block::{parse, serialize, BlockNode, Chunk};

/// Block types whose literal text gets wrapped in gettext calls.
const LOCALIZED_BLOCKS: &[&str] = &["core/paragraph"];

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Wrap the readable text of every translatable block in `content` in a
/// gettext call bound to `text_domain`. Whitespace-only text is left
/// alone, as are block types outside [`LOCALIZED_BLOCKS`].
pub fn escape_text(content: &str, text_domain: &str) -> String {
    let mut blocks = parse(content);
    for block in &mut blocks {
        escape_block(block, text_domain);
    }
    serialize(&blocks)
}

fn escape_block(block: &mut BlockNode, text_domain: &str) {
    if let Some(name) = block.name.as_deref() {
        if LOCALIZED_BLOCKS.contains(&name) {
            if let Some(Chunk::Html(html)) = block.inner_content.first_mut() {
                *html = localize_fragment(html, text_domain);
            }
        }
    }
    for inner in &mut block.inner_blocks {
        escape_block(inner, text_domain);
    }
}

fn localize_fragment(html: &str, text_domain: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();
    render_children(fragment.root_element(), &mut out, text_domain);
    out
}

fn render_children(element: ElementRef<'_>, out: &mut String, text_domain: &str) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            render_element(child_element, out, text_domain);
        } else if let Some(text) = child.value().as_text() {
            let raw: &str = text;
            if raw.trim().is_empty() {
                out.push_str(raw);
            } else {
                out.push_str(&format!("<?php echo __('{raw}', '{text_domain}');?>"));
            }
        } else if let Some(comment) = child.value().as_comment() {
            let body: &str = comment;
            out.push_str(&format!("<!--{body}-->"));
        }
    }
}

fn render_element(element: ElementRef<'_>, out: &mut String, text_domain: &str) {
    let tag = element.value().name();
    out.push('<');
    out.push_str(tag);
    for (name, value) in element.value().attrs() {
        out.push_str(&format!(" {name}=\"{}\"", encode_attribute(value)));
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&tag) {
        return;
    }
    render_children(element, out, text_domain);
    out.push_str(&format!("</{tag}>"));
}

fn encode_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
