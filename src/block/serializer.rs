//! Serializer turning block trees back into comment-delimited markup.

use serde_json::{Map, Value};

use super::node::{BlockNode, Chunk};

/// Serialize a forest of blocks by concatenating each block's markup.
pub fn serialize(blocks: &[BlockNode]) -> String {
    blocks.iter().map(serialize_block).collect()
}

/// Serialize a single block, recursing through its inner blocks in the
/// order given by the content markers.
pub fn serialize_block(block: &BlockNode) -> String {
    let mut content = String::new();
    let mut inner = block.inner_blocks.iter();
    for chunk in &block.inner_content {
        match chunk {
            Chunk::Html(html) => content.push_str(html),
            Chunk::Block => {
                if let Some(child) = inner.next() {
                    content.push_str(&serialize_block(child));
                }
            }
        }
    }
    comment_delimited(block.name.as_deref(), &block.attrs, &content)
}

fn comment_delimited(name: Option<&str>, attrs: &Map<String, Value>, content: &str) -> String {
    // Freeform nodes have no delimiters, only their raw content.
    let Some(name) = name else {
        return content.to_string();
    };

    let name = name.strip_prefix("core/").unwrap_or(name);
    let attrs = if attrs.is_empty() {
        String::new()
    } else {
        format!("{} ", serialize_attributes(attrs))
    };

    if content.is_empty() {
        format!("<!-- wp:{} {}/-->", name, attrs)
    } else {
        format!("<!-- wp:{} {}-->{}<!-- /wp:{} -->", name, attrs, content, name)
    }
}

/// Encode an attribute bag as JSON that is safe to embed inside an HTML
/// comment. `--` would terminate the comment early and angle brackets
/// confuse HTML parsers, so those characters (and escaped quotes) are
/// rewritten as unicode escapes. Decoding the JSON restores them.
pub fn serialize_attributes(attrs: &Map<String, Value>) -> String {
    Value::Object(attrs.clone())
        .to_string()
        .replace("--", "\\u002d\\u002d")
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace("\\\"", "\\u0022")
}
