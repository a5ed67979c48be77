use serde_json::{Map, Value};

/// A single node in a parsed block tree.
///
/// `name` holds the fully qualified block type (e.g. `core/paragraph`).
/// Freeform markup that sits outside any block delimiter is represented
/// as a node with `name: None` and a single HTML chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockNode {
    pub name: Option<String>,
    /// Attribute bag in source order (serde_json preserves key order).
    pub attrs: Map<String, Value>,
    pub inner_blocks: Vec<BlockNode>,
    /// Interleaving of literal fragments and child block positions.
    ///
    /// Invariant: the number of `Chunk::Block` entries equals
    /// `inner_blocks.len()`, and they appear in the same order.
    pub inner_content: Vec<Chunk>,
}

/// One entry in a block's inner content sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// A literal markup fragment.
    Html(String),
    /// Placeholder for the next entry of `inner_blocks`.
    Block,
}

impl BlockNode {
    pub fn named(name: impl Into<String>, attrs: Map<String, Value>) -> Self {
        Self {
            name: Some(name.into()),
            attrs,
            inner_blocks: Vec::new(),
            inner_content: Vec::new(),
        }
    }

    pub fn freeform(html: impl Into<String>) -> Self {
        Self {
            name: None,
            attrs: Map::new(),
            inner_blocks: Vec::new(),
            inner_content: vec![Chunk::Html(html.into())],
        }
    }

    pub fn is_freeform(&self) -> bool {
        self.name.is_none()
    }

    /// First literal fragment of the block, if any.
    pub fn first_html_chunk(&self) -> Option<&str> {
        self.inner_content.iter().find_map(|chunk| match chunk {
            Chunk::Html(html) => Some(html.as_str()),
            Chunk::Block => None,
        })
    }
}
