//! Parser for comment-delimited block markup.
//!
//! Block documents interleave HTML with comment delimiters of the form
//! `<!-- wp:namespace/name {"attr":"value"} -->` ... `<!-- /wp:namespace/name -->`,
//! with a self-closing variant `<!-- wp:name {"attr":"value"} /-->`. The
//! `core/` namespace is implied when the name carries no namespace.
//!
//! Parsing runs a single forward scan with a stack of open blocks. Bad
//! nesting never fails: an unmatched closer flushes the rest of the
//! document as freeform content, and unclosed openers swallow the
//! remainder of the document as their inner fragment.

use serde_json::{Map, Value};

use super::node::{BlockNode, Chunk};

/// Parse a document into a forest of block nodes.
pub fn parse(document: &str) -> Vec<BlockNode> {
    let mut parser = Parser {
        document,
        offset: 0,
        output: Vec::new(),
        stack: Vec::new(),
    };
    while parser.proceed() {}
    parser.output
}

#[derive(Debug, PartialEq)]
enum DelimiterKind {
    Opener,
    Closer,
    Void,
}

/// A matched block comment delimiter.
struct Delimiter {
    kind: DelimiterKind,
    name: String,
    attrs: Map<String, Value>,
    start: usize,
    length: usize,
}

/// An open block awaiting its closer.
struct Frame {
    block: BlockNode,
    /// Byte offset where the opener delimiter starts.
    token_start: usize,
    /// End of the most recent delimiter inside this block; the next
    /// literal fragment starts here.
    prev_offset: usize,
    /// Start of HTML preceding the opener, when the opener did not sit
    /// flush against the previous token.
    leading_html_start: Option<usize>,
}

struct Parser<'a> {
    document: &'a str,
    offset: usize,
    output: Vec<BlockNode>,
    stack: Vec<Frame>,
}

impl Parser<'_> {
    /// Consume one token. Returns false when parsing is finished.
    fn proceed(&mut self) -> bool {
        let doc = self.document;
        let token = next_delimiter(doc, self.offset);
        let depth = self.stack.len();

        let Some(token) = token else {
            if depth == 0 {
                self.add_freeform();
                return false;
            }
            // Unclosed blocks swallow the rest of the document. Popping
            // in LIFO order lands them in the output innermost first.
            while !self.stack.is_empty() {
                self.add_block_from_stack(None);
            }
            return false;
        };

        let token_end = token.start + token.length;
        match token.kind {
            DelimiterKind::Void => {
                let block = BlockNode::named(token.name, token.attrs);
                if depth == 0 {
                    if token.start > self.offset {
                        self.output
                            .push(BlockNode::freeform(&doc[self.offset..token.start]));
                    }
                    self.output.push(block);
                } else {
                    self.add_inner_block(block, token.start, token_end);
                }
                self.offset = token_end;
                true
            }
            DelimiterKind::Opener => {
                let leading_html_start = (token.start > self.offset).then_some(self.offset);
                self.stack.push(Frame {
                    block: BlockNode::named(token.name, token.attrs),
                    token_start: token.start,
                    prev_offset: token_end,
                    leading_html_start,
                });
                self.offset = token_end;
                true
            }
            DelimiterKind::Closer => {
                if depth == 0 {
                    // No opener to match: give up on block structure and
                    // flush the rest of the document as freeform.
                    self.add_freeform();
                    return false;
                }
                if depth == 1 {
                    self.add_block_from_stack(Some(token.start));
                    self.offset = token_end;
                    return true;
                }
                let Some(mut frame) = self.stack.pop() else {
                    return false;
                };
                let html = &doc[frame.prev_offset..token.start];
                if !html.is_empty() {
                    frame.block.inner_content.push(Chunk::Html(html.to_string()));
                }
                self.add_inner_block(frame.block, frame.token_start, token_end);
                self.offset = token_end;
                true
            }
        }
    }

    /// Emit the rest of the document from the current offset as a
    /// freeform node.
    fn add_freeform(&mut self) {
        let html = &self.document[self.offset..];
        if html.is_empty() {
            return;
        }
        self.output.push(BlockNode::freeform(html));
    }

    /// Pop the top frame and emit it as a top-level block, closing its
    /// inner content at `end_offset` (or the end of the document).
    fn add_block_from_stack(&mut self, end_offset: Option<usize>) {
        let doc = self.document;
        let Some(mut frame) = self.stack.pop() else {
            return;
        };
        let html = match end_offset {
            Some(end) => &doc[frame.prev_offset..end],
            None => &doc[frame.prev_offset..],
        };
        if !html.is_empty() {
            frame.block.inner_content.push(Chunk::Html(html.to_string()));
        }
        if let Some(leading) = frame.leading_html_start {
            self.output
                .push(BlockNode::freeform(&doc[leading..frame.token_start]));
        }
        self.output.push(frame.block);
    }

    /// Attach a finished block to the current top of the stack,
    /// recording any literal fragment that preceded it.
    fn add_inner_block(&mut self, block: BlockNode, token_start: usize, last_offset: usize) {
        let doc = self.document;
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        let html = &doc[parent.prev_offset..token_start];
        if !html.is_empty() {
            parent.block.inner_content.push(Chunk::Html(html.to_string()));
        }
        parent.block.inner_content.push(Chunk::Block);
        parent.block.inner_blocks.push(block);
        parent.prev_offset = last_offset;
    }
}

/// Find the next block comment delimiter at or after `from`.
fn next_delimiter(doc: &str, mut from: usize) -> Option<Delimiter> {
    let bytes = doc.as_bytes();
    loop {
        let found = doc.get(from..)?.find("<!--")?;
        let start = from + found;
        if let Some(delimiter) = match_delimiter(doc, bytes, start) {
            return Some(delimiter);
        }
        from = start + 1;
    }
}

/// Try to match a full delimiter starting at a `<!--` occurrence.
///
/// Grammar: `<!--` ws+ `/`? `wp:` (segment `/`)? segment ws+
/// (json-object ws+)? `/`? `-->` where a segment is `[a-z][a-z0-9_-]*`.
/// The attribute object ends at the first `}` that is followed by
/// whitespace and the comment tail; its body is not brace-balanced.
fn match_delimiter(doc: &str, bytes: &[u8], start: usize) -> Option<Delimiter> {
    let mut i = skip_whitespace(bytes, start + 4);
    if i == start + 4 {
        return None;
    }

    let closer = bytes.get(i) == Some(&b'/');
    if closer {
        i += 1;
    }
    if !starts_with_at(bytes, i, b"wp:") {
        return None;
    }
    i += 3;

    let name_start = i;
    i = scan_name_segment(bytes, i)?;
    if bytes.get(i) == Some(&b'/') {
        i = scan_name_segment(bytes, i + 1)?;
    }
    let raw_name = &doc[name_start..i];

    let after_name = skip_whitespace(bytes, i);
    if after_name == i {
        return None;
    }
    i = after_name;

    let mut attrs = Map::new();
    if bytes.get(i) == Some(&b'{') {
        let json_start = i;
        let mut j = i + 1;
        let json_end = loop {
            match bytes.get(j).copied() {
                None => return None,
                Some(b'}') => {
                    let k = skip_whitespace(bytes, j + 1);
                    if k > j + 1
                        && (starts_with_at(bytes, k, b"-->") || starts_with_at(bytes, k, b"/-->"))
                    {
                        break j + 1;
                    }
                    j += 1;
                }
                Some(_) => j += 1,
            }
        };
        // Malformed attribute JSON degrades to an empty bag.
        attrs = serde_json::from_str(&doc[json_start..json_end]).unwrap_or_default();
        i = skip_whitespace(bytes, json_end);
    }

    let void = bytes.get(i) == Some(&b'/');
    if void {
        i += 1;
    }
    if !starts_with_at(bytes, i, b"-->") {
        return None;
    }

    let name = if raw_name.contains('/') {
        raw_name.to_string()
    } else {
        format!("core/{}", raw_name)
    };
    // A self-closing marker wins over a stray closing slash.
    let kind = if void {
        DelimiterKind::Void
    } else if closer {
        DelimiterKind::Closer
    } else {
        DelimiterKind::Opener
    };

    Some(Delimiter {
        kind,
        name,
        attrs,
        start,
        length: i + 3 - start,
    })
}

fn skip_whitespace(bytes: &[u8], mut at: usize) -> usize {
    while let Some(&b) = bytes.get(at) {
        if matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c') {
            at += 1;
        } else {
            break;
        }
    }
    at
}

fn starts_with_at(bytes: &[u8], at: usize, needle: &[u8]) -> bool {
    bytes.len() >= at + needle.len() && &bytes[at..at + needle.len()] == needle
}

fn scan_name_segment(bytes: &[u8], at: usize) -> Option<usize> {
    if !bytes.get(at)?.is_ascii_lowercase() {
        return None;
    }
    let mut end = at + 1;
    while let Some(&b) = bytes.get(end) {
        if b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-' {
            end += 1;
        } else {
            break;
        }
    }
    Some(end)
}
