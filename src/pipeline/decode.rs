//! First content pass: undo the upstream dash encoding.
//!
//! Stored document content carries `--` escaped as the literal byte
//! sequence `\u002d` (it leaks out of attribute JSON into CSS custom
//! property names and similar spots). Exports restore real dashes
//! before the first parse; the serializer re-escapes attribute JSON on
//! the way back out.

/// Replace every literal `\u002d` escape with a dash.
pub fn decode_dashes(content: &str) -> String {
    content.replace("\\u002d", "-")
}

#[cfg(test)]
mod tests {
    use crate::pipeline::decode::*;

    #[test]
    fn test_decodes_css_custom_properties() {
        let content =
            "<!-- wp:group {\"style\":\"\\u002d\\u002dgap: 2px\"} -->x<!-- /wp:group -->";
        assert_eq!(
            decode_dashes(content),
            r#"<!-- wp:group {"style":"--gap: 2px"} -->x<!-- /wp:group -->"#
        );
    }

    #[test]
    fn test_decoded_attrs_parse_to_real_dashes() {
        let content =
            "<!-- wp:group {\"className\":\"is\\u002dstyle\\u002dwide\"} -->x<!-- /wp:group -->";
        let blocks = crate::block::parse(&decode_dashes(content));
        assert_eq!(
            blocks[0].attrs.get("className"),
            Some(&serde_json::json!("is-style-wide"))
        );
    }

    #[test]
    fn test_leaves_plain_content_alone() {
        let content = "<p>u002d is fine without the backslash</p>";
        assert_eq!(decode_dashes(content), content);
    }
}
