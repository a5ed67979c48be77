//! Retargeting exported content at a new theme identifier.
//!
//! The rewrite is a literal, case-sensitive, global substring
//! replacement. It retargets gettext text domains and pattern slugs in
//! one sweep, and it will just as happily rewrite an unrelated word
//! that happens to contain the old identifier. Callers pick
//! identifiers unusual enough for that to be acceptable.

/// Replace every occurrence of `old` with `new` in `content`. Returns
/// the content unchanged when either identifier is empty.
pub fn rewrite_namespace(content: &str, old: &str, new: &str) -> String {
    if old.is_empty() || new.is_empty() {
        return content.to_string();
    }
    content.replace(old, new)
}
