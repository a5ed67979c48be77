//! Common utility functions shared across the codebase.

/// Turns free-form text into a lowercase, hyphen-separated slug.
///
/// Runs of characters outside `[a-zA-Z0-9]` collapse into a single
/// hyphen; leading and trailing separators are dropped.
///
/// # Examples
///
/// ```
/// use themeport::utils::slugify;
///
/// assert_eq!(slugify("My Fancy Theme"), "my-fancy-theme");
/// assert_eq!(slugify("  Twenty   Two  "), "twenty-two");
/// assert_eq!(slugify("Cafe & Bar 2.0"), "cafe-bar-2-0");
/// assert_eq!(slugify("---"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}
