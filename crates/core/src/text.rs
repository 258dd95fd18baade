//! Small text helpers shared by models and handlers.

/// Length (in characters) of an auto-derived blog excerpt.
const EXCERPT_LEN: usize = 150;

/// Derive a blog excerpt from full post content.
///
/// Takes the first 150 characters of the content and appends `"..."`.
/// Operates on characters, not bytes, so multi-byte content never splits
/// a code point.
pub fn derive_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_keeps_everything() {
        assert_eq!(derive_excerpt("hello"), "hello...");
    }

    #[test]
    fn long_content_is_truncated_to_150_chars() {
        let content = "x".repeat(400);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn multibyte_content_does_not_split_code_points() {
        let content = "é".repeat(200);
        let excerpt = derive_excerpt(&content);
        assert_eq!(excerpt.chars().count(), 153);
    }
}
