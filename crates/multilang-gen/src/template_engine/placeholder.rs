//! Raw link injection after rendering.
//!
//! Auto-escaping would turn anchor markup into text, so templates may place a
//! literal `{__LANG_LINKS__}` token that is swapped for the raw links once the
//! page has been rendered.

/// Literal token replaced with the unescaped language links.
pub const LANG_LINKS_PLACEHOLDER: &str = "{__LANG_LINKS__}";

/// Replace every placeholder occurrence in `rendered` with `links`, verbatim.
///
/// The token is matched anywhere, including inside rendered data values.
pub fn replace_language_links(rendered: &str, links: &str) -> String {
    rendered.replace(LANG_LINKS_PLACEHOLDER, links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence_unescaped() {
        let page = "<header>{__LANG_LINKS__}</header><footer>{__LANG_LINKS__}</footer>";
        let links = r#"<a href="zh.html">中文</a>"#;

        let out = replace_language_links(page, links);
        assert_eq!(
            out,
            r#"<header><a href="zh.html">中文</a></header><footer><a href="zh.html">中文</a></footer>"#
        );
        assert!(!out.contains(LANG_LINKS_PLACEHOLDER));
    }

    #[test]
    fn test_without_placeholder_is_unchanged() {
        let page = "<p>no links here</p>";
        assert_eq!(replace_language_links(page, "<a>x</a>"), page);
    }

    #[test]
    fn test_empty_links_remove_token() {
        assert_eq!(replace_language_links("[{__LANG_LINKS__}]", ""), "[]");
    }
}
