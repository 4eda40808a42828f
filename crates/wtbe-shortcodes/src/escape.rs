//! Escaping and sanitizing helpers for rendered fragments.

/// Escape text for HTML element and attribute context.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::escape_html;
///
/// assert_eq!(escape_html(r#"<b>"go"</b>"#), "&lt;b&gt;&quot;go&quot;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// URL schemes allowed in `href` output.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "ftp"];

/// Escape a URL for use in an `href` attribute.
///
/// Rejects disallowed schemes (`javascript:`, `data:`, …) by returning an
/// empty string, strips control characters, and encodes characters that are
/// unsafe inside a quoted attribute. Scheme-less, relative, and
/// fragment-only URLs pass through with encoding only.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::esc_url;
///
/// assert_eq!(esc_url("https://x.com/a b"), "https://x.com/a%20b");
/// assert_eq!(esc_url("javascript:alert(1)"), "");
/// assert_eq!(esc_url("#section"), "#section");
/// ```
#[must_use]
pub fn esc_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    if let Some(scheme) = leading_scheme(url) {
        if !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
            return String::new();
        }
    }

    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            ' ' => out.push_str("%20"),
            '"' => out.push_str("%22"),
            '\'' => out.push_str("%27"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            '&' => out.push_str("&amp;"),
            c if c.is_control() => {}
            _ => out.push(c),
        }
    }
    out
}

/// Extract the URL scheme, if the string starts with one.
///
/// A colon only separates a scheme when it appears before any `/`, `?` or
/// `#`, and when everything before it is scheme-shaped.
fn leading_scheme(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let scheme = &url[..colon];

    let path_start = url.find(['/', '?', '#']);
    if path_start.is_some_and(|p| p < colon) {
        return None;
    }

    let scheme_shaped = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
    scheme_shaped.then_some(scheme)
}

/// Sanitize a space-separated list of CSS class names.
///
/// Per token, characters outside `[A-Za-z0-9_-]` are stripped; tokens left
/// empty are dropped.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::sanitize_css_class;
///
/// assert_eq!(sanitize_css_class("my-class <evil>"), "my-class evil");
/// assert_eq!(sanitize_css_class("\"'"), "");
/// ```
#[must_use]
pub fn sanitize_css_class(classes: &str) -> String {
    classes
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_html_entities() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("it's \"fine\""), "it&#39;s &quot;fine&quot;");
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_esc_url_allows_common_schemes() {
        assert_eq!(esc_url("https://x.com"), "https://x.com");
        assert_eq!(esc_url("http://x.com"), "http://x.com");
        assert_eq!(esc_url("mailto:a@b.com"), "mailto:a@b.com");
        assert_eq!(esc_url("tel:+123"), "tel:+123");
    }

    #[test]
    fn test_esc_url_rejects_disallowed_schemes() {
        assert_eq!(esc_url("javascript:alert(1)"), "");
        assert_eq!(esc_url("JaVaScRiPt:alert(1)"), "");
        assert_eq!(esc_url("data:text/html;base64,xx"), "");
        assert_eq!(esc_url("vbscript:x"), "");
    }

    #[test]
    fn test_esc_url_relative_and_fragment() {
        assert_eq!(esc_url("/docs/page"), "/docs/page");
        assert_eq!(esc_url("#section"), "#section");
        assert_eq!(esc_url("page.html?a=1"), "page.html?a=1");
    }

    #[test]
    fn test_esc_url_colon_in_path_is_not_a_scheme() {
        assert_eq!(esc_url("/a/b:c"), "/a/b:c");
        assert_eq!(esc_url("https://x.com/a:b"), "https://x.com/a:b");
    }

    #[test]
    fn test_esc_url_encodes_unsafe_characters() {
        assert_eq!(esc_url("https://x.com/a b"), "https://x.com/a%20b");
        assert_eq!(esc_url("https://x.com/\"quote\""), "https://x.com/%22quote%22");
        assert_eq!(esc_url("https://x.com/?a=1&b=2"), "https://x.com/?a=1&amp;b=2");
    }

    #[test]
    fn test_esc_url_strips_controls_and_trims() {
        assert_eq!(esc_url("  https://x.com  "), "https://x.com");
        assert_eq!(esc_url("https://x.com/\na"), "https://x.com/a");
    }

    #[test]
    fn test_esc_url_empty() {
        assert_eq!(esc_url(""), "");
        assert_eq!(esc_url("   "), "");
    }

    #[test]
    fn test_sanitize_css_class_strips_per_token() {
        assert_eq!(sanitize_css_class("foo bar_baz qux-1"), "foo bar_baz qux-1");
        assert_eq!(sanitize_css_class("a.b c<d>"), "ab cd");
    }

    #[test]
    fn test_sanitize_css_class_drops_empty_tokens() {
        assert_eq!(sanitize_css_class("<> ok !!"), "ok");
        assert_eq!(sanitize_css_class(""), "");
    }
}
