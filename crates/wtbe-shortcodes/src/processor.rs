//! Shortcode expansion over document text.

use crate::attrs::ShortcodeAttrs;
use crate::handler::Shortcode;
use crate::markup::MarkupTracker;
use crate::parser::find_tag;

/// Expands registered shortcodes in a document.
///
/// Processes text line by line: tags whose name matches a registered
/// handler are replaced by the handler's HTML fragment; unknown tags,
/// malformed brackets, and tags inside `<pre>`/`<code>` regions pass
/// through unchanged. Multiple shortcodes in a document are independent
/// and order-insensitive.
///
/// One processor instance serves one document; create a fresh one per
/// render pass.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::{PlaceholderShortcode, ShortcodeProcessor};
///
/// let mut processor = ShortcodeProcessor::new()
///     .with_shortcode(PlaceholderShortcode::new());
///
/// let html = processor.process(r#"<td>[wtbe_placeholder width="150"]</td>"#);
/// assert!(html.contains("calc(150px"));
/// ```
#[derive(Default)]
pub struct ShortcodeProcessor {
    handlers: Vec<Box<dyn Shortcode>>,
    warnings: Vec<String>,
}

impl ShortcodeProcessor {
    /// Create a processor with no registered shortcodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shortcode handler.
    #[must_use]
    pub fn with_shortcode<S: Shortcode + 'static>(mut self, handler: S) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Expand all registered shortcodes in `input`.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut markup = MarkupTracker::new();
        let mut output = String::with_capacity(input.len());
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            let processed = self.process_line(line, &mut markup);
            output.push_str(&processed);

            // Preserve line endings
            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        if markup.in_literal() {
            self.warnings
                .push("unclosed <pre> or <code> region at end of document".to_owned());
        }

        output
    }

    fn process_line(&mut self, line: &str, markup: &mut MarkupTracker) -> String {
        let mut result = String::with_capacity(line.len());
        let mut remaining = line;

        while let Some((tag, start, end)) = find_tag(remaining) {
            let before = &remaining[..start];
            markup.update(before);
            result.push_str(before);

            let raw = &remaining[start..end];
            if markup.in_literal() {
                result.push_str(raw);
            } else {
                match self.dispatch(tag.name, tag.attrs) {
                    Some(html) => result.push_str(&html),
                    // Unknown tag: pass through unchanged.
                    None => result.push_str(raw),
                }
            }

            remaining = &remaining[end..];
        }

        markup.update(remaining);
        result.push_str(remaining);
        result
    }

    fn dispatch(&mut self, name: &str, attrs_raw: &str) -> Option<String> {
        let idx = self.handlers.iter().position(|h| h.tag() == name)?;
        tracing::debug!(tag = name, "expanding shortcode");
        let attrs = ShortcodeAttrs::parse(attrs_raw);
        Some(self.handlers[idx].render(attrs))
    }

    /// Get all warnings generated during processing.
    ///
    /// Includes warnings from the processor itself and from all handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all_warnings = self.warnings.clone();
        for handler in &self.handlers {
            all_warnings.extend(handler.warnings().iter().cloned());
        }
        all_warnings
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cta::CtaShortcode;
    use crate::placeholder::PlaceholderShortcode;

    fn processor() -> ShortcodeProcessor {
        ShortcodeProcessor::new()
            .with_shortcode(CtaShortcode::new())
            .with_shortcode(PlaceholderShortcode::new())
    }

    #[test]
    fn test_expands_cta() {
        let mut p = processor();
        let html = p.process(r#"Go here: [wtbe_cta url="https://x.com" label="Go"]!"#);
        assert!(html.starts_with("Go here: <a href=\"https://x.com\""));
        assert!(html.ends_with(">Go</a>!"));
    }

    #[test]
    fn test_expands_placeholder() {
        let mut p = processor();
        let html = p.process(r#"[wtbe_placeholder width="5rem"]"#);
        assert!(html.contains("calc(5rem - (2 * var(--wtbe-cell-padding-x, 24px)))"));
    }

    #[test]
    fn test_multiple_tags_on_one_line() {
        let mut p = processor();
        let html = p.process(r#"[wtbe_cta label="A"] mid [wtbe_cta label="B"]"#);
        assert!(html.contains(">A</a> mid <a "));
        assert!(html.contains(">B</a>"));
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let mut p = processor();
        let input = "[gallery id=\"3\"] and [caption]";
        assert_eq!(p.process(input), input);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let mut p = processor();
        let input = "no tags here\njust text\n";
        assert_eq!(p.process(input), input);
    }

    #[test]
    fn test_preserves_trailing_newline() {
        let mut p = processor();
        assert_eq!(p.process("line\n"), "line\n");
        assert_eq!(p.process("line"), "line");
    }

    #[test]
    fn test_skips_tags_inside_pre() {
        let mut p = processor();
        let input = "<pre>\n[wtbe_cta label=\"X\"]\n</pre>\n[wtbe_cta label=\"Y\"]";
        let html = p.process(input);
        assert!(html.contains("[wtbe_cta label=\"X\"]"));
        assert!(html.contains(">Y</a>"));
    }

    #[test]
    fn test_skips_tags_inside_inline_code() {
        let mut p = processor();
        let html = p.process("use <code>[wtbe_placeholder width=\"5\"]</code> like [wtbe_placeholder width=\"5\"]");
        assert!(html.contains("<code>[wtbe_placeholder width=\"5\"]</code>"));
        assert!(html.contains("calc(5px"));
    }

    #[test]
    fn test_handler_warnings_are_collected() {
        let mut p = processor();
        let _ = p.process(r#"[wtbe_placeholder width="50%"]"#);
        let warnings = p.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("invalid width value"));
    }

    #[test]
    fn test_unclosed_pre_warning() {
        let mut p = processor();
        let _ = p.process("<pre>\ntext");
        assert!(p.warnings().iter().any(|w| w.contains("unclosed")));
    }

    #[test]
    fn test_no_handlers_is_passthrough() {
        let mut p = ShortcodeProcessor::new();
        let input = r#"[wtbe_cta url="https://x.com"]"#;
        assert_eq!(p.process(input), input);
    }

    #[test]
    fn test_shortcodes_are_order_insensitive() {
        let mut first = processor();
        let mut second = processor();
        let a = first.process("[wtbe_placeholder width=\"100\"] [wtbe_cta label=\"Z\"]");
        let b = second.process("[wtbe_cta label=\"Z\"] [wtbe_placeholder width=\"100\"]");
        assert!(a.contains("calc(100px") && a.contains(">Z</a>"));
        assert!(b.contains("calc(100px") && b.contains(">Z</a>"));
    }
}
