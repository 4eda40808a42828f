//! Cell-width placeholder shortcode.
//!
//! Forces a cell to a given outer width by rendering an invisible spacer
//! whose width is the requested value minus twice the horizontal cell
//! padding, so authors specify outer width independent of actual padding.

use std::sync::LazyLock;

use regex::Regex;
use wtbe_style::CELL_PADDING_X_FALLBACK;

use crate::attrs::ShortcodeAttrs;
use crate::escape::escape_html;
use crate::handler::Shortcode;

/// Tag name for the placeholder shortcode.
pub const PLACEHOLDER_TAG: &str = "wtbe_placeholder";

const MISSING_WIDTH_MSG: &str = "Error: width attribute is required for [wtbe_placeholder]";
const INVALID_WIDTH_MSG: &str =
    "Error: invalid width value. Use integer with px, rem, or em (e.g., 100px or 5rem)";

/// Widths must be a number with a px, rem, or em unit. Percentages and all
/// other CSS units are rejected, deliberately.
static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)(px|em|rem)$").expect("width pattern is valid"));

/// Renders `[wtbe_placeholder width="…"]` as a width-forcing spacer.
///
/// Missing and invalid widths render inline error fragments instead of
/// failing; both cases are also collected as warnings.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::{PlaceholderShortcode, Shortcode, ShortcodeAttrs};
///
/// let mut placeholder = PlaceholderShortcode::new();
/// let html = placeholder.render(ShortcodeAttrs::parse(r#"width="150""#));
/// assert!(html.contains("calc(150px - (2 * var(--wtbe-cell-padding-x, 24px)))"));
/// ```
#[derive(Debug, Default)]
pub struct PlaceholderShortcode {
    warnings: Vec<String>,
}

impl PlaceholderShortcode {
    /// Create a new placeholder handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shortcode for PlaceholderShortcode {
    fn tag(&self) -> &'static str {
        PLACEHOLDER_TAG
    }

    fn render(&mut self, attrs: ShortcodeAttrs) -> String {
        let attrs = attrs.with_defaults(&[("width", "")]);
        let width = attrs.get("width").trim();

        if width.is_empty() {
            tracing::warn!("placeholder shortcode is missing its width attribute");
            self.warnings.push(MISSING_WIDTH_MSG.to_owned());
            return error_fragment(MISSING_WIDTH_MSG);
        }

        let Some(width) = normalize_width(width) else {
            tracing::warn!(width, "placeholder shortcode width rejected");
            self.warnings.push(format!("{INVALID_WIDTH_MSG}: \"{width}\""));
            return error_fragment(INVALID_WIDTH_MSG);
        };

        format!(
            r#"<div style="width:calc({width} - (2 * var(--wtbe-cell-padding-x, {CELL_PADDING_X_FALLBACK})));height:0;" aria-hidden="true"></div>"#
        )
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

/// Accept bare numbers (implicit `px`) or exact number+unit strings.
fn normalize_width(width: &str) -> Option<String> {
    if width.chars().all(|c| c.is_ascii_digit() || c == '.') {
        let with_unit = format!("{width}px");
        return WIDTH_RE.is_match(&with_unit).then_some(with_unit);
    }
    WIDTH_RE.is_match(width).then(|| width.to_owned())
}

/// Visually distinct inline error marker.
fn error_fragment(message: &str) -> String {
    format!(
        r#"<div style="background:#ffd6e7;color:#8a1c3a;font-style:italic;padding:4px 8px;">{}</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(raw: &str) -> String {
        PlaceholderShortcode::new().render(ShortcodeAttrs::parse(raw))
    }

    #[test]
    fn test_bare_integer_gets_px() {
        let html = render(r#"width="150""#);
        assert!(html.contains("calc(150px - (2 * var(--wtbe-cell-padding-x, 24px)))"));
        assert!(html.contains(r#"aria-hidden="true""#));
        assert!(html.contains("height:0;"));
    }

    #[test]
    fn test_bare_decimal_gets_px() {
        let html = render(r#"width="99.5""#);
        assert!(html.contains("calc(99.5px - "));
    }

    #[test]
    fn test_unit_values_pass_through() {
        assert!(render(r#"width="5rem""#)
            .contains("calc(5rem - (2 * var(--wtbe-cell-padding-x, 24px)))"));
        assert!(render(r#"width="2.5em""#).contains("calc(2.5em - "));
        assert!(render(r#"width="120px""#).contains("calc(120px - "));
    }

    #[test]
    fn test_missing_width_renders_error() {
        let html = render("");
        assert!(html.contains("width attribute is required for [wtbe_placeholder]"));
        assert!(html.contains("font-style:italic"));
    }

    #[test]
    fn test_blank_width_renders_error() {
        let html = render(r#"width="   ""#);
        assert!(html.contains("width attribute is required"));
    }

    #[test]
    fn test_percentage_rejected() {
        let html = render(r#"width="50%""#);
        assert!(html.contains("invalid width value"));
    }

    #[test]
    fn test_other_units_rejected() {
        for value in ["10vw", "3pt", "px", "10 px", "abc", "1.2.3", "."] {
            let html = PlaceholderShortcode::new()
                .render(ShortcodeAttrs::parse(&format!(r#"width="{value}""#)));
            assert!(html.contains("invalid width value"), "{value} should be rejected");
        }
    }

    #[test]
    fn test_negative_rejected() {
        assert!(render(r#"width="-5px""#).contains("invalid width value"));
    }

    #[test]
    fn test_error_messages_collected_as_warnings() {
        let mut handler = PlaceholderShortcode::new();
        let _ = handler.render(ShortcodeAttrs::parse(""));
        let _ = handler.render(ShortcodeAttrs::parse(r#"width="50%""#));
        assert_eq!(handler.warnings().len(), 2);
        assert!(handler.warnings()[1].contains("50%"));
    }

    #[test]
    fn test_error_fragment_shape() {
        let html = render("");
        assert!(html.starts_with(r#"<div style="background:"#));
        assert!(html.ends_with("</div>"));
    }
}
