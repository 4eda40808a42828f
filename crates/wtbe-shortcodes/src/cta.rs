//! CTA link shortcode.

use std::fmt::Write;

use crate::attrs::ShortcodeAttrs;
use crate::escape::{esc_url, escape_html, sanitize_css_class};
use crate::handler::Shortcode;

/// Tag name for the CTA shortcode.
pub const CTA_TAG: &str = "wtbe_cta";

const DEFAULTS: &[(&str, &str)] = &[
    ("url", "#"),
    ("label", "Click Here"),
    ("newtab", "true"),
    ("nofollow", "false"),
    ("sponsored", "false"),
    ("class", ""),
    ("id", ""),
];

/// Renders `[wtbe_cta …]` as a styled anchor.
///
/// Rendering always succeeds: a missing, empty, or rejected `url` falls
/// back to `"#"`, and unrecognized boolean values read as false.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::{CtaShortcode, Shortcode, ShortcodeAttrs};
///
/// let mut cta = CtaShortcode::new();
/// let html = cta.render(ShortcodeAttrs::parse(r#"url="https://x.com" label="Go""#));
/// assert!(html.starts_with(r#"<a href="https://x.com""#));
/// assert!(html.ends_with(">Go</a>"));
/// ```
#[derive(Debug, Default)]
pub struct CtaShortcode;

impl CtaShortcode {
    /// Create a new CTA handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Shortcode for CtaShortcode {
    fn tag(&self) -> &'static str {
        CTA_TAG
    }

    fn render(&mut self, attrs: ShortcodeAttrs) -> String {
        let attrs = attrs.with_defaults(DEFAULTS);

        let mut href = esc_url(attrs.get("url"));
        if href.is_empty() {
            href.push('#');
        }

        let mut class = "wtbe-cta".to_owned();
        let extra = sanitize_css_class(attrs.get("class"));
        if !extra.is_empty() {
            write!(class, " {extra}").unwrap();
        }

        let newtab = attrs.get_bool("newtab");

        let mut out = String::new();
        write!(out, r#"<a href="{href}" class="{class}""#).unwrap();

        let id = attrs.get("id").trim();
        if !id.is_empty() {
            write!(out, r#" id="{}""#, escape_html(id)).unwrap();
        }

        if newtab {
            out.push_str(r#" target="_blank""#);
        }

        // Fixed order: nofollow, sponsored, then the newtab pair.
        let mut rel = Vec::new();
        if attrs.get_bool("nofollow") {
            rel.push("nofollow");
        }
        if attrs.get_bool("sponsored") {
            rel.push("sponsored");
        }
        if newtab {
            rel.push("noopener");
            rel.push("noreferrer");
        }
        if !rel.is_empty() {
            write!(out, r#" rel="{}""#, rel.join(" ")).unwrap();
        }

        write!(out, ">{}</a>", escape_html(attrs.get("label"))).unwrap();
        out
    }
}
