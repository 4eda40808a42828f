//! Shortcode surface for table block enhancements.
//!
//! Documents are plain text with embedded bracketed leaf tags
//! (`[wtbe_cta url="…"]`, `[wtbe_placeholder width="…"]`). The
//! [`ShortcodeProcessor`] locates tags outside of `<pre>`/`<code>` regions,
//! parses their attributes, and substitutes the HTML fragment produced by
//! the registered [`Shortcode`] handler. Unknown tags and malformed bodies
//! pass through unchanged.
//!
//! Rendering is total: handlers degrade to defaults or inline error
//! fragments instead of returning errors, so one bad tag never stops the
//! rest of the document from rendering.
//!
//! # Example
//!
//! ```
//! use wtbe_shortcodes::{CtaShortcode, PlaceholderShortcode, ShortcodeProcessor};
//!
//! let mut processor = ShortcodeProcessor::new()
//!     .with_shortcode(CtaShortcode::new())
//!     .with_shortcode(PlaceholderShortcode::new());
//!
//! let html = processor.process(r#"See [wtbe_cta url="https://example.com" label="Docs"]."#);
//! assert!(html.contains(r#"href="https://example.com""#));
//! assert!(html.contains(">Docs</a>"));
//! ```

mod attrs;
mod cta;
mod escape;
mod handler;
mod markup;
mod parser;
mod placeholder;
mod processor;

pub use attrs::{ShortcodeAttrs, parse_bool};
pub use cta::{CTA_TAG, CtaShortcode};
pub use escape::{esc_url, escape_html, sanitize_css_class};
pub use handler::Shortcode;
pub use placeholder::{PLACEHOLDER_TAG, PlaceholderShortcode};
pub use processor::ShortcodeProcessor;
