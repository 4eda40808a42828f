//! Shortcode handler trait.

use crate::attrs::ShortcodeAttrs;

/// Handler for a leaf shortcode tag: `[name key="value"]`.
///
/// Handlers are registered on a
/// [`ShortcodeProcessor`](crate::ShortcodeProcessor) and invoked once per
/// matching tag. Shortcodes are leaf tags: they have no body content, and
/// anything between a pair of same-named tags is left alone.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its
/// own processor instance.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::{Shortcode, ShortcodeAttrs};
///
/// struct YearShortcode;
///
/// impl Shortcode for YearShortcode {
///     fn tag(&self) -> &str { "year" }
///
///     fn render(&mut self, _attrs: ShortcodeAttrs) -> String {
///         "<span>2026</span>".to_owned()
///     }
/// }
/// ```
pub trait Shortcode: Send {
    /// Tag name matched inside brackets (e.g. `wtbe_cta`).
    fn tag(&self) -> &str;

    /// Render the shortcode to an HTML fragment.
    ///
    /// Rendering is total: invalid or missing attributes degrade to
    /// defaults or to an inline error fragment, never to an error return.
    fn render(&mut self, attrs: ShortcodeAttrs) -> String;

    /// Warnings generated during rendering.
    ///
    /// Override this method if your shortcode can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
