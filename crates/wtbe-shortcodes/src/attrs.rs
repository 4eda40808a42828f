//! Shortcode attribute parsing and defaulting.
//!
//! Parses the `key="value" key2='value' key3=value` text between a tag name
//! and its closing bracket into a flat map, then merges it over a
//! per-shortcode default table.

use std::collections::HashMap;

/// Parsed attributes of a single shortcode invocation.
///
/// Keys are lowercased; later duplicates win. After
/// [`with_defaults`](Self::with_defaults) the map holds exactly the known
/// keys for the shortcode, and is never mutated again before render.
///
/// # Example
///
/// ```
/// use wtbe_shortcodes::ShortcodeAttrs;
///
/// let attrs = ShortcodeAttrs::parse(r#"url="https://x.com" LABEL='Go' newtab=false"#);
/// assert_eq!(attrs.get("url"), "https://x.com");
/// assert_eq!(attrs.get("label"), "Go");
/// assert!(!attrs.get_bool("newtab"));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShortcodeAttrs {
    values: HashMap<String, String>,
}

impl ShortcodeAttrs {
    /// Parse the raw attribute text of a tag.
    ///
    /// Bare words without `=` are skipped; none of the supported shortcodes
    /// take positional values.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut values = HashMap::new();
        let mut remaining = raw.trim();

        while !remaining.is_empty() {
            remaining = remaining.trim_start();
            if remaining.is_empty() {
                break;
            }

            if let Some((key, value, rest)) = parse_key_value(remaining) {
                values.insert(key.to_ascii_lowercase(), value.to_owned());
                remaining = rest;
            } else {
                // Skip a bare word.
                let end = remaining
                    .find(char::is_whitespace)
                    .unwrap_or(remaining.len());
                remaining = &remaining[end..];
            }
        }

        Self { values }
    }

    /// Merge over a default table, keeping only known keys.
    ///
    /// Provided values override defaults; attributes not present in the
    /// default table are dropped.
    #[must_use]
    pub fn with_defaults(self, defaults: &[(&str, &str)]) -> Self {
        let mut values = HashMap::with_capacity(defaults.len());
        for (key, default) in defaults {
            let value = self
                .values
                .get(*key)
                .cloned()
                .unwrap_or_else(|| (*default).to_owned());
            values.insert((*key).to_owned(), value);
        }
        Self { values }
    }

    /// Get an attribute value; missing keys read as the empty string.
    #[must_use]
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Get an attribute interpreted as a boolean (see [`parse_bool`]).
    #[must_use]
    pub fn get_bool(&self, key: &str) -> bool {
        parse_bool(self.get(key))
    }
}

/// Permissive boolean coercion.
///
/// `"1"`, `"true"`, `"yes"`, `"on"` (case-insensitive) are true; everything
/// else, including the empty string and unrecognized words, is false. Never
/// errors.
#[must_use]
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Parse a key-value pair from the attribute text.
///
/// Supports `key="value"`, `key='value'`, and `key=value`.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    if let Some(stripped) = after_eq.strip_prefix('"') {
        let end_quote = stripped.find('"')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else if let Some(stripped) = after_eq.strip_prefix('\'') {
        let end_quote = stripped.find('\'')?;
        Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]))
    } else {
        let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
        Some((key, &after_eq[..end], &after_eq[end..]))
    }
}
