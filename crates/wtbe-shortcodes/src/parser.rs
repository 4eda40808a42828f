//! Bracket-tag scanning.
//!
//! Locates `[name key="value" …]` leaf tags embedded in document text.

/// A tag found in a line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedTag<'a> {
    /// Tag name (e.g. `wtbe_cta`).
    pub name: &'a str,
    /// Raw attribute text between the name and the closing bracket.
    pub attrs: &'a str,
}

/// Find the first well-formed tag in `line`.
///
/// Returns the tag and its byte span. Brackets that do not open a
/// well-formed tag (no valid name, no closing bracket, nested opener) are
/// skipped, so a tag later in the line is still found.
pub(crate) fn find_tag(line: &str) -> Option<(ParsedTag<'_>, usize, usize)> {
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find('[') {
        let start = search_from + offset;
        if let Some((tag, len)) = parse_tag_at(&line[start..]) {
            return Some((tag, start, start + len));
        }
        search_from = start + 1;
    }
    None
}

/// Try to parse a tag at the start of `s` (which begins with `[`).
///
/// Returns the tag and the number of bytes consumed including both
/// brackets.
fn parse_tag_at(s: &str) -> Option<(ParsedTag<'_>, usize)> {
    let inner = &s[1..];

    let name_end = inner
        .find(|c: char| !is_tag_name_char(c))
        .unwrap_or(inner.len());
    if name_end == 0 {
        return None;
    }
    let name = &inner[..name_end];

    let after = &inner[name_end..];
    let close = find_close(after)?;

    // The name must be followed directly by the close or by whitespace.
    let between = &after[..close];
    if !between.is_empty() && !between.starts_with(char::is_whitespace) {
        return None;
    }

    let tag = ParsedTag {
        name,
        attrs: between.trim(),
    };
    Some((tag, 1 + name_end + close + 1))
}

/// Valid tag name characters: alphanumeric, underscore, hyphen.
fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Find the byte offset of the closing bracket, honoring quoted values.
///
/// An unquoted `[` before the close means this is not a tag.
fn find_close(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, ']') => return Some(i),
            (None, '[') => return None,
            (None, _) => {}
        }
    }
    None
}
