//! Class-name string codec.
//!
//! Encodes style toggles into, and decodes them back out of, the single
//! space-separated class attribute owned by the host block. All operations
//! are total: any input string, including empty or malformed ones, produces
//! a best-effort result rather than an error.

use crate::state::{
    CELL_MIN_WIDTH, FREEZE_FIRST_COL, HEADER_BG_PREFIX, HEADER_TEXT_CENTER, HeaderBackground,
    NO_BORDERS, StyleState,
};

/// Decode the current style state from a class-name string.
///
/// Splits on whitespace and tests each token against the recognized token
/// table; everything else is ignored (but survives re-encoding, see
/// [`set_token`]).
///
/// # Example
///
/// ```
/// use wtbe_style::{HeaderBackground, decode};
///
/// let state = decode("alignwide wtbe-header-bg-dark wtbe-no-borders");
/// assert_eq!(state.header_background, HeaderBackground::Dark);
/// assert!(state.no_borders);
/// assert!(!state.cell_min_width);
/// ```
#[must_use]
pub fn decode(class_name: &str) -> StyleState {
    let mut state = StyleState::default();

    for token in class_name.split_whitespace() {
        match token {
            NO_BORDERS => state.no_borders = true,
            CELL_MIN_WIDTH => state.cell_min_width = true,
            FREEZE_FIRST_COL => state.freeze_first_column = true,
            HEADER_TEXT_CENTER => state.center_header_text = true,
            _ => {
                if let Some(suffix) = token.strip_prefix(HEADER_BG_PREFIX) {
                    state.header_background = HeaderBackground::from_suffix(suffix);
                }
            }
        }
    }

    state
}

/// Add or remove a single token in a class-name string.
///
/// Removes whole-word occurrences of `token` (never substring matches
/// inside another token), appends it when `enabled`, and collapses runs of
/// whitespace to single spaces. Idempotent, and never disturbs the relative
/// order or presence of other tokens.
///
/// # Example
///
/// ```
/// use wtbe_style::{NO_BORDERS, set_token};
///
/// let class = set_token("foo  bar", NO_BORDERS, true);
/// assert_eq!(class, "foo bar wtbe-no-borders");
/// assert_eq!(set_token(&class, NO_BORDERS, true), class);
/// ```
#[must_use]
pub fn set_token(class_name: &str, token: &str, enabled: bool) -> String {
    let mut tokens: Vec<&str> = class_name
        .split_whitespace()
        .filter(|t| *t != token)
        .collect();
    if enabled {
        tokens.push(token);
    }
    tokens.join(" ")
}

/// Replace the header background color token.
///
/// Any existing `wtbe-header-bg-*` token is removed; a new one is appended
/// unless the color is the default theme.
///
/// # Example
///
/// ```
/// use wtbe_style::{HeaderBackground, set_header_color};
///
/// let class = set_header_color("wtbe-header-bg-dark custom", HeaderBackground::Success);
/// assert_eq!(class, "custom wtbe-header-bg-success");
/// ```
#[must_use]
pub fn set_header_color(class_name: &str, color: HeaderBackground) -> String {
    let token = color.token();
    let mut tokens: Vec<&str> = class_name
        .split_whitespace()
        .filter(|t| !t.starts_with(HEADER_BG_PREFIX))
        .collect();
    if let Some(token) = token.as_deref() {
        tokens.push(token);
    }
    tokens.join(" ")
}

/// Remove a stale minimum-cell-width token when the host's fixed table
/// layout is enabled.
///
/// The two settings are mutually exclusive; this runs on every state read
/// (not only on explicit toggles) so state left over from before fixed
/// layout was enabled heals itself. Returns the input unchanged when there
/// is nothing to remove.
#[must_use]
pub fn heal(class_name: &str, has_fixed_layout: bool) -> String {
    if has_fixed_layout && contains_token(class_name, CELL_MIN_WIDTH) {
        set_token(class_name, CELL_MIN_WIDTH, false)
    } else {
        class_name.to_owned()
    }
}

/// Whole-word token membership test.
fn contains_token(class_name: &str, token: &str) -> bool {
    class_name.split_whitespace().any(|t| t == token)
}
