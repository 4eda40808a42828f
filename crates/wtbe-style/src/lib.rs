//! Class-name style-state codec for table block enhancements.
//!
//! A small set of cosmetic toggles (header color theme, border removal,
//! minimum cell width, sticky first column, centered header text) is
//! persisted inside the single free-form class attribute owned by the host
//! block instance. This crate provides the codec that reads and writes that
//! string, and the stylesheet that gives the recognized tokens their visual
//! meaning.
//!
//! The codec never assumes exclusive ownership of the string: it is
//! additive/subtractive on recognized tokens only, and tokens it does not
//! recognize (theme-added classes, user classes) survive every rewrite with
//! their relative order intact.
//!
//! # Example
//!
//! ```
//! use wtbe_style::{NO_BORDERS, decode, set_token};
//!
//! let class = set_token("custom-theme", NO_BORDERS, true);
//! assert_eq!(class, "custom-theme wtbe-no-borders");
//! assert!(decode(&class).no_borders);
//!
//! // Disabling removes only the recognized token.
//! assert_eq!(set_token(&class, NO_BORDERS, false), "custom-theme");
//! ```

mod codec;
mod state;
pub mod stylesheet;

pub use codec::{decode, heal, set_header_color, set_token};
pub use state::{
    CELL_MIN_WIDTH, FREEZE_FIRST_COL, HEADER_BG_PREFIX, HEADER_TEXT_CENTER, HeaderBackground,
    NO_BORDERS, StyleState,
};
pub use stylesheet::{CELL_PADDING_X_FALLBACK, stylesheet};
