//! Style state types and the recognized token table.

/// Class token removing table borders.
pub const NO_BORDERS: &str = "wtbe-no-borders";
/// Class token enforcing a minimum cell width.
pub const CELL_MIN_WIDTH: &str = "wtbe-cell-min-width";
/// Class token keeping the first column visible during horizontal scroll.
pub const FREEZE_FIRST_COL: &str = "wtbe-freeze-first-col";
/// Class token centering header text.
pub const HEADER_TEXT_CENTER: &str = "wtbe-header-text-center";
/// Prefix shared by all header background color tokens.
pub const HEADER_BG_PREFIX: &str = "wtbe-header-bg-";

/// Header background color theme.
///
/// [`Default`](Self::Default) is the primary theme and encodes as the
/// absence of a color token; the other variants encode as
/// `wtbe-header-bg-<suffix>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeaderBackground {
    /// Primary theme (no token).
    #[default]
    Default,
    /// Dark header background.
    Dark,
    /// Light header background.
    Light,
    /// Success (green) header background.
    Success,
    /// Warning (yellow) header background.
    Warning,
}

impl HeaderBackground {
    /// Token suffix for this color, or `None` for the default theme.
    #[must_use]
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Dark => Some("dark"),
            Self::Light => Some("light"),
            Self::Success => Some("success"),
            Self::Warning => Some("warning"),
        }
    }

    /// Parse a token suffix.
    ///
    /// The class string is host-owned and may contain anything, so unknown
    /// suffixes map to the default theme rather than failing.
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Self {
        match suffix {
            "dark" => Self::Dark,
            "light" => Self::Light,
            "success" => Self::Success,
            "warning" => Self::Warning,
            _ => Self::Default,
        }
    }

    /// Full class token for this color, or `None` for the default theme.
    #[must_use]
    pub fn token(self) -> Option<String> {
        self.suffix().map(|s| format!("{HEADER_BG_PREFIX}{s}"))
    }
}

/// Parsed view over the host's class-name attribute.
///
/// Not a stored entity: reconstructed by [`decode`](crate::decode) on every
/// read and serialized back through [`set_token`](crate::set_token) /
/// [`set_header_color`](crate::set_header_color) on every write. Ownership
/// of the underlying string belongs to the host block instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleState {
    /// Header background color theme.
    pub header_background: HeaderBackground,
    /// Table borders removed.
    pub no_borders: bool,
    /// Minimum cell width enforced (mutually exclusive with the host's
    /// fixed table layout).
    pub cell_min_width: bool,
    /// First column stays visible during horizontal scroll.
    pub freeze_first_column: bool,
    /// Header text centered.
    pub center_header_text: bool,
}
