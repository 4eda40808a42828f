//! Stylesheet giving the recognized class tokens their visual meaning.
//!
//! The `--wtbe-cell-padding-x` declaration here and the calc fallback the
//! placeholder shortcode emits must agree; both read
//! [`CELL_PADDING_X_FALLBACK`] so they cannot drift apart.

/// Horizontal cell padding declared by the stylesheet and used as the
/// `var()` fallback in placeholder width calculations.
pub const CELL_PADDING_X_FALLBACK: &str = "24px";

/// Static rules for the recognized tokens (no interpolation needed).
const RULES: &str = r"table.wtbe-header-bg-dark thead th {
  background-color: #212529;
  color: #ffffff;
}

table.wtbe-header-bg-light thead th {
  background-color: #f8f9fa;
  color: #212529;
}

table.wtbe-header-bg-success thead th {
  background-color: #198754;
  color: #ffffff;
}

table.wtbe-header-bg-warning thead th {
  background-color: #ffc107;
  color: #212529;
}

table.wtbe-no-borders,
table.wtbe-no-borders th,
table.wtbe-no-borders td {
  border: none;
}

table.wtbe-cell-min-width th,
table.wtbe-cell-min-width td {
  min-width: 120px;
}

table.wtbe-freeze-first-col th:first-child,
table.wtbe-freeze-first-col td:first-child {
  position: sticky;
  left: 0;
  background-color: inherit;
  z-index: 1;
}

table.wtbe-header-text-center thead th {
  text-align: center;
}

a.wtbe-cta {
  display: inline-block;
  padding: 6px 14px;
  border-radius: 4px;
  background-color: #0d6efd;
  color: #ffffff;
  text-decoration: none;
}

a.wtbe-cta:hover {
  background-color: #0b5ed7;
}
";

/// Render the full stylesheet.
///
/// # Example
///
/// ```
/// let css = wtbe_style::stylesheet();
/// assert!(css.contains("--wtbe-cell-padding-x: 24px;"));
/// assert!(css.contains("table.wtbe-no-borders"));
/// ```
#[must_use]
pub fn stylesheet() -> String {
    format!(
        ":root {{\n  --wtbe-cell-padding-x: {CELL_PADDING_X_FALLBACK};\n}}\n\n\
         table th,\ntable td {{\n  \
         padding-left: var(--wtbe-cell-padding-x);\n  \
         padding-right: var(--wtbe-cell-padding-x);\n}}\n\n{RULES}"
    )
}
