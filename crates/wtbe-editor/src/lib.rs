//! Host editor binding for the table block options panel.
//!
//! The host editor owns the block attributes and supplies a setter
//! callback; this crate wires an options panel (one header color select,
//! four toggles) to the class-name codec in [`wtbe_style`]. Blocks other
//! than the table block pass through without a panel.
//!
//! # Example
//!
//! ```
//! use wtbe_editor::{BlockAttributes, BlockProps, TABLE_BLOCK, TableOptionsPanel};
//!
//! let props = BlockProps::new(TABLE_BLOCK, BlockAttributes::default(), |_update| {});
//! let panel = TableOptionsPanel::for_block(&props).expect("table block gets a panel");
//! let state = panel.current();
//! assert!(!state.no_borders);
//! ```

mod panel;
mod props;

pub use panel::{
    ControlOption, TABLE_BLOCK, TableOptionsPanel, ToggleControl, color_options, toggle_controls,
};
pub use props::{AttributeUpdate, BlockAttributes, BlockProps, SetAttributesFn};
