//! Table options panel model.

use wtbe_style::{
    CELL_MIN_WIDTH, FREEZE_FIRST_COL, HEADER_TEXT_CENTER, HeaderBackground, NO_BORDERS,
    StyleState,
};

use crate::props::{AttributeUpdate, BlockProps};

/// Block name the options panel attaches to.
pub const TABLE_BLOCK: &str = "core/table";

/// Option for the header color select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlOption {
    /// Display label.
    pub label: &'static str,
    /// Color the option selects.
    pub value: HeaderBackground,
}

/// Descriptor for one of the independent toggle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleControl {
    /// Display label.
    pub label: &'static str,
    /// Class token the toggle drives.
    pub token: &'static str,
}

/// Options for the header color select, in display order.
#[must_use]
pub fn color_options() -> [ControlOption; 5] {
    [
        ControlOption { label: "Primary", value: HeaderBackground::Default },
        ControlOption { label: "Dark", value: HeaderBackground::Dark },
        ControlOption { label: "Light", value: HeaderBackground::Light },
        ControlOption { label: "Success", value: HeaderBackground::Success },
        ControlOption { label: "Warning", value: HeaderBackground::Warning },
    ]
}

/// The four toggle controls, in display order.
#[must_use]
pub fn toggle_controls() -> [ToggleControl; 4] {
    [
        ToggleControl { label: "Remove borders", token: NO_BORDERS },
        ToggleControl { label: "Minimum cell width", token: CELL_MIN_WIDTH },
        ToggleControl { label: "Freeze first column", token: FREEZE_FIRST_COL },
        ToggleControl { label: "Center header text", token: HEADER_TEXT_CENTER },
    ]
}

/// Inspector panel model for the table block.
///
/// Reads toggle state out of the class attribute through the codec and
/// writes updates back through the host setter, one setter call per user
/// interaction.
pub struct TableOptionsPanel<'a> {
    props: &'a BlockProps,
}

impl<'a> TableOptionsPanel<'a> {
    /// Attach the panel to a block.
    ///
    /// Returns `None` for any block other than the table block: the host's
    /// own UI passes through unwrapped.
    #[must_use]
    pub fn for_block(props: &'a BlockProps) -> Option<Self> {
        (props.name() == TABLE_BLOCK).then_some(Self { props })
    }

    /// Current toggle state for display.
    ///
    /// Heals the fixed-layout/min-width exclusion eagerly on every read:
    /// when fixed layout is on, a stale min-width token is removed and the
    /// corrected string written back before decoding, so state left over
    /// from before fixed layout was enabled never reaches the controls.
    #[must_use]
    pub fn current(&self) -> StyleState {
        let class_name = self.props.class_name();
        let healed = wtbe_style::heal(class_name, self.props.attributes().has_fixed_layout);

        if healed != class_name {
            tracing::debug!("removing stale cell-min-width token");
            self.props.set_attributes(AttributeUpdate {
                class_name: Some(healed.clone()),
                ..Default::default()
            });
        }

        wtbe_style::decode(&healed)
    }

    /// Select a header background color.
    pub fn set_header_background(&self, color: HeaderBackground) {
        let class_name = wtbe_style::set_header_color(self.props.class_name(), color);
        self.props.set_attributes(AttributeUpdate {
            class_name: Some(class_name),
            ..Default::default()
        });
    }

    /// Toggle borderless rendering.
    pub fn set_no_borders(&self, enabled: bool) {
        self.toggle(NO_BORDERS, enabled);
    }

    /// Toggle the sticky first column.
    pub fn set_freeze_first_column(&self, enabled: bool) {
        self.toggle(FREEZE_FIRST_COL, enabled);
    }

    /// Toggle centered header text.
    pub fn set_center_header_text(&self, enabled: bool) {
        self.toggle(HEADER_TEXT_CENTER, enabled);
    }

    /// Toggle the minimum cell width.
    ///
    /// Enabling also clears the host's fixed layout flag in the same
    /// update; the two settings are mutually exclusive.
    pub fn set_cell_min_width(&self, enabled: bool) {
        let class_name = wtbe_style::set_token(self.props.class_name(), CELL_MIN_WIDTH, enabled);
        self.props.set_attributes(AttributeUpdate {
            class_name: Some(class_name),
            has_fixed_layout: enabled.then_some(false),
        });
    }

    fn toggle(&self, token: &str, enabled: bool) {
        tracing::debug!(token, enabled, "toggling style token");
        let class_name = wtbe_style::set_token(self.props.class_name(), token, enabled);
        self.props.set_attributes(AttributeUpdate {
            class_name: Some(class_name),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::props::BlockAttributes;

    type Updates = Arc<Mutex<Vec<AttributeUpdate>>>;

    fn table_props(class_name: &str, has_fixed_layout: bool) -> (BlockProps, Updates) {
        let seen: Updates = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let attributes = BlockAttributes {
            class_name: (!class_name.is_empty()).then(|| class_name.to_owned()),
            has_fixed_layout,
        };
        let props = BlockProps::new(TABLE_BLOCK, attributes, move |update| {
            sink.lock().unwrap().push(update);
        });
        (props, seen)
    }

    #[test]
    fn test_only_table_block_gets_a_panel() {
        let (props, _) = table_props("", false);
        assert!(TableOptionsPanel::for_block(&props).is_some());

        let other = BlockProps::new("core/paragraph", BlockAttributes::default(), |_| {});
        assert!(TableOptionsPanel::for_block(&other).is_none());
    }

    #[test]
    fn test_current_decodes_state() {
        let (props, seen) = table_props("wtbe-header-bg-dark wtbe-no-borders", false);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        let state = panel.current();
        assert_eq!(state.header_background, HeaderBackground::Dark);
        assert!(state.no_borders);
        // Nothing to heal, so reading writes nothing.
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_current_heals_stale_min_width() {
        let (props, seen) = table_props("foo wtbe-cell-min-width", true);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        let state = panel.current();
        assert!(!state.cell_min_width);

        let updates = seen.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].class_name.as_deref(), Some("foo"));
        assert_eq!(updates[0].has_fixed_layout, None);
    }

    #[test]
    fn test_enabling_min_width_clears_fixed_layout() {
        let (props, seen) = table_props("foo", true);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        panel.set_cell_min_width(true);

        let updates = seen.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(
            updates[0].class_name.as_deref(),
            Some("foo wtbe-cell-min-width")
        );
        assert_eq!(updates[0].has_fixed_layout, Some(false));
    }

    #[test]
    fn test_disabling_min_width_leaves_fixed_layout_alone() {
        let (props, seen) = table_props("foo wtbe-cell-min-width", false);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        panel.set_cell_min_width(false);

        let updates = seen.lock().unwrap();
        assert_eq!(updates[0].class_name.as_deref(), Some("foo"));
        assert_eq!(updates[0].has_fixed_layout, None);
    }

    #[test]
    fn test_color_select_replaces_token() {
        let (props, seen) = table_props("wtbe-header-bg-light custom", false);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        panel.set_header_background(HeaderBackground::Warning);

        let updates = seen.lock().unwrap();
        assert_eq!(
            updates[0].class_name.as_deref(),
            Some("custom wtbe-header-bg-warning")
        );
    }

    #[test]
    fn test_toggles_emit_single_update() {
        let (props, seen) = table_props("keep-me", false);
        let panel = TableOptionsPanel::for_block(&props).unwrap();

        panel.set_no_borders(true);
        panel.set_freeze_first_column(true);
        panel.set_center_header_text(true);

        let updates = seen.lock().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(
            updates[0].class_name.as_deref(),
            Some("keep-me wtbe-no-borders")
        );
        assert_eq!(
            updates[2].class_name.as_deref(),
            Some("keep-me wtbe-header-text-center")
        );
    }

    #[test]
    fn test_control_metadata_covers_all_options() {
        assert_eq!(color_options().len(), 5);
        assert_eq!(color_options()[0].value, HeaderBackground::Default);
        assert_eq!(toggle_controls().len(), 4);
        assert!(toggle_controls().iter().any(|t| t.token == CELL_MIN_WIDTH));
    }
}
