//! Host editor seam.
//!
//! The host editor hands the panel a generic props value: a snapshot of the
//! block attributes plus a setter callback. Attribute ownership stays with
//! the host; the panel never mutates its snapshot, it only emits updates.

/// Attributes owned by the host block instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockAttributes {
    /// Free-form class attribute; recognized tokens encode style state,
    /// everything else belongs to the host or theme.
    pub class_name: Option<String>,
    /// Host-owned fixed table layout flag.
    pub has_fixed_layout: bool,
}

/// Partial attribute update passed to the host setter.
///
/// Only `Some` fields are applied by the host; the rest stay untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributeUpdate {
    /// New class attribute value.
    pub class_name: Option<String>,
    /// New fixed table layout flag.
    pub has_fixed_layout: Option<bool>,
}

/// Type alias for the host-provided attribute setter callback.
///
/// Assumed atomic and immediately consistent from the caller's
/// perspective; called at most once per user interaction.
pub type SetAttributesFn = dyn Fn(AttributeUpdate) + Send;

/// Props handed to the panel by the host editor.
pub struct BlockProps {
    name: String,
    attributes: BlockAttributes,
    set_attributes: Box<SetAttributesFn>,
}

impl BlockProps {
    /// Create props for a block.
    ///
    /// `name` is the host's block type identifier (e.g. `core/table`).
    pub fn new<F>(name: impl Into<String>, attributes: BlockAttributes, set_attributes: F) -> Self
    where
        F: Fn(AttributeUpdate) + Send + 'static,
    {
        Self {
            name: name.into(),
            attributes,
            set_attributes: Box::new(set_attributes),
        }
    }

    /// Block type identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the block attributes.
    #[must_use]
    pub fn attributes(&self) -> &BlockAttributes {
        &self.attributes
    }

    /// Class attribute, defaulting to the empty string.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.attributes.class_name.as_deref().unwrap_or("")
    }

    /// Send a partial update to the host.
    pub(crate) fn set_attributes(&self, update: AttributeUpdate) {
        (self.set_attributes)(update);
    }
}
