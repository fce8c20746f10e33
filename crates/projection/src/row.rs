//! Display rows emitted by the projection.

use crate::Glyphs;

/// Selection icon of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Header of an active group.
    GroupEnabled,
    /// Header of an inactive group.
    GroupDisabled,
    /// Value that is the group's current or remembered choice.
    Selected,
    /// Any other value.
    Unselected,
}

impl Marker {
    /// The icon for this marker.
    pub fn glyph(self, glyphs: &Glyphs) -> &str {
        match self {
            Self::GroupEnabled => &glyphs.group_on,
            Self::GroupDisabled => &glyphs.group_off,
            Self::Selected => &glyphs.value_on,
            Self::Unselected => &glyphs.value_off,
        }
    }
}

/// One renderable line of the list. Rebuilt every frame, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Group header rather than a value row.
    pub is_header: bool,
    /// Position of the group in the model's order.
    pub group_index: usize,
    /// Position of the line within the group; `None` for headers.
    pub value_index: Option<usize>,
    /// Selection icon.
    pub marker: Marker,
    /// Group key for headers; value or empty placeholder for value rows.
    pub label: String,
    /// The row belongs to an inactive group.
    pub is_disabled: bool,
    /// Live selection: an active group's header, or its active value.
    pub is_selected: bool,
    /// `label` is a placeholder standing in for an empty value.
    pub is_empty_placeholder: bool,
    /// The controller's cursor is on this row.
    pub is_cursor: bool,
}
