//! Icons used for markers, the cursor pointer and empty values.

use serde::{Deserialize, Serialize};

/// Glyph set for row markers and placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Glyphs {
    /// Drawn in front of the cursor row.
    pub pointer: String,
    /// Header of an enabled group.
    pub group_on: String,
    /// Header of a disabled group.
    pub group_off: String,
    /// The selected (or remembered) value of a group.
    pub value_on: String,
    /// Any other value.
    pub value_off: String,
    /// Shown in place of an empty value.
    pub empty_value: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            pointer: "❯ ".into(),
            group_on: "[x]".into(),
            group_off: "[ ]".into(),
            value_on: "(•)".into(),
            value_off: "( )".into(),
            empty_value: "<empty>".into(),
        }
    }
}
