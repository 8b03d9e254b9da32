//! Shared configuration records for the composite widgets.

use serde::{Deserialize, Serialize};

/// One option in a tab strip, toggle row or select group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggleable {
    /// Text shown on the button.
    pub text: String,
    /// Unique key reported when this option becomes active.
    pub key: String,
    /// Whether this option starts active.
    pub active: bool,
}

impl Toggleable {
    pub fn new(text: impl Into<String>, key: impl Into<String>, active: bool) -> Self {
        Self {
            text: text.into(),
            key: key.into(),
            active,
        }
    }
}

/// Layout direction for label + control pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Where a label (or companion control) sits relative to the main control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPosition {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}
