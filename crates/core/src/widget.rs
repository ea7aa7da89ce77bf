//! Response widget selection.
//!
//! The action endpoint lets the caller pick which rendering of the updated
//! appointment comes back in the response. Unlike action names, an
//! unrecognized widget name is an explicit validation error, not a no-op.

use crate::error::CoreError;

/// Response rendering variant requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    /// Compact single-row rendering for list views.
    Row,
    /// Expanded rendering with associated entity references.
    Panel,
}

impl Widget {
    /// Parse a wire-format widget name.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "row" => Ok(Self::Row),
            "panel" => Ok(Self::Panel),
            _ => Err(CoreError::Validation(format!(
                "Unknown widget type '{name}'. Must be one of: row, panel"
            ))),
        }
    }

    /// Wire-format name of the widget.
    pub fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Panel => "panel",
        }
    }
}
