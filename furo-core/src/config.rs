use serde::{Deserialize, Serialize};

use crate::errors::ViewResult;

/// Layout options shared by the hand, river and board views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Discards per river row.
    pub river_row_len: usize,
    /// Number of river rows. The last row is unbounded.
    pub river_rows: usize,
    /// Whether a freshly drawn tile is set apart from the closed hand.
    pub separate_tsumo: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::default_standard()
    }
}

impl ViewConfig {
    /// Six discards per row, three rows, drawn tile set apart.
    pub fn default_standard() -> Self {
        Self {
            river_row_len: 6,
            river_rows: 3,
            separate_tsumo: true,
        }
    }

    /// Same river, drawn tile kept flush with the hand.
    pub fn default_compact() -> Self {
        Self {
            separate_tsumo: false,
            ..Self::default_standard()
        }
    }

    /// Reads a config, filling missing fields from the standard preset.
    pub fn from_json(text: &str) -> ViewResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
