use serde::{Deserialize, Serialize};

/// Display options recognized by a table.
///
/// Deserializes from a partial JS object or JSON document; every missing key
/// falls back to [`TableConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Show the column header row
    pub has_column: bool,
    /// Show the row-label gutter
    pub has_row: bool,
    /// Reserve space for and draw the horizontal scrollbar
    pub has_horizontal_scrollbar: bool,
    /// Reserve space for and draw the vertical scrollbar
    pub has_vertical_scrollbar: bool,
    /// Thickness of both scrollbars; also the size of their buttons
    pub scrollbar_width: f64,
    pub scrollbar_track_color: String,
    pub scrollbar_thumb_color: String,
    pub scrollbar_button_color: String,
    pub scrollbar_corner_color: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            has_column: true,
            has_row: true,
            has_horizontal_scrollbar: true,
            has_vertical_scrollbar: true,
            scrollbar_width: 12.0,
            scrollbar_track_color: "#e0e0e0".to_string(),
            scrollbar_thumb_color: "#999999".to_string(),
            scrollbar_button_color: "#bbbbbb".to_string(),
            scrollbar_corner_color: "white".to_string(),
        }
    }
}

impl TableConfig {
    /// Space reserved on the right for the vertical scrollbar.
    pub fn vertical_scrollbar_space(&self) -> f64 {
        if self.has_vertical_scrollbar {
            self.scrollbar_width
        } else {
            0.0
        }
    }

    /// Space reserved at the bottom for the horizontal scrollbar.
    pub fn horizontal_scrollbar_space(&self) -> f64 {
        if self.has_horizontal_scrollbar {
            self.scrollbar_width
        } else {
            0.0
        }
    }
}
