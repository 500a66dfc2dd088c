//! Descriptive per-cell drawing instructions.
//!
//! A [`CellPainter`] is filled by the table model and consumed by a render
//! backend. It never touches the render surface itself, so models stay
//! testable without a canvas.

use serde::{Deserialize, Serialize};

use crate::types::Rect;

/// Horizontal text alignment inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    #[serde(alias = "start")]
    Left,
    Center,
    #[serde(alias = "end")]
    Right,
}

/// Vertical placement of a text block inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Layout options for one text block.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOptions {
    #[serde(rename = "textAlign")]
    pub align: TextAlign,
    #[serde(rename = "textBaseline")]
    pub baseline: TextBaseline,
    /// Inset applied on every side before alignment
    pub padding: f64,
    /// Scale the block down (never up) so it fits inside the padded cell
    pub shrink_to_fit: bool,
}

impl TextOptions {
    pub fn new(align: TextAlign, baseline: TextBaseline, padding: f64) -> Self {
        Self {
            align,
            baseline,
            padding,
            shrink_to_fit: false,
        }
    }
}

/// A styled piece of text; may contain line breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub color: String,
    /// CSS font shorthand, e.g. `16px monospace`
    pub font: String,
}

/// Runs laid out together as one multi-line block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    pub options: TextOptions,
    pub runs: Vec<TextRun>,
}

impl TextBlock {
    /// Append a run, returning the block for chaining.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        color: impl Into<String>,
        font: impl Into<String>,
    ) -> &mut Self {
        self.runs.push(TextRun {
            text: text.into(),
            color: color.into(),
            font: font.into(),
        });
        self
    }
}

/// Stroke for one cell edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderLine {
    pub color: String,
    pub width: f64,
}

/// Cell edges that can carry a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderEdge {
    Left,
    Right,
    Top,
    Bottom,
    /// Bottom-left to top-right diagonal
    DiagonalUp,
    /// Top-left to bottom-right diagonal
    DiagonalDown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Borders {
    pub left: Option<BorderLine>,
    pub right: Option<BorderLine>,
    pub top: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
    pub diagonal_up: Option<BorderLine>,
    pub diagonal_down: Option<BorderLine>,
}

impl Borders {
    fn slot_mut(&mut self, edge: BorderEdge) -> &mut Option<BorderLine> {
        match edge {
            BorderEdge::Left => &mut self.left,
            BorderEdge::Right => &mut self.right,
            BorderEdge::Top => &mut self.top,
            BorderEdge::Bottom => &mut self.bottom,
            BorderEdge::DiagonalUp => &mut self.diagonal_up,
            BorderEdge::DiagonalDown => &mut self.diagonal_down,
        }
    }

    /// Edges in paint order with their stroke.
    pub fn iter(&self) -> impl Iterator<Item = (BorderEdge, &BorderLine)> {
        [
            (BorderEdge::Left, self.left.as_ref()),
            (BorderEdge::Right, self.right.as_ref()),
            (BorderEdge::Top, self.top.as_ref()),
            (BorderEdge::Bottom, self.bottom.as_ref()),
            (BorderEdge::DiagonalUp, self.diagonal_up.as_ref()),
            (BorderEdge::DiagonalDown, self.diagonal_down.as_ref()),
        ]
        .into_iter()
        .filter_map(|(edge, line)| line.map(|line| (edge, line)))
    }
}

/// Drawing instructions for a single cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellPainter {
    pub rect: Rect,
    pub background: Option<String>,
    pub text: Vec<TextBlock>,
    pub borders: Borders,
}

impl CellPainter {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    /// Clear all instructions and retarget the painter, keeping allocations.
    pub fn reset(&mut self, rect: Rect) {
        self.rect = rect;
        self.background = None;
        self.text.clear();
        self.borders = Borders::default();
    }

    pub fn set_background(&mut self, color: impl Into<String>) {
        self.background = Some(color.into());
    }

    /// Start a new text block and return it for adding runs.
    #[allow(clippy::indexing_slicing)]
    pub fn add_text(&mut self, options: TextOptions) -> &mut TextBlock {
        self.text.push(TextBlock {
            options,
            runs: Vec::new(),
        });
        let last = self.text.len() - 1;
        &mut self.text[last]
    }

    /// Same stroke on the four straight edges.
    pub fn border(&mut self, color: &str, width: f64) {
        for edge in [
            BorderEdge::Left,
            BorderEdge::Right,
            BorderEdge::Top,
            BorderEdge::Bottom,
        ] {
            self.border_edge(edge, color, width);
        }
    }

    pub fn border_edge(&mut self, edge: BorderEdge, color: &str, width: f64) {
        *self.borders.slot_mut(edge) = Some(BorderLine {
            color: color.to_string(),
            width,
        });
    }

    /// True when nothing would be drawn.
    pub fn is_blank(&self) -> bool {
        self.background.is_none() && self.text.is_empty() && self.borders.iter().next().is_none()
    }
}
