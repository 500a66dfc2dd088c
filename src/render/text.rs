//! Multi-line text measurement and placement inside a cell.
//!
//! Measurement goes through [`TextMeasurer`] so placement can be computed
//! (and tested) without a canvas. Placement returns a [`PlacedText`] whose
//! line coordinates are in unscaled block space; a backend translates to
//! `origin` and scales by `scale` before drawing the lines.

use super::painter::{TextAlign, TextBaseline, TextBlock, TextOptions};
use crate::types::{Point, Rect};

/// Width and line height of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineMetrics {
    pub width: f64,
    /// Font bounding box ascent plus descent
    pub height: f64,
}

/// Something that can measure a line of text in a given CSS font.
pub trait TextMeasurer {
    fn measure_text(&mut self, text: &str, font: &str) -> LineMetrics;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredLine {
    pub text: String,
    pub color: String,
    pub font: String,
    pub metrics: LineMetrics,
}

/// All lines of a text block, stacked top to bottom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasuredText {
    pub lines: Vec<MeasuredLine>,
    /// Widest line
    pub width: f64,
    /// Sum of line heights
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub color: String,
    pub font: String,
    pub x: f64,
    pub y: f64,
}

/// Lines ready to draw with left/top alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    /// Top-left corner of the block in canvas coordinates
    pub origin: Point,
    /// Uniform scale applied around `origin`
    pub scale: f64,
    pub lines: Vec<PlacedLine>,
}

/// Split on `\r\n`, `\r` or `\n`. An empty string is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(['\r', '\n']) {
        let (line, tail) = rest.split_at(pos);
        lines.push(line);
        rest = tail
            .strip_prefix("\r\n")
            .or_else(|| tail.get(1..))
            .unwrap_or_default();
    }
    lines.push(rest);
    lines
}

/// Measure every run of `block`. Each run starts on a new line.
pub fn measure_block<M: TextMeasurer + ?Sized>(measurer: &mut M, block: &TextBlock) -> MeasuredText {
    let mut measured = MeasuredText::default();
    for run in &block.runs {
        for line in split_lines(&run.text) {
            let metrics = measurer.measure_text(line, &run.font);
            measured.width = measured.width.max(metrics.width);
            measured.height += metrics.height;
            measured.lines.push(MeasuredLine {
                text: line.to_string(),
                color: run.color.clone(),
                font: run.font.clone(),
                metrics,
            });
        }
    }
    measured
}

/// Position a measured block inside `rect` according to `options`.
pub fn place_text(measured: &MeasuredText, rect: Rect, options: &TextOptions) -> PlacedText {
    let padding = options.padding;
    let fit_width = rect.width - 2.0 * padding;
    let fit_height = rect.height - 2.0 * padding;
    let scale = if options.shrink_to_fit {
        shrink_scale(fit_width, fit_height, measured.width, measured.height)
    } else {
        1.0
    };
    let scaled_width = measured.width * scale;
    let scaled_height = measured.height * scale;

    let box_left = match options.align {
        TextAlign::Left => padding,
        TextAlign::Center => padding + (fit_width - scaled_width) / 2.0,
        TextAlign::Right => padding + fit_width - scaled_width,
    };
    let box_top = match options.baseline {
        TextBaseline::Top => padding,
        TextBaseline::Middle => padding + (fit_height - scaled_height) / 2.0,
        TextBaseline::Bottom => padding + fit_height - scaled_height,
    };

    let mut y = 0.0;
    let lines = measured
        .lines
        .iter()
        .map(|line| {
            let x = match options.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => (measured.width - line.metrics.width) / 2.0,
                TextAlign::Right => measured.width - line.metrics.width,
            };
            let placed = PlacedLine {
                text: line.text.clone(),
                color: line.color.clone(),
                font: line.font.clone(),
                x,
                y,
            };
            y += line.metrics.height;
            placed
        })
        .collect();

    PlacedText {
        origin: Point::new(rect.x + box_left, rect.y + box_top),
        scale,
        lines,
    }
}

/// Largest scale in `[0, 1]` that fits the block; zero-sized text never shrinks.
fn shrink_scale(fit_width: f64, fit_height: f64, width: f64, height: f64) -> f64 {
    let mut scale: f64 = 1.0;
    if width > 0.0 {
        scale = scale.min(fit_width / width);
    }
    if height > 0.0 {
        scale = scale.min(fit_height / height);
    }
    scale.max(0.0)
}
