//! Canvas 2D rendering backend.
//!
//! Implements the RenderBackend trait using HTML Canvas 2D API via web-sys.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{CanvasTableError, Result};
use crate::render::backend::RenderBackend;
use crate::render::text::{LineMetrics, PlacedText, TextMeasurer};
use crate::types::{Point, Rect};

const LINE_METRICS_CAPACITY: usize = 4096;

/// Measured lines grouped by font.
///
/// A grid uses a handful of fonts for many different strings, so lookups go
/// font first, then text, both by `&str`. When `capacity` lines are stored
/// the cache starts over.
struct LineMetricsCache {
    fonts: HashMap<String, HashMap<String, LineMetrics>>,
    len: usize,
    capacity: usize,
}

impl LineMetricsCache {
    fn new(capacity: usize) -> Self {
        Self {
            fonts: HashMap::new(),
            len: 0,
            capacity,
        }
    }

    fn clear(&mut self) {
        self.fonts.clear();
        self.len = 0;
    }

    fn lookup(&self, font: &str, text: &str) -> Option<LineMetrics> {
        self.fonts.get(font)?.get(text).copied()
    }

    fn get_or_measure(
        &mut self,
        font: &str,
        text: &str,
        measure: impl FnOnce() -> LineMetrics,
    ) -> LineMetrics {
        if let Some(metrics) = self.lookup(font, text) {
            return metrics;
        }
        let metrics = measure();
        if self.capacity == 0 {
            return metrics;
        }
        if self.len >= self.capacity {
            tracing::trace!(lines = self.len, "line metrics cache reset");
            self.clear();
        }
        self.fonts
            .entry(font.to_owned())
            .or_default()
            .insert(text.to_owned(), metrics);
        self.len += 1;
        metrics
    }
}

fn render_error(message: &str) -> CanvasTableError {
    CanvasTableError::Render(message.to_string())
}

/// Canvas 2D renderer
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Logical (CSS) width
    width: u32,
    /// Logical (CSS) height
    height: u32,
    dpr: f64,
    line_metrics: LineMetricsCache,
}

impl CanvasRenderer {
    /// Create a new Canvas renderer from an HtmlCanvasElement
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| render_error("Failed to get 2d context"))?
            .ok_or_else(|| render_error("No 2d context available"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| render_error("Failed to cast to CanvasRenderingContext2d"))?;

        let width = canvas.width();
        let height = canvas.height();

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
            dpr: 1.0,
            line_metrics: LineMetricsCache::new(LINE_METRICS_CAPACITY),
        })
    }

    /// Helper to get crisp pixel position for 1px lines
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }
}

impl TextMeasurer for CanvasRenderer {
    fn measure_text(&mut self, text: &str, font: &str) -> LineMetrics {
        let ctx = &self.ctx;
        self.line_metrics.get_or_measure(font, text, || {
            ctx.save();
            ctx.set_font(font);
            let metrics = ctx
                .measure_text(text)
                .map(|m| LineMetrics {
                    width: m.width(),
                    height: m.font_bounding_box_ascent() + m.font_bounding_box_descent(),
                })
                .unwrap_or_default();
            ctx.restore();
            metrics
        })
    }
}

impl RenderBackend for CanvasRenderer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: u32, height: u32, dpr: f64) {
        self.width = width;
        self.height = height;
        self.dpr = dpr;
        self.line_metrics.clear();

        // Set canvas buffer size to physical pixels
        self.canvas.set_width((f64::from(width) * dpr).round() as u32);
        self.canvas.set_height((f64::from(height) * dpr).round() as u32);
    }

    fn clear(&mut self) {
        // All drawing uses logical coordinates after this
        let _ = self.ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(self.width), f64::from(self.height));
    }

    fn push_clip(&mut self, rect: Rect) {
        self.ctx.save();
        self.ctx.begin_path();
        self.ctx.rect(rect.x, rect.y, rect.width, rect.height);
        self.ctx.clip();
    }

    fn pop_clip(&mut self) {
        self.ctx.restore();
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.move_to(Self::crisp(from.x), Self::crisp(from.y));
        self.ctx.line_to(Self::crisp(to.x), Self::crisp(to.y));
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &PlacedText) {
        self.ctx.save();
        let _ = self.ctx.translate(text.origin.x, text.origin.y);
        let _ = self.ctx.scale(text.scale, text.scale);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");
        for line in &text.lines {
            self.ctx.set_font(&line.font);
            self.ctx.set_fill_style_str(&line.color);
            let _ = self.ctx.fill_text(&line.text, line.x, line.y);
        }
        self.ctx.restore();
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
