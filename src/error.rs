//! Structured error types for canvas-table.
//!
//! Normal grid operation never fails (out-of-range input is clamped or
//! yields `None`); these errors cover construction and the render surface.

/// All errors that can occur while loading a table or driving a render surface.
#[derive(Debug, thiserror::Error)]
pub enum CanvasTableError {
    /// Table JSON could not be parsed at all.
    #[error("Table JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering error (missing 2D context, failed canvas call).
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CanvasTableError>;

impl From<String> for CanvasTableError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for CanvasTableError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<CanvasTableError> for wasm_bindgen::JsValue {
    fn from(e: CanvasTableError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
