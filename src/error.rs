//! Error types for editor operations
//!
//! Boundary conditions (undo with nothing to undo, a hit test that misses,
//! a crop rectangle outside the image) are ordinary outcomes and never show
//! up here. Only genuinely rejected input and I/O failures do.

use thiserror::Error;

/// Errors that can occur while driving the editor
#[derive(Error, Debug)]
pub enum EditorError {
    /// Text placement was requested with empty or whitespace-only input
    #[error("Text to place is empty")]
    EmptyText,

    /// Text placement was requested while another tool is active
    #[error("Text placement requires the text tool")]
    TextToolInactive,

    /// A bitmap with a zero dimension
    #[error("Invalid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// A viewport whose width or height is not a positive finite number
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    /// A color string that is not `#rrggbb` or `#rrggbbaa`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Font bytes rejected by the glyph loader
    #[error("Font error: {0}")]
    Font(String),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
