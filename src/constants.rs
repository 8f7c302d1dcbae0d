//! Editor-wide constants.
//!
//! Centralizes magic numbers so the crop math, hit testing and history
//! limits all read from one place. Most of these are the defaults behind
//! [`EditorSettings`](crate::settings::EditorSettings).

use crate::types::Color;

// ============================================================================
// Zoom & Pan (crop mode)
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom multiplier for one wheel tick towards the user (zoom in)
pub const WHEEL_ZOOM_IN: f32 = 1.1;

/// Zoom multiplier for one wheel tick away from the user (zoom out)
pub const WHEEL_ZOOM_OUT: f32 = 0.9;

/// Pan distance for one button press, in display units
pub const PAN_STEP: f32 = 10.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo history states to keep
pub const MAX_HISTORY_STATES: usize = 50;

// ============================================================================
// Hit Testing
// ============================================================================

/// Slack around a text element's box that still counts as a hit
pub const TEXT_HIT_MARGIN: f32 = 5.0;

/// Approximate line height as a multiple of the font size
pub const TEXT_LINE_HEIGHT_FACTOR: f32 = 1.2;

// ============================================================================
// Brush & Text Defaults
// ============================================================================

/// Default brush color
pub const DEFAULT_BRUSH_COLOR: Color = Color::BLACK;

/// Color the eraser paints with
pub const DEFAULT_ERASER_COLOR: Color = Color::WHITE;

/// Default canvas fill when no image is loaded
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

/// Default brush diameter in logical pixels
pub const DEFAULT_BRUSH_SIZE: f32 = 2.0;

/// Default font family for placed text
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Offset used to turn a single click into a visible round-capped stroke
pub const DOT_NUDGE: f32 = 0.1;

/// Average glyph advance as a fraction of the font size, used when no
/// real font is available
pub const FALLBACK_ADVANCE_RATIO: f32 = 0.6;

// ============================================================================
// Configuration
// ============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "paintcrop";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
