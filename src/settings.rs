//! Editor settings - every tunable constant in one serializable struct.
//!
//! Settings are stored as JSON under the platform config directory
//! (`<config_dir>/paintcrop/settings.json`). Missing fields fall back to
//! the defaults in [`crate::constants`].

use crate::constants::*;
use crate::crop::EdgePolicy;
use crate::error::EditorResult;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Zoom multiplier for a wheel tick or the zoom-in button
    pub wheel_zoom_in: f32,
    /// Zoom multiplier for a wheel tick or the zoom-out button
    pub wheel_zoom_out: f32,
    /// Pan distance for the arrow buttons
    pub pan_step: f32,
    pub hit_margin: f32,
    pub line_height_factor: f32,
    /// Fill used when no image is loaded, and behind crop samples
    pub background: Color,
    pub eraser_color: Color,
    pub edge_policy: EdgePolicy,
    pub default_brush_color: Color,
    pub default_brush_size: f32,
    pub default_font_family: String,
    pub default_font_size: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_capacity: MAX_HISTORY_STATES,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_zoom_in: WHEEL_ZOOM_IN,
            wheel_zoom_out: WHEEL_ZOOM_OUT,
            pan_step: PAN_STEP,
            hit_margin: TEXT_HIT_MARGIN,
            line_height_factor: TEXT_LINE_HEIGHT_FACTOR,
            background: DEFAULT_BACKGROUND,
            eraser_color: DEFAULT_ERASER_COLOR,
            edge_policy: EdgePolicy::default(),
            default_brush_color: DEFAULT_BRUSH_COLOR,
            default_brush_size: DEFAULT_BRUSH_SIZE,
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl EditorSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> EditorResult<Self> {
        let raw = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&raw)?;
        Ok(settings.sanitized())
    }

    /// Load from the default location, falling back to defaults on any failure
    pub fn load_or_default() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> EditorResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Clamp values that would break invariants downstream
    fn sanitized(mut self) -> Self {
        self.history_capacity = self.history_capacity.max(1);
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            tracing::warn!(
                min_zoom = self.min_zoom,
                max_zoom = self.max_zoom,
                "Invalid zoom bounds in settings, using defaults"
            );
            self.min_zoom = MIN_ZOOM;
            self.max_zoom = MAX_ZOOM;
        }
        self
    }
}

/// `<config_dir>/paintcrop/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}
