//! Zoom and pan state for crop mode.
//!
//! Zoom is always kept inside `[min_zoom, max_zoom]`; pan is unbounded so
//! the viewport may show empty margin around the image.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, PAN_STEP, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::settings::EditorSettings;
use serde::Serialize;
use tracing::warn;

/// Zoom bounds and step sizes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_in: f32,
    pub zoom_out: f32,
    pub pan_step: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_in: WHEEL_ZOOM_IN,
            zoom_out: WHEEL_ZOOM_OUT,
            pan_step: PAN_STEP,
        }
    }
}

impl From<&EditorSettings> for ZoomLimits {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_in: settings.wheel_zoom_in,
            zoom_out: settings.wheel_zoom_out,
            pan_step: settings.pan_step,
        }
        .sanitized()
    }
}

impl ZoomLimits {
    /// Replace unusable values with defaults: bounds must satisfy
    /// `0 < min <= max` and be finite, factors must be finite and positive.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut out = self;
        let bounds_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if !bounds_ok {
            warn!(
                min_zoom = self.min_zoom,
                max_zoom = self.max_zoom,
                "Invalid zoom bounds, using defaults"
            );
            out.min_zoom = defaults.min_zoom;
            out.max_zoom = defaults.max_zoom;
        }
        if !(self.zoom_in.is_finite() && self.zoom_in > 0.0) {
            out.zoom_in = defaults.zoom_in;
        }
        if !(self.zoom_out.is_finite() && self.zoom_out > 0.0) {
            out.zoom_out = defaults.zoom_out;
        }
        if !self.pan_step.is_finite() {
            out.pan_step = defaults.pan_step;
        }
        out
    }
}

/// Toolbar stepping: one wheel tick of zoom, or one pan step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropStep {
    ZoomIn,
    ZoomOut,
    Left,
    Right,
    Up,
    Down,
}

/// Parameters for positioning the source image behind the viewport
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BackgroundTransform {
    /// Background size as a percentage of the viewport width
    pub zoom_percent: f32,
    pub pan_x: f32,
    pub pan_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPanState {
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
    limits: ZoomLimits,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomPanState {
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = limits.sanitized();
        Self {
            zoom: DEFAULT_ZOOM.clamp(limits.min_zoom, limits.max_zoom),
            pan_x: 0.0,
            pan_y: 0.0,
            limits,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan_x(&self) -> f32 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f32 {
        self.pan_y
    }

    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Back to `{1, 0, 0}`, or the nearest bound when 1 is out of range
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM.clamp(self.limits.min_zoom, self.limits.max_zoom);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    fn scale_zoom(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(self.limits.min_zoom, self.limits.max_zoom);
    }

    /// Negative delta zooms in, positive zooms out, zero does nothing.
    pub fn apply_wheel_zoom(&mut self, delta_sign: f32) {
        if delta_sign < 0.0 {
            self.scale_zoom(self.limits.zoom_in);
        } else if delta_sign > 0.0 {
            self.scale_zoom(self.limits.zoom_out);
        }
    }

    /// Multiply zoom by the ratio of the current to the previous contact
    /// distance. Degenerate ratios are ignored.
    pub fn apply_pinch_zoom(&mut self, distance_ratio: f32) {
        if distance_ratio.is_finite() && distance_ratio > 0.0 {
            self.scale_zoom(distance_ratio);
        }
    }

    pub fn apply_pan_delta(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Button stepping goes through the same paths as wheel and drag input
    pub fn apply_step(&mut self, step: CropStep) {
        let s = self.limits.pan_step;
        match step {
            CropStep::ZoomIn => self.apply_wheel_zoom(-1.0),
            CropStep::ZoomOut => self.apply_wheel_zoom(1.0),
            CropStep::Left => self.apply_pan_delta(-s, 0.0),
            CropStep::Right => self.apply_pan_delta(s, 0.0),
            CropStep::Up => self.apply_pan_delta(0.0, -s),
            CropStep::Down => self.apply_pan_delta(0.0, s),
        }
    }

    pub fn background_transform(&self) -> BackgroundTransform {
        BackgroundTransform {
            zoom_percent: 100.0 * self.zoom,
            pan_x: self.pan_x,
            pan_y: self.pan_y,
        }
    }
}
