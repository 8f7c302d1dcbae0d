//! Coordinate conversion utilities for canvas interactions.
//!
//! Every gesture handler goes through [`CoordinateConverter`] so that hit
//! testing and drawing agree on where a pointer is, no matter how the
//! viewport element is scaled on screen.

use crate::error::{EditorError, EditorResult};
use crate::types::{Point, Size};

/// On-screen rectangle the bitmap is displayed in, in display units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport at the origin showing the bitmap at 1:1
    #[inline]
    pub fn identity(bitmap: Size) -> Self {
        Self::new(0.0, 0.0, bitmap.width as f32, bitmap.height as f32)
    }

    /// Reject viewports that would make the device-to-logical scale
    /// infinite or undefined.
    pub fn validate(self) -> EditorResult<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !(usable(self.width) && usable(self.height)) {
            return Err(EditorError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Whether a device point falls inside the viewport (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.left + self.width
            && point.y >= self.top
            && point.y <= self.top + self.height
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Per-axis scale from display units to bitmap pixels
    #[inline]
    pub fn scale(viewport: &Viewport, bitmap: Size) -> (f32, f32) {
        (
            bitmap.width as f32 / viewport.width,
            bitmap.height as f32 / viewport.height,
        )
    }

    /// Convert a device position to logical bitmap coordinates
    #[inline]
    pub fn to_logical(device: Point, viewport: &Viewport, bitmap: Size) -> Point {
        let (sx, sy) = Self::scale(viewport, bitmap);
        Point::new((device.x - viewport.left) * sx, (device.y - viewport.top) * sy)
    }

    /// Convert a logical bitmap position back to a device position
    #[inline]
    pub fn to_device(logical: Point, viewport: &Viewport, bitmap: Size) -> Point {
        let (sx, sy) = Self::scale(viewport, bitmap);
        Point::new(logical.x / sx + viewport.left, logical.y / sy + viewport.top)
    }

    /// On-screen diameter of the brush indicator. Uses the smaller axis
    /// scale so the indicator never overstates the brush.
    pub fn brush_cursor_diameter(brush_width: f32, viewport: &Viewport, bitmap: Size) -> f32 {
        let scale_x = viewport.width / bitmap.width as f32;
        let scale_y = viewport.height / bitmap.height as f32;
        brush_width * scale_x.min(scale_y)
    }
}
