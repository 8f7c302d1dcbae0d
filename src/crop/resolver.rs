//! Crop rectangle resolution and resampling.
//!
//! The source rectangle is derived from the committed zoom/pan state and
//! is deliberately not clamped to the image. What shows up where it runs
//! past the image edge is decided by [`EdgePolicy`].

use crate::crop::ZoomPanState;
use crate::input::Viewport;
use crate::profile_scope;
use crate::raster::{self, bilinear_sample, blend};
use crate::types::{Color, Size};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Region of the source image, in source pixels, that fills the output
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SourceRect {
    pub sx: f32,
    pub sy: f32,
    pub width: f32,
    pub height: f32,
}

impl SourceRect {
    /// Whether any part of the rectangle lies outside `[0, size]`
    pub fn exceeds(&self, size: Size) -> bool {
        self.sx < 0.0
            || self.sy < 0.0
            || self.sx + self.width > size.width as f32
            || self.sy + self.height > size.height as f32
    }
}

/// What the output shows where the source rectangle leaves the image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Leave the background fill visible
    #[default]
    Background,
    /// Extend the nearest edge pixel outward
    Clamp,
    /// Fully transparent pixels
    Transparent,
}

pub struct CropResolver;

impl CropResolver {
    /// Source rectangle for the current zoom/pan. The background is drawn
    /// at `zoom × viewport.width` wide, so one display unit covers
    /// `(source.width / viewport.width) / zoom` source pixels.
    pub fn resolve(state: &ZoomPanState, viewport: &Viewport, source: Size) -> SourceRect {
        let scale = (source.width as f32 / viewport.width) / state.zoom();
        SourceRect {
            sx: -state.pan_x() * scale,
            sy: -state.pan_y() * scale,
            width: viewport.width * scale,
            height: viewport.height * scale,
        }
    }

    /// Resample `rect` of `source` into a bitmap of exactly `output` size.
    /// Samples are taken bilinearly at output pixel centres and composited
    /// over the background (or over transparency for
    /// [`EdgePolicy::Transparent`]).
    pub fn rasterize(
        source: &RgbaImage,
        rect: &SourceRect,
        output: Size,
        policy: EdgePolicy,
        background: Color,
    ) -> RgbaImage {
        profile_scope!("crop_rasterize");

        let base = match policy {
            EdgePolicy::Transparent => Color::TRANSPARENT,
            EdgePolicy::Background | EdgePolicy::Clamp => background,
        };
        let mut out = raster::blank(output, base);

        let (src_w, src_h) = (source.width() as f32, source.height() as f32);
        if src_w == 0.0 || src_h == 0.0 {
            return out;
        }
        let step_x = rect.width / output.width as f32;
        let step_y = rect.height / output.height as f32;

        for (ox, oy, px) in out.enumerate_pixels_mut() {
            let mut u = rect.sx + (ox as f32 + 0.5) * step_x;
            let mut v = rect.sy + (oy as f32 + 0.5) * step_y;
            let inside = (0.0..=src_w).contains(&u) && (0.0..=src_h).contains(&v);
            if !inside {
                match policy {
                    EdgePolicy::Background | EdgePolicy::Transparent => continue,
                    EdgePolicy::Clamp => {
                        u = u.clamp(0.0, src_w);
                        v = v.clamp(0.0, src_h);
                    }
                }
            }
            let sample = bilinear_sample(source, u - 0.5, v - 0.5);
            blend(px, sample, 1.0);
        }
        out
    }

    /// Resolve and rasterize in one go
    pub fn crop(
        state: &ZoomPanState,
        viewport: &Viewport,
        source: &RgbaImage,
        output: Size,
        policy: EdgePolicy,
        background: Color,
    ) -> RgbaImage {
        let rect = Self::resolve(state, viewport, Size::new(source.width(), source.height()));
        Self::rasterize(source, &rect, output, policy, background)
    }
}
