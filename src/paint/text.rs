//! Text measurement and rasterization.
//!
//! Hit testing needs the rendered width of each text element, and placing
//! or dragging text needs to draw it onto the bitmap. Both go through the
//! [`TextRenderer`] trait so the document never depends on a particular
//! font stack.

use crate::constants::FALLBACK_ADVANCE_RATIO;
use crate::error::{EditorError, EditorResult};
use crate::raster::blend;
use crate::types::{FontDescriptor, TextElement};
use ab_glyph::{Font, FontArc, GlyphId, ScaleFont, point};
use image::RgbaImage;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Horizontal shear applied per unit of height above the baseline
const ITALIC_SHEAR: f32 = 0.2;

pub trait TextRenderer {
    /// Advance width of `text` in logical pixels
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32;

    /// Draw the element with its baseline starting at `(x, y)`
    fn draw(&self, target: &mut RgbaImage, element: &TextElement);
}

/// Renderer with a fixed advance per character that draws nothing.
/// Useful headless and in tests where exact glyph metrics do not matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceRenderer {
    /// Advance per character as a fraction of the font size
    pub advance_ratio: f32,
}

impl Default for FixedAdvanceRenderer {
    fn default() -> Self {
        Self {
            advance_ratio: FALLBACK_ADVANCE_RATIO,
        }
    }
}

impl TextRenderer for FixedAdvanceRenderer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32 {
        text.chars().count() as f32 * font.size * self.advance_ratio
    }

    fn draw(&self, _target: &mut RgbaImage, _element: &TextElement) {}
}

/// Glyph renderer backed by fonts registered per family name.
///
/// A family that was never registered falls back to the first font
/// registered. With no fonts at all, widths use the fixed advance ratio and
/// nothing is drawn.
#[derive(Clone, Default)]
pub struct GlyphTextRenderer {
    fonts: HashMap<String, FontArc>,
    fallback: Option<FontArc>,
}

impl GlyphTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_font(mut self, family: impl Into<String>, bytes: Vec<u8>) -> EditorResult<Self> {
        self.register(family, bytes)?;
        Ok(self)
    }

    /// Parse TrueType/OpenType bytes and make them available under `family`
    pub fn register(&mut self, family: impl Into<String>, bytes: Vec<u8>) -> EditorResult<()> {
        let family = family.into();
        let font = FontArc::try_from_vec(bytes).map_err(|e| EditorError::Font(format!("{family}: {e}")))?;
        debug!(family = %family, "Registered font");
        if self.fallback.is_none() {
            self.fallback = Some(font.clone());
        }
        self.fonts.insert(family, font);
        Ok(())
    }

    pub fn has_family(&self, family: &str) -> bool {
        self.fonts.contains_key(family)
    }

    fn font_for(&self, family: &str) -> Option<&FontArc> {
        self.fonts.get(family).or(self.fallback.as_ref())
    }

    /// Glyph ids and pen x offsets for one line, kerning applied
    fn layout(font: &FontArc, text: &str, size: f32) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = font.as_scaled(size);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut cursor_x = 0.0f32;
        let mut last: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = font.glyph_id(ch);
            if let Some(prev) = last {
                cursor_x += scaled.kern(prev, id);
            }
            glyphs.push((id, cursor_x));
            cursor_x += scaled.h_advance(id);
            last = Some(id);
        }
        (glyphs, cursor_x)
    }
}

impl TextRenderer for GlyphTextRenderer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> f32 {
        match self.font_for(&font.family) {
            Some(f) => {
                let (_, width) = Self::layout(f, text, font.size);
                // Bold drawing widens every glyph by one pixel
                if font.bold && !text.is_empty() { width + 1.0 } else { width }
            }
            None => FixedAdvanceRenderer::default().measure(text, font),
        }
    }

    fn draw(&self, target: &mut RgbaImage, element: &TextElement) {
        let Some(font) = self.font_for(&element.font.family) else {
            trace!(family = %element.font.family, "No font registered, text not drawn");
            return;
        };
        let (w, h) = (target.width() as i64, target.height() as i64);
        let (glyphs, _) = Self::layout(font, &element.text, element.font.size);

        // Max coverage per pixel so overlapping glyph edges blend once
        let mut coverage: HashMap<(u32, u32), f32> = HashMap::new();
        let mut mark = |x: f32, y: f32, c: f32| {
            let (ix, iy) = (x.round() as i64, y.round() as i64);
            if ix < 0 || iy < 0 || ix >= w || iy >= h {
                return;
            }
            let slot = coverage.entry((ix as u32, iy as u32)).or_insert(0.0);
            *slot = slot.max(c);
        };

        for (id, pen_x) in glyphs {
            let glyph = id.with_scale_and_position(
                element.font.size,
                point(element.x + pen_x, element.y),
            );
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, c| {
                let py = bounds.min.y + gy as f32;
                let mut px = bounds.min.x + gx as f32;
                if element.font.italic {
                    px += (element.y - py) * ITALIC_SHEAR;
                }
                mark(px, py, c);
                if element.font.bold {
                    mark(px + 1.0, py, c);
                }
            });
        }

        for ((x, y), c) in coverage {
            blend(target.get_pixel_mut(x, y), element.color.0, c);
        }
    }
}
