//! Pixel-level helpers shared by the paint and crop paths.
//!
//! All colors are straight (non-premultiplied) RGBA and compositing is
//! source-over, the same as a 2D canvas context. Strokes go through
//! `tiny_skia`; glyph coverage and crop samples use [`blend`].

use crate::constants::DOT_NUDGE;
use crate::types::{Color, LineSegment, Point, Size};
use image::{Rgba, RgbaImage};
use tiny_skia::{ColorU8, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A new bitmap filled with `color`
pub fn blank(size: Size, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(size.width, size.height, color.to_rgba())
}

/// Composite `src` over `dst`, scaling the source alpha by `coverage`.
pub fn blend(dst: &mut Rgba<u8>, src: [u8; 4], coverage: f32) {
    let sa = (src[3] as f32 / 255.0) * coverage.clamp(0.0, 1.0);
    if sa <= 0.0 {
        return;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let sc = src[c] as f32;
        let dc = dst[c] as f32;
        let v = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        dst[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Pixel rectangle `[x0, x1) × [y0, y1)` touched by a stroke, clipped to
/// the bitmap. `None` when the stroke lies entirely outside.
fn stroke_region(img: &RgbaImage, a: Point, b: Point, width: f32) -> Option<(u32, u32, u32, u32)> {
    let reach = width.max(0.0) / 2.0 + 1.0;
    let (w, h) = (img.width() as f32, img.height() as f32);
    let x0 = (a.x.min(b.x) - reach).floor().max(0.0);
    let y0 = (a.y.min(b.y) - reach).floor().max(0.0);
    let x1 = (a.x.max(b.x) + reach).ceil().min(w);
    let y1 = (a.y.max(b.y) + reach).ceil().min(h);
    if !(x0 < x1 && y0 < y1) {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Stroke a round-capped, anti-aliased line of the given width.
///
/// Only the region under the stroke is copied into a premultiplied
/// [`Pixmap`]; pixels the stroke did not touch are never written back, so
/// translucent areas do not drift through the premultiply round trip.
pub fn stroke_line(img: &mut RgbaImage, a: Point, b: Point, width: f32, color: Color) {
    let Some((x0, y0, x1, y1)) = stroke_region(img, a, b, width) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::new(x1 - x0, y1 - y0) else {
        return;
    };

    let region_width = (x1 - x0) as usize;
    for (i, px) in pixmap.pixels_mut().iter_mut().enumerate() {
        let p = img.get_pixel(x0 + (i % region_width) as u32, y0 + (i / region_width) as u32);
        *px = ColorU8::from_rgba(p[0], p[1], p[2], p[3]).premultiply();
    }
    let before = pixmap.clone();

    let mut pb = PathBuilder::new();
    pb.move_to(a.x, a.y);
    pb.line_to(b.x, b.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let mut paint = Paint::default();
    let [r, g, bl, al] = color.0;
    paint.set_color_rgba8(r, g, bl, al);
    paint.anti_alias = true;
    let stroke = Stroke {
        width: width.max(0.0),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    let transform = Transform::from_translate(-(x0 as f32), -(y0 as f32));
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);

    for (i, (after, prior)) in pixmap.pixels().iter().zip(before.pixels()).enumerate() {
        if after == prior {
            continue;
        }
        let c = after.demultiply();
        img.put_pixel(
            x0 + (i % region_width) as u32,
            y0 + (i / region_width) as u32,
            Rgba([c.red(), c.green(), c.blue(), c.alpha()]),
        );
    }
}

/// Rasterize one recorded stroke segment. A dot is a tiny line so that
/// round caps give it a circular footprint.
pub fn draw_segment(img: &mut RgbaImage, segment: &LineSegment) {
    match *segment {
        LineSegment::Dot { x, y, color, width } => stroke_line(
            img,
            Point::new(x, y),
            Point::new(x + DOT_NUDGE, y + DOT_NUDGE),
            width,
            color,
        ),
        LineSegment::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => stroke_line(img, Point::new(x1, y1), Point::new(x2, y2), width, color),
    }
}

/// Bilinear sample at continuous pixel-center coordinates. Neighbours
/// outside the image are clamped to the nearest edge pixel.
pub fn bilinear_sample(img: &RgbaImage, x: f32, y: f32) -> [u8; 4] {
    let (w, h) = img.dimensions();
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;

    let sample = |sx: i64, sy: i64| -> [f32; 4] {
        let cx = sx.clamp(0, w as i64 - 1) as u32;
        let cy = sy.clamp(0, h as i64 - 1) as u32;
        let p = img.get_pixel(cx, cy);
        [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
    };

    let (ix, iy) = (x0 as i64, y0 as i64);
    let tl = sample(ix, iy);
    let tr = sample(ix + 1, iy);
    let bl = sample(ix, iy + 1);
    let br = sample(ix + 1, iy + 1);

    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;
    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = lerp(tl[c], tr[c], fx);
        let bot = lerp(bl[c], br[c], fx);
        out[c] = lerp(top, bot, fy).round().clamp(0.0, 255.0) as u8;
    }
    out
}
