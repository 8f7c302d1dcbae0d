//! Unit tests for crop rectangle resolution and resampling.

use crate::helpers::{approx_eq, solid_image};
use image::{Rgba, RgbaImage};
use paintcrop::crop::{CropResolver, EdgePolicy, SourceRect, ZoomPanState};
use paintcrop::input::Viewport;
use paintcrop::types::{Color, Size};

const RED: [u8; 4] = [255, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

#[test]
fn test_identity_rect_covers_source() {
    let rect = CropResolver::resolve(
        &ZoomPanState::default(),
        &Viewport::new(0.0, 0.0, 500.0, 400.0),
        Size::new(1000, 800),
    );
    assert_eq!(
        rect,
        SourceRect {
            sx: 0.0,
            sy: 0.0,
            width: 1000.0,
            height: 800.0
        }
    );
    assert!(!rect.exceeds(Size::new(1000, 800)));
}

#[test]
fn test_zoom_and_pan_rect() {
    let mut state = ZoomPanState::default();
    state.apply_wheel_zoom(-1.0);
    state.apply_pan_delta(50.0, -20.0);

    let rect = CropResolver::resolve(&state, &Viewport::new(0.0, 0.0, 500.0, 500.0), Size::new(1000, 800));
    assert!(approx_eq(rect.sx, -90.909, 1e-2), "sx = {}", rect.sx);
    assert!(approx_eq(rect.sy, 36.364, 1e-2), "sy = {}", rect.sy);
    assert!(approx_eq(rect.width, 909.09, 1e-2), "width = {}", rect.width);
    assert!(approx_eq(rect.height, 909.09, 1e-2), "height = {}", rect.height);
    assert!(rect.exceeds(Size::new(1000, 800)));
}

#[test]
fn test_identity_crop_copies_pixels() {
    let mut src = RgbaImage::new(4, 4);
    for (x, y, px) in src.enumerate_pixels_mut() {
        *px = Rgba([(x * 60) as u8, (y * 60) as u8, 7, 255]);
    }
    let out = CropResolver::crop(
        &ZoomPanState::default(),
        &Viewport::new(0.0, 0.0, 4.0, 4.0),
        &src,
        Size::new(4, 4),
        EdgePolicy::Background,
        Color::WHITE,
    );
    assert_eq!(out, src);
}

#[test]
fn test_output_size_is_fixed() {
    let src = solid_image(37, 53, RED);
    let out = CropResolver::crop(
        &ZoomPanState::default(),
        &Viewport::new(0.0, 0.0, 300.0, 200.0),
        &src,
        Size::new(64, 48),
        EdgePolicy::Background,
        Color::WHITE,
    );
    assert_eq!(out.dimensions(), (64, 48));
}

fn panned_right_by_half(policy: EdgePolicy) -> RgbaImage {
    let mut state = ZoomPanState::default();
    state.apply_pan_delta(5.0, 0.0);
    CropResolver::crop(
        &state,
        &Viewport::new(0.0, 0.0, 10.0, 10.0),
        &solid_image(10, 10, RED),
        Size::new(10, 10),
        policy,
        Color::WHITE,
    )
}

#[test]
fn test_background_policy_keeps_fill_outside_image() {
    let out = panned_right_by_half(EdgePolicy::Background);
    assert_eq!(out.get_pixel(4, 5).0, WHITE);
    assert_eq!(out.get_pixel(5, 5).0, RED);
    assert_eq!(out.get_pixel(9, 0).0, RED);
}

#[test]
fn test_clamp_policy_extends_edge() {
    let out = panned_right_by_half(EdgePolicy::Clamp);
    assert!(out.pixels().all(|p| p.0 == RED));
}

#[test]
fn test_transparent_policy_leaves_holes() {
    let out = panned_right_by_half(EdgePolicy::Transparent);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(7, 3).0, RED);
}

#[test]
fn test_default_policy_is_background() {
    assert_eq!(EdgePolicy::default(), EdgePolicy::Background);
}
