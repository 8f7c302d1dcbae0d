//! Unit tests for crop-mode zoom and pan state.

use paintcrop::constants::{MAX_ZOOM, MIN_ZOOM};
use paintcrop::crop::{CropStep, ZoomLimits, ZoomPanState};
use paintcrop::settings::EditorSettings;

#[test]
fn test_initial_state_is_identity() {
    let state = ZoomPanState::default();
    assert_eq!(state.zoom(), 1.0);
    assert_eq!((state.pan_x(), state.pan_y()), (0.0, 0.0));
}

#[test]
fn test_wheel_direction() {
    let mut state = ZoomPanState::default();
    state.apply_wheel_zoom(-120.0);
    assert!((state.zoom() - 1.1).abs() < 1e-6);

    let mut state = ZoomPanState::default();
    state.apply_wheel_zoom(3.0);
    assert!((state.zoom() - 0.9).abs() < 1e-6);
}

#[test]
fn test_zero_wheel_delta_is_noop() {
    let mut state = ZoomPanState::default();
    state.apply_wheel_zoom(0.0);
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn test_zoom_stays_in_bounds_for_any_sequence() {
    let mut state = ZoomPanState::default();
    for i in 0..200 {
        match i % 7 {
            0 | 1 | 2 => state.apply_wheel_zoom(-1.0),
            3 => state.apply_pinch_zoom(3.0),
            4 => state.apply_pinch_zoom(0.01),
            5 => state.apply_wheel_zoom(1.0),
            _ => state.apply_pinch_zoom(1.7),
        }
        assert!(state.zoom() >= MIN_ZOOM && state.zoom() <= MAX_ZOOM, "zoom {}", state.zoom());
    }
}

#[test]
fn test_zoom_clamps_at_limits() {
    let mut state = ZoomPanState::default();
    for _ in 0..100 {
        state.apply_wheel_zoom(-1.0);
    }
    assert_eq!(state.zoom(), MAX_ZOOM);
    for _ in 0..100 {
        state.apply_wheel_zoom(1.0);
    }
    assert_eq!(state.zoom(), MIN_ZOOM);
}

#[test]
fn test_degenerate_pinch_ratio_ignored() {
    let mut state = ZoomPanState::default();
    state.apply_pinch_zoom(0.0);
    state.apply_pinch_zoom(-2.0);
    state.apply_pinch_zoom(f32::NAN);
    state.apply_pinch_zoom(f32::INFINITY);
    assert_eq!(state.zoom(), 1.0);
}

#[test]
fn test_pan_is_unbounded() {
    let mut state = ZoomPanState::default();
    state.apply_pan_delta(-10_000.0, 25_000.0);
    assert_eq!((state.pan_x(), state.pan_y()), (-10_000.0, 25_000.0));
}

#[test]
fn test_button_steps() {
    let mut state = ZoomPanState::default();
    state.apply_step(CropStep::Right);
    state.apply_step(CropStep::Right);
    state.apply_step(CropStep::Up);
    assert_eq!((state.pan_x(), state.pan_y()), (20.0, -10.0));

    state.apply_step(CropStep::ZoomIn);
    assert!((state.zoom() - 1.1).abs() < 1e-6);
    state.apply_step(CropStep::ZoomOut);
    assert!((state.zoom() - 0.99).abs() < 1e-6);
}

#[test]
fn test_reset_restores_identity() {
    let mut state = ZoomPanState::default();
    state.apply_wheel_zoom(-1.0);
    state.apply_pan_delta(4.0, 5.0);
    state.reset();
    assert_eq!(state, ZoomPanState::default());
}

#[test]
fn test_background_transform_percent() {
    let mut state = ZoomPanState::default();
    state.apply_pinch_zoom(2.0);
    state.apply_pan_delta(-7.0, 3.0);
    let t = state.background_transform();
    assert_eq!(t.zoom_percent, 200.0);
    assert_eq!((t.pan_x, t.pan_y), (-7.0, 3.0));
}

#[test]
fn test_inverted_zoom_bounds_fall_back_to_defaults() {
    let settings = EditorSettings {
        min_zoom: 6.0,
        ..EditorSettings::default()
    };
    let limits = ZoomLimits::from(&settings);
    assert_eq!((limits.min_zoom, limits.max_zoom), (MIN_ZOOM, MAX_ZOOM));

    let mut state = ZoomPanState::new(limits);
    state.apply_wheel_zoom(-1.0);
    assert!((state.zoom() - 1.1).abs() < 1e-6);
}

#[test]
fn test_nan_limits_never_panic() {
    let mut state = ZoomPanState::new(ZoomLimits {
        min_zoom: f32::NAN,
        max_zoom: 5.0,
        zoom_in: f32::NAN,
        zoom_out: 0.0,
        pan_step: f32::INFINITY,
    });
    state.apply_wheel_zoom(-1.0);
    state.apply_wheel_zoom(1.0);
    state.apply_step(CropStep::Left);
    assert!((state.zoom() - 0.99).abs() < 1e-5);
    assert_eq!(state.pan_x(), -10.0);
}

#[test]
fn test_reset_respects_bounds_excluding_one() {
    let mut state = ZoomPanState::new(ZoomLimits {
        min_zoom: 2.0,
        max_zoom: 4.0,
        ..ZoomLimits::default()
    });
    assert_eq!(state.zoom(), 2.0);
    state.apply_pinch_zoom(1.5);
    state.reset();
    assert_eq!(state.zoom(), 2.0);
}
