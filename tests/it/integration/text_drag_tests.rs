//! Text placement and drag workflow tests.

use crate::helpers::{assert_history_len, move_to, place_text, press, release, text_session, TestPaintBuilder};
use paintcrop::EditorError;
use paintcrop::input::{Phase, PointerEvent, Viewport};
use paintcrop::paint::GestureOutcome;
use paintcrop::types::{Color, Point, Tool};

// "Hello" at the default 14px with the fixed 0.6 advance is 42 wide, so a
// text placed at (30, 40) has the hit box [25, 77] × [28.2, 45].

#[test]
fn test_place_then_drag_by_offset() {
    let mut session = text_session();
    assert_eq!(place_text(&mut session, "Hello", 30.0, 40.0), GestureOutcome::Committed);
    assert_history_len(&session, 2);
    let id = session.texts()[0].id;
    assert_eq!(session.selected_text(), Some(id));

    assert_eq!(press(&mut session, 32.0, 38.0), GestureOutcome::Updated);
    assert!(session.gesture().is_dragging_text());
    move_to(&mut session, 34.0, 40.0);
    move_to(&mut session, 37.0, 43.0);
    assert_eq!(release(&mut session, 37.0, 43.0), GestureOutcome::Committed);

    let text = &session.texts()[0];
    assert_eq!(text.position(), Point::new(35.0, 45.0));
    assert_history_len(&session, 3);
}

#[test]
fn test_placed_text_uses_current_style() {
    let mut session = text_session();
    session.set_brush_color(Color::rgb(0, 128, 0));
    session.set_font_family("serif");
    session.set_font_size(20.0);
    session.set_bold(true);
    session.set_italic(true);
    place_text(&mut session, "Hi", 10.0, 30.0);

    let text = &session.texts()[0];
    assert_eq!(text.color, Color::rgb(0, 128, 0));
    assert_eq!(text.font.css(), "italic bold 20px serif");
    assert_eq!(text.text, "Hi");
}

#[test]
fn test_press_release_without_move_pushes_nothing() {
    let mut session = text_session();
    place_text(&mut session, "Hello", 30.0, 40.0);
    press(&mut session, 40.0, 40.0);
    assert_eq!(release(&mut session, 40.0, 40.0), GestureOutcome::Updated);
    assert_history_len(&session, 2);
    assert_eq!(session.texts()[0].position(), Point::new(30.0, 40.0));
}

#[test]
fn test_press_off_text_is_ignored() {
    let mut session = text_session();
    place_text(&mut session, "Hello", 30.0, 40.0);
    assert_eq!(press(&mut session, 90.0, 90.0), GestureOutcome::Ignored);
    assert!(session.gesture().is_idle());
}

#[test]
fn test_only_selected_text_drags() {
    let mut session = text_session();
    place_text(&mut session, "Hello", 30.0, 40.0);
    place_text(&mut session, "World", 30.0, 80.0);
    // The first text is no longer selected
    assert_eq!(press(&mut session, 40.0, 40.0), GestureOutcome::Ignored);
    assert_eq!(press(&mut session, 40.0, 80.0), GestureOutcome::Updated);
    assert_eq!(session.gesture().dragged_text_id(), Some(session.texts()[1].id));
}

#[test]
fn test_empty_text_rejected_without_state_change() {
    let mut session = text_session();
    assert!(matches!(session.begin_text_placement("   "), Err(EditorError::EmptyText)));
    assert!(matches!(session.begin_text_placement(""), Err(EditorError::EmptyText)));
    assert!(session.gesture().is_idle());
    assert!(!session.controls().placing_text);
}

#[test]
fn test_placement_requires_text_tool() {
    let mut session = TestPaintBuilder::new().with_tool(Tool::Brush).build();
    assert!(matches!(
        session.begin_text_placement("Hello"),
        Err(EditorError::TextToolInactive)
    ));
    assert!(session.gesture().is_idle());
}

#[test]
fn test_tool_change_cancels_placement_and_selection() {
    let mut session = text_session();
    place_text(&mut session, "Hello", 30.0, 40.0);
    session.begin_text_placement("Again").unwrap();
    assert!(session.controls().placing_text);

    session.set_tool(Tool::Brush);
    assert!(!session.controls().placing_text);
    assert_eq!(session.selected_text(), None);

    session.set_tool(Tool::Text);
    assert_eq!(press(&mut session, 40.0, 40.0), GestureOutcome::Ignored);
    assert_eq!(session.texts().len(), 1);
}

#[test]
fn test_cancel_text_placement() {
    let mut session = text_session();
    session.begin_text_placement("Hello").unwrap();
    session.cancel_text_placement();
    assert_eq!(press(&mut session, 30.0, 40.0), GestureOutcome::Ignored);
    assert!(session.texts().is_empty());
    assert_history_len(&session, 1);
}

#[test]
fn test_touch_places_text() {
    let mut session = text_session();
    session.begin_text_placement("Tap").unwrap();
    let outcome = session.handle_pointer(&PointerEvent::touch(Phase::Start, &[Point::new(12.0, 34.0)]));
    assert_eq!(outcome, GestureOutcome::Committed);
    assert_eq!(session.texts()[0].position(), Point::new(12.0, 34.0));
}

#[test]
fn test_drag_in_scaled_viewport_moves_in_logical_units() {
    let mut session = TestPaintBuilder::new()
        .with_size(200, 200)
        .with_tool(Tool::Text)
        .with_viewport(Viewport::new(0.0, 0.0, 100.0, 100.0))
        .build();
    session.begin_text_placement("Hello").unwrap();
    press(&mut session, 15.0, 20.0);
    assert_eq!(session.texts()[0].position(), Point::new(30.0, 40.0));

    press(&mut session, 16.0, 19.0);
    move_to(&mut session, 21.0, 24.0);
    release(&mut session, 21.0, 24.0);
    assert_eq!(session.texts()[0].position(), Point::new(40.0, 50.0));
}

#[test]
fn test_clear_elements_drops_selection() {
    let mut session = text_session();
    place_text(&mut session, "Hello", 30.0, 40.0);
    session.clear_elements();
    assert!(session.texts().is_empty());
    assert_eq!(session.selected_text(), None);
}
