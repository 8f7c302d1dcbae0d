//! Paint mode session.
//!
//! Owns the document, its history and the gesture state machine. Every
//! pointer sample goes through [`PaintSession::handle_pointer`], which
//! converts it to logical coordinates once and then dispatches on the
//! current [`GestureState`].
//!
//! History is pushed exactly once per completed mutating gesture: a
//! stroke on release, a text placement on the placing click, and a text
//! drag on release if the text actually moved.

use crate::error::{EditorError, EditorResult};
use crate::history::{HistoryManager, HistoryState};
use crate::input::{CoordinateConverter, GestureState, KeyChord, Phase, PointerEvent, Shortcut, Viewport};
use crate::paint::{DocumentSnapshot, EditableDocument, HitGeometry, TextRenderer};
use crate::profile_scope;
use crate::raster;
use crate::settings::EditorSettings;
use crate::types::{Color, FontDescriptor, LineSegment, Point, Size, TextElement, TextId, Tool};
use image::RgbaImage;
use serde::Serialize;
use tracing::{debug, trace};

/// What a pointer sample did to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing changed
    Ignored,
    /// Document or gesture state changed, no history entry
    Updated,
    /// Exactly one history entry was pushed
    Committed,
}

/// UI affordances derived from the active tool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolControls {
    pub tool: Tool,
    pub color_enabled: bool,
    pub size_enabled: bool,
    pub history_visible: bool,
    pub placing_text: bool,
}

/// The selected text and the raster from just before it was placed
struct Selection {
    id: TextId,
    drag_base: RgbaImage,
}

pub struct PaintSession {
    document: EditableDocument,
    history: HistoryManager<DocumentSnapshot>,
    renderer: Box<dyn TextRenderer>,
    viewport: Viewport,
    gesture: GestureState,
    tool: Tool,
    brush_color: Color,
    brush_size: f32,
    eraser_color: Color,
    font: FontDescriptor,
    selection: Option<Selection>,
}

impl PaintSession {
    /// Start a paint session on `image`, or on a background fill of `size`
    /// when there is none. The image is composited at the origin of a
    /// `size` canvas. The initial state becomes the first history entry.
    pub fn new(
        image: Option<RgbaImage>,
        size: Size,
        settings: &EditorSettings,
        renderer: Box<dyn TextRenderer>,
    ) -> EditorResult<Self> {
        let size = size.validate()?;
        let mut bitmap = raster::blank(size, settings.background);
        if let Some(img) = image {
            image::imageops::overlay(&mut bitmap, &img, 0, 0);
        }

        let mut session = Self {
            document: EditableDocument::new(bitmap, HitGeometry::from(settings)),
            history: HistoryManager::new(settings.history_capacity),
            renderer,
            viewport: Viewport::identity(size),
            gesture: GestureState::Idle,
            tool: Tool::None,
            brush_color: settings.default_brush_color,
            brush_size: settings.default_brush_size,
            eraser_color: settings.eraser_color,
            font: FontDescriptor::new(settings.default_font_family.clone(), settings.default_font_size),
            selection: None,
        };
        session.push_history();
        debug!(width = size.width, height = size.height, "Paint session started");
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn document(&self) -> &EditableDocument {
        &self.document
    }

    pub fn bitmap(&self) -> &RgbaImage {
        self.document.bitmap()
    }

    pub fn segments(&self) -> &[LineSegment] {
        self.document.overlays().segments()
    }

    pub fn texts(&self) -> &[TextElement] {
        self.document.overlays().texts()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selected_text(&self) -> Option<TextId> {
        self.selection.as_ref().map(|s| s.id)
    }

    pub fn history(&self) -> &HistoryManager<DocumentSnapshot> {
        &self.history
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn controls(&self) -> ToolControls {
        ToolControls {
            tool: self.tool,
            color_enabled: self.tool != Tool::Eraser,
            size_enabled: self.tool != Tool::Text,
            history_visible: self.tool != Tool::None,
            placing_text: self.gesture.is_placing_text(),
        }
    }

    /// Brush indicator diameter in display units
    pub fn brush_cursor_diameter(&self) -> f32 {
        CoordinateConverter::brush_cursor_diameter(self.brush_size, &self.viewport, self.document.size())
    }

    // ------------------------------------------------------------------
    // Controls
    // ------------------------------------------------------------------

    /// Replace the viewport; a degenerate one is rejected and the old kept
    pub fn set_viewport(&mut self, viewport: Viewport) -> EditorResult<()> {
        self.viewport = viewport.validate()?;
        Ok(())
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush_color = color;
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = size.max(0.0);
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font.family = family.into();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font.size = size.max(0.0);
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.font.bold = bold;
    }

    pub fn set_italic(&mut self, italic: bool) {
        self.font.italic = italic;
    }

    /// Switch tools. An in-flight gesture is finished first; a pending
    /// placement and the selection are dropped.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tool {
            return;
        }
        self.finish_gesture();
        self.gesture.reset();
        self.selection = None;
        debug!(from = ?self.tool, to = ?tool, "Tool changed");
        self.tool = tool;
    }

    /// Select `tool`, or deselect it if it is already active
    pub fn toggle_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            self.set_tool(Tool::None);
        } else {
            self.set_tool(tool);
        }
    }

    /// Arm text placement: the next press on the canvas places `text`.
    pub fn begin_text_placement(&mut self, text: &str) -> EditorResult<()> {
        if self.tool != Tool::Text {
            return Err(EditorError::TextToolInactive);
        }
        if text.trim().is_empty() {
            return Err(EditorError::EmptyText);
        }
        self.finish_gesture();
        self.gesture.start_placing_text(text.to_string());
        Ok(())
    }

    pub fn cancel_text_placement(&mut self) {
        if self.gesture.is_placing_text() {
            self.gesture.reset();
        }
        self.selection = None;
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> GestureOutcome {
        if event.phase.is_terminal() {
            return self.finish_gesture();
        }
        let Some(device) = event.primary() else {
            return GestureOutcome::Ignored;
        };
        let p = CoordinateConverter::to_logical(device, &self.viewport, self.document.size());
        match event.phase {
            Phase::Start => self.press(p),
            _ => self.drag(p),
        }
    }

    fn press(&mut self, p: Point) -> GestureOutcome {
        if self.gesture.is_placing_text() {
            return self.place_pending_text(p);
        }
        if self.gesture.is_gesture_active() {
            // Extra contacts during a gesture
            return GestureOutcome::Ignored;
        }

        match self.tool {
            Tool::None => GestureOutcome::Ignored,
            Tool::Brush | Tool::Eraser => {
                self.gesture.start_drawing(p);
                let color = self.stroke_color();
                self.document.stroke(LineSegment::Dot {
                    x: p.x,
                    y: p.y,
                    color,
                    width: self.brush_size,
                });
                GestureOutcome::Updated
            }
            Tool::Text => {
                let Some(selected) = self.selected_text() else {
                    return GestureOutcome::Ignored;
                };
                match self.document.overlays().hit_test(p) {
                    Some(hit) if hit.id == selected => {
                        let offset = Point::new(hit.x - p.x, hit.y - p.y);
                        self.gesture.start_dragging_text(selected, offset);
                        GestureOutcome::Updated
                    }
                    _ => GestureOutcome::Ignored,
                }
            }
        }
    }

    fn drag(&mut self, p: Point) -> GestureOutcome {
        profile_scope!("paint_pointer_move");
        match &mut self.gesture {
            GestureState::Drawing { .. } => {
                let Some(prev) = self.gesture.advance_stroke(p) else {
                    return GestureOutcome::Ignored;
                };
                let color = self.stroke_color();
                self.document.stroke(LineSegment::Line {
                    x1: prev.x,
                    y1: prev.y,
                    x2: p.x,
                    y2: p.y,
                    color,
                    width: self.brush_size,
                });
                GestureOutcome::Updated
            }
            GestureState::DraggingText { id, offset, moved } => {
                let (id, target) = (*id, Point::new(p.x + offset.x, p.y + offset.y));
                *moved = true;
                self.document.move_text(id, target.x, target.y);
                if let Some(sel) = self.selection.as_ref().filter(|s| s.id == id) {
                    self.document
                        .redraw_text_over(&sel.drag_base, id, self.renderer.as_ref());
                }
                trace!(id = id.0, x = target.x, y = target.y, "Dragging text");
                GestureOutcome::Updated
            }
            _ => GestureOutcome::Ignored,
        }
    }

    /// Terminate the current gesture, pushing history if it mutated the
    /// document. A pending placement is left armed.
    fn finish_gesture(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.gesture) {
            GestureState::Drawing { .. } => {
                self.push_history();
                GestureOutcome::Committed
            }
            GestureState::DraggingText { moved: true, .. } => {
                self.push_history();
                GestureOutcome::Committed
            }
            GestureState::DraggingText { moved: false, .. } => GestureOutcome::Updated,
            placing @ GestureState::PlacingText { .. } => {
                self.gesture = placing;
                GestureOutcome::Ignored
            }
            _ => GestureOutcome::Ignored,
        }
    }

    fn place_pending_text(&mut self, p: Point) -> GestureOutcome {
        let GestureState::PlacingText { text } = std::mem::take(&mut self.gesture) else {
            return GestureOutcome::Ignored;
        };
        let id = self.document.next_text_id();
        let element = TextElement {
            id,
            text,
            x: p.x,
            y: p.y,
            font: self.font.clone(),
            color: self.brush_color,
        };
        let drag_base = self.document.bitmap().clone();
        self.document.place_text(element, self.renderer.as_ref());
        self.selection = Some(Selection { id, drag_base });
        self.push_history();
        debug!(id = id.0, x = p.x, y = p.y, "Text placed");
        GestureOutcome::Committed
    }

    fn stroke_color(&self) -> Color {
        match self.tool {
            Tool::Eraser => self.eraser_color,
            _ => self.brush_color,
        }
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Snapshot the current document as a new history entry
    pub fn push_history(&mut self) {
        self.history.push(self.document.snapshot());
        debug!(len = self.history.len(), cursor = ?self.history.cursor(), "History pushed");
    }

    /// Returns whether anything was restored. Ignored mid-gesture.
    pub fn undo(&mut self) -> bool {
        if self.gesture.is_gesture_active() {
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.document.restore(snapshot, self.renderer.as_ref());
        self.after_restore();
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.gesture.is_gesture_active() {
            return false;
        }
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.document.restore(snapshot, self.renderer.as_ref());
        self.after_restore();
        true
    }

    fn after_restore(&mut self) {
        let overlays = self.document.overlays();
        if self.selection.as_ref().is_some_and(|s| !overlays.contains(s.id)) {
            self.selection = None;
        }
    }

    /// Keyboard shortcut dispatch. Returns whether the chord did anything.
    pub fn handle_shortcut(&mut self, chord: KeyChord) -> bool {
        match Shortcut::from_chord(chord) {
            Some(Shortcut::Undo) => self.undo(),
            Some(Shortcut::Redo) => self.redo(),
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Whole-document operations
    // ------------------------------------------------------------------

    /// Drop every overlay element. The raster and history are untouched.
    pub fn clear_elements(&mut self) {
        self.document.clear_elements();
        self.selection = None;
    }

    /// Swap in a processed raster of the same size. The selection is
    /// dropped since its drag base no longer matches the raster.
    pub fn replace_raster(&mut self, bitmap: RgbaImage) -> EditorResult<()> {
        self.document.replace_raster(bitmap)?;
        self.selection = None;
        Ok(())
    }

    pub fn redraw_overlays(&mut self) {
        self.document.redraw_overlays(self.renderer.as_ref());
    }

    /// Final bitmap, leaving paint mode
    pub fn into_bitmap(self) -> RgbaImage {
        self.document.into_bitmap()
    }
}
