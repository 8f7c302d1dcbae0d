//! Gesture state machine - one explicit state for every pointer interaction.
//!
//! A single enum replaces independent "painting", "dragging" and "panning"
//! flags, so two conflicting gestures can never be active at once.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing             (press with brush/eraser)
//! Idle -> DraggingText        (press on the selected text with the text tool)
//! Idle -> PlacingText         (external: pending text awaits a canvas click)
//! PlacingText -> Idle         (click places the text and selects it)
//! Idle -> Panning             (crop mode, one contact)
//! Idle/Panning -> PinchZooming (crop mode, two or more contacts)
//! PinchZooming -> PinchZooming  (contact count changed: new baseline)
//!
//! Any active gesture -> Idle  (release, leave or cancel)
//! ```

use crate::types::{Point, TextId};

/// Unified gesture state for paint and crop sessions.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Freehand stroke in progress
    Drawing {
        /// Last logical point of the stroke
        last: Point,
    },

    /// Moving the selected text element
    DraggingText {
        /// Element being dragged
        id: TextId,
        /// Element position minus pointer position at press
        offset: Point,
        /// Whether any move has changed the element's position yet
        moved: bool,
    },

    /// Crop-mode pan with one contact
    Panning {
        /// Last device position for delta calculation
        last_pos: Point,
    },

    /// Crop-mode pinch zoom with two or more contacts
    PinchZooming {
        /// Distance between the first two contacts on the previous frame
        last_distance: f32,
        /// Number of contacts the baseline was taken with
        contacts: usize,
    },

    /// Text is waiting for a canvas click to be placed
    PlacingText {
        /// The text that will be placed
        text: String,
    },
}

impl GestureState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a pointer is held down for some gesture
    pub fn is_gesture_active(&self) -> bool {
        matches!(
            self,
            Self::Drawing { .. }
                | Self::DraggingText { .. }
                | Self::Panning { .. }
                | Self::PinchZooming { .. }
        )
    }

    pub fn is_dragging_text(&self) -> bool {
        matches!(self, Self::DraggingText { .. })
    }

    pub fn is_pinch_zooming(&self) -> bool {
        matches!(self, Self::PinchZooming { .. })
    }

    pub fn is_placing_text(&self) -> bool {
        matches!(self, Self::PlacingText { .. })
    }

    /// Get the id of the text being dragged, if any
    pub fn dragged_text_id(&self) -> Option<TextId> {
        match self {
            Self::DraggingText { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Get the text awaiting placement, if any
    pub fn pending_text(&self) -> Option<&str> {
        match self {
            Self::PlacingText { text } => Some(text),
            _ => None,
        }
    }

    /// Get the last stroke point, if drawing
    pub fn last_stroke_point(&self) -> Option<Point> {
        match self {
            Self::Drawing { last } => Some(*last),
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_drawing(&mut self, at: Point) {
        *self = Self::Drawing { last: at };
    }

    /// Advance the stroke head, returning the previous point
    pub fn advance_stroke(&mut self, to: Point) -> Option<Point> {
        match self {
            Self::Drawing { last } => Some(std::mem::replace(last, to)),
            _ => None,
        }
    }

    pub fn start_dragging_text(&mut self, id: TextId, offset: Point) {
        *self = Self::DraggingText {
            id,
            offset,
            moved: false,
        };
    }

    pub fn start_panning(&mut self, at: Point) {
        *self = Self::Panning { last_pos: at };
    }

    /// Update last position (for panning), returning the delta travelled
    pub fn pan_to(&mut self, pos: Point) -> Option<(f32, f32)> {
        match self {
            Self::Panning { last_pos } => {
                let delta = (pos.x - last_pos.x, pos.y - last_pos.y);
                *last_pos = pos;
                Some(delta)
            }
            _ => None,
        }
    }

    pub fn start_pinch(&mut self, distance: f32, contacts: usize) {
        *self = Self::PinchZooming {
            last_distance: distance,
            contacts,
        };
    }

    /// Contact count of the current pinch baseline, if pinching
    pub fn pinch_contacts(&self) -> Option<usize> {
        match self {
            Self::PinchZooming { contacts, .. } => Some(*contacts),
            _ => None,
        }
    }

    /// Replace the pinch baseline, returning the ratio current / previous.
    /// A non-positive previous distance yields no ratio.
    pub fn pinch_to(&mut self, distance: f32) -> Option<f32> {
        match self {
            Self::PinchZooming { last_distance, .. } => {
                let previous = std::mem::replace(last_distance, distance);
                (previous > 0.0).then(|| distance / previous)
            }
            _ => None,
        }
    }

    pub fn start_placing_text(&mut self, text: String) {
        *self = Self::PlacingText { text };
    }
}
