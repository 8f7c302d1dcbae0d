//! Normalized gesture input.
//!
//! Mouse and touch sources are folded into one [`PointerEvent`] stream
//! before they reach a session, so the state machine never has to know
//! which device produced a point.

use crate::types::Point;

/// Lifecycle phase of a pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Move,
    End,
    /// Pointer left the canvas or the platform cancelled the gesture
    Cancel,
}

impl Phase {
    /// End and Cancel both terminate a gesture
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Cancel)
    }
}

/// A pointer sample in device coordinates with every active contact point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub points: Vec<Point>,
    pub phase: Phase,
}

impl PointerEvent {
    pub fn new(phase: Phase, points: Vec<Point>) -> Self {
        Self { points, phase }
    }

    /// A mouse sample: always exactly one point
    pub fn mouse(phase: Phase, x: f32, y: f32) -> Self {
        Self::new(phase, vec![Point::new(x, y)])
    }

    /// A touch sample with all currently active touches
    pub fn touch(phase: Phase, points: &[Point]) -> Self {
        Self::new(phase, points.to_vec())
    }

    /// Mouse left the canvas
    pub fn leave() -> Self {
        Self::new(Phase::Cancel, Vec::new())
    }

    /// The first contact point, if any
    pub fn primary(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Distance between the first two contacts, if at least two are active
    pub fn pinch_distance(&self) -> Option<f32> {
        match self.points.as_slice() {
            [a, b, ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

/// A key press with its modifier state. `meta` is Cmd on macOS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// History command triggered by a keyboard shortcut
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    /// Ctrl/Cmd+Z undoes; Ctrl/Cmd+Y and Ctrl/Cmd+Shift+Z redo.
    pub fn from_chord(chord: KeyChord) -> Option<Self> {
        if !(chord.ctrl || chord.meta) {
            return None;
        }
        match chord.key.to_ascii_lowercase() {
            'z' if chord.shift => Some(Self::Redo),
            'z' => Some(Self::Undo),
            'y' => Some(Self::Redo),
            _ => None,
        }
    }
}
