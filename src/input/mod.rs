//! Pointer, touch and keyboard input handling.
//!
//! ## Architecture
//!
//! Device input is normalized into [`PointerEvent`]s, converted to logical
//! bitmap coordinates by [`CoordinateConverter`], and routed by the
//! explicit [`GestureState`] machine owned by each session.
//!
//! ## Modules
//!
//! - `coords` - Device to logical coordinate mapping
//! - `event` - Normalized pointer events and keyboard chords
//! - `state` - Gesture state machine enum and helper methods

pub mod coords;
mod event;
mod state;

pub use coords::{CoordinateConverter, Viewport};
pub use event::{KeyChord, Phase, PointerEvent, Shortcut};
pub use state::GestureState;
