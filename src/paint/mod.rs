//! Paint mode: the raster document with its vector overlays, text
//! rendering and the session that drives them from pointer input.

mod document;
mod overlay;
mod session;
mod text;

pub use document::{DocumentSnapshot, EditableDocument};
pub use overlay::{HitGeometry, VectorOverlayStore};
pub use session::{GestureOutcome, PaintSession, ToolControls};
pub use text::{FixedAdvanceRenderer, GlyphTextRenderer, TextRenderer};
