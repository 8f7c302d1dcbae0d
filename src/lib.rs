//! paintcrop - edit-state engine for a crop-and-paint image editor.
//!
//! ## Architecture
//!
//! Two mutually exclusive modes share the same input pipeline:
//!
//! - **Crop** ([`crop::CropSession`]): pan and zoom a source image inside a
//!   fixed viewport, then resample the visible region into a bitmap of a
//!   fixed output size.
//! - **Paint** ([`paint::PaintSession`]): freehand strokes and draggable
//!   text drawn onto a bitmap, mirrored in a vector overlay store and
//!   recorded in a bounded undo/redo history.
//!
//! Device input is normalized into [`input::PointerEvent`]s and mapped to
//! bitmap coordinates by [`input::CoordinateConverter`] before any gesture
//! logic runs.
//!
//! ## Modules
//!
//! - `constants` - Default values for every tunable
//! - `crop` - Zoom/pan state, crop rectangle resolution, crop session
//! - `error` - Error type and result alias
//! - `history` - Bounded linear undo/redo
//! - `input` - Pointer events, coordinate mapping, gesture state machine
//! - `logging` - tracing subscriber setup
//! - `paint` - Document, overlays, text rendering, paint session
//! - `perf` - Scoped timing for hot paths
//! - `raster` - Pixel blending, stroking and sampling
//! - `settings` - JSON-backed editor settings
//! - `spatial_index` - R-tree over text hit boxes
//! - `types` - Shared geometry, color and overlay element types

pub mod constants;
pub mod crop;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod paint;
pub mod perf;
pub mod raster;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use error::{EditorError, EditorResult};
