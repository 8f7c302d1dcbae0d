//! Crop mode: zoom/pan state, crop rectangle resolution and the session
//! that ties them to input.

mod resolver;
mod session;
mod zoom_pan;

pub use resolver::{CropResolver, EdgePolicy, SourceRect};
pub use session::CropSession;
pub use zoom_pan::{BackgroundTransform, CropStep, ZoomLimits, ZoomPanState};
