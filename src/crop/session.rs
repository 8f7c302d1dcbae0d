//! Crop mode session: routes pointer, wheel and button input into the
//! zoom/pan state and produces the cropped bitmap on commit.

use crate::crop::{BackgroundTransform, CropResolver, CropStep, EdgePolicy, SourceRect, ZoomLimits, ZoomPanState};
use crate::error::EditorResult;
use crate::input::{GestureState, Phase, PointerEvent, Viewport};
use crate::raster;
use crate::settings::EditorSettings;
use crate::types::{Color, Size};
use image::RgbaImage;
use tracing::{debug, info};

pub struct CropSession {
    source: Option<RgbaImage>,
    viewport: Viewport,
    output: Size,
    state: ZoomPanState,
    gesture: GestureState,
    edge_policy: EdgePolicy,
    background: Color,
}

impl CropSession {
    /// Enter crop mode. `output` is the size of the bitmap produced by
    /// [`commit`](Self::commit); an empty source image counts as no image.
    pub fn new(
        source: Option<RgbaImage>,
        viewport: Viewport,
        output: Size,
        settings: &EditorSettings,
    ) -> EditorResult<Self> {
        let output = output.validate()?;
        let viewport = viewport.validate()?;
        let source = source.filter(|img| img.width() > 0 && img.height() > 0);
        debug!(
            has_source = source.is_some(),
            width = output.width,
            height = output.height,
            "Entering crop mode"
        );
        Ok(Self {
            source,
            viewport,
            output,
            state: ZoomPanState::new(ZoomLimits::from(settings)),
            gesture: GestureState::Idle,
            edge_policy: settings.edge_policy,
            background: settings.background,
        })
    }

    pub fn zoom_pan(&self) -> &ZoomPanState {
        &self.state
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Replace the viewport; a degenerate one is rejected and the old kept
    pub fn set_viewport(&mut self, viewport: Viewport) -> EditorResult<()> {
        self.viewport = viewport.validate()?;
        Ok(())
    }

    pub fn set_edge_policy(&mut self, policy: EdgePolicy) {
        self.edge_policy = policy;
    }

    /// Route a pointer sample. One contact pans, two or more pinch-zoom.
    /// The pinch baseline is re-taken whenever the contact count changes,
    /// so lifting or adding a finger never produces a zoom jump.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        if event.phase.is_terminal() {
            self.gesture.reset();
            return;
        }

        match (event.phase, event.points.len()) {
            (_, 0) => {}
            (Phase::Start, 1) => {
                if let Some(p) = event.primary() {
                    self.gesture.start_panning(p);
                }
            }
            (Phase::Move, 1) => {
                if self.gesture.is_pinch_zooming() {
                    // One finger lifted mid-pinch: drop the baseline and
                    // wait for a fresh start before panning again
                    self.gesture.reset();
                } else if let Some(p) = event.primary()
                    && let Some((dx, dy)) = self.gesture.pan_to(p)
                {
                    self.state.apply_pan_delta(dx, dy);
                }
            }
            (phase, contacts) => {
                let Some(distance) = event.pinch_distance() else {
                    return;
                };
                let same_contacts = self.gesture.pinch_contacts() == Some(contacts);
                if phase == Phase::Move && same_contacts {
                    if let Some(ratio) = self.gesture.pinch_to(distance) {
                        self.state.apply_pinch_zoom(ratio);
                    }
                } else {
                    self.gesture.start_pinch(distance, contacts);
                }
            }
        }
    }

    /// Wheel input; only the sign of `delta_y` matters
    pub fn wheel(&mut self, delta_y: f32) {
        self.state.apply_wheel_zoom(delta_y);
    }

    pub fn step(&mut self, step: CropStep) {
        self.state.apply_step(step);
    }

    /// Reset zoom and pan to identity
    pub fn restart(&mut self) {
        self.gesture.reset();
        self.state.reset();
    }

    pub fn background_transform(&self) -> BackgroundTransform {
        self.state.background_transform()
    }

    /// The source rectangle a commit would use right now
    pub fn source_rect(&self) -> Option<SourceRect> {
        let src = self.source.as_ref()?;
        Some(CropResolver::resolve(
            &self.state,
            &self.viewport,
            Size::new(src.width(), src.height()),
        ))
    }

    /// Produce the cropped bitmap and leave crop mode. Without a source
    /// image the result is a plain background fill.
    pub fn commit(self) -> RgbaImage {
        let Some(src) = self.source.as_ref() else {
            info!("Crop committed without a source image");
            return raster::blank(self.output, self.background);
        };
        let rect = CropResolver::resolve(
            &self.state,
            &self.viewport,
            Size::new(src.width(), src.height()),
        );
        info!(
            zoom = self.state.zoom(),
            sx = rect.sx,
            sy = rect.sy,
            width = rect.width,
            height = rect.height,
            "Crop committed"
        );
        CropResolver::rasterize(src, &rect, self.output, self.edge_policy, self.background)
    }

    /// Leave crop mode without producing anything, handing the source back
    pub fn cancel(self) -> Option<RgbaImage> {
        debug!("Crop cancelled");
        self.source
    }
}
