//! The editable document: a raster bitmap plus the vector overlays that
//! were drawn onto it.
//!
//! The bitmap is the rendered output. Overlays are kept in parallel so the
//! whole picture can be re-stroked after the raster is replaced, and so
//! texts can be hit-tested and dragged.

use crate::error::{EditorError, EditorResult};
use crate::paint::{HitGeometry, TextRenderer, VectorOverlayStore};
use crate::raster;
use crate::types::{LineSegment, Size, TextElement, TextId};
use image::RgbaImage;

/// Deep copy of a document at one point in time
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSnapshot {
    pub bitmap: RgbaImage,
    pub segments: Vec<LineSegment>,
    pub texts: Vec<TextElement>,
}

pub struct EditableDocument {
    bitmap: RgbaImage,
    overlays: VectorOverlayStore,
}

impl EditableDocument {
    pub fn new(bitmap: RgbaImage, geometry: HitGeometry) -> Self {
        Self {
            bitmap,
            overlays: VectorOverlayStore::new(geometry),
        }
    }

    pub fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }

    pub fn overlays(&self) -> &VectorOverlayStore {
        &self.overlays
    }

    pub fn into_bitmap(self) -> RgbaImage {
        self.bitmap
    }

    pub fn size(&self) -> Size {
        Size::new(self.bitmap.width(), self.bitmap.height())
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            bitmap: self.bitmap.clone(),
            segments: self.overlays.segments().to_vec(),
            texts: self.overlays.texts().to_vec(),
        }
    }

    /// Replace raster and overlays with copies from `snapshot`
    pub fn restore(&mut self, snapshot: &DocumentSnapshot, renderer: &dyn TextRenderer) {
        self.bitmap.clone_from(&snapshot.bitmap);
        self.overlays
            .replace_all(&snapshot.segments, &snapshot.texts, renderer);
    }

    /// Record a segment and draw it
    pub fn stroke(&mut self, segment: LineSegment) {
        raster::draw_segment(&mut self.bitmap, &segment);
        self.overlays.append_segment(segment);
    }

    pub fn next_text_id(&mut self) -> TextId {
        self.overlays.next_text_id()
    }

    /// Draw a text onto the raster and record it on top of the others
    pub fn place_text(&mut self, text: TextElement, renderer: &dyn TextRenderer) {
        renderer.draw(&mut self.bitmap, &text);
        self.overlays.append_text(text, renderer);
    }

    /// Move a text's recorded position without touching the raster
    pub fn move_text(&mut self, id: TextId, x: f32, y: f32) -> bool {
        self.overlays.move_position(id, x, y)
    }

    /// Reset the raster to `base` and draw the text `id` over it. Used while
    /// dragging, where `base` is the raster from just before placement.
    pub fn redraw_text_over(&mut self, base: &RgbaImage, id: TextId, renderer: &dyn TextRenderer) {
        if base.dimensions() == self.bitmap.dimensions() {
            self.bitmap.clone_from(base);
        }
        if let Some(text) = self.overlays.get(id) {
            renderer.draw(&mut self.bitmap, text);
        }
    }

    /// Re-stroke every segment then every text, in recorded order
    pub fn redraw_overlays(&mut self, renderer: &dyn TextRenderer) {
        crate::profile_scope!("redraw_overlays");
        for segment in self.overlays.segments() {
            raster::draw_segment(&mut self.bitmap, segment);
        }
        for text in self.overlays.texts() {
            renderer.draw(&mut self.bitmap, text);
        }
    }

    /// Swap in a new raster of the same size, keeping overlays
    pub fn replace_raster(&mut self, bitmap: RgbaImage) -> EditorResult<()> {
        if bitmap.dimensions() != self.bitmap.dimensions() {
            return Err(EditorError::InvalidSize {
                width: bitmap.width(),
                height: bitmap.height(),
            });
        }
        self.bitmap = bitmap;
        Ok(())
    }

    /// Drop all overlays; the raster keeps what was drawn
    pub fn clear_elements(&mut self) {
        self.overlays.clear();
    }
}
