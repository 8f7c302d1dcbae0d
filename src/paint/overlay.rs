//! Vector overlay store: the ordered stroke segments and text elements kept
//! alongside the raster so they can be replayed or hit-tested.
//!
//! Segments are append-only. Texts are append-only too, except for their
//! position, which the active drag may change. Text hit boxes live in an
//! R-tree that is kept in sync with every mutation.

use crate::constants::{TEXT_HIT_MARGIN, TEXT_LINE_HEIGHT_FACTOR};
use crate::paint::TextRenderer;
use crate::settings::EditorSettings;
use crate::spatial_index::{Bounds, SpatialIndex};
use crate::types::{LineSegment, Point, TextElement, TextId};
use std::collections::HashMap;

/// Parameters of the text hit box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitGeometry {
    pub margin: f32,
    /// Text height as a multiple of the font size
    pub line_height_factor: f32,
}

impl Default for HitGeometry {
    fn default() -> Self {
        Self {
            margin: TEXT_HIT_MARGIN,
            line_height_factor: TEXT_LINE_HEIGHT_FACTOR,
        }
    }
}

impl From<&EditorSettings> for HitGeometry {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            margin: settings.hit_margin,
            line_height_factor: settings.line_height_factor,
        }
    }
}

impl HitGeometry {
    /// `[x - m, x + w + m] × [y - h + m, y + m]` with `h = factor × size`.
    /// The top edge is pulled in by the margin rather than pushed out.
    pub fn bounds(&self, text: &TextElement, width: f32) -> Bounds {
        let m = self.margin;
        let height = self.line_height_factor * text.font.size;
        Bounds::new(text.x - m, text.y - height + m, text.x + width + m, text.y + m)
    }
}

#[derive(Default)]
pub struct VectorOverlayStore {
    segments: Vec<LineSegment>,
    texts: Vec<TextElement>,
    /// Measured advance width per text, fixed at append time
    widths: HashMap<TextId, f32>,
    index: SpatialIndex,
    geometry: HitGeometry,
    next_id: u64,
}

impl VectorOverlayStore {
    pub fn new(geometry: HitGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    pub fn texts(&self) -> &[TextElement] {
        &self.texts
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.texts.is_empty()
    }

    pub fn append_segment(&mut self, segment: LineSegment) {
        self.segments.push(segment);
    }

    /// Reserve a fresh id for a text about to be appended
    pub fn next_text_id(&mut self) -> TextId {
        let id = TextId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a text on top of all others. Its width is measured once here.
    pub fn append_text(&mut self, text: TextElement, renderer: &dyn TextRenderer) {
        let width = renderer.measure(&text.text, &text.font);
        self.index.insert(text.id, self.geometry.bounds(&text, width));
        self.widths.insert(text.id, width);
        self.next_id = self.next_id.max(text.id.0 + 1);
        self.texts.push(text);
    }

    pub fn get(&self, id: TextId) -> Option<&TextElement> {
        self.texts.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TextId) -> bool {
        self.widths.contains_key(&id)
    }

    /// Measured width of a stored text
    pub fn width_of(&self, id: TextId) -> Option<f32> {
        self.widths.get(&id).copied()
    }

    /// Hit box of a stored text
    pub fn bounds_of(&self, id: TextId) -> Option<Bounds> {
        self.index.bounds(id)
    }

    /// Topmost text whose hit box contains `p`
    pub fn hit_test(&self, p: Point) -> Option<&TextElement> {
        let candidates = self.index.query_point(p.x, p.y);
        if candidates.is_empty() {
            return None;
        }
        self.texts.iter().rev().find(|t| candidates.contains(&t.id))
    }

    /// Move a text to a new baseline position. Returns false for an
    /// unknown id.
    pub fn move_position(&mut self, id: TextId, x: f32, y: f32) -> bool {
        let Some(text) = self.texts.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        text.x = x;
        text.y = y;
        let width = self.widths.get(&id).copied().unwrap_or(0.0);
        self.index.insert(id, self.geometry.bounds(text, width));
        true
    }

    pub fn clear(&mut self) {
        self.segments.clear();
        self.texts.clear();
        self.widths.clear();
        self.index.clear();
    }

    /// Replace both sequences with copies of the given ones. Ids are kept,
    /// and the allocator moves past every restored id so a later placement
    /// never reuses one.
    pub fn replace_all(
        &mut self,
        segments: &[LineSegment],
        texts: &[TextElement],
        renderer: &dyn TextRenderer,
    ) {
        self.segments = segments.to_vec();
        self.texts = texts.to_vec();
        self.widths = self
            .texts
            .iter()
            .map(|t| (t.id, renderer.measure(&t.text, &t.font)))
            .collect();
        let geometry = self.geometry;
        let widths = &self.widths;
        self.index.rebuild(
            self.texts
                .iter()
                .map(|t| (t.id, geometry.bounds(t, widths[&t.id]))),
        );
        if let Some(max) = self.texts.iter().map(|t| t.id.0).max() {
            self.next_id = self.next_id.max(max + 1);
        }
    }
}
