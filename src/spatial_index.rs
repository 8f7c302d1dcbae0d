//! R-tree index over text hit boxes.
//!
//! Hit testing asks the tree for candidate boxes containing the point and
//! the overlay store then picks the topmost by insertion order, so the
//! index never decides stacking on its own.

use crate::types::TextId;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Axis-aligned box in logical units, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    id: TextId,
    bounds: Bounds,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let b = &self.bounds;
        AABB::from_corners([b.min_x, b.min_y], [b.max_x, b.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<TextId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the box for `id`
    pub fn insert(&mut self, id: TextId, bounds: Bounds) {
        self.remove(id);
        let entry = SpatialEntry { id, bounds };
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: TextId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    pub fn bounds(&self, id: TextId) -> Option<Bounds> {
        self.entries.get(&id).map(|e| e.bounds)
    }

    /// Ids whose box contains the point, in no particular order
    pub fn query_point(&self, x: f32, y: f32) -> Vec<TextId> {
        let point_envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains_point(x, y))
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole index in one bulk load
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (TextId, Bounds)>,
    {
        let entries: Vec<SpatialEntry> = items
            .into_iter()
            .map(|(id, bounds)| SpatialEntry { id, bounds })
            .collect();
        self.entries = entries.iter().map(|e| (e.id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
