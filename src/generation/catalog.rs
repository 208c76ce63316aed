//! Ordered record of every shape a pass placed.

use serde::{Deserialize, Serialize};

use crate::shapes::{Shape, ShapeDescriptor, ShapeKind};

/// Append-only list of shape descriptors, in placement order.
///
/// Replaying the catalog front to back against an empty grid rebuilds the
/// exact point cloud of the pass that produced it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeCatalog {
    entries: Vec<ShapeDescriptor>,
}

impl ShapeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, descriptor: ShapeDescriptor) {
        self.entries.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[ShapeDescriptor] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.entries.iter()
    }

    /// Rebuilt primitives, in placement order
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.entries.iter().map(Shape::from_descriptor)
    }

    /// Number of recorded shapes of one kind
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.entries.iter().filter(|d| d.kind() == kind).count()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
