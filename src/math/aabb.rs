//! Axis-aligned bounding box

use crate::core::types::DVec3;

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from center and half-extents
    pub fn from_center_half_extent(center: DVec3, half_extent: DVec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Get center point
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Get half-extents
    pub fn half_extent(&self) -> DVec3 {
        self.size() * 0.5
    }

    /// Check if point is inside AABB (inclusive)
    pub fn contains_point(&self, p: DVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Shrink each side by `margin` per axis. An axis too thin to shrink
    /// collapses onto its center.
    pub fn shrunk(&self, margin: DVec3) -> Aabb {
        let center = self.center();
        let half = (self.half_extent() - margin).max(DVec3::ZERO);
        Aabb::from_center_half_extent(center, half)
    }
}
