//! Oriented half-space boundary

use crate::core::types::DVec3;

/// A plane `normal · p = offset`; the solid side is `normal · p <= offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub offset: f64,
}

impl Plane {
    pub fn new(normal: DVec3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Signed distance from point to plane (positive = outside)
    pub fn distance_to_point(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// Whether the point lies on the solid side (boundary included)
    pub fn contains(&self, point: DVec3) -> bool {
        self.distance_to_point(point) <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_sides() {
        let plane = Plane::new(DVec3::Z, 1.0);
        assert!(plane.contains(DVec3::ZERO));
        assert!(plane.contains(DVec3::Z));
        assert!(!plane.contains(DVec3::Z * 1.5));
        assert!((plane.distance_to_point(DVec3::Z * 3.0) - 2.0).abs() < 1e-12);
    }
}
