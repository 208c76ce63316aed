use glam::DVec3;

use crate::math::Pose;
use super::Primitive;

/// Solid ellipsoid with arbitrary orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    pose: Pose,
    radii: DVec3,
    inv_radii: DVec3,
}

impl Ellipsoid {
    /// `angles` are (yaw, pitch, roll) in radians
    pub fn new(center: DVec3, radii: DVec3, angles: DVec3) -> Self {
        Self {
            pose: Pose::from_euler(center, angles),
            radii,
            inv_radii: radii.recip(),
        }
    }

    pub fn radii(&self) -> DVec3 {
        self.radii
    }
}

impl Primitive for Ellipsoid {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn bounding_half_extent(&self) -> DVec3 {
        self.pose.ellipsoid_half_extent(self.radii)
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        (local * self.inv_radii).length_squared() <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_axis_aligned() {
        let e = Ellipsoid::new(DVec3::ZERO, DVec3::new(1.0, 2.0, 0.5), DVec3::ZERO);
        assert!(e.is_inside(DVec3::ZERO));
        assert!(e.is_inside(DVec3::new(0.0, 1.9, 0.0)));
        assert!(!e.is_inside(DVec3::new(1.1, 0.0, 0.0)));
        assert!(!e.is_inside(DVec3::new(0.0, 0.0, 0.6)));
        assert_eq!(e.bounding_half_extent(), DVec3::new(1.0, 2.0, 0.5));
    }

    #[test]
    fn test_yawed() {
        let e = Ellipsoid::new(DVec3::ONE, DVec3::new(2.0, 0.5, 0.5), DVec3::new(FRAC_PI_2, 0.0, 0.0));
        // long axis now along world y
        assert!(e.is_inside(DVec3::new(1.0, 2.8, 1.0)));
        assert!(!e.is_inside(DVec3::new(2.8, 1.0, 1.0)));
        let half = e.bounding_half_extent();
        assert!((half - DVec3::new(0.5, 2.0, 0.5)).length() < 1e-9);
    }
}
