use glam::DVec3;

use crate::math::Pose;
use super::Primitive;

/// Solid vertical cylinder centered on its pose.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    pose: Pose,
    radius: f64,
    half_height: f64,
}

impl Cylinder {
    pub fn new(center: DVec3, radius: f64, height: f64) -> Self {
        Self {
            pose: Pose::from_translation(center),
            radius,
            half_height: height * 0.5,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.half_height * 2.0
    }
}

impl Primitive for Cylinder {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn bounding_half_extent(&self) -> DVec3 {
        DVec3::new(self.radius, self.radius, self.half_height)
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        local.x * local.x + local.y * local.y <= self.radius * self.radius
            && local.z.abs() <= self.half_height
    }
}
