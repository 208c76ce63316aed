//! Hollow gate frames.
//!
//! A gate is a frame standing in the local y-z plane, `thickness` deep along
//! local x. The solid is everything inside the outer boundary (inclusive)
//! that is not strictly inside the inner cutout, so the inner boundary
//! belongs to the frame. A cutout with a non-positive dimension is absent.

use glam::DVec3;

use crate::math::Pose;
use super::descriptor::GateParams;
use super::Primitive;

/// Placement and dimensions shared by both gate profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct GateFrame {
    pose: Pose,
    half_depth: f64,
    outer: DVec3,
    /// Inner half width/height, zero when there is no opening
    inner: DVec3,
}

impl GateFrame {
    pub fn new(center: DVec3, params: &GateParams) -> Self {
        let outer = DVec3::new(params.thickness * 0.5, params.half_width, params.half_height);
        let inner_w = params.half_width - params.thickness;
        let inner_h = params.half_height - params.thickness;
        let inner = if inner_w > 0.0 && inner_h > 0.0 {
            DVec3::new(0.0, inner_w, inner_h)
        } else {
            DVec3::ZERO
        };
        Self {
            pose: Pose::from_yaw(center, params.yaw),
            half_depth: params.thickness * 0.5,
            outer,
            inner,
        }
    }

    fn has_opening(&self) -> bool {
        self.inner.y > 0.0
    }

    fn bounding_half_extent(&self) -> DVec3 {
        self.pose.box_half_extent(self.outer)
    }
}

/// Gate with an elliptical outline and opening.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleGate(pub GateFrame);

/// Gate with a rectangular outline and opening.
#[derive(Debug, Clone, PartialEq)]
pub struct RectGate(pub GateFrame);

impl Primitive for CircleGate {
    fn pose(&self) -> &Pose {
        &self.0.pose
    }

    fn bounding_half_extent(&self) -> DVec3 {
        self.0.bounding_half_extent()
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        let frame = &self.0;
        if local.x.abs() > frame.half_depth {
            return false;
        }
        let outer = (local.y / frame.outer.y).powi(2) + (local.z / frame.outer.z).powi(2);
        if outer > 1.0 {
            return false;
        }
        if !frame.has_opening() {
            return true;
        }
        let inner = (local.y / frame.inner.y).powi(2) + (local.z / frame.inner.z).powi(2);
        inner >= 1.0
    }
}

impl Primitive for RectGate {
    fn pose(&self) -> &Pose {
        &self.0.pose
    }

    fn bounding_half_extent(&self) -> DVec3 {
        self.0.bounding_half_extent()
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        let frame = &self.0;
        let (x, y, z) = (local.x.abs(), local.y.abs(), local.z.abs());
        if x > frame.half_depth || y > frame.outer.y || z > frame.outer.z {
            return false;
        }
        !(frame.has_opening() && y < frame.inner.y && z < frame.inner.z)
    }
}
