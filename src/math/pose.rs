//! Rigid placement of a primitive: center plus rotation.

use crate::core::types::{DMat3, DQuat, DVec3, EulerRot};

/// World placement of a primitive's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub center: DVec3,
    /// Local -> world rotation
    pub rotation: DMat3,
    /// World -> local rotation (transpose of `rotation`)
    pub inverse_rotation: DMat3,
}

impl Pose {
    /// Axis-aligned pose at `center`
    pub fn from_translation(center: DVec3) -> Self {
        Self {
            center,
            rotation: DMat3::IDENTITY,
            inverse_rotation: DMat3::IDENTITY,
        }
    }

    /// Pose rotated by `yaw` radians about world Z
    pub fn from_yaw(center: DVec3, yaw: f64) -> Self {
        Self::from_rotation(center, DMat3::from_rotation_z(yaw))
    }

    /// Pose from intrinsic Z-Y-X Euler angles packed as (yaw, pitch, roll)
    pub fn from_euler(center: DVec3, angles: DVec3) -> Self {
        let quat = DQuat::from_euler(EulerRot::ZYX, angles.x, angles.y, angles.z);
        Self::from_rotation(center, DMat3::from_quat(quat))
    }

    fn from_rotation(center: DVec3, rotation: DMat3) -> Self {
        Self {
            center,
            rotation,
            inverse_rotation: rotation.transpose(),
        }
    }

    /// Map a world-space point into the local frame
    #[inline]
    pub fn to_local(&self, world: DVec3) -> DVec3 {
        self.inverse_rotation * (world - self.center)
    }

    /// Map a local-space point into world space
    #[inline]
    pub fn to_world(&self, local: DVec3) -> DVec3 {
        self.rotation * local + self.center
    }

    /// World half-extent of a local box with half-extents `half`
    pub fn box_half_extent(&self, half: DVec3) -> DVec3 {
        let m = self.rotation;
        // row i of |R| dotted with half
        DVec3::new(
            m.x_axis.x.abs() * half.x + m.y_axis.x.abs() * half.y + m.z_axis.x.abs() * half.z,
            m.x_axis.y.abs() * half.x + m.y_axis.y.abs() * half.y + m.z_axis.y.abs() * half.z,
            m.x_axis.z.abs() * half.x + m.y_axis.z.abs() * half.y + m.z_axis.z.abs() * half.z,
        )
    }

    /// Tight world half-extent of a local ellipsoid with semi-axes `radii`
    pub fn ellipsoid_half_extent(&self, radii: DVec3) -> DVec3 {
        let m = self.rotation;
        let row = |a: f64, b: f64, c: f64| {
            ((a * radii.x).powi(2) + (b * radii.y).powi(2) + (c * radii.z).powi(2)).sqrt()
        };
        DVec3::new(
            row(m.x_axis.x, m.y_axis.x, m.z_axis.x),
            row(m.x_axis.y, m.y_axis.y, m.z_axis.y),
            row(m.x_axis.z, m.y_axis.z, m.z_axis.z),
        )
    }
}
