//! Random convex polyhedra built from half-spaces.

use glam::DVec3;

use crate::math::{Plane, Pose};
use super::Primitive;

/// Convex solid: the half-extent box cut by extra faces tangent to the
/// ellipsoid inscribed in that box.
///
/// The inscribed ellipsoid is always kept, so the solid is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyhedron {
    pose: Pose,
    half_extents: DVec3,
    /// Local-frame faces, box faces included
    faces: Vec<Plane>,
}

impl Polyhedron {
    pub fn new(center: DVec3, half_extents: DVec3, normals: &[DVec3]) -> Self {
        let mut faces = Vec::with_capacity(6 + normals.len());
        for axis in [DVec3::X, DVec3::Y, DVec3::Z] {
            let extent = axis.dot(half_extents);
            faces.push(Plane::new(axis, extent));
            faces.push(Plane::new(-axis, extent));
        }
        faces.extend(
            normals
                .iter()
                .filter_map(|n| n.try_normalize())
                .map(|n| Plane::new(n, tangent_offset(n, half_extents))),
        );

        Self {
            pose: Pose::from_translation(center),
            half_extents,
            faces,
        }
    }

    pub fn faces(&self) -> &[Plane] {
        &self.faces
    }
}

/// Support distance of the ellipsoid with semi-axes `radii` along `normal`.
fn tangent_offset(normal: DVec3, radii: DVec3) -> f64 {
    (normal * radii).length()
}

impl Primitive for Polyhedron {
    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn bounding_half_extent(&self) -> DVec3 {
        self.half_extents
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        self.faces.iter().all(|face| face.contains(local))
    }
}
