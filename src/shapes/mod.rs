//! Geometric primitives placed by the generator.
//!
//! The set of primitives is closed: [`Shape`] is a tagged enum over the five
//! families and dispatches the [`Primitive`] capabilities with a `match`, so
//! rasterization never goes through a vtable.

pub mod descriptor;
pub mod cylinder;
pub mod gate;
pub mod ellipsoid;
pub mod polyhedron;

pub use descriptor::{GateParams, ShapeDescriptor, ShapeParams};
pub use cylinder::Cylinder;
pub use gate::{CircleGate, GateFrame, RectGate};
pub use ellipsoid::Ellipsoid;
pub use polyhedron::Polyhedron;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::math::{Aabb, Pose};

/// Shape category, in placement priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cylinder,
    CircleGate,
    RectGate,
    Ellipsoid,
    Polyhedron,
}

impl ShapeKind {
    /// Every kind, in the order categories are generated.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cylinder,
        ShapeKind::CircleGate,
        ShapeKind::RectGate,
        ShapeKind::Ellipsoid,
        ShapeKind::Polyhedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinders",
            ShapeKind::CircleGate => "circles",
            ShapeKind::RectGate => "gates",
            ShapeKind::Ellipsoid => "ellipsoids",
            ShapeKind::Polyhedron => "polytopes",
        }
    }

    /// Position in [`ShapeKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Capabilities the rasterizer needs from a primitive.
pub trait Primitive {
    /// Placement of the local frame
    fn pose(&self) -> &Pose;

    /// Half-extent of the world-space axis-aligned box enclosing the shape
    fn bounding_half_extent(&self) -> DVec3;

    /// Containment test for a point already mapped into the local frame
    fn contains_local(&self, local: DVec3) -> bool;

    fn center(&self) -> DVec3 {
        self.pose().center
    }

    /// Containment test for a world-space point
    fn is_inside(&self, point: DVec3) -> bool {
        self.contains_local(self.pose().to_local(point))
    }

    fn world_bounds(&self) -> Aabb {
        Aabb::from_center_half_extent(self.center(), self.bounding_half_extent())
    }
}

/// One placed primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cylinder(Cylinder),
    CircleGate(CircleGate),
    RectGate(RectGate),
    Ellipsoid(Ellipsoid),
    Polyhedron(Polyhedron),
}

impl Shape {
    /// Build the primitive a descriptor records.
    pub fn from_descriptor(descriptor: &ShapeDescriptor) -> Self {
        let center = descriptor.center;
        match &descriptor.params {
            ShapeParams::Cylinder { radius, height } => {
                Shape::Cylinder(Cylinder::new(center, *radius, *height))
            }
            ShapeParams::CircleGate(params) => {
                Shape::CircleGate(CircleGate(GateFrame::new(center, params)))
            }
            ShapeParams::RectGate(params) => {
                Shape::RectGate(RectGate(GateFrame::new(center, params)))
            }
            ShapeParams::Ellipsoid { radii, angles } => {
                Shape::Ellipsoid(Ellipsoid::new(center, *radii, *angles))
            }
            ShapeParams::Polyhedron { half_extents, normals } => {
                Shape::Polyhedron(Polyhedron::new(center, *half_extents, normals))
            }
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::CircleGate(_) => ShapeKind::CircleGate,
            Shape::RectGate(_) => ShapeKind::RectGate,
            Shape::Ellipsoid(_) => ShapeKind::Ellipsoid,
            Shape::Polyhedron(_) => ShapeKind::Polyhedron,
        }
    }
}

impl Primitive for Shape {
    fn pose(&self) -> &Pose {
        match self {
            Shape::Cylinder(s) => s.pose(),
            Shape::CircleGate(s) => s.pose(),
            Shape::RectGate(s) => s.pose(),
            Shape::Ellipsoid(s) => s.pose(),
            Shape::Polyhedron(s) => s.pose(),
        }
    }

    fn bounding_half_extent(&self) -> DVec3 {
        match self {
            Shape::Cylinder(s) => s.bounding_half_extent(),
            Shape::CircleGate(s) => s.bounding_half_extent(),
            Shape::RectGate(s) => s.bounding_half_extent(),
            Shape::Ellipsoid(s) => s.bounding_half_extent(),
            Shape::Polyhedron(s) => s.bounding_half_extent(),
        }
    }

    #[inline]
    fn contains_local(&self, local: DVec3) -> bool {
        match self {
            Shape::Cylinder(s) => s.contains_local(local),
            Shape::CircleGate(s) => s.contains_local(local),
            Shape::RectGate(s) => s.contains_local(local),
            Shape::Ellipsoid(s) => s.contains_local(local),
            Shape::Polyhedron(s) => s.contains_local(local),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order() {
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_from_descriptor_kind() {
        let descriptor = ShapeDescriptor::new(
            DVec3::ZERO,
            ShapeParams::Cylinder { radius: 1.0, height: 2.0 },
        );
        let shape = Shape::from_descriptor(&descriptor);
        assert_eq!(shape.kind(), ShapeKind::Cylinder);
        assert_eq!(shape.kind(), descriptor.kind());
        assert!(shape.is_inside(DVec3::new(0.5, 0.5, 0.5)));
        assert!(!shape.is_inside(DVec3::new(0.0, 0.0, 1.5)));
    }

    #[test]
    fn test_world_bounds_enclose_samples() {
        let descriptor = ShapeDescriptor::new(
            DVec3::new(1.0, 2.0, 3.0),
            ShapeParams::Ellipsoid {
                radii: DVec3::new(0.5, 1.0, 2.0),
                angles: DVec3::new(0.4, -0.9, 1.7),
            },
        );
        let shape = Shape::from_descriptor(&descriptor);
        let bounds = shape.world_bounds();
        let steps = 12;
        for i in 0..=steps {
            for j in 0..=steps {
                for k in 0..=steps {
                    let t = |n: i32| n as f64 / steps as f64 * 2.0 - 1.0;
                    let p = bounds.center() + bounds.half_extent() * DVec3::new(t(i), t(j), t(k)) * 1.2;
                    if shape.is_inside(p) {
                        assert!(bounds.contains_point(p));
                    }
                }
            }
        }
    }
}
