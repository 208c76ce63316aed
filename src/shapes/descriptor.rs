//! Replayable shape records.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::ShapeKind;

/// Frame dimensions shared by circular and rectangular gates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GateParams {
    /// Width of the frame band, also the frame depth
    pub thickness: f64,
    /// Outer half width (local y)
    pub half_width: f64,
    /// Outer half height (local z)
    pub half_height: f64,
    /// Rotation about world Z in radians
    pub yaw: f64,
}

/// Size and orientation parameters per primitive family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParams {
    /// Vertical cylinder
    Cylinder { radius: f64, height: f64 },
    CircleGate(GateParams),
    RectGate(GateParams),
    /// Semi-axes and (yaw, pitch, roll)
    Ellipsoid { radii: DVec3, angles: DVec3 },
    /// Bounding half extents plus the normals of the extra cutting faces
    Polyhedron { half_extents: DVec3, normals: Vec<DVec3> },
}

/// Everything needed to rebuild one placed shape exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub center: DVec3,
    #[serde(flatten)]
    pub params: ShapeParams,
}

impl ShapeDescriptor {
    pub fn new(center: DVec3, params: ShapeParams) -> Self {
        Self { center, params }
    }

    pub fn kind(&self) -> ShapeKind {
        match self.params {
            ShapeParams::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParams::CircleGate(_) => ShapeKind::CircleGate,
            ShapeParams::RectGate(_) => ShapeKind::RectGate,
            ShapeParams::Ellipsoid { .. } => ShapeKind::Ellipsoid,
            ShapeParams::Polyhedron { .. } => ShapeKind::Polyhedron,
        }
    }
}
