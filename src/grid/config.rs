//! Grid geometry: resolution, extents and origin.

use glam::{DVec3, UVec3};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::math::Aabb;

/// Relative tolerance when checking that a resolution divides the extents.
const DIVISIBILITY_TOLERANCE: f64 = 1e-6;

/// Geometry of the occupancy grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Voxel edge length in meters
    pub resolution: f64,
    /// Map extents (x, y, z) in meters
    pub size: DVec3,
    /// World position of the map's minimum corner
    pub origin: DVec3,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            resolution: 0.1,
            size: DVec3::new(40.0, 40.0, 5.0),
            origin: DVec3::new(-20.0, -20.0, 0.0),
        }
    }
}

impl GridConfig {
    pub fn new(resolution: f64, size: DVec3, origin: DVec3) -> Self {
        Self { resolution, size, origin }
    }

    /// Same geometry at a different resolution.
    pub fn with_resolution(&self, resolution: f64) -> Self {
        Self { resolution, ..*self }
    }

    /// Check the invariants and return voxel counts per axis.
    ///
    /// Fails when the resolution is not positive, an extent is not
    /// positive, or the resolution does not yield an integral voxel count
    /// along every axis.
    pub fn voxel_dims(&self) -> Result<UVec3> {
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(Error::InvalidGrid(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !self.size.is_finite() || self.size.min_element() <= 0.0 {
            return Err(Error::InvalidGrid(format!(
                "map extents must be positive, got {}",
                self.size
            )));
        }
        if !self.origin.is_finite() {
            return Err(Error::InvalidGrid("map origin must be finite".into()));
        }

        let counts = self.size / self.resolution;
        let rounded = counts.round();
        let tolerance = DIVISIBILITY_TOLERANCE * rounded.max(DVec3::ONE);
        let off = (counts - rounded).abs();
        if rounded.min_element() < 1.0 || off.cmpgt(tolerance).any() {
            return Err(Error::IncompatibleResolution {
                resolution: self.resolution,
                size: self.size,
            });
        }
        if rounded.max_element() > u32::MAX as f64 {
            return Err(Error::InvalidGrid(format!(
                "resolution {} gives too many voxels",
                self.resolution
            )));
        }

        Ok(UVec3::new(rounded.x as u32, rounded.y as u32, rounded.z as u32))
    }

    /// Validate without keeping the dimensions.
    pub fn validate(&self) -> Result<()> {
        self.voxel_dims().map(|_| ())
    }

    /// Map volume in cubic meters
    pub fn volume(&self) -> f64 {
        self.size.x * self.size.y * self.size.z
    }

    /// World-space box covered by the map
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.origin, self.origin + self.size)
    }
}
