//! Dense occupancy bitmap keyed by world position.

use glam::{DVec3, UVec3};
use rand::Rng;

use crate::core::Result;
use crate::math::Aabb;
use super::config::GridConfig;

/// Result of an occupancy query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Free,
    Occupied,
    OutOfBounds,
}

/// Sampling keeps this many voxels away from the x/y borders.
const SAMPLE_MARGIN_VOXELS: f64 = 1.0;

/// Dense voxel occupancy over the configured map box.
///
/// Voxels are only ever set; the whole grid is cleared at once by
/// [`OccupancyGrid::clear`] or reallocated by
/// [`OccupancyGrid::change_resolution`].
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    config: GridConfig,
    dims: UVec3,
    /// One bit per voxel, x fastest
    bits: Vec<u64>,
    occupied: usize,
}

impl OccupancyGrid {
    /// Allocate an empty grid for `config`.
    pub fn new(config: GridConfig) -> Result<Self> {
        let dims = config.voxel_dims()?;
        Ok(Self::allocate(config, dims))
    }

    fn allocate(config: GridConfig, dims: UVec3) -> Self {
        let voxels = dims.x as usize * dims.y as usize * dims.z as usize;
        Self {
            config,
            dims,
            bits: vec![0; voxels.div_ceil(64)],
            occupied: 0,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn resolution(&self) -> f64 {
        self.config.resolution
    }

    /// Voxel counts per axis
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Total number of voxels in the grid
    pub fn voxel_count(&self) -> usize {
        self.dims.x as usize * self.dims.y as usize * self.dims.z as usize
    }

    /// Number of occupied voxels
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    pub fn bounds(&self) -> Aabb {
        self.config.bounds()
    }

    /// Integer voxel coordinate covering `point`, if inside the map.
    pub fn voxel_index(&self, point: DVec3) -> Option<UVec3> {
        if !point.is_finite() {
            return None;
        }
        let cell = ((point - self.config.origin) / self.config.resolution).floor();
        if cell.min_element() < 0.0 {
            return None;
        }
        let (x, y, z) = (cell.x as u64, cell.y as u64, cell.z as u64);
        if x >= self.dims.x as u64 || y >= self.dims.y as u64 || z >= self.dims.z as u64 {
            return None;
        }
        Some(UVec3::new(x as u32, y as u32, z as u32))
    }

    /// World position of a voxel's center
    pub fn voxel_center(&self, index: UVec3) -> DVec3 {
        self.config.origin + (index.as_dvec3() + DVec3::splat(0.5)) * self.config.resolution
    }

    #[inline]
    fn linear(&self, index: UVec3) -> usize {
        (index.z as usize * self.dims.y as usize + index.y as usize) * self.dims.x as usize
            + index.x as usize
    }

    /// Tri-state occupancy of the voxel covering `point`.
    pub fn query(&self, point: DVec3) -> Occupancy {
        match self.voxel_index(point) {
            None => Occupancy::OutOfBounds,
            Some(index) => {
                let bit = self.linear(index);
                if self.bits[bit / 64] & (1u64 << (bit % 64)) != 0 {
                    Occupancy::Occupied
                } else {
                    Occupancy::Free
                }
            }
        }
    }

    /// Mark the voxel covering `point` occupied.
    ///
    /// Idempotent. Returns `true` if the voxel was newly claimed; points
    /// outside the map are ignored.
    pub fn mark(&mut self, point: DVec3) -> bool {
        let Some(index) = self.voxel_index(point) else {
            return false;
        };
        let bit = self.linear(index);
        let word = &mut self.bits[bit / 64];
        let mask = 1u64 << (bit % 64);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.occupied += 1;
        true
    }

    /// Uniformly random position inside the map, one voxel in from the x/y
    /// borders. The position may already be occupied.
    pub fn sample_uniform_position<R: Rng>(&self, rng: &mut R) -> DVec3 {
        let margin = DVec3::new(self.config.resolution, self.config.resolution, 0.0)
            * SAMPLE_MARGIN_VOXELS;
        let region = self.bounds().shrunk(margin);
        let mut axis = |min: f64, max: f64| {
            if min < max { rng.random_range(min..max) } else { min }
        };
        let x = axis(region.min.x, region.max.x);
        let y = axis(region.min.y, region.max.y);
        let z = axis(region.min.z, region.max.z);
        DVec3::new(x, y, z)
    }

    /// Reallocate the grid at a new resolution.
    ///
    /// Fails without touching the current grid when the resolution does not
    /// evenly divide the map extents.
    pub fn change_resolution(&mut self, resolution: f64) -> Result<()> {
        let config = self.config.with_resolution(resolution);
        let dims = config.voxel_dims()?;
        *self = Self::allocate(config, dims);
        Ok(())
    }

    /// Free every voxel.
    pub fn clear(&mut self) {
        self.bits.fill(0);
        self.occupied = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn grid() -> OccupancyGrid {
        OccupancyGrid::new(GridConfig::new(
            0.5,
            DVec3::new(4.0, 4.0, 2.0),
            DVec3::new(-2.0, -2.0, 0.0),
        ))
        .unwrap()
    }

    #[test]
    fn test_new_grid_is_empty() {
        let g = grid();
        assert_eq!(g.dims(), UVec3::new(8, 8, 4));
        assert_eq!(g.voxel_count(), 256);
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.query(DVec3::new(0.1, 0.1, 0.1)), Occupancy::Free);
    }

    #[test]
    fn test_query_out_of_bounds() {
        let g = grid();
        assert_eq!(g.query(DVec3::new(-2.1, 0.0, 0.5)), Occupancy::OutOfBounds);
        assert_eq!(g.query(DVec3::new(0.0, 2.0, 0.5)), Occupancy::OutOfBounds);
        assert_eq!(g.query(DVec3::new(0.0, 0.0, -0.01)), Occupancy::OutOfBounds);
        assert_eq!(g.query(DVec3::splat(f64::NAN)), Occupancy::OutOfBounds);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut g = grid();
        let p = DVec3::new(0.3, -0.7, 1.2);
        assert!(g.mark(p));
        assert!(!g.mark(p));
        // same voxel, different point
        assert!(!g.mark(DVec3::new(0.4, -0.6, 1.1)));
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.query(p), Occupancy::Occupied);
        assert!(!g.mark(DVec3::splat(10.0)));
    }

    #[test]
    fn test_voxel_center_maps_back() {
        let g = grid();
        let index = UVec3::new(3, 7, 2);
        assert_eq!(g.voxel_index(g.voxel_center(index)), Some(index));
    }

    #[test]
    fn test_clear() {
        let mut g = grid();
        g.mark(DVec3::ZERO);
        g.mark(DVec3::new(1.0, 1.0, 1.0));
        g.clear();
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.query(DVec3::ZERO), Occupancy::Free);
    }

    #[test]
    fn test_change_resolution() {
        let mut g = grid();
        g.mark(DVec3::ZERO);
        g.change_resolution(0.25).unwrap();
        assert_eq!(g.dims(), UVec3::new(16, 16, 8));
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn test_change_resolution_rejected_keeps_state() {
        let mut g = grid();
        g.mark(DVec3::ZERO);
        let err = g.change_resolution(0.3).unwrap_err();
        assert!(matches!(err, Error::IncompatibleResolution { .. }));
        assert_eq!(g.resolution(), 0.5);
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.query(DVec3::ZERO), Occupancy::Occupied);
    }

    #[test]
    fn test_sample_stays_inside_margin() {
        let g = grid();
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..1000 {
            let p = g.sample_uniform_position(&mut rng);
            assert!(p.x >= -1.5 && p.x < 1.5);
            assert!(p.y >= -1.5 && p.y < 1.5);
            assert!(p.z >= 0.0 && p.z < 2.0);
        }
    }
}
