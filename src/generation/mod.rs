//! Map generation: budgeted random placement and rasterization.
//!
//! A pass runs the five categories in fixed order. Each category keeps
//! sampling shapes at random free-ish positions and rasterizing them into
//! the occupancy grid until its voxel budget is met:
//! 1. Cylinders
//! 2. Circle gates
//! 3. Rectangle gates
//! 4. Ellipsoids
//! 5. Polyhedra
//!
//! Earlier categories claim voxels first; the first writer keeps a voxel.
//! Every sampled shape is recorded in the [`ShapeCatalog`] so the cloud can
//! be rebuilt later, e.g. after a resolution change.

pub mod config;
pub mod random;
pub mod catalog;
pub mod cloud;
pub mod summary;

pub use config::{CategoryRatios, GenerationConfig, SizeBounds};
pub use random::RandomContext;
pub use catalog::ShapeCatalog;
pub use cloud::PointCloud;
pub use summary::{CategoryReport, GenerationSummary};

use glam::DVec3;

use crate::core::Result;
use crate::grid::{GridConfig, Occupancy, OccupancyGrid};
use crate::shapes::{Primitive, Shape, ShapeKind};

/// Owns the grid, the point cloud and the shape catalog of one map.
pub struct MapGenerator {
    grid: OccupancyGrid,
    cloud: PointCloud,
    catalog: ShapeCatalog,
}

impl MapGenerator {
    /// Create a generator over an empty grid.
    pub fn new(grid_config: GridConfig) -> Result<Self> {
        Ok(Self {
            grid: OccupancyGrid::new(grid_config)?,
            cloud: PointCloud::new(),
            catalog: ShapeCatalog::new(),
        })
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn points(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn resolution(&self) -> f64 {
        self.grid.resolution()
    }

    /// Claim every free voxel of the grid lattice around `shape` that the
    /// shape contains. Returns the number of voxels added.
    ///
    /// Candidates are `center + (r, s, t) * resolution` over the bounding
    /// box. Occupancy is checked before containment.
    ///
    /// Each axis scans `-n..=n` steps. The symmetric inclusive range is
    /// intentional: a half-open `-n..n` drops the last lattice row on the
    /// positive side, and halving the resolution would then be able to lose
    /// voxels the coarser pass claimed.
    pub fn rasterize(&mut self, shape: &Shape) -> usize {
        let resolution = self.grid.resolution();
        let center = shape.center();
        let steps = (shape.bounding_half_extent() / resolution).ceil();
        let (nx, ny, nz) = (steps.x as i64, steps.y as i64, steps.z as i64);

        let mut added = 0;
        for r in -nx..=nx {
            for s in -ny..=ny {
                for t in -nz..=nz {
                    let point = center + DVec3::new(r as f64, s as f64, t as f64) * resolution;
                    if self.grid.query(point) != Occupancy::Free {
                        continue;
                    }
                    if !shape.is_inside(point) {
                        continue;
                    }
                    self.grid.mark(point);
                    self.cloud.push(point);
                    added += 1;
                }
            }
        }
        added
    }

    /// Run a full random pass.
    ///
    /// Starts from an empty grid, cloud and catalog, so the same config and
    /// seed always give the same map. Without an attempt cap a category
    /// whose budget cannot be met never finishes.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<GenerationSummary> {
        config.validate()?;
        self.clear();

        let grid_config = *self.grid.config();
        let mut random = RandomContext::new(config, grid_config.size.z)?;
        let total_budget = self.grid.voxel_count();
        let floor_z = grid_config.origin.z;

        if config.ratios.sum() > 1.0 {
            log::warn!(
                "Category ratios sum to {:.2}; later categories will fall short",
                config.ratios.sum()
            );
        }

        let start = std::time::Instant::now();
        let mut categories = Vec::with_capacity(ShapeKind::ALL.len());

        for kind in ShapeKind::ALL {
            let target = (total_budget as f64 * config.ratios.get(kind)).ceil() as usize;
            let mut report = CategoryReport { kind, target, realized: 0, shapes: 0, starved: false };
            let mut idle = 0u32;

            while report.realized < target {
                let anchor = self.grid.sample_uniform_position(random.rng_mut());
                let descriptor = random.sample_shape(kind, anchor, floor_z);
                let added = self.rasterize(&Shape::from_descriptor(&descriptor));
                log::debug!("{:?} at {} added {} voxels", kind, descriptor.center, added);

                self.catalog.push(descriptor);
                report.realized += added;
                report.shapes += 1;

                if added > 0 {
                    idle = 0;
                    continue;
                }
                if idle_cap_reached(&mut idle, config.max_idle_attempts) {
                    log::warn!(
                        "Giving up on {} after {} placements added nothing ({}/{} voxels)",
                        kind.name(), idle, report.realized, target
                    );
                    report.starved = true;
                    break;
                }
            }
            categories.push(report);
        }

        let summary = GenerationSummary { total_budget, categories };
        log::info!(
            "Generated map (seed {}) with {} shapes, {} points in {:.2}s",
            config.seed,
            self.catalog.len(),
            self.cloud.len(),
            start.elapsed().as_secs_f64()
        );
        log::info!("{}", summary);
        Ok(summary)
    }

    /// Clear and run a fresh pass with a different seed.
    pub fn regenerate(&mut self, config: &GenerationConfig, seed: u64) -> Result<GenerationSummary> {
        self.generate(&config.with_seed(seed))
    }

    /// Rebuild the cloud from the catalog at the current resolution.
    ///
    /// The grid and cloud are emptied, then every recorded shape is
    /// rasterized again in its original order. The catalog is kept.
    /// Returns the new point count.
    pub fn reset_map(&mut self) -> usize {
        self.grid.clear();
        self.cloud.clear();

        let catalog = std::mem::take(&mut self.catalog);
        for shape in catalog.shapes() {
            self.rasterize(&shape);
        }
        self.catalog = catalog;

        log::info!(
            "Replayed {} shapes at resolution {}: {} points",
            self.catalog.len(),
            self.resolution(),
            self.cloud.len()
        );
        self.cloud.len()
    }

    /// Reallocate the grid at a new resolution.
    ///
    /// On failure the grid, cloud and catalog are left untouched. On success
    /// the grid is empty and the cloud still holds the previous points until
    /// [`MapGenerator::reset_map`] runs.
    pub fn change_resolution(&mut self, resolution: f64) -> Result<()> {
        match self.grid.change_resolution(resolution) {
            Ok(()) => {
                log::info!("Grid resolution changed to {}", resolution);
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected resolution {}: {}", resolution, err);
                Err(err)
            }
        }
    }

    /// Change resolution and replay the catalog; returns the new point count.
    pub fn replay_at(&mut self, resolution: f64) -> Result<usize> {
        self.change_resolution(resolution)?;
        Ok(self.reset_map())
    }

    /// Drop all occupancy, points and recorded shapes.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.cloud.clear();
        self.catalog.clear();
    }
}

/// Count one placement that added nothing; true once `cap` is reached.
///
/// Without a cap nothing is counted.
fn idle_cap_reached(idle: &mut u32, cap: Option<u32>) -> bool {
    let Some(cap) = cap else {
        return false;
    };
    *idle = idle.saturating_add(1);
    *idle >= cap
}
