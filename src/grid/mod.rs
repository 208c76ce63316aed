//! Occupancy grid: the voxel store that records which cells are claimed.

pub mod config;
pub mod occupancy;

pub use config::GridConfig;
pub use occupancy::{Occupancy, OccupancyGrid};
