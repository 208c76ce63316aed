//! Structmap - procedural structured occupancy maps
//!
//! Synthesizes 3D occupancy maps out of randomized primitives (cylinders,
//! circular and rectangular gates, ellipsoids, convex polyhedra) under a
//! per-category voxel budget, for use as motion-planning test environments.

pub mod core;
pub mod math;
pub mod grid;
pub mod shapes;
pub mod generation;
pub mod config;
