//! Error types for map generation

use glam::DVec3;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid grid config: {0}")]
    InvalidGrid(String),

    #[error("Resolution {resolution} does not evenly divide map extents {size}")]
    IncompatibleResolution { resolution: f64, size: DVec3 },

    #[error("Invalid generation config: {0}")]
    InvalidGeneration(String),

    #[error("Sampling range error: {0}")]
    Sampling(#[from] rand::distr::uniform::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
