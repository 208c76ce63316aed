//! Mathematical utilities

pub mod aabb;
pub mod plane;
pub mod pose;

pub use aabb::Aabb;
pub use plane::Plane;
pub use pose::Pose;
