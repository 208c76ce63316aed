//! Seeded sampling of shape parameters.

use std::f64::consts::PI;

use glam::DVec3;
use rand::distr::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::core::Result;
use crate::shapes::{GateParams, ShapeDescriptor, ShapeKind, ShapeParams};
use super::config::GenerationConfig;

/// Lowest sampled cylinder height in meters.
const MIN_HEIGHT: f64 = 0.1;
/// Range of extra cutting faces on a polyhedron.
const POLY_MIN_FACES: usize = 4;
const POLY_MAX_FACES: usize = 12;

/// Random engine plus the per-category distributions of one generation pass.
///
/// Owned by a single generator; nothing here is shared or global.
#[derive(Clone, Debug)]
pub struct RandomContext {
    rng: Pcg64Mcg,
    angle: Uniform<f64>,
    height: Uniform<f64>,
    /// Cylinder diameters and ellipsoid semi-axes
    solid_width: Uniform<f64>,
    gate_width: Uniform<f64>,
    /// Polyhedron half extents
    radius: Uniform<f64>,
}

impl RandomContext {
    /// Seed the engine from `config.seed`; heights span up to `map_height`.
    pub fn new(config: &GenerationConfig, map_height: f64) -> Result<Self> {
        let bounds = &config.bounds;
        Ok(Self {
            rng: Pcg64Mcg::seed_from_u64(config.seed),
            angle: Uniform::new_inclusive(-PI, PI)?,
            height: Uniform::new_inclusive(MIN_HEIGHT.min(map_height), map_height)?,
            solid_width: Uniform::new_inclusive(bounds.w1, bounds.w2)?,
            gate_width: Uniform::new_inclusive(bounds.w1, bounds.w3)?,
            radius: Uniform::new_inclusive(bounds.w1, bounds.w4)?,
        })
    }

    /// The engine itself, for samplers outside this module.
    pub fn rng_mut(&mut self) -> &mut Pcg64Mcg {
        &mut self.rng
    }

    /// Draw size and orientation for a shape of `kind` placed at `anchor`.
    ///
    /// Cylinders stand on `floor_z`; every other kind is centered on the
    /// anchor.
    pub fn sample_shape(&mut self, kind: ShapeKind, anchor: DVec3, floor_z: f64) -> ShapeDescriptor {
        match kind {
            ShapeKind::Cylinder => {
                let height = self.height.sample(&mut self.rng);
                let radius = self.solid_width.sample(&mut self.rng) * 0.5;
                let center = DVec3::new(anchor.x, anchor.y, floor_z + height * 0.5);
                ShapeDescriptor::new(center, ShapeParams::Cylinder { radius, height })
            }
            ShapeKind::CircleGate => {
                ShapeDescriptor::new(anchor, ShapeParams::CircleGate(self.sample_gate()))
            }
            ShapeKind::RectGate => {
                ShapeDescriptor::new(anchor, ShapeParams::RectGate(self.sample_gate()))
            }
            ShapeKind::Ellipsoid => {
                let angles = sample_vec3(&self.angle, &mut self.rng);
                let radii = sample_vec3(&self.solid_width, &mut self.rng);
                ShapeDescriptor::new(anchor, ShapeParams::Ellipsoid { radii, angles })
            }
            ShapeKind::Polyhedron => {
                let half_extents = sample_vec3(&self.radius, &mut self.rng);
                let faces = self.rng.random_range(POLY_MIN_FACES..=POLY_MAX_FACES);
                let normals = (0..faces).map(|_| self.sample_unit_vector()).collect();
                ShapeDescriptor::new(anchor, ShapeParams::Polyhedron { half_extents, normals })
            }
        }
    }

    fn sample_gate(&mut self) -> GateParams {
        let yaw = self.angle.sample(&mut self.rng);
        let thickness = 0.1 + 0.2 * self.gate_width.sample(&mut self.rng);
        let half_width = thickness + self.gate_width.sample(&mut self.rng);
        let half_height = thickness + self.gate_width.sample(&mut self.rng);
        GateParams { thickness, half_width, half_height, yaw }
    }

    /// Uniform direction on the unit sphere
    fn sample_unit_vector(&mut self) -> DVec3 {
        let z: f64 = self.rng.random_range(-1.0..=1.0);
        let phi = self.angle.sample(&mut self.rng);
        let r = (1.0 - z * z).max(0.0).sqrt();
        DVec3::new(r * phi.cos(), r * phi.sin(), z)
    }
}

fn sample_vec3<R: Rng>(dist: &Uniform<f64>, rng: &mut R) -> DVec3 {
    let x = dist.sample(rng);
    let y = dist.sample(rng);
    let z = dist.sample(rng);
    DVec3::new(x, y, z)
}
