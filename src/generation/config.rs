//! Generation parameters: category budgets, size bounds and seed.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::shapes::ShapeKind;

/// Fraction of the total voxel budget each category should fill.
///
/// The sum is not required to stay below one; categories generated later
/// simply starve when space runs out.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRatios {
    pub cylinder: f64,
    pub circle_gate: f64,
    pub rect_gate: f64,
    pub ellipsoid: f64,
    pub polyhedron: f64,
}

impl Default for CategoryRatios {
    fn default() -> Self {
        Self {
            cylinder: 0.1,
            circle_gate: 0.1,
            rect_gate: 0.1,
            ellipsoid: 0.1,
            polyhedron: 0.1,
        }
    }
}

impl CategoryRatios {
    /// All categories disabled
    pub fn zero() -> Self {
        Self {
            cylinder: 0.0,
            circle_gate: 0.0,
            rect_gate: 0.0,
            ellipsoid: 0.0,
            polyhedron: 0.0,
        }
    }

    /// A single enabled category
    pub fn only(kind: ShapeKind, ratio: f64) -> Self {
        let mut ratios = Self::zero();
        ratios.set(kind, ratio);
        ratios
    }

    pub fn get(&self, kind: ShapeKind) -> f64 {
        match kind {
            ShapeKind::Cylinder => self.cylinder,
            ShapeKind::CircleGate => self.circle_gate,
            ShapeKind::RectGate => self.rect_gate,
            ShapeKind::Ellipsoid => self.ellipsoid,
            ShapeKind::Polyhedron => self.polyhedron,
        }
    }

    pub fn set(&mut self, kind: ShapeKind, ratio: f64) {
        match kind {
            ShapeKind::Cylinder => self.cylinder = ratio,
            ShapeKind::CircleGate => self.circle_gate = ratio,
            ShapeKind::RectGate => self.rect_gate = ratio,
            ShapeKind::Ellipsoid => self.ellipsoid = ratio,
            ShapeKind::Polyhedron => self.polyhedron = ratio,
        }
    }

    pub fn sum(&self) -> f64 {
        ShapeKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }
}

/// Size bounds `w1 <= w2 <= w3 <= w4` in meters.
///
/// `w1` is the minimum size of everything; cylinder diameters and ellipsoid
/// semi-axes reach up to `w2`, gate dimensions up to `w3`, polyhedron half
/// extents up to `w4`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBounds {
    pub w1: f64,
    pub w2: f64,
    pub w3: f64,
    pub w4: f64,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self { w1: 0.3, w2: 1.0, w3: 2.0, w4: 3.0 }
    }
}

impl SizeBounds {
    pub fn validate(&self) -> Result<()> {
        let ws = [self.w1, self.w2, self.w3, self.w4];
        if ws.iter().any(|w| !w.is_finite()) {
            return Err(Error::InvalidGeneration("size bounds must be finite".into()));
        }
        if self.w1 <= 0.0 {
            return Err(Error::InvalidGeneration(format!(
                "minimum size w1 must be positive, got {}",
                self.w1
            )));
        }
        if !(self.w1 <= self.w2 && self.w2 <= self.w3 && self.w3 <= self.w4) {
            return Err(Error::InvalidGeneration(format!(
                "size bounds must be ordered, got w1={} w2={} w3={} w4={}",
                self.w1, self.w2, self.w3, self.w4
            )));
        }
        Ok(())
    }
}

/// Configuration for one random generation pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub ratios: CategoryRatios,
    pub bounds: SizeBounds,
    /// Seed for the pass; identical seeds reproduce identical maps
    pub seed: u64,
    /// Give up on a category after this many consecutive placements that
    /// add no voxels. `None` keeps sampling until the budget is met.
    pub max_idle_attempts: Option<u32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            ratios: CategoryRatios::default(),
            bounds: SizeBounds::default(),
            seed: 1,
            max_idle_attempts: None,
        }
    }
}

impl GenerationConfig {
    /// Same parameters, different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..self.clone() }
    }

    pub fn validate(&self) -> Result<()> {
        for kind in ShapeKind::ALL {
            let ratio = self.ratios.get(kind);
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(Error::InvalidGeneration(format!(
                    "{} ratio must be a non-negative number, got {}",
                    kind.name(),
                    ratio
                )));
            }
        }
        if self.max_idle_attempts == Some(0) {
            return Err(Error::InvalidGeneration(
                "max_idle_attempts must be at least 1".into(),
            ));
        }
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = GenerationConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.ratios.sum() - 0.5).abs() < 1e-12);
        assert_eq!(cfg.max_idle_attempts, None);
    }

    #[test]
    fn test_only() {
        let ratios = CategoryRatios::only(ShapeKind::Ellipsoid, 0.3);
        assert_eq!(ratios.get(ShapeKind::Ellipsoid), 0.3);
        assert_eq!(ratios.sum(), 0.3);
    }

    #[test]
    fn test_ratio_sum_above_one_is_allowed() {
        let cfg = GenerationConfig {
            ratios: CategoryRatios {
                cylinder: 0.6,
                circle_gate: 0.6,
                ..CategoryRatios::zero()
            },
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_ratio() {
        let mut cfg = GenerationConfig::default();
        cfg.ratios.rect_gate = -0.1;
        assert!(matches!(cfg.validate(), Err(Error::InvalidGeneration(_))));
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        let cfg = GenerationConfig {
            bounds: SizeBounds { w1: 0.3, w2: 2.0, w3: 1.0, w4: 3.0 },
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = GenerationConfig {
            bounds: SizeBounds { w1: 0.0, w2: 1.0, w3: 2.0, w4: 3.0 },
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_attempt_cap() {
        let cfg = GenerationConfig {
            max_idle_attempts: Some(0),
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_with_seed() {
        let cfg = GenerationConfig::default().with_seed(42);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.ratios, CategoryRatios::default());
    }
}
