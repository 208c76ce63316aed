//! Per-category outcome of a generation pass.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shapes::ShapeKind;

/// What one category asked for and what it got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub kind: ShapeKind,
    /// Voxel budget for the category
    pub target: usize,
    /// Voxels the category actually claimed
    pub realized: usize,
    /// Shapes sampled, including ones that added nothing
    pub shapes: usize,
    /// The attempt cap ended the category before its budget was met
    pub starved: bool,
}

/// Outcome of a generation pass. Observational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Voxels in the whole map
    pub total_budget: usize,
    /// One report per category, in generation order
    pub categories: Vec<CategoryReport>,
}

impl GenerationSummary {
    pub fn report(&self, kind: ShapeKind) -> Option<&CategoryReport> {
        self.categories.iter().find(|r| r.kind == kind)
    }

    /// Realized voxels of `kind` over the total budget
    pub fn realized_ratio(&self, kind: ShapeKind) -> f64 {
        match self.report(kind) {
            Some(report) if self.total_budget > 0 => {
                report.realized as f64 / self.total_budget as f64
            }
            _ => 0.0,
        }
    }

    pub fn total_realized(&self) -> usize {
        self.categories.iter().map(|r| r.realized).sum()
    }

    pub fn total_shapes(&self) -> usize {
        self.categories.iter().map(|r| r.shapes).sum()
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Realized ratios over {} voxels:", self.total_budget)?;
        for report in &self.categories {
            write!(
                f,
                "  {:<11} {:>6.2}%  ({} voxels, target {}, {} shapes)",
                report.kind.name(),
                100.0 * self.realized_ratio(report.kind),
                report.realized,
                report.target,
                report.shapes,
            )?;
            if report.starved {
                write!(f, " [starved]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> GenerationSummary {
        GenerationSummary {
            total_budget: 200,
            categories: vec![
                CategoryReport { kind: ShapeKind::Cylinder, target: 20, realized: 25, shapes: 3, starved: false },
                CategoryReport { kind: ShapeKind::Ellipsoid, target: 40, realized: 10, shapes: 9, starved: true },
            ],
        }
    }

    #[test]
    fn test_realized_ratio() {
        let s = summary();
        assert!((s.realized_ratio(ShapeKind::Cylinder) - 0.125).abs() < 1e-12);
        assert_eq!(s.realized_ratio(ShapeKind::RectGate), 0.0);
        assert_eq!(s.total_realized(), 35);
        assert_eq!(s.total_shapes(), 12);
    }

    #[test]
    fn test_display() {
        let text = summary().to_string();
        assert!(text.contains("cylinders"));
        assert!(text.contains("12.50%"));
        assert!(text.contains("[starved]"));
    }
}
