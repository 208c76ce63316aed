//! File-level configuration: grid geometry plus generation parameters.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::generation::GenerationConfig;
use crate::grid::GridConfig;

/// Everything needed to produce a map, as stored on disk.
///
/// Missing sections and fields fall back to their defaults, so a partial
/// JSON file only has to name what it changes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapParams {
    pub grid: GridConfig,
    pub generation: GenerationConfig,
}

impl MapParams {
    /// Check both sections.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.generation.validate()
    }

    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and validate from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Save as pretty JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use glam::DVec3;

    #[test]
    fn test_default_params_valid() {
        assert!(MapParams::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params = MapParams::from_json(
            r#"{ "grid": { "resolution": 0.5 }, "generation": { "seed": 9, "ratios": { "cylinder": 0.2 } } }"#,
        )
        .unwrap();
        assert_eq!(params.grid.resolution, 0.5);
        assert_eq!(params.grid.size, DVec3::new(40.0, 40.0, 5.0));
        assert_eq!(params.generation.seed, 9);
        assert_eq!(params.generation.ratios.cylinder, 0.2);
        assert_eq!(params.generation.ratios.polyhedron, 0.1);
        assert_eq!(params.generation.bounds.w4, 3.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps").join("params.json");

        let mut params = MapParams::default();
        params.grid.size = DVec3::new(10.0, 10.0, 3.0);
        params.grid.origin = DVec3::new(-5.0, -5.0, 0.0);
        params.generation.max_idle_attempts = Some(200);
        params.save(&path).unwrap();

        let loaded = MapParams::load(&path).unwrap();
        assert_eq!(loaded, params);
    }

    #[test]
    fn test_load_rejects_invalid_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{ "grid": { "resolution": 0.3 } }"#).unwrap();
        assert!(matches!(
            MapParams::load(&path),
            Err(Error::IncompatibleResolution { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            MapParams::load(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
