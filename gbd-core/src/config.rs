//! Dashboard configuration.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) yields the standard dashboard: years 2015 through 2022, unseeded
//! generation, boundary file in the working directory.

use crate::boundary::DEFAULT_BOUNDARY_FILE;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

pub const DEFAULT_FIRST_YEAR: i32 = 2015;
pub const DEFAULT_LAST_YEAR: i32 = 2022;
/// Rows shown in the discharge preview table
pub const DISCHARGE_PREVIEW_ROWS: usize = 8;
/// Rows shown in the cross-section preview table
pub const CROSS_SECTION_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seed for discharge generation; `None` draws fresh values every run.
    pub seed: Option<u64>,
    pub first_year: i32,
    pub last_year: i32,
    pub boundary_path: PathBuf,
    pub discharge_preview_rows: usize,
    pub cross_section_preview_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            boundary_path: PathBuf::from(DEFAULT_BOUNDARY_FILE),
            discharge_preview_rows: DISCHARGE_PREVIEW_ROWS,
            cross_section_preview_rows: CROSS_SECTION_PREVIEW_ROWS,
        }
    }
}

impl DashboardConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Years covered by the generated discharge series.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_year > self.last_year {
            return Err(DashboardError::InvalidFormat(format!(
                "first_year {} is after last_year {}",
                self.first_year, self.last_year
            )));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_2015_to_2022() {
        let config = DashboardConfig::default();
        assert_eq!(config.years(), 2015..=2022);
        assert_eq!(config.seed, None);
        assert_eq!(config.boundary_path, PathBuf::from("Godavari_Geojon.geojson"));
        assert_eq!(config.discharge_preview_rows, 8);
        assert_eq!(config.cross_section_preview_rows, 10);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config = DashboardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let config =
            DashboardConfig::from_json_str(r#"{"seed": 7, "first_year": 2020}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.years(), 2020..=2022);
    }

    #[test]
    fn inverted_year_range_is_rejected() {
        assert!(DashboardConfig::from_json_str(r#"{"first_year": 2023}"#).is_err());
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{"seed": 42}"#).unwrap();
        let config = DashboardConfig::from_json_file(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(DashboardConfig::from_json_file(dir.path().join("absent.json")).is_err());
    }
}
