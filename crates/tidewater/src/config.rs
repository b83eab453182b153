//! # Map Configuration
//!
//! Everything a generation run can be told, saved as TOML. Unset counts are
//! drawn from the run's random source, an unset seed is drawn from entropy.
//! After a run, [`MapConfig::with_seed`] pins the seed that was actually
//! used, so saving that config reproduces the exact map.
//!
//! ```toml
//! seed = 42
//! num_flyers = 4
//! created_version = "0.1.0"
//!
//! [placer]
//! anchor_radius = 30.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tidewater_procedural::PlacerConfig;

use crate::error::GenerationResult;

/// Version written into new configs.
pub const CONFIG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for one map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Seed of the run; `None` picks one from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Number of patrolling flyers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_flyers: Option<u32>,
    /// Number of points on the patrol route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_patrol_points: Option<u32>,
    /// Number of enemy structures drawn from the base catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_enemy_structures: Option<u32>,
    /// Number of wrecks drawn from the battle scrap catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_scrap_piles: Option<u32>,
    /// Version that wrote this config.
    pub created_version: String,
    /// Placement engine settings.
    pub placer: PlacerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_flyers: None,
            num_patrol_points: None,
            num_enemy_structures: None,
            num_scrap_piles: None,
            created_version: CONFIG_VERSION.to_string(),
            placer: PlacerConfig::default(),
        }
    }
}

impl MapConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Malformed TOML or fields of the wrong type.
    pub fn from_toml_str(text: &str) -> GenerationResult<Self> {
        let config: Self = toml::from_str(text)?;
        if config.created_version != CONFIG_VERSION {
            tracing::warn!(
                "Config version {} does not match {}; the generated map may differ",
                config.created_version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    /// Loads a config file, or the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// The file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> GenerationResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialises to TOML.
    ///
    /// # Errors
    ///
    /// Only if a value cannot be represented in TOML.
    pub fn to_toml_string(&self) -> GenerationResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the config, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// I/O or serialisation failures.
    pub fn save(&self, path: impl AsRef<Path>) -> GenerationResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Copy with the seed pinned.
    #[must_use]
    pub fn with_seed(&self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MapConfig::from_toml_str("").unwrap();
        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = MapConfig::from_toml_str(
            r#"
            seed = 42
            num_flyers = 5

            [placer]
            anchor_radius = 12.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.num_flyers, Some(5));
        assert_eq!(config.num_patrol_points, None);
        assert!((config.placer.anchor_radius - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.placer.anchor_type, "Carrier", "unset placer fields keep defaults");
    }

    #[test]
    fn test_old_version_still_loads() {
        let config = MapConfig::from_toml_str("created_version = \"0.0.1\"").unwrap();
        assert_eq!(config.created_version, "0.0.1");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(MapConfig::from_toml_str("seed = \"forty-two\"").is_err());
    }

    #[test]
    fn test_with_seed() {
        let config = MapConfig::default().with_seed(99);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.placer, PlacerConfig::default());
    }

    #[test]
    fn test_toml_text_round_trip() {
        let mut config = MapConfig::default().with_seed(7);
        config.num_scrap_piles = Some(2);

        let text = config.to_toml_string().unwrap();
        assert!(!text.contains("num_flyers"), "unset counts are left out");
        assert_eq!(MapConfig::from_toml_str(&text).unwrap(), config);
    }
}
