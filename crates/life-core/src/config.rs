//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
    /// Probability (0.0 to 1.0) that a cell starts alive
    pub spawn_probability: f64,
    /// Named seed pattern placed at the centre instead of random seeding
    pub pattern: Option<String>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 10,
            spawn_probability: 0.4,
            pattern: None,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(Error::InvalidConfig(format!(
                "spawn probability must be within [0, 1], got {}",
                self.spawn_probability
            )));
        }

        Ok(())
    }
}

/// Console rendering glyphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: '0',
            dead_glyph: '.',
        }
    }
}

/// How long a run lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Stop after this many generations
    Steps(u64),
    /// Run until interrupted
    Unbounded,
}

impl RunMode {
    /// Whether another step is due once `generation` steps have been taken
    pub fn allows(&self, generation: u64) -> bool {
        match self {
            RunMode::Steps(limit) => generation < *limit,
            RunMode::Unbounded => true,
        }
    }
}

impl Default for RunMode {
    fn default() -> Self {
        RunMode::Steps(100)
    }
}

/// Driver loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Pause between frames (milliseconds)
    pub frame_interval_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            frame_interval_ms: 500,
        }
    }
}

/// Top-level configuration for a console run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Random seed for reproducibility; drawn from entropy when absent
    pub seed: Option<u64>,
    pub world: WorldConfig,
    pub render: RenderConfig,
    pub run: RunConfig,
}

impl LifeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LifeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.world.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = LifeConfig::default();
        assert_eq!(config.world.width, 20);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.world.spawn_probability, 0.4);
        assert_eq!(config.run.mode, RunMode::Steps(100));
        assert_eq!(config.run.frame_interval_ms, 500);
        assert_eq!(config.render.alive_glyph, '0');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_mode_allows() {
        let limited = RunMode::Steps(3);
        assert!(limited.allows(0));
        assert!(limited.allows(2));
        assert!(!limited.allows(3));
        assert!(!RunMode::Steps(0).allows(0));
        assert!(RunMode::Unbounded.allows(u64::MAX));
    }

    #[test]
    fn test_validation_rejects_bad_world() {
        let zero_width = WorldConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(zero_width.validate(), Err(Error::InvalidConfig(_))));

        let negative_height = WorldConfig {
            height: -2,
            ..Default::default()
        };
        assert!(negative_height.validate().is_err());

        for probability in [-0.1, 1.5, f64::NAN] {
            let config = WorldConfig {
                spawn_probability: probability,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{} accepted", probability);
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LifeConfig::from_json_str(
            r#"{ "seed": 7, "world": { "width": 40 }, "run": { "mode": "unbounded" } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.world.width, 40);
        assert_eq!(config.world.height, 10);
        assert_eq!(config.run.mode, RunMode::Unbounded);
        assert_eq!(config.run.frame_interval_ms, 500);
    }

    #[test]
    fn test_json_step_mode() {
        let config = LifeConfig::from_json_str(r#"{ "run": { "mode": { "steps": 12 } } }"#).unwrap();
        assert_eq!(config.run.mode, RunMode::Steps(12));
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let result = LifeConfig::from_json_str(r#"{ "world": { "spawn_probability": 2.0 } }"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let result = LifeConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = LifeConfig {
            seed: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LifeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
