//! Character tuning loaded from YAML.
//!
//! Every field has a default, so a partial file only overrides what it names:
//! ```yaml
//! sprint_speed: 1200.0
//! turn_rates:
//!   base_turn_rate: 90.0
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a [`CharacterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Rate-based look speeds, in degrees per second at full deflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnRates {
    pub base_turn_rate: f32,
    pub base_look_rate: f32,
}

impl Default for TurnRates {
    fn default() -> Self {
        Self {
            base_turn_rate: 45.0,
            base_look_rate: 45.0,
        }
    }
}

/// Collision capsule dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capsule {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            radius: 55.0,
            half_height: 96.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub turn_rates: TurnRates,
    /// Max walk speed while the sprint modifier is held.
    pub sprint_speed: f32,
    /// Max walk speed the character spawns with.
    pub walk_speed: f32,
    pub capsule: Capsule,
    /// First-person camera position relative to the capsule centre.
    pub camera_offset: Vec3,
    /// Absolute pitch limit in degrees.
    pub pitch_limit: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            turn_rates: TurnRates::default(),
            sprint_speed: 1500.0,
            walk_speed: 600.0,
            capsule: Capsule::default(),
            camera_offset: Vec3::new(-39.56, 1.75, 64.0),
            pitch_limit: 89.0,
        }
    }
}

impl CharacterConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&data)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded character config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the controller cannot act on sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("turn_rates.base_turn_rate", self.turn_rates.base_turn_rate)?;
        positive("turn_rates.base_look_rate", self.turn_rates.base_look_rate)?;
        positive("sprint_speed", self.sprint_speed)?;
        positive("walk_speed", self.walk_speed)?;
        positive("capsule.radius", self.capsule.radius)?;
        positive("capsule.half_height", self.capsule.half_height)?;
        if !self.camera_offset.is_finite() {
            return Err(ConfigError::Invalid {
                field: "camera_offset",
                reason: "must be finite".into(),
            });
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit <= 90.0) {
            return Err(ConfigError::Invalid {
                field: "pitch_limit",
                reason: format!("{} is outside (0, 90]", self.pitch_limit),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not a positive finite number"),
        })
    }
}
