//! Simulation tunables.

use crate::error::ConfigError;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Numeric parameters read by the engine and the detector.
///
/// Missing JSON fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Summed force components below this magnitude snap to zero.
    pub acceleration_min: f64,
    pub acceleration_max: f64,
    /// Velocity components below this magnitude snap to zero.
    pub speed_min: f64,
    pub speed_max: f64,
    /// Band applied to rebound velocities after a static bounce.
    pub collision_speed_min: f64,
    /// Cap on velocities produced by collision impulses.
    pub collision_speed_max: f64,
    /// Scale applied to the elapsed time of every integration step.
    pub frame_damping: f64,
    /// World gravity, +y up.
    pub gravity: Vec2,
    pub world_width: f64,
    pub world_height: f64,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            acceleration_min: 0.001,
            acceleration_max: 2.0,
            speed_min: 0.01,
            speed_max: 4.0,
            collision_speed_min: 0.01,
            collision_speed_max: 8.0,
            frame_damping: 0.4,
            gravity: Vec2::new(0.0, -0.008),
            world_width: 960.0,
            world_height: 600.0,
        }
    }
}

impl PhysicConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PhysicConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::debug!("loaded physic configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every tunable, reporting the first unusable one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = [
            ("acceleration", self.acceleration_min, self.acceleration_max),
            ("speed", self.speed_min, self.speed_max),
            ("collision_speed", self.collision_speed_min, self.collision_speed_max),
        ];
        for (field, min, max) in bands {
            if !min.is_finite() || !max.is_finite() {
                return Err(invalid(field, "band limits must be finite"));
            }
            if min < 0.0 {
                return Err(invalid(field, "minimum must be non-negative"));
            }
            if min > max {
                return Err(invalid(field, "minimum exceeds maximum"));
            }
        }
        if !(self.frame_damping > 0.0 && self.frame_damping <= 1.0) {
            return Err(invalid("frame_damping", "must be in (0, 1]"));
        }
        if !self.gravity.is_finite() {
            return Err(invalid("gravity", "must be finite"));
        }
        if !(self.world_width > 0.0 && self.world_height > 0.0)
            || !self.world_width.is_finite()
            || !self.world_height.is_finite()
        {
            return Err(invalid("world", "dimensions must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
