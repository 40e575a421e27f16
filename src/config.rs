// src/config.rs
// Tunables for checkpoint generation, progress tracking and path refreshes.
// Loaded from YAML and validated before a tracker is built.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Guidance line configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Distance between generated checkpoints along a corner segment
    pub checkpoint_spacing: f32,
    /// Height the line is lifted above the walkable surface
    pub line_height_offset: f32,
    /// Curve samples per checkpoint segment, boundary samples included
    pub points_per_segment: usize,
    /// Distance at which a checkpoint (or the destination) counts as reached
    pub checkpoint_threshold: f32,
    /// Pathfinding area mask; all bits set means every area
    pub area_mask: u32,
    /// Destination movement that forces a recompute
    pub target_movement_threshold: f32,
    /// Seconds before a path is refreshed regardless of movement (0 = never)
    pub max_path_age: f32,
    /// Maximum distance an anchor may be snapped onto the walkable surface
    pub snap_distance: f32,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        GuidanceConfig {
            checkpoint_spacing: 2.0,
            line_height_offset: 0.1,
            points_per_segment: 20,
            checkpoint_threshold: 1.0,
            area_mask: u32::MAX,
            target_movement_threshold: 0.5,
            max_path_age: 5.0,
            snap_distance: 5.0,
        }
    }
}

impl GuidanceConfig {
    /// Parse and validate a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: GuidanceConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = Self::from_yaml_str(&data)?;
        info!("Loaded guidance config from: {}", path.display());
        Ok(config)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.checkpoint_spacing.is_finite() && self.checkpoint_spacing > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "checkpoint_spacing must be positive, got {}",
                self.checkpoint_spacing
            )));
        }
        if !self.line_height_offset.is_finite() {
            return Err(ConfigError::Invalid(
                "line_height_offset must be finite".to_string(),
            ));
        }
        if self.points_per_segment < 2 {
            return Err(ConfigError::Invalid(format!(
                "points_per_segment must be at least 2, got {}",
                self.points_per_segment
            )));
        }
        if !(self.checkpoint_threshold.is_finite() && self.checkpoint_threshold > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "checkpoint_threshold must be positive, got {}",
                self.checkpoint_threshold
            )));
        }
        if !(self.target_movement_threshold.is_finite() && self.target_movement_threshold >= 0.0)
        {
            return Err(ConfigError::Invalid(format!(
                "target_movement_threshold must not be negative, got {}",
                self.target_movement_threshold
            )));
        }
        if !(self.max_path_age.is_finite() && self.max_path_age >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_path_age must not be negative, got {}",
                self.max_path_age
            )));
        }
        if !(self.snap_distance.is_finite() && self.snap_distance > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "snap_distance must be positive, got {}",
                self.snap_distance
            )));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read
    Io(String),
    /// Config file is not valid YAML for this schema
    Parse(String),
    /// A field is out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config read error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
