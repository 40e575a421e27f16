// src/navigation/freshness.rs
// Decides when a tracked path has gone stale and must be recomputed.

use crate::GuidanceConfig;
use log::warn;

/// Per-tick measurements the policy decides on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessInputs {
    /// Distance the destination moved since the last recompute
    pub end_delta: f32,
    /// Distance the start moved since the last start reference
    pub start_delta: f32,
    /// Whether the start is within twice the checkpoint threshold of any checkpoint
    pub near_path: bool,
    /// Seconds since the last recompute
    pub age: f32,
}

/// Outcome of every freshness check, kept separate for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreshnessVerdict {
    /// The destination moved past the movement threshold
    pub target_moved: bool,
    /// The user moved a long way and is no longer near the path
    pub deviated: bool,
    /// The path is older than the maximum age
    pub stale: bool,
}

impl FreshnessVerdict {
    /// Whether any check asks for a recompute
    pub fn needs_recalculation(&self) -> bool {
        self.target_moved || self.deviated || self.stale
    }
}

/// Thresholds for path recomputation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFreshnessPolicy {
    /// Destination movement that forces a recompute
    pub target_movement_threshold: f32,
    /// Checkpoint reach distance; twice this counts as "near the path"
    pub checkpoint_threshold: f32,
    /// Maximum path age in seconds, 0 disables
    pub max_path_age: f32,
}

impl PathFreshnessPolicy {
    /// Build the policy from the guidance config
    pub fn new(config: &GuidanceConfig) -> Self {
        PathFreshnessPolicy {
            target_movement_threshold: config.target_movement_threshold,
            checkpoint_threshold: config.checkpoint_threshold,
            max_path_age: config.max_path_age,
        }
    }

    /// Start movement beyond which the deviation check applies
    pub fn deviation_distance(&self) -> f32 {
        self.target_movement_threshold * 2.0
    }

    /// Radius around checkpoints within which the user still counts as on the path
    pub fn on_path_radius(&self) -> f32 {
        self.checkpoint_threshold * 2.0
    }

    /// Run all three checks. None of them short-circuits the others.
    pub fn evaluate(&self, inputs: &FreshnessInputs) -> FreshnessVerdict {
        let target_moved = inputs.end_delta > self.target_movement_threshold;
        if target_moved {
            warn!("Target moved {:.2}m, recalculating path", inputs.end_delta);
        }

        let deviated = inputs.start_delta > self.deviation_distance() && !inputs.near_path;
        if deviated {
            warn!("User deviated {:.2}m from the path, recalculating", inputs.start_delta);
        }

        let stale = self.max_path_age > 0.0 && inputs.age > self.max_path_age;
        if stale {
            warn!("Path is {:.1}s old, refreshing", inputs.age);
        }

        FreshnessVerdict {
            target_moved,
            deviated,
            stale,
        }
    }

    /// Shorthand for `evaluate(inputs).needs_recalculation()`
    pub fn needs_recalculation(&self, inputs: &FreshnessInputs) -> bool {
        self.evaluate(inputs).needs_recalculation()
    }
}
