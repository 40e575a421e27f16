//! Guidance Line - dynamic guide lines over NavMesh corner paths
//!
//! This library turns the corner polyline returned by an external pathfinding
//! service into evenly spaced checkpoints, tracks the user's progress along
//! them, decides when the path has gone stale and produces a smooth curve
//! through the remaining checkpoints for the host to draw.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod config;
pub mod navigation;
pub mod pathfinding;

// Re-export commonly used items for easier access
pub use config::{ConfigError, GuidanceConfig};
pub use navigation::{
    CheckpointList, DestinationList, FreshnessInputs, FreshnessVerdict, GuidancePathTracker,
    GuidanceStatus, MAX_CHECKPOINTS_PER_SEGMENT, NamedDestination, PathError,
    PathFreshnessPolicy, PathRequest, TrackingState, catmull_rom, generate_checkpoints,
    sample_curve,
};
pub use pathfinding::{CornerPath, OpenFloor, PathQuery, PathStatus, PathfindingService};

/// Position type used throughout the crate. `y` is the vertical axis.
pub type Point = nalgebra::Point3<f32>;
