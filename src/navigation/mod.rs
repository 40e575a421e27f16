//! Guidance line navigation
//!
//! This module turns corner paths into checkpoints, tracks progress along
//! them, decides when a path needs recomputing and produces the smooth curve
//! the host draws from the user to the destination. Hosts with several
//! destinations can cycle through them with a [`DestinationList`].

mod checkpoints;
mod curve;
mod destinations;
mod freshness;
mod tracker;

pub use checkpoints::*;
pub use curve::*;
pub use destinations::*;
pub use freshness::*;
pub use tracker::*;

/// Reasons a path could not be (re)computed. None of these are fatal: the
/// tracker keeps its last good checkpoints and waits for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Start or destination has not been set
    MissingAnchor,
    /// Start or destination is not within snap distance of the walkable surface
    AnchorUnreachable,
    /// The solver found a path that does not reach the destination
    PartialPathOnly,
    /// The solver found no path at all
    NoPath,
    /// The corner path was degenerate (fewer than 2 corners, or corners that
    /// are not finite positions)
    EmptyCheckpointList,
    /// The destination has been reached; set a new start or destination first
    AlreadyArrived,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PathError::MissingAnchor => write!(f, "Start or destination is not set"),
            PathError::AnchorUnreachable => {
                write!(f, "Start or destination is not on the walkable surface")
            }
            PathError::PartialPathOnly => {
                write!(f, "Only a partial path was found, destination may be blocked")
            }
            PathError::NoPath => write!(f, "No path found"),
            PathError::EmptyCheckpointList => write!(f, "Corner path is degenerate"),
            PathError::AlreadyArrived => write!(f, "Destination already reached"),
        }
    }
}

impl std::error::Error for PathError {}
