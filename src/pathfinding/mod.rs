//! Pathfinding service seam
//!
//! The tracker never computes paths itself. It asks a [`PathfindingService`]
//! (a NavMesh in the host engine) to snap anchors onto the walkable surface
//! and to return the corner polyline between them.

mod open_floor;

pub use open_floor::*;

use crate::Point;

/// Shortest-path polyline returned by the pathfinding service
pub type CornerPath = Vec<Point>;

/// Completion status of a path query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// The path connects start and end
    Complete,
    /// The path ends short of the requested end point
    Partial,
    /// No path could be computed
    Invalid,
}

/// Result of a path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathQuery {
    /// Completion status
    pub status: PathStatus,
    /// Corner points from start to end
    pub corners: CornerPath,
}

impl PathQuery {
    /// A complete path through the given corners
    pub fn complete(corners: CornerPath) -> Self {
        PathQuery {
            status: PathStatus::Complete,
            corners,
        }
    }

    /// A path that stops short of the destination
    pub fn partial(corners: CornerPath) -> Self {
        PathQuery {
            status: PathStatus::Partial,
            corners,
        }
    }

    /// No path at all
    pub fn invalid() -> Self {
        PathQuery {
            status: PathStatus::Invalid,
            corners: Vec::new(),
        }
    }
}

/// External pathfinding collaborator, typically the host engine's NavMesh
#[cfg_attr(test, mockall::automock)]
pub trait PathfindingService {
    /// Snap `point` onto the nearest walkable surface within `max_distance`.
    /// Returns `None` when nothing walkable is in range.
    fn sample_position(&self, point: Point, max_distance: f32, area_mask: u32) -> Option<Point>;

    /// Compute the corner path between two already-snapped points
    fn compute_path(&self, start: Point, end: Point, area_mask: u32) -> PathQuery;
}

impl<S: PathfindingService + ?Sized> PathfindingService for &S {
    fn sample_position(&self, point: Point, max_distance: f32, area_mask: u32) -> Option<Point> {
        (**self).sample_position(point, max_distance, area_mask)
    }

    fn compute_path(&self, start: Point, end: Point, area_mask: u32) -> PathQuery {
        (**self).compute_path(start, end, area_mask)
    }
}
