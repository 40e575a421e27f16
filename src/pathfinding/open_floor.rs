// src/pathfinding/open_floor.rs
// A flat, obstacle-free rectangular floor. Stands in for a baked NavMesh in the
// demo binary and in tests; every path across it is a straight line.

use super::{PathQuery, PathfindingService};
use crate::Point;
use log::debug;
use serde::{Deserialize, Serialize};

/// Area bit the floor belongs to
pub const OPEN_FLOOR_AREA: u32 = 1;

/// Axis-aligned walkable rectangle on the plane `y = height`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenFloor {
    /// Minimum x of the walkable rectangle
    pub min_x: f32,
    /// Maximum x of the walkable rectangle
    pub max_x: f32,
    /// Minimum z of the walkable rectangle
    pub min_z: f32,
    /// Maximum z of the walkable rectangle
    pub max_z: f32,
    /// Surface height
    pub height: f32,
}

impl OpenFloor {
    /// Create a floor spanning `[min_x, max_x] x [min_z, max_z]` at `height`
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32, height: f32) -> Self {
        assert!(min_x <= max_x && min_z <= max_z, "floor bounds are inverted");
        OpenFloor {
            min_x,
            max_x,
            min_z,
            max_z,
            height,
        }
    }

    /// Whether the vertical projection of `point` lies on the floor
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.z >= self.min_z && point.z <= self.max_z
    }

    /// Nearest point on the floor surface
    pub fn clamp(&self, point: &Point) -> Point {
        Point::new(
            point.x.clamp(self.min_x, self.max_x),
            self.height,
            point.z.clamp(self.min_z, self.max_z),
        )
    }
}

impl PathfindingService for OpenFloor {
    fn sample_position(&self, point: Point, max_distance: f32, area_mask: u32) -> Option<Point> {
        if area_mask & OPEN_FLOOR_AREA == 0 {
            return None;
        }
        let snapped = self.clamp(&point);
        let offset = nalgebra::distance(&point, &snapped);
        if offset <= max_distance {
            Some(snapped)
        } else {
            debug!("No floor within {:.2}m of {:?} (nearest {:.2}m)", max_distance, point, offset);
            None
        }
    }

    fn compute_path(&self, start: Point, end: Point, area_mask: u32) -> PathQuery {
        if area_mask & OPEN_FLOOR_AREA == 0 || !self.contains(&start) {
            return PathQuery::invalid();
        }
        let start = self.clamp(&start);
        if self.contains(&end) {
            PathQuery::complete(vec![start, self.clamp(&end)])
        } else {
            // Walk as far as the floor edge
            PathQuery::partial(vec![start, self.clamp(&end)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathStatus;

    fn floor() -> OpenFloor {
        OpenFloor::new(-10.0, 10.0, -10.0, 10.0, 0.0)
    }

    #[test]
    fn snaps_points_above_the_floor() {
        let snapped = floor().sample_position(Point::new(1.0, 1.5, 2.0), 5.0, u32::MAX);
        assert_eq!(snapped, Some(Point::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn refuses_points_out_of_snap_range() {
        assert_eq!(floor().sample_position(Point::new(30.0, 0.0, 0.0), 5.0, u32::MAX), None);
    }

    #[test]
    fn honours_area_mask() {
        assert_eq!(floor().sample_position(Point::origin(), 5.0, 0b10), None);
        assert_eq!(
            floor().compute_path(Point::origin(), Point::new(1.0, 0.0, 0.0), 0b10).status,
            PathStatus::Invalid
        );
    }

    #[test]
    fn straight_complete_path() {
        let query = floor().compute_path(Point::origin(), Point::new(5.0, 0.0, 5.0), u32::MAX);
        assert_eq!(query.status, PathStatus::Complete);
        assert_eq!(query.corners, vec![Point::origin(), Point::new(5.0, 0.0, 5.0)]);
    }

    #[test]
    fn off_floor_destination_is_partial() {
        let query = floor().compute_path(Point::origin(), Point::new(15.0, 0.0, 0.0), u32::MAX);
        assert_eq!(query.status, PathStatus::Partial);
        assert_eq!(query.corners.last(), Some(&Point::new(10.0, 0.0, 0.0)));
    }
}
