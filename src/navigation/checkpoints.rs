// src/navigation/checkpoints.rs
// Resamples a NavMesh corner path into evenly spaced checkpoints and tracks
// which of them the user has already walked past.

use crate::Point;
use log::{debug, warn};

/// Upper bound on checkpoints emitted for a single corner-to-corner segment
pub const MAX_CHECKPOINTS_PER_SEGMENT: usize = 10_000;

/// Ordered checkpoints with a cursor at the first one not yet reached.
///
/// `next_index` only ever moves forward, one step at a time; the whole list is
/// replaced when the path is recomputed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckpointList {
    points: Vec<Point>,
    next_index: usize,
}

impl CheckpointList {
    /// Wrap generated checkpoints with the cursor at the start
    pub fn new(points: Vec<Point>) -> Self {
        CheckpointList {
            points,
            next_index: 0,
        }
    }

    /// All checkpoints, reached or not
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Checkpoints not yet reached
    pub fn remaining(&self) -> &[Point] {
        &self.points[self.next_index..]
    }

    /// Index of the first unreached checkpoint
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// The checkpoint the user is heading for
    pub fn next(&self) -> Option<&Point> {
        self.points.get(self.next_index)
    }

    /// Number of checkpoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no checkpoints at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether every checkpoint has been reached
    pub fn is_complete(&self) -> bool {
        self.next_index == self.points.len()
    }

    /// Move the cursor past the next checkpoint. Returns false when already complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.next_index += 1;
        true
    }

    /// Whether any checkpoint (reached or not) lies within `radius` of `position`
    pub fn any_within(&self, position: &Point, radius: f32) -> bool {
        self.points
            .iter()
            .any(|checkpoint| nalgebra::distance(position, checkpoint) < radius)
    }
}

/// Resample `corners` into checkpoints no more than `spacing` apart along each
/// segment, each lifted by `height_offset`. The last corner is always the
/// final checkpoint. Fewer than two corners yields an empty list.
///
/// A segment yields at most [`MAX_CHECKPOINTS_PER_SEGMENT`] points; longer
/// segments are spaced wider than `spacing`.
///
/// # Panics
///
/// If `spacing` is not a positive finite number.
pub fn generate_checkpoints(corners: &[Point], spacing: f32, height_offset: f32) -> CheckpointList {
    assert!(
        spacing.is_finite() && spacing > 0.0,
        "checkpoint spacing must be positive, got {}",
        spacing
    );

    let Some(last) = corners.last() else {
        return CheckpointList::default();
    };
    if corners.len() < 2 {
        return CheckpointList::default();
    }

    let lift = |mut p: Point| {
        p.y += height_offset;
        p
    };

    let mut points = Vec::new();
    for pair in corners.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let segment_length = nalgebra::distance(&start, &end);
        let mut count = ((segment_length / spacing).floor() as usize).max(1);
        if count > MAX_CHECKPOINTS_PER_SEGMENT {
            warn!(
                "Segment of {}m needs {} checkpoints, capping at {}",
                segment_length, count, MAX_CHECKPOINTS_PER_SEGMENT
            );
            count = MAX_CHECKPOINTS_PER_SEGMENT;
        }

        for j in 0..count {
            let t = j as f32 / count as f32;
            points.push(lift(start + (end - start) * t));
        }
    }
    points.push(lift(*last));

    debug!("Generated {} checkpoints from {} corners", points.len(), corners.len());
    CheckpointList::new(points)
}
