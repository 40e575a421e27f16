// src/navigation/tracker.rs
// Keeps a guidance line in step with a moving user: owns the checkpoints,
// advances through them each tick, recomputes the path when it goes stale and
// reports the curve to draw.

use super::{
    CheckpointList, FreshnessInputs, PathError, PathFreshnessPolicy, generate_checkpoints,
    sample_curve,
};
use crate::pathfinding::{CornerPath, PathQuery, PathStatus, PathfindingService};
use crate::{ConfigError, GuidanceConfig, Point};
use log::{debug, error, info, warn};

/// Tracker lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// Nothing to guide to
    Idle,
    /// Anchors set, waiting for a usable path
    PathPending,
    /// Following checkpoints towards the destination
    Tracking,
    /// Destination reached
    Arrived,
}

/// One path computation, issued by [`GuidancePathTracker::begin_request`].
///
/// Only the most recently issued request can be resolved; results for older
/// ones are discarded so an outdated path is never resurrected.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRequest {
    generation: u64,
    start: Point,
    end: Point,
    snap_distance: f32,
    area_mask: u32,
}

impl PathRequest {
    /// Start anchor at the time of the request
    pub fn start(&self) -> Point {
        self.start
    }

    /// Destination anchor at the time of the request
    pub fn end(&self) -> Point {
        self.end
    }

    /// Snap both anchors onto the walkable surface and query the corner path
    pub fn run<S: PathfindingService + ?Sized>(&self, service: &S) -> Result<PathQuery, PathError> {
        let start = service.sample_position(self.start, self.snap_distance, self.area_mask);
        let end = service.sample_position(self.end, self.snap_distance, self.area_mask);

        match (start, end) {
            (Some(start), Some(end)) => Ok(service.compute_path(start, end, self.area_mask)),
            (start, end) => {
                error!(
                    "Anchors not on the walkable surface (start: {}, destination: {})",
                    start.is_some(),
                    end.is_some()
                );
                Err(PathError::AnchorUnreachable)
            }
        }
    }
}

/// Snapshot of tracker progress
#[derive(Debug, Clone, PartialEq)]
pub struct GuidanceStatus {
    /// Lifecycle state
    pub state: TrackingState,
    /// Index of the next unreached checkpoint
    pub next_checkpoint: usize,
    /// Number of checkpoints on the current path
    pub checkpoint_count: usize,
    /// Number of corners on the current path
    pub corner_count: usize,
    /// Outcome of the last recompute, if it failed
    pub last_error: Option<PathError>,
}

/// Turns corner paths from a [`PathfindingService`] into a guidance line that
/// shortens as the user walks it.
///
/// Call [`tick`](Self::tick) once per frame with the user's position and draw
/// [`render_points`](Self::render_points).
pub struct GuidancePathTracker<S> {
    config: GuidanceConfig,
    policy: PathFreshnessPolicy,
    service: S,
    state: TrackingState,
    start: Option<Point>,
    destination: Option<Point>,
    corner_path: CornerPath,
    checkpoints: CheckpointList,
    last_error: Option<PathError>,
    last_start_position: Point,
    last_target_position: Point,
    path_age: f32,
    generation: u64,
}

impl<S: PathfindingService> GuidancePathTracker<S> {
    /// Create an idle tracker
    pub fn new(config: GuidanceConfig, service: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(GuidancePathTracker {
            policy: PathFreshnessPolicy::new(&config),
            config,
            service,
            state: TrackingState::Idle,
            start: None,
            destination: None,
            corner_path: Vec::new(),
            checkpoints: CheckpointList::default(),
            last_error: None,
            last_start_position: Point::origin(),
            last_target_position: Point::origin(),
            path_age: 0.0,
            generation: 0,
        })
    }

    /// Set the start anchor and recompute the path
    pub fn set_start(&mut self, position: Point) -> Result<(), PathError> {
        assert_finite(&position, "start");
        self.start = Some(position);
        self.generation += 1;
        self.state = TrackingState::PathPending;
        self.recompute()
    }

    /// Set the destination and recompute the path
    pub fn set_destination(&mut self, position: Point) -> Result<(), PathError> {
        assert_finite(&position, "destination");
        self.destination = Some(position);
        self.generation += 1;
        self.state = TrackingState::PathPending;
        info!("New destination set: {:?}", position);
        self.recompute()
    }

    /// Update a moving destination without recomputing. The next tick decides
    /// whether it moved far enough to need a new path.
    pub fn move_destination(&mut self, position: Point) {
        assert_finite(&position, "destination");
        self.destination = Some(position);
    }

    /// Query the pathfinding service and rebuild the checkpoints.
    ///
    /// On failure the previous checkpoints stay available for drawing, the
    /// tracker waits in [`TrackingState::PathPending`] and the error is kept in
    /// [`last_error`](Self::last_error). Nothing is retried automatically.
    ///
    /// Refused with [`PathError::AlreadyArrived`] once the destination has been
    /// reached; only a new start or destination leaves that state.
    pub fn recompute(&mut self) -> Result<(), PathError> {
        let request = self.begin_request()?;
        let outcome = request.run(&self.service);
        self.resolve(&request, outcome).map(|_| ())
    }

    /// Issue a path request for the current anchors, superseding any earlier one.
    ///
    /// For hosts whose solver is asynchronous: run the request elsewhere and
    /// hand the outcome to [`resolve`](Self::resolve).
    pub fn begin_request(&mut self) -> Result<PathRequest, PathError> {
        if self.state == TrackingState::Arrived {
            debug!("Destination reached, ignoring path request");
            return Err(PathError::AlreadyArrived);
        }
        let (Some(start), Some(end)) = (self.start, self.destination) else {
            warn!("Cannot compute a path without both start and destination");
            return Err(self.fail(PathError::MissingAnchor));
        };
        self.generation += 1;
        Ok(PathRequest {
            generation: self.generation,
            start,
            end,
            snap_distance: self.config.snap_distance,
            area_mask: self.config.area_mask,
        })
    }

    /// Apply the outcome of `request`.
    ///
    /// Returns `Ok(false)` without touching any state when a newer request has
    /// been issued since or the destination was reached in the meantime,
    /// `Ok(true)` when the new path is now being tracked.
    pub fn resolve(
        &mut self,
        request: &PathRequest,
        outcome: Result<PathQuery, PathError>,
    ) -> Result<bool, PathError> {
        if request.generation != self.generation {
            warn!(
                "Discarding stale path result (request {}, current {})",
                request.generation, self.generation
            );
            return Ok(false);
        }
        if self.state == TrackingState::Arrived {
            debug!("Destination reached, discarding path result");
            return Ok(false);
        }

        let query = outcome.map_err(|e| self.fail(e))?;
        match query.status {
            PathStatus::Complete => {}
            PathStatus::Partial => {
                error!("Partial path found, destination may be blocked");
                return Err(self.fail(PathError::PartialPathOnly));
            }
            PathStatus::Invalid => {
                error!("No path found between {:?} and {:?}", request.start, request.end);
                return Err(self.fail(PathError::NoPath));
            }
        }
        if query.corners.len() < 2 {
            error!("Corner path has only {} corners", query.corners.len());
            return Err(self.fail(PathError::EmptyCheckpointList));
        }
        if !query.corners.iter().all(is_finite) {
            error!("Corner path contains non-finite positions");
            return Err(self.fail(PathError::EmptyCheckpointList));
        }

        let checkpoints = generate_checkpoints(
            &query.corners,
            self.config.checkpoint_spacing,
            self.config.line_height_offset,
        );
        info!(
            "Path calculated: {} corners, {} checkpoints",
            query.corners.len(),
            checkpoints.len()
        );

        self.corner_path = query.corners;
        self.checkpoints = checkpoints;
        self.last_start_position = request.start;
        self.last_target_position = request.end;
        self.path_age = 0.0;
        self.last_error = None;
        self.state = TrackingState::Tracking;
        Ok(true)
    }

    /// Advance one frame with the user's current position. `dt` is the frame
    /// time in seconds. Only does anything while tracking.
    ///
    /// At most one checkpoint is passed per tick, even if the user jumped past
    /// several.
    pub fn tick(&mut self, position: Point, dt: f32) -> TrackingState {
        assert_finite(&position, "position");
        if self.state != TrackingState::Tracking {
            return self.state;
        }
        let Some(destination) = self.destination else {
            return self.state;
        };

        self.start = Some(position);
        self.path_age += dt.max(0.0);

        if nalgebra::distance(&position, &destination) <= self.config.checkpoint_threshold {
            self.arrive();
            return self.state;
        }

        let start_delta = nalgebra::distance(&position, &self.last_start_position);
        let inputs = FreshnessInputs {
            end_delta: nalgebra::distance(&destination, &self.last_target_position),
            start_delta,
            near_path: self
                .checkpoints
                .any_within(&position, self.policy.on_path_radius()),
            age: self.path_age,
        };
        if start_delta > self.policy.deviation_distance() {
            self.last_start_position = position;
        }

        if self.policy.evaluate(&inputs).needs_recalculation() && self.recompute().is_err() {
            return self.state;
        }

        if let Some(next) = self.checkpoints.next() {
            if nalgebra::distance(&position, next) <= self.config.checkpoint_threshold {
                self.checkpoints.advance();
                debug!(
                    "Passed checkpoint {}/{}",
                    self.checkpoints.next_index(),
                    self.checkpoints.len()
                );
            }
        }

        if self.checkpoints.is_complete() {
            self.arrive();
        }
        self.state
    }

    /// Curve from `position` through every unreached checkpoint. Empty when
    /// there is nothing left to draw.
    pub fn render_points(&self, position: Point) -> Vec<Point> {
        let remaining = self.checkpoints.remaining();
        if remaining.is_empty() {
            return Vec::new();
        }

        let mut controls = Vec::with_capacity(remaining.len() + 1);
        controls.push(position);
        controls.extend_from_slice(remaining);
        sample_curve(&controls, self.config.points_per_segment)
    }

    /// Whether the destination has been reached
    pub fn has_arrived(&self) -> bool {
        self.state == TrackingState::Arrived
    }

    /// Walking distance from `position` through the remaining checkpoints
    pub fn remaining_distance(&self, position: Point) -> f32 {
        self.checkpoints
            .remaining()
            .iter()
            .fold((0.0, position), |(total, from), checkpoint| {
                (total + nalgebra::distance(&from, checkpoint), *checkpoint)
            })
            .0
    }

    /// Drop the path and both anchors
    pub fn reset(&mut self) {
        self.state = TrackingState::Idle;
        self.start = None;
        self.destination = None;
        self.corner_path.clear();
        self.checkpoints = CheckpointList::default();
        self.last_error = None;
        self.path_age = 0.0;
        self.generation += 1;
        info!("Guidance reset");
    }

    /// Current lifecycle state
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Why the last recompute failed, if it did
    pub fn last_error(&self) -> Option<PathError> {
        self.last_error
    }

    /// Checkpoints of the current (or last good) path
    pub fn checkpoints(&self) -> &CheckpointList {
        &self.checkpoints
    }

    /// Corners of the current (or last good) path
    pub fn corner_path(&self) -> &[Point] {
        &self.corner_path
    }

    /// Start anchor
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Destination anchor
    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// Active configuration
    pub fn config(&self) -> &GuidanceConfig {
        &self.config
    }

    /// The pathfinding service paths are requested from
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Progress snapshot
    pub fn status(&self) -> GuidanceStatus {
        GuidanceStatus {
            state: self.state,
            next_checkpoint: self.checkpoints.next_index(),
            checkpoint_count: self.checkpoints.len(),
            corner_count: self.corner_path.len(),
            last_error: self.last_error,
        }
    }

    fn fail(&mut self, error: PathError) -> PathError {
        self.last_error = Some(error);
        if !matches!(self.state, TrackingState::Idle | TrackingState::Arrived) {
            self.state = TrackingState::PathPending;
        }
        error
    }

    fn arrive(&mut self) {
        self.state = TrackingState::Arrived;
        info!("Reached destination");
    }
}

fn is_finite(point: &Point) -> bool {
    point.coords.iter().all(|c| c.is_finite())
}

fn assert_finite(point: &Point, what: &str) {
    assert!(
        is_finite(point),
        "{} must be a finite position, got {:?}",
        what,
        point
    );
}

// Limitations:
// - Only one checkpoint is passed per tick. After a teleport the line keeps
//   pointing back at the skipped checkpoints until the user returns to them or
//   a deviation/age refresh rebuilds the path.
// - Path age only advances while tracking.
