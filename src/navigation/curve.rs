// src/navigation/curve.rs
// Catmull-Rom interpolation for drawing a smooth line through checkpoints.

use crate::Point;

/// Evaluate the Catmull-Rom segment between `p1` and `p2` at `t`.
///
/// `p0` and `p3` only shape the tangents. `t` is clamped to `[0, 1]`; the
/// endpoints return `p1` and `p2` exactly so neighbouring segments meet.
pub fn catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    if t <= 0.0 {
        return p1;
    }
    if t >= 1.0 {
        return p2;
    }

    let (p0, p1, p2, p3) = (p0.coords, p1.coords, p2.coords, p3.coords);
    let t2 = t * t;
    let t3 = t2 * t;

    Point::from(
        ((p1 * 2.0)
            + (-p0 + p2) * t
            + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
            + (-p0 + p1 * 3.0 - p2 * 3.0 + p3) * t3)
            * 0.5,
    )
}

/// Sample a Catmull-Rom curve through every point in `points`.
///
/// Each segment gets `samples_per_segment` samples, but adjacent segments share
/// their boundary sample, so `N` points produce `(M - 1) * (N - 1) + 1` samples.
/// The first and last points are duplicated as outer tangent controls.
///
/// # Panics
///
/// If `samples_per_segment < 2`.
pub fn sample_curve(points: &[Point], samples_per_segment: usize) -> Vec<Point> {
    assert!(
        samples_per_segment >= 2,
        "a curve segment needs at least 2 samples, got {}",
        samples_per_segment
    );
    if points.len() < 2 {
        return Vec::new();
    }

    let segments = points.len() - 1;
    let steps = (samples_per_segment - 1) as f32;
    let mut curve = Vec::with_capacity((samples_per_segment - 1) * segments + 1);

    for i in 0..segments {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = if i + 2 < points.len() { points[i + 2] } else { points[i + 1] };

        // Segment start equals the previous segment's end
        let first = if i == 0 { 0 } else { 1 };
        for j in first..samples_per_segment {
            curve.push(catmull_rom(p0, p1, p2, p3, j as f32 / steps));
        }
    }

    curve
}
