// src/main.rs
// Demo driver: walks a simulated user along the guidance line across an open
// floor and logs progress every frame. With a destination list it moves on to
// the next stop after each arrival.

use guidance_line::{
    DestinationList, GuidanceConfig, GuidancePathTracker, NamedDestination, OpenFloor, PathError,
    Point, TrackingState,
};
use log::{debug, error, info, warn};
use nalgebra::Vector3;
use serde::Deserialize;
use std::error::Error;

/// Demo scenario, loaded from the same YAML file as the guidance config
#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    guidance: GuidanceConfig,
    floor: OpenFloor,
    start: Point,
    /// Used when `destinations` is empty
    destination: Point,
    destinations: Vec<NamedDestination>,
    /// Head for the next destination in the list after arriving
    auto_progress: bool,
    /// Destination drift in metres per second
    target_velocity: Vector3<f32>,
    /// Walking speed in metres per second
    walk_speed: f32,
    frame_time: f32,
    max_ticks: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            guidance: GuidanceConfig::default(),
            floor: OpenFloor::new(-20.0, 20.0, -20.0, 20.0, 0.0),
            start: Point::new(-10.0, 0.0, -10.0),
            destination: Point::new(12.0, 0.0, 8.0),
            destinations: Vec::new(),
            auto_progress: false,
            target_velocity: Vector3::zeros(),
            walk_speed: 1.4,
            frame_time: 0.1,
            max_ticks: 1000,
        }
    }
}

fn load_demo(path: &str) -> Result<DemoConfig, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    let demo: DemoConfig = serde_yaml::from_str(&data)?;
    demo.guidance.validate()?;
    Ok(demo)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/guidance.yaml".to_string());
    let demo = match load_demo(&path) {
        Ok(demo) => {
            info!("Loaded demo scenario from {}", path);
            demo
        }
        Err(e) => {
            warn!("Could not load {} ({}), using built-in scenario", path, e);
            DemoConfig::default()
        }
    };

    let mut tracker = GuidancePathTracker::new(demo.guidance.clone(), demo.floor.clone())?;
    let mut position = demo.start;
    let mut stops = DestinationList::new(demo.destinations.clone());
    let mut destination = stops.current().map_or(demo.destination, |d| d.position);

    match tracker.set_start(position) {
        Ok(()) => {}
        // The first anchor alone cannot produce a path
        Err(PathError::MissingAnchor) => debug!("Start set, waiting for a destination"),
        Err(e) => warn!("Start rejected: {}", e),
    }
    if let Err(e) = tracker.set_destination(destination) {
        error!("Could not compute initial path: {}", e);
        return Err(e.into());
    }

    for frame in 0..demo.max_ticks {
        if demo.target_velocity != Vector3::zeros() {
            destination += demo.target_velocity * demo.frame_time;
            tracker.move_destination(destination);
        }

        // Head for the next unreached checkpoint
        if let Some(next) = tracker.checkpoints().next().copied() {
            let to_next = next - position;
            let step = (demo.walk_speed * demo.frame_time).min(to_next.norm());
            if step > 0.0 {
                position += to_next.normalize() * step;
            }
        }

        match tracker.tick(position, demo.frame_time) {
            TrackingState::Arrived => {
                info!("Arrived after {} frames", frame + 1);
                if !demo.auto_progress || stops.len() < 2 {
                    break;
                }
                let Some(next) = stops.select_next().map(|d| d.position) else {
                    break;
                };
                destination = next;
                if let Err(e) = tracker.set_destination(destination) {
                    error!("Could not compute path to the next destination: {}", e);
                    break;
                }
            }
            TrackingState::Tracking => {
                let line = tracker.render_points(position);
                info!(
                    "Frame {}: checkpoint {}/{}, {:.1}m to go, {} line points",
                    frame,
                    tracker.checkpoints().next_index(),
                    tracker.checkpoints().len(),
                    tracker.remaining_distance(position),
                    line.len()
                );
            }
            state => {
                error!(
                    "Guidance stopped in {:?}: {:?}",
                    state,
                    tracker.last_error()
                );
                break;
            }
        }
    }

    info!("Final status: {:?}", tracker.status());
    Ok(())
}
