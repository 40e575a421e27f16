// src/navigation/destinations.rs
// Named destinations a host can cycle through, one at a time.

use crate::Point;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// A destination with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedDestination {
    /// Display name, also used for lookup
    pub name: String,
    /// Position on (or near) the walkable surface
    pub position: Point,
}

impl NamedDestination {
    /// Create a named destination
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        NamedDestination {
            name: name.into(),
            position,
        }
    }
}

/// Ordered destinations with a selection cursor.
///
/// Selection only moves the cursor; handing the position to the tracker is
/// the caller's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationList {
    destinations: Vec<NamedDestination>,
    current: usize,
}

impl DestinationList {
    /// Wrap `destinations` with the first one selected
    pub fn new(destinations: Vec<NamedDestination>) -> Self {
        DestinationList {
            destinations,
            current: 0,
        }
    }

    /// Every destination in order
    pub fn destinations(&self) -> &[NamedDestination] {
        &self.destinations
    }

    /// Index of the selected destination
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The selected destination, `None` when the list is empty
    pub fn current(&self) -> Option<&NamedDestination> {
        self.destinations.get(self.current)
    }

    /// Number of destinations
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether there are no destinations
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Select by index. Out of range leaves the selection unchanged.
    pub fn select(&mut self, index: usize) -> Option<&NamedDestination> {
        if index >= self.destinations.len() {
            warn!(
                "Invalid destination index {} ({} destinations)",
                index,
                self.destinations.len()
            );
            return None;
        }
        self.current = index;
        let selected = &self.destinations[index];
        info!("Navigation set to: {}", selected.name);
        Some(selected)
    }

    /// Select the destination after the current one, wrapping to the first
    pub fn select_next(&mut self) -> Option<&NamedDestination> {
        if self.destinations.is_empty() {
            return None;
        }
        self.select((self.current + 1) % self.destinations.len())
    }

    /// Select the first destination called `name`
    pub fn select_by_name(&mut self, name: &str) -> Option<&NamedDestination> {
        match self.destinations.iter().position(|d| d.name == name) {
            Some(index) => self.select(index),
            None => {
                warn!("Destination '{}' not found", name);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelves() -> DestinationList {
        DestinationList::new(vec![
            NamedDestination::new("Fiction", Point::new(1.0, 0.0, 0.0)),
            NamedDestination::new("Periodicals", Point::new(0.0, 0.0, 5.0)),
            NamedDestination::new("Help desk", Point::new(-4.0, 0.0, 2.0)),
        ])
    }

    #[test]
    fn next_wraps_around() {
        let mut list = shelves();
        assert_eq!(list.current().unwrap().name, "Fiction");
        assert_eq!(list.select_next().unwrap().name, "Periodicals");
        assert_eq!(list.select_next().unwrap().name, "Help desk");
        assert_eq!(list.select_next().unwrap().name, "Fiction");
        assert_eq!(list.current_index(), 0);
    }

    #[test]
    fn bad_selection_keeps_current() {
        let mut list = shelves();
        list.select(2).unwrap();
        assert!(list.select(3).is_none());
        assert!(list.select_by_name("Basement").is_none());
        assert_eq!(list.current_index(), 2);

        assert_eq!(
            list.select_by_name("Periodicals").map(|d| d.position),
            Some(Point::new(0.0, 0.0, 5.0))
        );
        assert_eq!(list.current_index(), 1);
    }

    #[test]
    fn empty_list_selects_nothing() {
        let mut list = DestinationList::default();
        assert!(list.current().is_none());
        assert!(list.select_next().is_none());
        assert!(list.select(0).is_none());
        assert!(list.is_empty());
    }
}
