//! Recorded flight paths for airborne units
//!
//! Aerospace units record the hexes they pass through each movement phase.
//! Strafing geometry and ground-to-air attacks resolve against this record
//! rather than the unit's final position.

use serde::{Deserialize, Serialize};

use crate::board::hex::{Facing, HexCoord};

/// One recorded point on a flight path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub position: HexCoord,
    pub facing: Facing,
}

/// Ordered hexes an airborne unit passed through this turn
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightPath {
    waypoints: Vec<Waypoint>,
}

impl FlightPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: HexCoord, facing: Facing) {
        self.waypoints.push(Waypoint { position, facing });
    }

    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The hex this path passed through immediately before entering `hex`
    ///
    /// Returns None when the path never enters `hex` or enters it first.
    pub fn entry_hex_before(&self, hex: HexCoord) -> Option<HexCoord> {
        let entry = self.waypoints.iter().position(|w| w.position == hex)?;
        if entry == 0 {
            return None;
        }
        Some(self.waypoints[entry - 1].position)
    }

    /// The waypoint closest to `hex`; earlier waypoints win ties
    pub fn closest_waypoint(&self, hex: HexCoord) -> Option<Waypoint> {
        self.waypoints
            .iter()
            .copied()
            .min_by_key(|w| w.position.distance(&hex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastbound() -> FlightPath {
        let mut path = FlightPath::new();
        for q in 0..5 {
            path.push(HexCoord::new(q, 0), Facing::SouthEast);
        }
        path
    }

    #[test]
    fn test_entry_hex_before() {
        let path = eastbound();
        assert_eq!(
            path.entry_hex_before(HexCoord::new(3, 0)),
            Some(HexCoord::new(2, 0))
        );
    }

    #[test]
    fn test_entry_hex_before_first_hex() {
        let path = eastbound();
        assert_eq!(path.entry_hex_before(HexCoord::new(0, 0)), None);
    }

    #[test]
    fn test_entry_hex_not_on_path() {
        let path = eastbound();
        assert_eq!(path.entry_hex_before(HexCoord::new(9, 9)), None);
    }

    #[test]
    fn test_closest_waypoint() {
        let path = eastbound();
        let closest = path.closest_waypoint(HexCoord::new(4, 2)).unwrap();
        assert_eq!(closest.position, HexCoord::new(4, 0));
    }

    #[test]
    fn test_closest_waypoint_tie_prefers_earlier() {
        let mut path = FlightPath::new();
        path.push(HexCoord::new(0, 0), Facing::North);
        path.push(HexCoord::new(2, 0), Facing::North);
        // (1, 0) is distance 1 from both; the earlier waypoint wins
        let closest = path.closest_waypoint(HexCoord::new(1, 0)).unwrap();
        assert_eq!(closest.position, HexCoord::new(0, 0));
    }

    #[test]
    fn test_empty_path() {
        let path = FlightPath::new();
        assert!(path.closest_waypoint(HexCoord::new(0, 0)).is_none());
        assert!(path.entry_hex_before(HexCoord::new(0, 0)).is_none());
    }
}
