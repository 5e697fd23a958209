//! Hex coordinate system for game boards (axial coordinates)
//!
//! Column-axial layout with north-pointing hex edges: units can face one of
//! six directions starting at due north, matching classic hex-map facings.

use serde::{Deserialize, Serialize};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Axial hex coordinate (q = column, r = axial row, south positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Get all 6 neighboring hex coordinates
    pub fn neighbors(&self) -> [HexCoord; 6] {
        Facing::all().map(|f| self.translated(f))
    }

    /// The adjacent hex in the given facing
    pub fn translated(&self, facing: Facing) -> HexCoord {
        let offset = facing.offset();
        HexCoord::new(self.q + offset.q, self.r + offset.r)
    }

    /// Cartesian projection (x east, y south; hex edge length 1)
    pub fn to_cartesian(&self) -> (f64, f64) {
        let x = 1.5 * self.q as f64;
        let y = SQRT_3 * (self.r as f64 + self.q as f64 / 2.0);
        (x, y)
    }

    /// Bearing from this hex to another, in degrees clockwise from north
    ///
    /// Returns 0.0 when the hexes coincide.
    pub fn bearing_to(&self, other: &Self) -> f64 {
        let (x1, y1) = self.to_cartesian();
        let (x2, y2) = other.to_cartesian();
        let dx = x2 - x1;
        let dy = y2 - y1;
        if dx == 0.0 && dy == 0.0 {
            return 0.0;
        }
        // y grows southward, so north is -y
        let degrees = dx.atan2(-dy).to_degrees();
        (degrees + 360.0) % 360.0
    }
}

/// One of the six hex facings, clockwise from due north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Facing {
    #[default]
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Facing {
    /// Get the hex offset for this facing
    pub fn offset(&self) -> HexCoord {
        match self {
            Facing::North => HexCoord::new(0, -1),
            Facing::NorthEast => HexCoord::new(1, -1),
            Facing::SouthEast => HexCoord::new(1, 0),
            Facing::South => HexCoord::new(0, 1),
            Facing::SouthWest => HexCoord::new(-1, 1),
            Facing::NorthWest => HexCoord::new(-1, 0),
        }
    }

    /// Facing angle in degrees clockwise from north
    pub fn angle_deg(&self) -> f64 {
        self.index() as f64 * 60.0
    }

    /// Facing number (0 = north, clockwise)
    pub fn index(&self) -> u8 {
        match self {
            Facing::North => 0,
            Facing::NorthEast => 1,
            Facing::SouthEast => 2,
            Facing::South => 3,
            Facing::SouthWest => 4,
            Facing::NorthWest => 5,
        }
    }

    /// Facing from a facing number, modulo 6
    pub fn from_index(index: u8) -> Self {
        match index % 6 {
            0 => Facing::North,
            1 => Facing::NorthEast,
            2 => Facing::SouthEast,
            3 => Facing::South,
            4 => Facing::SouthWest,
            _ => Facing::NorthWest,
        }
    }

    /// Rotate one facing clockwise (60 degrees)
    pub fn rotate_cw(&self) -> Self {
        Facing::from_index(self.index() + 1)
    }

    /// Rotate one facing counter-clockwise (60 degrees)
    pub fn rotate_ccw(&self) -> Self {
        Facing::from_index(self.index() + 5)
    }

    /// Get opposite facing
    pub fn opposite(&self) -> Self {
        Facing::from_index(self.index() + 3)
    }

    /// All facings, clockwise from north
    pub fn all() -> [Facing; 6] {
        [
            Facing::North,
            Facing::NorthEast,
            Facing::SouthEast,
            Facing::South,
            Facing::SouthWest,
            Facing::NorthWest,
        ]
    }
}
