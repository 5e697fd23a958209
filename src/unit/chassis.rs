//! Unit model: the read surface the rules core depends on
//!
//! The engine only consumes read accessors (position, facing, kind, owner)
//! plus the critical-slot arena; everything else about a unit (movement
//! profiles, equipment catalogs, record sheets) lives outside this crate.

use serde::{Deserialize, Serialize};

use crate::board::hex::{Facing, HexCoord};
use crate::combat::critical::SlotAddr;
use crate::core::types::{PlayerId, UnitId, UnitNumber, WeightClass};
use crate::unit::flight_path::FlightPath;
use crate::unit::location::Location;

/// Combat unit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Mek,
    ProtoMek,
    Tank,
    Infantry,
    BattleArmor,
    Fighter,
    SmallCraft,
    Dropship,
    Jumpship,
    Warship,
    SpaceStation,
}

impl UnitKind {
    /// Aerospace unit types (fly a flight path when airborne)
    pub fn is_aero(&self) -> bool {
        matches!(
            self,
            UnitKind::Fighter
                | UnitKind::SmallCraft
                | UnitKind::Dropship
                | UnitKind::Jumpship
                | UnitKind::Warship
                | UnitKind::SpaceStation
        )
    }

    /// Capital-scale aerospace (never fits in a transport bay)
    pub fn is_large_aero(&self) -> bool {
        matches!(
            self,
            UnitKind::Dropship | UnitKind::Jumpship | UnitKind::Warship | UnitKind::SpaceStation
        )
    }

    /// Ground unit types
    pub fn is_ground(&self) -> bool {
        !self.is_aero()
    }
}

/// One combat unit on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerId,
    pub kind: UnitKind,
    pub tonnage: f64,

    // Position
    pub position: HexCoord,
    pub prior_position: HexCoord,
    pub facing: Facing,
    pub airborne: bool,
    pub flight_path: FlightPath,

    // Turn state
    pub done: bool,
    pub destroyed: bool,
    pub deployed: bool,
    pub unit_number: Option<UnitNumber>,

    /// Live fighter count for squadrons (1 for everything else); squadrons
    /// shrink as members are destroyed, which changes their bay footprint
    pub fighter_count: u32,

    locations: Vec<Location>,
}

impl Unit {
    pub fn new(id: UnitId, owner: PlayerId, kind: UnitKind, tonnage: f64) -> Self {
        Self {
            id,
            owner,
            kind,
            tonnage,
            position: HexCoord::default(),
            prior_position: HexCoord::default(),
            facing: Facing::default(),
            airborne: false,
            flight_path: FlightPath::new(),
            done: false,
            destroyed: false,
            deployed: true,
            unit_number: None,
            fighter_count: 1,
            locations: Vec::new(),
        }
    }

    pub fn weight_class(&self) -> WeightClass {
        WeightClass::from_tonnage(self.tonnage)
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    /// Eligible to be chosen for a turn at all
    pub fn is_selectable(&self) -> bool {
        !self.destroyed && self.deployed
    }

    /// Move the unit, recording the hex it left
    pub fn move_to(&mut self, position: HexCoord, facing: Facing) {
        self.prior_position = self.position;
        self.position = position;
        self.facing = facing;
        if self.airborne {
            self.flight_path.push(position, facing);
        }
    }

    // === Locations and critical slots ===

    pub fn add_location(&mut self, location: Location) -> usize {
        self.locations.push(location);
        self.locations.len() - 1
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    pub fn location_mut(&mut self, index: usize) -> Option<&mut Location> {
        self.locations.get_mut(index)
    }

    /// Every slot coordinate currently eligible for a critical-hit roll
    ///
    /// Consumed by the crit-roll generator to weight its table.
    pub fn hittable_slots(&self) -> Vec<SlotAddr> {
        let mut eligible = Vec::new();
        for (loc_idx, location) in self.locations.iter().enumerate() {
            if location.destroyed || location.blown_off {
                continue;
            }
            for slot_idx in location.hittable_indices() {
                eligible.push(SlotAddr::new(loc_idx, slot_idx));
            }
        }
        eligible
    }

    /// Apply a critical hit at a slot coordinate; false if ineligible
    pub fn apply_crit(&mut self, addr: SlotAddr) -> bool {
        match self.locations.get_mut(addr.location) {
            Some(location) if !location.destroyed && !location.blown_off => {
                location.apply_crit(addr.slot)
            }
            _ => false,
        }
    }
}
