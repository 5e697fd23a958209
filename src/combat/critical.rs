//! Critical slot state tracking
//!
//! One slot per destructible system/equipment compartment in a body location.
//! Slots are never removed: a destroyed slot persists as an empty marker so
//! saved games and repair bookkeeping keep their coordinates stable.

use serde::{Deserialize, Serialize};

/// Internal systems that occupy critical slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemSlot {
    Engine,
    Gyro,
    Cockpit,
    LifeSupport,
    Sensors,
    ShoulderActuator,
    UpperArmActuator,
    LowerArmActuator,
    HandActuator,
    HipActuator,
    UpperLegActuator,
    LowerLegActuator,
    FootActuator,
}

/// What a critical slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// An internal system
    System(SystemSlot),
    /// Mounted equipment, identified by its mount number on the unit
    Equipment(u16),
}

/// One critical slot within a body location
///
/// The four damage flags are independent in the representation but interact
/// through the queries below. Equality is by (kind, index) coordinate, not by
/// instance, so slots can be looked up without holding references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalSlot {
    pub kind: SlotKind,
    pub index: u8,
    hit: bool,
    destroyed: bool,
    missing: bool,
    breached: bool,
    hittable: bool,
}

impl PartialEq for CriticalSlot {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.index == other.index
    }
}

impl Eq for CriticalSlot {}

impl CriticalSlot {
    /// Create an intact, hittable slot
    pub fn new(kind: SlotKind, index: u8) -> Self {
        Self {
            kind,
            index,
            hit: false,
            destroyed: false,
            missing: false,
            breached: false,
            hittable: true,
        }
    }

    /// Create a slot that critical rolls can never select
    ///
    /// Used for systems already rerolled away and for padding slots.
    pub fn non_hittable(kind: SlotKind, index: u8) -> Self {
        let mut slot = Self::new(kind, index);
        slot.hittable = false;
        slot
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn is_breached(&self) -> bool {
        self.breached
    }

    /// Damaged for reporting purposes: hit, missing, or destroyed
    pub fn is_damaged(&self) -> bool {
        self.hit || self.missing || self.destroyed
    }

    /// Eligible for a future critical-hit roll
    ///
    /// Once the hittable flag clears or the slot is hit/destroyed this is
    /// permanently false.
    pub fn is_hittable(&self) -> bool {
        self.hittable && !self.hit && !self.destroyed
    }

    /// The raw hittable flag, ignoring accumulated damage
    pub fn is_ever_hittable(&self) -> bool {
        self.hittable
    }

    /// A critical roll selected and damaged this slot
    pub fn set_hit(&mut self) {
        self.hit = true;
    }

    /// Whole-equipment destruction (e.g. ammo explosion pre-empting a roll)
    pub fn set_destroyed(&mut self) {
        self.destroyed = true;
    }

    /// The containing location was severed or destroyed
    pub fn set_missing(&mut self) {
        self.missing = true;
    }

    /// Hull breach: useless without counting as destroyed for repair/value
    pub fn set_breached(&mut self) {
        self.breached = true;
    }
}

/// Coordinate of one slot within a unit: (location index, slot index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotAddr {
    pub location: usize,
    pub slot: usize,
}

impl SlotAddr {
    pub fn new(location: usize, slot: usize) -> Self {
        Self { location, slot }
    }
}
