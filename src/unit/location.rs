//! Body locations: flat critical-slot arenas addressed by index

use serde::{Deserialize, Serialize};

use crate::combat::critical::{CriticalSlot, SlotKind};

/// One body location (torso, limb, nose, side arc...) on a unit
///
/// Slots live in a flat arena and are addressed by index; the slot objects
/// persist even after the equipment they represent is destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Location destroyed outright (internal structure gone)
    pub destroyed: bool,
    /// Location severed from the unit (limb blown off)
    pub blown_off: bool,
    slots: Vec<CriticalSlot>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            destroyed: false,
            blown_off: false,
            slots: Vec::new(),
        }
    }

    /// Append a slot to the arena, assigning the next coordinate index
    pub fn add_slot(&mut self, kind: SlotKind) -> usize {
        let index = self.slots.len();
        self.slots.push(CriticalSlot::new(kind, index as u8));
        index
    }

    /// Append a slot critical rolls can never select
    pub fn add_non_hittable_slot(&mut self, kind: SlotKind) -> usize {
        let index = self.slots.len();
        self.slots.push(CriticalSlot::non_hittable(kind, index as u8));
        index
    }

    pub fn slots(&self) -> &[CriticalSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&CriticalSlot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut CriticalSlot> {
        self.slots.get_mut(index)
    }

    /// Indices of slots currently eligible for a critical-hit roll
    pub fn hittable_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_hittable())
            .map(|(index, _)| index)
            .collect()
    }

    /// A critical roll selected this slot; returns false if the slot was not
    /// eligible (caller rerolls)
    pub fn apply_crit(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_hittable() => {
                slot.set_hit();
                true
            }
            _ => false,
        }
    }

    /// Destroy a slot outright, bypassing the hittable check (ammo
    /// explosions and whole-equipment loss); false if the index is out of
    /// range
    pub fn destroy_slot(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                slot.set_destroyed();
                true
            }
            None => false,
        }
    }

    /// Sever the location: every slot becomes missing
    pub fn blow_off(&mut self) {
        self.blown_off = true;
        for slot in &mut self.slots {
            slot.set_missing();
        }
    }

    /// Hull breach: every slot becomes useless without being destroyed
    pub fn breach(&mut self) {
        for slot in &mut self.slots {
            slot.set_breached();
        }
    }
}
