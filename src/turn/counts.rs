//! Turn category tallies for the initiative generator
//!
//! Each side's force is counted into turn categories before a phase; the
//! external initiative/turn-order generator interleaves the categories (the
//! move-even balancing across unequal force sizes). This module only tallies
//! and reports; it never orders.

use serde::{Deserialize, Serialize};

use crate::core::config::GameOptions;
use crate::unit::chassis::{Unit, UnitKind};

/// Turn scheduling category of one unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnCategory {
    /// Ordinary one-unit turn
    Other,
    /// Interleaved evenly across the turn order (move-even balancing)
    Even,
    /// Consumed in multi-unit groups
    Multi,
    SpaceStation,
    Jumpship,
    Warship,
    Dropship,
    SmallCraft,
    Aero,
}

/// Category a unit schedules under, given the active options
pub fn category_of(unit: &Unit, options: &GameOptions) -> TurnCategory {
    match unit.kind {
        UnitKind::SpaceStation => TurnCategory::SpaceStation,
        UnitKind::Jumpship => TurnCategory::Jumpship,
        UnitKind::Warship => TurnCategory::Warship,
        UnitKind::Dropship => TurnCategory::Dropship,
        UnitKind::SmallCraft => TurnCategory::SmallCraft,
        UnitKind::Fighter => TurnCategory::Aero,
        UnitKind::Infantry => {
            if options.infantry_move_even {
                TurnCategory::Even
            } else if options.infantry_move_multi {
                TurnCategory::Multi
            } else {
                TurnCategory::Other
            }
        }
        UnitKind::ProtoMek => {
            if options.protomek_move_even {
                TurnCategory::Even
            } else if options.protomek_move_multi {
                TurnCategory::Multi
            } else {
                TurnCategory::Other
            }
        }
        UnitKind::Mek | UnitKind::Tank | UnitKind::BattleArmor => TurnCategory::Other,
    }
}

/// Per-player tally over the turn categories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnCounts {
    pub other: u32,
    pub even: u32,
    pub multi: u32,
    pub space_station: u32,
    pub jumpship: u32,
    pub warship: u32,
    pub dropship: u32,
    pub small_craft: u32,
    pub aero: u32,
}

impl TurnCounts {
    /// Tally selectable units into categories
    pub fn tally<'a>(units: impl IntoIterator<Item = &'a Unit>, options: &GameOptions) -> Self {
        let mut counts = TurnCounts::default();
        for unit in units {
            if !unit.is_selectable() {
                continue;
            }
            match category_of(unit, options) {
                TurnCategory::Other => counts.other += 1,
                TurnCategory::Even => counts.even += 1,
                TurnCategory::Multi => counts.multi += 1,
                TurnCategory::SpaceStation => counts.space_station += 1,
                TurnCategory::Jumpship => counts.jumpship += 1,
                TurnCategory::Warship => counts.warship += 1,
                TurnCategory::Dropship => counts.dropship += 1,
                TurnCategory::SmallCraft => counts.small_craft += 1,
                TurnCategory::Aero => counts.aero += 1,
            }
        }
        counts
    }

    /// Number of turns this tally produces
    ///
    /// Multi-category units share turns in groups of
    /// `options.move_multi_group`; every other category is one turn per unit.
    pub fn total_turns(&self, options: &GameOptions) -> u32 {
        let group = options.move_multi_group.max(1);
        let multi_turns = (self.multi + group - 1) / group;
        self.other
            + self.even
            + multi_turns
            + self.space_station
            + self.jumpship
            + self.warship
            + self.dropship
            + self.small_craft
            + self.aero
    }
}
