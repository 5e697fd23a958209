//! Bay kind configuration: eligibility and footprint arithmetic
//!
//! One kind record per cargo class replaces a subclass per cargo class; the
//! ledger in `bay.rs` is generic over these.

use serde::{Deserialize, Serialize};

use crate::unit::chassis::{Unit, UnitKind};

/// What a transport bay is fitted to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BayKind {
    Mek,
    /// Vehicle cubicles rated to 100 tons
    HeavyVehicle,
    /// Vehicle cubicles rated to 50 tons
    LightVehicle,
    BattleArmor,
    Infantry,
    /// Aerospace fighter cubicles with recovery gear
    Fighter,
    /// Small craft docks with recovery gear; also takes fighters
    SmallCraft,
    /// Bulk tonnage
    Cargo,
}

impl BayKind {
    pub fn name(&self) -> &'static str {
        match self {
            BayKind::Mek => "Mek Bay",
            BayKind::HeavyVehicle => "Heavy Vehicle Bay",
            BayKind::LightVehicle => "Light Vehicle Bay",
            BayKind::BattleArmor => "Battle Armor Bay",
            BayKind::Infantry => "Infantry Bay",
            BayKind::Fighter => "Fighter Bay",
            BayKind::SmallCraft => "Small Craft Bay",
            BayKind::Cargo => "Cargo Bay",
        }
    }

    /// May this unit type ride in this bay at all?
    pub fn eligible(&self, unit: &Unit) -> bool {
        match self {
            BayKind::Mek => unit.kind == UnitKind::Mek,
            BayKind::HeavyVehicle => unit.kind == UnitKind::Tank && unit.tonnage <= 100.0,
            BayKind::LightVehicle => unit.kind == UnitKind::Tank && unit.tonnage <= 50.0,
            BayKind::BattleArmor => unit.kind == UnitKind::BattleArmor,
            BayKind::Infantry => unit.kind == UnitKind::Infantry,
            BayKind::Fighter => unit.kind == UnitKind::Fighter,
            BayKind::SmallCraft => {
                matches!(unit.kind, UnitKind::SmallCraft | UnitKind::Fighter)
            }
            BayKind::Cargo => !unit.kind.is_large_aero(),
        }
    }

    /// Space this unit consumes right now
    ///
    /// Vehicle and cargo bays count tonnage; personnel and Mek bays count
    /// cubicles; fighter/small-craft docks count one slot per live fighter,
    /// so a squadron's footprint shrinks as it loses members.
    pub fn footprint(&self, unit: &Unit) -> f64 {
        match self {
            BayKind::HeavyVehicle | BayKind::LightVehicle | BayKind::Cargo => unit.tonnage,
            BayKind::Fighter | BayKind::SmallCraft => unit.fighter_count.max(1) as f64,
            BayKind::Mek | BayKind::BattleArmor | BayKind::Infantry => 1.0,
        }
    }

    /// Mid-game recovery gear fitted (aerospace docking)
    pub fn supports_recovery(&self) -> bool {
        matches!(self, BayKind::Fighter | BayKind::SmallCraft)
    }
}
