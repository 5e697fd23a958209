//! Hit records and called shots

use serde::{Deserialize, Serialize};

use crate::unit::chassis::{Unit, UnitKind};

/// Follow-on effect tag carried with a hit location roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitEffect {
    #[default]
    None,
    /// Roll on the critical-hit table
    Critical,
    /// Vehicle motive system damaged
    MovementDamaged,
    /// Vehicle motive system destroyed
    MovementDestroyed,
}

/// Result of one hit location roll
///
/// Created fresh per attack resolution and read-only afterwards, except for
/// the explicit crit-modifier adjusters below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitData {
    /// Location index on the target unit
    pub location: usize,
    /// Hit struck the rear armor facing
    pub rear: bool,
    /// Effect tag consumed by damage resolution
    pub effect: HitEffect,
    /// Modifier applied to the determine-critical roll
    pub crit_mod: i8,
    /// Produced by an aimed/called shot
    pub aimed: bool,
}

impl HitData {
    pub fn new(location: usize) -> Self {
        Self {
            location,
            rear: false,
            effect: HitEffect::None,
            crit_mod: 0,
            aimed: false,
        }
    }

    pub fn rear(mut self) -> Self {
        self.rear = true;
        self
    }

    pub fn aimed(mut self) -> Self {
        self.aimed = true;
        self
    }

    pub fn with_effect(mut self, effect: HitEffect) -> Self {
        self.effect = effect;
        self
    }

    /// Glancing blows are less likely to produce criticals
    pub fn make_glancing_blow(&mut self) {
        self.crit_mod -= 2;
    }

    /// Armor-piercing ammunition is more likely to produce criticals
    pub fn make_armor_piercing(&mut self) {
        self.crit_mod += 1;
    }
}

/// Player-declared aim bias narrowing the hit-location roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CalledShot {
    #[default]
    None,
    High,
    Low,
    Left,
    Right,
}

impl CalledShot {
    /// Next declaration in the toggle cycle (UI cycles through these)
    pub fn cycle(&self) -> Self {
        match self {
            CalledShot::None => CalledShot::High,
            CalledShot::High => CalledShot::Low,
            CalledShot::Low => CalledShot::Left,
            CalledShot::Left => CalledShot::Right,
            CalledShot::Right => CalledShot::None,
        }
    }

    /// Legality check, performed before any resolution
    ///
    /// Returns a human-readable reason when the declaration is illegal
    /// against this target, or None when legal.
    pub fn check_valid(&self, target: &Unit) -> Option<&'static str> {
        if *self == CalledShot::None {
            return None;
        }

        match target.kind {
            UnitKind::Infantry | UnitKind::BattleArmor => {
                Some("called shots cannot target infantry")
            }
            UnitKind::ProtoMek => Some("called shots cannot target ProtoMeks"),
            UnitKind::Mek => None,
            _ => {
                // High/low aim needs a distinct upper/lower profile
                if matches!(self, CalledShot::High | CalledShot::Low) {
                    Some("high/low called shots are only legal against Meks")
                } else {
                    None
                }
            }
        }
    }
}
