//! Side-table resolution: which armor facing an attack strikes
//!
//! Maps attacker and target geometry to one of four armor arcs, handling the
//! aerospace special cases (strafing entry hexes, flight-path resolution,
//! co-located air-to-air engagements). The resolver is total: every input
//! produces a selector, and identical inputs always produce the same one.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::board::hex::{Facing, HexCoord};
use crate::combat::hit::CalledShot;
use crate::unit::chassis::Unit;

/// Armor-facing arc selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideTable {
    Front,
    Right,
    Rear,
    Left,
}

/// Deterministic ordering of two co-located airborne units
///
/// The movement driver knows which unit is still entering the shared hex;
/// this core only requires that the comparison is deterministic for fixed
/// inputs.
pub trait MoveSort {
    fn compare(&self, a: &Unit, b: &Unit) -> Ordering;
}

/// Comparator that always answers the same way (tests and scripted drivers)
#[derive(Debug, Clone, Copy)]
pub struct FixedMoveSort(pub Ordering);

impl MoveSort for FixedMoveSort {
    fn compare(&self, _a: &Unit, _b: &Unit) -> Ordering {
        self.0
    }
}

/// Attack target: a unit or a plain point on the board
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Unit(&'a Unit),
    Point(HexCoord),
}

impl Target<'_> {
    pub fn position(&self) -> HexCoord {
        match self {
            Target::Unit(unit) => unit.position,
            Target::Point(hex) => *hex,
        }
    }

    pub fn is_airborne(&self) -> bool {
        match self {
            Target::Unit(unit) => unit.is_airborne(),
            Target::Point(_) => false,
        }
    }
}

/// Resolve the armor arc an attack strikes
///
/// Special cases are evaluated in fixed precedence:
/// 1. Non-unit targets resolve from the attack position alone (entry-point
///    adjusted when the attack is air-to-ground).
/// 2. Co-located airborne aero units: `move_sort` decides whether the
///    attacker's prior position substitutes for its current one.
/// 3. Air-to-ground: the attacker shoots from the hex it entered the
///    target's hex from (strafing geometry).
/// 4. Ground-to-air: the target is engaged at the closest point of its
///    flight path, with the facing recorded there.
/// 5. Called shots left/right swing the matching arc toward the attacker.
pub fn side_table(
    attacker: &Unit,
    target: Target<'_>,
    called: CalledShot,
    move_sort: &dyn MoveSort,
) -> SideTable {
    let target_unit = match target {
        Target::Unit(unit) => unit,
        Target::Point(hex) => {
            let mut attack_pos = attacker.position;
            if attacker.is_airborne() {
                if let Some(entry) = attacker.flight_path.entry_hex_before(hex) {
                    attack_pos = entry;
                }
            }
            return point_side_from(attack_pos);
        }
    };

    let mut attack_pos = attacker.position;

    if attacker.position == target_unit.position
        && attacker.is_airborne()
        && target_unit.is_airborne()
        && attacker.kind.is_aero()
        && target_unit.kind.is_aero()
    {
        // The unit still entering the shared hex attacks from the hex it
        // came from
        if move_sort.compare(attacker, target_unit) == Ordering::Greater {
            attack_pos = attacker.prior_position;
        }
    } else if attacker.is_airborne() && !target_unit.is_airborne() {
        if let Some(entry) = attacker.flight_path.entry_hex_before(target_unit.position) {
            attack_pos = entry;
        }
    }

    let (target_pos, target_facing) = if !attacker.is_airborne() && target_unit.is_airborne() {
        match target_unit.flight_path.closest_waypoint(attacker.position) {
            Some(waypoint) => (waypoint.position, waypoint.facing),
            None => (target_unit.position, target_unit.facing),
        }
    } else {
        (target_unit.position, target_unit.facing)
    };

    side_from_attack_position(target_pos, target_facing, attack_pos, called)
}

/// Arc lookup from raw geometry
///
/// The relative bearing from the target's facing buckets into arcs:
/// (30, 150] right, (150, 210) rear, [210, 330) left, the rest front.
pub fn side_from_attack_position(
    target_pos: HexCoord,
    target_facing: Facing,
    attack_pos: HexCoord,
    called: CalledShot,
) -> SideTable {
    let facing = match called {
        CalledShot::Left => target_facing.rotate_cw(),
        CalledShot::Right => target_facing.rotate_ccw(),
        _ => target_facing,
    };

    if attack_pos == target_pos {
        return SideTable::Front;
    }

    let bearing = target_pos.bearing_to(&attack_pos);
    let relative = (bearing - facing.angle_deg()).rem_euclid(360.0);

    if relative > 30.0 && relative <= 150.0 {
        SideTable::Right
    } else if relative > 150.0 && relative < 210.0 {
        SideTable::Rear
    } else if (210.0..330.0).contains(&relative) {
        SideTable::Left
    } else {
        SideTable::Front
    }
}

/// Non-unit targets (terrain, hexes, buildings) present no armor arcs
fn point_side_from(_attack_pos: HexCoord) -> SideTable {
    SideTable::Front
}
