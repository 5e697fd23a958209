//! Combat resolution integration tests
//!
//! Walks an attack from declaration to critical effect: called-shot
//! legality, side-table selection, hit record, and the critical-slot
//! cascade on the target.

use std::cmp::Ordering;

use hexlance::board::hex::{Facing, HexCoord};
use hexlance::combat::critical::{SlotAddr, SlotKind, SystemSlot};
use hexlance::combat::hit::{CalledShot, HitData, HitEffect};
use hexlance::combat::side_table::{side_table, FixedMoveSort, SideTable, Target};
use hexlance::core::types::{PlayerId, UnitId};
use hexlance::unit::chassis::{Unit, UnitKind};
use hexlance::unit::location::Location;

fn mek_with_slots(id: u32, owner: u32) -> Unit {
    let mut unit = Unit::new(UnitId(id), PlayerId(owner), UnitKind::Mek, 70.0);
    let mut torso = Location::new("Center Torso");
    torso.add_slot(SlotKind::System(SystemSlot::Engine));
    torso.add_slot(SlotKind::System(SystemSlot::Gyro));
    torso.add_slot(SlotKind::Equipment(0));
    let mut arm = Location::new("Left Arm");
    arm.add_slot(SlotKind::System(SystemSlot::ShoulderActuator));
    arm.add_slot(SlotKind::Equipment(1));
    unit.add_location(torso);
    unit.add_location(arm);
    unit
}

/// A rear attack with armor-piercing ammunition: side table picks the rear
/// arc, the hit record carries the adjusted crit modifier, and the chosen
/// slot becomes unhittable once hit.
#[test]
fn test_rear_attack_with_crit_cascade() {
    let mut attacker = mek_with_slots(1, 0);
    attacker.position = HexCoord::new(0, 3);
    attacker.facing = Facing::North;
    let mut target = mek_with_slots(2, 1);
    target.position = HexCoord::new(0, 0);
    target.facing = Facing::North;

    // Declaration: no called shot, always legal
    assert_eq!(CalledShot::None.check_valid(&target), None);

    let side = side_table(
        &attacker,
        Target::Unit(&target),
        CalledShot::None,
        &FixedMoveSort(Ordering::Equal),
    );
    assert_eq!(side, SideTable::Rear);

    let mut hit = HitData::new(0).rear().with_effect(HitEffect::Critical);
    hit.make_armor_piercing();
    assert_eq!(hit.crit_mod, 1);
    assert!(hit.rear);

    // Crit roll selects the gyro slot
    let addr = SlotAddr::new(hit.location, 1);
    assert!(target.apply_crit(addr));
    let slot = target.location(0).unwrap().slot(1).unwrap();
    assert!(slot.is_hit());
    assert!(slot.is_damaged());
    assert!(!slot.is_hittable());

    // Rerolls can no longer select it
    assert!(!target.hittable_slots().contains(&addr));
    assert!(!target.apply_crit(addr));
}

/// Called-shot flow: an illegal declaration is refused with a reason before
/// any resolution; a legal one shifts the side lookup.
#[test]
fn test_called_shot_gatekeeping_and_rotation() {
    let mut attacker = mek_with_slots(1, 0);
    attacker.position = HexCoord::new(1, -1); // NE of the target
    attacker.facing = Facing::SouthWest;
    let mut target = mek_with_slots(2, 1);
    target.position = HexCoord::new(0, 0);
    target.facing = Facing::North;

    let mut infantry = Unit::new(UnitId(3), PlayerId(1), UnitKind::Infantry, 3.0);
    infantry.position = HexCoord::new(0, 0);
    assert!(CalledShot::Left.check_valid(&infantry).is_some());

    assert_eq!(CalledShot::Left.check_valid(&target), None);
    let plain = side_table(
        &attacker,
        Target::Unit(&target),
        CalledShot::None,
        &FixedMoveSort(Ordering::Equal),
    );
    let aimed_left = side_table(
        &attacker,
        Target::Unit(&target),
        CalledShot::Left,
        &FixedMoveSort(Ordering::Equal),
    );
    assert_eq!(plain, SideTable::Right);
    assert_eq!(aimed_left, SideTable::Front);

    // The resulting hit record carries the aimed flag for damage resolution
    let hit = HitData::new(0).aimed();
    assert!(hit.aimed);
    assert_eq!(hit.effect, HitEffect::None);
}

/// Severing a limb marks every slot missing while the rest of the unit
/// stays targetable; breaching disables without damaging.
#[test]
fn test_location_loss_and_breach_interaction() {
    let mut target = mek_with_slots(2, 1);

    target.location_mut(1).unwrap().blow_off();
    let eligible = target.hittable_slots();
    assert!(eligible.iter().all(|addr| addr.location == 0));
    assert!(target
        .location(1)
        .unwrap()
        .slots()
        .iter()
        .all(|slot| slot.is_missing() && slot.is_damaged()));

    target.location_mut(0).unwrap().breach();
    let torso_slots = target.location(0).unwrap().slots();
    assert!(torso_slots.iter().all(|slot| slot.is_breached()));
    // Breach is not damage: the slots stay repair-intact
    assert!(torso_slots.iter().all(|slot| !slot.is_damaged()));
}

/// The co-located aero scenario: identical inputs must resolve identically,
/// with the tie-break substituting the attacker's prior position.
#[test]
fn test_aero_dogfight_determinism() {
    let shared = HexCoord::new(4, 4);
    let mut attacker = Unit::new(UnitId(1), PlayerId(0), UnitKind::Fighter, 50.0);
    attacker.airborne = true;
    attacker.position = shared;
    attacker.prior_position = shared.translated(Facing::South);
    attacker.facing = Facing::North;

    let mut target = Unit::new(UnitId(2), PlayerId(1), UnitKind::Fighter, 50.0);
    target.airborne = true;
    target.position = shared;
    target.facing = Facing::North;

    let first = side_table(
        &attacker,
        Target::Unit(&target),
        CalledShot::None,
        &FixedMoveSort(Ordering::Greater),
    );
    assert_eq!(first, SideTable::Rear);
    for _ in 0..5 {
        assert_eq!(
            side_table(
                &attacker,
                Target::Unit(&target),
                CalledShot::None,
                &FixedMoveSort(Ordering::Greater),
            ),
            first
        );
    }
}

/// Strafing geometry: an airborne attacker shoots a point target from its
/// entry hex, and the resolver never fails on non-unit targets.
#[test]
fn test_point_target_resolution() {
    let mut attacker = Unit::new(UnitId(1), PlayerId(0), UnitKind::Fighter, 50.0);
    attacker.airborne = true;
    for q in 0..4 {
        attacker.flight_path.push(HexCoord::new(q, 0), Facing::SouthEast);
    }
    attacker.position = HexCoord::new(3, 0);

    let side = side_table(
        &attacker,
        Target::Point(HexCoord::new(2, 0)),
        CalledShot::None,
        &FixedMoveSort(Ordering::Equal),
    );
    assert_eq!(side, SideTable::Front);
}
