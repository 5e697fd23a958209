//! Scripted skirmish driver
//!
//! Runs a small two-player engagement end to end: turn tally, movement
//! phase, a side-table resolution, a critical hit, and a bay recovery.
//! Useful for eyeballing the rules engine with RUST_LOG=debug.

use std::cmp::Ordering;

use hexlance::board::hex::{Facing, HexCoord};
use hexlance::combat::critical::{SlotKind, SystemSlot};
use hexlance::combat::hit::{CalledShot, HitData};
use hexlance::combat::side_table::{side_table, FixedMoveSort, Target};
use hexlance::core::config::GameOptions;
use hexlance::core::dice::{DiceRoller, SeededDice};
use hexlance::core::types::{PlayerId, UnitId};
use hexlance::game::{Game, GameEventKind, GamePhase};
use hexlance::transport::bay::Bay;
use hexlance::transport::kinds::BayKind;
use hexlance::turn::counts::TurnCounts;
use hexlance::turn::game_turn::GameTurn;
use hexlance::unit::chassis::{Unit, UnitKind};
use hexlance::unit::location::Location;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting scripted skirmish");

    let options = GameOptions::default();
    if let Err(reason) = options.validate() {
        tracing::error!("bad options: {}", reason);
        return;
    }

    let mut game = Game::new(options);
    game.add_player(PlayerId(0), "Defender");
    game.add_player(PlayerId(1), "Raider");

    // Defender: a heavy Mek with a torso crit arena
    let mut mek = Unit::new(UnitId(1), PlayerId(0), UnitKind::Mek, 75.0);
    let mut torso = Location::new("Center Torso");
    torso.add_slot(SlotKind::System(SystemSlot::Engine));
    torso.add_slot(SlotKind::System(SystemSlot::Gyro));
    torso.add_slot(SlotKind::Equipment(0));
    mek.add_location(torso);
    mek.position = HexCoord::new(0, 0);
    mek.facing = Facing::North;
    game.add_unit(mek);

    // Raider: a fighter strafing in from the west
    let mut fighter = Unit::new(UnitId(2), PlayerId(1), UnitKind::Fighter, 50.0);
    fighter.airborne = true;
    for q in -3..=2 {
        fighter.flight_path.push(HexCoord::new(q, 0), Facing::SouthEast);
    }
    fighter.position = HexCoord::new(2, 0);
    fighter.facing = Facing::SouthEast;
    game.add_unit(fighter);

    // Movement phase: one turn each, raider first
    let counts: Vec<TurnCounts> = game
        .players()
        .iter()
        .map(|p| TurnCounts::tally(game.units_of(p.id), &game.options))
        .collect();
    for (player, count) in game.players().iter().zip(&counts) {
        tracing::info!(
            player = %player.name,
            turns = count.total_turns(&game.options),
            "turn tally"
        );
    }

    game.start_phase(
        GamePhase::Movement,
        vec![GameTurn::any(PlayerId(1)), GameTurn::any(PlayerId(0))],
    );
    game.consume_turn(UnitId(2));
    game.consume_turn(UnitId(1));
    assert!(game.phase_done());

    // Firing phase: strafing run against the Mek
    let attacker = game.unit(UnitId(2)).unwrap();
    let target = game.unit(UnitId(1)).unwrap();
    let side = side_table(
        attacker,
        Target::Unit(target),
        CalledShot::None,
        &FixedMoveSort(Ordering::Equal),
    );
    tracing::info!(?side, "strafing run resolves");

    // Scripted crit: roll a slot, apply it
    let mut dice = SeededDice::new(1251);
    let eligible = game.unit(UnitId(1)).unwrap().hittable_slots();
    let pick = eligible[(dice.d6() as usize - 1) % eligible.len()];
    let mut hit = HitData::new(pick.location);
    hit.make_glancing_blow();
    let applied = game.unit_mut(UnitId(1)).unwrap().apply_crit(pick);
    if applied {
        game.log_event(
            GameEventKind::CritApplied { unit: UnitId(1) },
            format!("critical hit in location {}", pick.location),
        );
    }
    tracing::info!(applied, crit_mod = hit.crit_mod, "critical hit resolved");

    // End phase: the fighter recovers aboard a friendly dock
    game.phase = GamePhase::End;
    let mut bay = Bay::new(BayKind::Fighter, 6.0, 2, game.options.recovery_slots_per_door);
    let fighter = game.unit(UnitId(2)).unwrap();
    match bay.recover(fighter, &game) {
        Ok(()) => {
            game.log_event(
                GameEventKind::UnitRecovered {
                    carrier: UnitId(3),
                    cargo: UnitId(2),
                },
                "fighter recovered aboard the dropship".into(),
            );
            tracing::info!(ready_slots = bay.ready_recovery_slots(), "fighter recovered");
        }
        Err(err) => tracing::error!("recovery failed: {}", err),
    }

    game.end_turn();
    tracing::info!(events = game.log.len(), tick = game.tick, "skirmish complete");
}
