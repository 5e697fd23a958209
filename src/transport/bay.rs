//! Transport bay capacity ledger
//!
//! Tracks loadable space, per-turn door throughput, and aerospace recovery
//! slots. Used space is always recomputed from the live footprints of the
//! loaded units: squadrons change size out-of-band, and a running counter
//! would drift.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RulesError};
use crate::core::types::UnitId;
use crate::game::Game;
use crate::transport::kinds::BayKind;
use crate::unit::chassis::Unit;

/// One transport bay aboard a carrier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bay {
    pub kind: BayKind,
    pub total_space: f64,
    doors: u8,
    doors_next: u8,
    loads_this_turn: u8,
    /// Per-slot readiness counters: 0 = ready, n = turns until ready.
    /// Door destruction scraps ready slots two at a time.
    recovery_slots: Vec<u32>,
    loaded: Vec<UnitId>,
}

impl Bay {
    /// Create a bay; recovery slots are fitted per functional door on
    /// recovery-capable kinds
    pub fn new(kind: BayKind, total_space: f64, doors: u8, slots_per_door: u32) -> Self {
        let recovery_slots = if kind.supports_recovery() {
            vec![0; doors as usize * slots_per_door as usize]
        } else {
            Vec::new()
        };
        Self {
            kind,
            total_space,
            doors,
            doors_next: doors,
            loads_this_turn: 0,
            recovery_slots,
            loaded: Vec::new(),
        }
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }

    pub fn loaded(&self) -> &[UnitId] {
        &self.loaded
    }

    /// Recovery slots at full readiness
    pub fn ready_recovery_slots(&self) -> usize {
        self.recovery_slots.iter().filter(|s| **s == 0).count()
    }

    pub fn recovery_slot_count(&self) -> usize {
        self.recovery_slots.len()
    }

    /// Space remaining, recomputed from live footprints
    pub fn unused(&self, game: &Game) -> f64 {
        let used: f64 = self
            .loaded
            .iter()
            .filter_map(|id| game.unit(*id))
            .map(|unit| self.kind.footprint(unit))
            .sum();
        (self.total_space - used).max(0.0)
    }

    /// May this unit be loaded right now? Units already aboard are refused;
    /// a second load would double-count their footprint.
    pub fn can_load(&self, unit: &Unit, game: &Game) -> bool {
        !self.loaded.contains(&unit.id)
            && self.kind.eligible(unit)
            && self.unused(game) >= self.kind.footprint(unit)
            && (self.loads_this_turn as usize) < self.doors as usize
    }

    /// Load a unit; the bay is unmodified on failure
    pub fn load(&mut self, unit: &Unit, game: &Game) -> Result<()> {
        if !self.can_load(unit, game) {
            return Err(RulesError::InvalidLoad(format!(
                "{} cannot take unit {}",
                self.kind.name(),
                unit.id.0
            )));
        }
        self.loaded.push(unit.id);
        self.loads_this_turn += 1;
        tracing::debug!(bay = self.kind.name(), unit = unit.id.0, "unit loaded");
        Ok(())
    }

    /// Unload a unit; false if it was not aboard
    pub fn unload(&mut self, unit_id: UnitId) -> bool {
        let before = self.loaded.len();
        self.loaded.retain(|id| *id != unit_id);
        self.loaded.len() < before
    }

    /// Mid-game aerospace recovery: a load that also occupies one ready
    /// recovery slot
    ///
    /// Rejected during deployment (pre-game loading uses `load`) and when no
    /// slot is ready. The bay is unmodified on failure.
    pub fn recover(&mut self, unit: &Unit, game: &Game) -> Result<()> {
        if game.phase.is_deployment() {
            return Err(RulesError::InvalidLoad(
                "recovery is not available during deployment".into(),
            ));
        }
        if !self.can_load(unit, game) {
            return Err(RulesError::InvalidLoad(format!(
                "{} cannot recover unit {}",
                self.kind.name(),
                unit.id.0
            )));
        }
        let slot = self
            .recovery_slots
            .iter_mut()
            .find(|s| **s == 0)
            .ok_or_else(|| RulesError::InvalidLoad("no recovery slot ready".into()))?;
        *slot = game.options.recovery_delay;
        self.loaded.push(unit.id);
        self.loads_this_turn += 1;
        tracing::debug!(bay = self.kind.name(), unit = unit.id.0, "unit recovered");
        Ok(())
    }

    /// Destroy a door immediately
    ///
    /// Also scraps up to two ready recovery slots; busy slots and missing
    /// slots never go negative.
    pub fn destroy_door(&mut self) {
        if self.doors > 0 {
            self.doors -= 1;
        }
        self.doors_next = self.doors_next.min(self.doors);
        self.scrap_ready_slots(2);
        tracing::debug!(bay = self.kind.name(), doors = self.doors, "door destroyed");
    }

    /// Destroy a door effective at end of turn (this turn's throughput keeps
    /// the door)
    pub fn destroy_door_next(&mut self) {
        self.doors_next = self.doors_next.saturating_sub(1);
        self.scrap_ready_slots(2);
    }

    fn scrap_ready_slots(&mut self, mut count: usize) {
        self.recovery_slots.retain(|slot| {
            if count > 0 && *slot == 0 {
                count -= 1;
                false
            } else {
                true
            }
        });
    }

    /// End-of-turn housekeeping: apply deferred door loss, reset per-turn
    /// throughput, tick busy recovery slots toward ready
    pub fn end_of_turn(&mut self) {
        self.doors = self.doors_next;
        self.loads_this_turn = 0;
        for slot in &mut self.recovery_slots {
            *slot = slot.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameOptions;
    use crate::core::types::PlayerId;
    use crate::game::GamePhase;
    use crate::unit::chassis::UnitKind;

    fn game_with_tanks(count: u32, tonnage: f64) -> Game {
        let mut game = Game::new(GameOptions::default());
        game.add_player(PlayerId(0), "Carrier Owner");
        for i in 0..count {
            game.add_unit(Unit::new(
                UnitId(i + 1),
                PlayerId(0),
                UnitKind::Tank,
                tonnage,
            ));
        }
        game
    }

    #[test]
    fn test_heavy_vehicle_bay_scenario() {
        // totalSpace 200, two doors: two 100-ton tanks fill it
        let game = game_with_tanks(3, 100.0);
        let mut bay = Bay::new(BayKind::HeavyVehicle, 200.0, 2, 0);

        assert_eq!(bay.unused(&game), 200.0);
        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.unused(&game), 100.0);
        bay.load(game.unit(UnitId(2)).unwrap(), &game).unwrap();
        assert_eq!(bay.unused(&game), 0.0);

        let third = game.unit(UnitId(3)).unwrap();
        assert!(!bay.can_load(third, &game));
        assert!(bay.load(third, &game).is_err());
        // State unchanged by the failed load
        assert_eq!(bay.unused(&game), 0.0);
        assert_eq!(bay.loaded().len(), 2);
    }

    #[test]
    fn test_door_throughput_limits_loads_per_turn() {
        let game = game_with_tanks(3, 50.0);
        let mut bay = Bay::new(BayKind::HeavyVehicle, 1000.0, 2, 0);

        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        bay.load(game.unit(UnitId(2)).unwrap(), &game).unwrap();
        // Plenty of space, but both doors are busy this turn
        assert!(bay.load(game.unit(UnitId(3)).unwrap(), &game).is_err());

        bay.end_of_turn();
        bay.load(game.unit(UnitId(3)).unwrap(), &game).unwrap();
    }

    #[test]
    fn test_unload_restores_space() {
        let game = game_with_tanks(1, 80.0);
        let mut bay = Bay::new(BayKind::HeavyVehicle, 100.0, 1, 0);
        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.unused(&game), 20.0);
        assert!(bay.unload(UnitId(1)));
        assert_eq!(bay.unused(&game), 100.0);
        assert!(!bay.unload(UnitId(1)));
    }

    fn game_with_fighters(count: u32) -> Game {
        let mut game = Game::new(GameOptions::default());
        game.add_player(PlayerId(0), "Carrier Owner");
        for i in 0..count {
            let mut fighter = Unit::new(UnitId(i + 1), PlayerId(0), UnitKind::Fighter, 50.0);
            fighter.airborne = true;
            game.add_unit(fighter);
        }
        game.phase = GamePhase::Movement;
        game
    }

    #[test]
    fn test_recover_consumes_ready_slot() {
        let game = game_with_fighters(2);
        let mut bay = Bay::new(BayKind::Fighter, 10.0, 2, 2);
        assert_eq!(bay.ready_recovery_slots(), 4);

        bay.recover(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.ready_recovery_slots(), 3);

        // Slot readiness decays back over recovery_delay turns
        for _ in 0..game.options.recovery_delay {
            bay.end_of_turn();
        }
        assert_eq!(bay.ready_recovery_slots(), 4);
    }

    #[test]
    fn test_recover_rejected_during_deployment() {
        let mut game = game_with_fighters(1);
        game.phase = GamePhase::Deployment;
        let mut bay = Bay::new(BayKind::Fighter, 10.0, 2, 2);
        assert!(bay.recover(game.unit(UnitId(1)).unwrap(), &game).is_err());
        assert!(bay.loaded().is_empty());
    }

    #[test]
    fn test_recover_rejected_without_ready_slot() {
        let game = game_with_fighters(2);
        let mut bay = Bay::new(BayKind::Fighter, 10.0, 2, 0);
        assert!(bay.recover(game.unit(UnitId(1)).unwrap(), &game).is_err());
        // Plain loading is still allowed without recovery gear ready
        assert!(bay.load(game.unit(UnitId(1)).unwrap(), &game).is_ok());
    }

    #[test]
    fn test_unit_aboard_cannot_load_again() {
        let game = game_with_fighters(1);
        let mut bay = Bay::new(BayKind::Fighter, 5.0, 2, 0);
        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.unused(&game), 4.0);

        // The ledger holds one entry per physical unit
        assert!(bay.load(game.unit(UnitId(1)).unwrap(), &game).is_err());
        assert!(bay.recover(game.unit(UnitId(1)).unwrap(), &game).is_err());
        assert_eq!(bay.loaded().len(), 1);
        assert_eq!(bay.unused(&game), 4.0);

        // One unload fully releases the unit and its space
        assert!(bay.unload(UnitId(1)));
        assert!(bay.loaded().is_empty());
        assert_eq!(bay.unused(&game), 5.0);
    }

    #[test]
    fn test_destroy_door_scraps_two_ready_slots() {
        let mut bay = Bay::new(BayKind::Fighter, 10.0, 2, 2);
        assert_eq!(bay.recovery_slot_count(), 4);

        bay.destroy_door();
        assert_eq!(bay.doors(), 1);
        assert_eq!(bay.recovery_slot_count(), 2);

        bay.destroy_door();
        assert_eq!(bay.doors(), 0);
        assert_eq!(bay.recovery_slot_count(), 0);

        // Nothing left to scrap: never negative, never an error
        bay.destroy_door();
        assert_eq!(bay.doors(), 0);
        assert_eq!(bay.recovery_slot_count(), 0);
    }

    #[test]
    fn test_destroy_door_skips_busy_slots() {
        let game = game_with_fighters(1);
        let mut bay = Bay::new(BayKind::Fighter, 10.0, 1, 2);
        bay.recover(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.ready_recovery_slots(), 1);

        bay.destroy_door();
        // Only the one ready slot is scrapped; the busy slot survives
        assert_eq!(bay.recovery_slot_count(), 1);
        assert_eq!(bay.ready_recovery_slots(), 0);
    }

    #[test]
    fn test_destroy_door_next_defers_door_loss() {
        let game = game_with_tanks(2, 50.0);
        let mut bay = Bay::new(BayKind::HeavyVehicle, 1000.0, 1, 0);

        bay.destroy_door_next();
        // Door still functional this turn
        assert_eq!(bay.doors(), 1);
        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();

        bay.end_of_turn();
        assert_eq!(bay.doors(), 0);
        assert!(bay.load(game.unit(UnitId(2)).unwrap(), &game).is_err());
    }

    #[test]
    fn test_squadron_shrink_frees_space_live() {
        let mut game = Game::new(GameOptions::default());
        game.add_player(PlayerId(0), "Carrier Owner");
        let mut squadron = Unit::new(UnitId(1), PlayerId(0), UnitKind::Fighter, 45.0);
        squadron.fighter_count = 6;
        game.add_unit(squadron);
        game.phase = GamePhase::Movement;

        let mut bay = Bay::new(BayKind::Fighter, 6.0, 2, 2);
        bay.load(game.unit(UnitId(1)).unwrap(), &game).unwrap();
        assert_eq!(bay.unused(&game), 0.0);

        // Squadron loses two members out-of-band; space reappears
        game.unit_mut(UnitId(1)).unwrap().fighter_count = 4;
        assert_eq!(bay.unused(&game), 2.0);
    }
}
