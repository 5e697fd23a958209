//! Enclosing game state: players, unit registry, phase, turn queue
//!
//! This is the thin collaborator the validity checks and capacity ledgers
//! need, not the full game server. One writer at a time; the simulation is
//! strictly turn-sequential.

pub mod events;

pub use events::{EventLog, GameEvent, GameEventKind};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::GameOptions;
use crate::core::error::{Result, RulesError};
use crate::core::types::{PlayerId, Team, Tick, UnitId};
use crate::turn::game_turn::GameTurn;
use crate::turn::queue::TurnQueue;
use crate::unit::chassis::Unit;

/// Phases of one game turn, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Deployment,
    Initiative,
    Movement,
    Firing,
    Physical,
    End,
}

impl GamePhase {
    pub fn is_deployment(&self) -> bool {
        matches!(self, GamePhase::Deployment)
    }
}

/// One player in the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: Option<Team>,
}

/// Complete rules-engine game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub options: GameOptions,
    pub phase: GamePhase,
    pub tick: Tick,
    pub turn_queue: TurnQueue,
    pub log: EventLog,
    players: Vec<Player>,
    units: AHashMap<UnitId, Unit>,
}

impl Game {
    pub fn new(options: GameOptions) -> Self {
        Self {
            options,
            phase: GamePhase::default(),
            tick: 0,
            turn_queue: TurnQueue::new(),
            log: EventLog::new(),
            players: Vec::new(),
            units: AHashMap::new(),
        }
    }

    // === Players ===

    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) {
        self.players.push(Player {
            id,
            name: name.into(),
            team: None,
        });
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Remove a departing player along with every turn still owed to them
    ///
    /// Their units stay on the board; only the pending turns go.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(RulesError::PlayerNotFound(id))?;
        let player = self.players.remove(index);
        let removed = self.turn_queue.remove_player_turns(id);
        tracing::debug!(player = id.0, turns_removed = removed, "player removed");
        Ok(player)
    }

    // === Units ===

    pub fn add_unit(&mut self, unit: Unit) {
        self.units.insert(unit.id, unit);
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units.values().filter(move |u| u.owner == player)
    }

    /// Take a unit out of the registry entirely (salvage, retreat off-map)
    pub fn remove_unit(&mut self, id: UnitId) -> Result<Unit> {
        self.units.remove(&id).ok_or(RulesError::UnitNotFound(id))
    }

    // === Phase and turns ===

    /// Enter a phase with a freshly built turn queue
    pub fn start_phase(&mut self, phase: GamePhase, turns: Vec<GameTurn>) {
        self.phase = phase;
        self.turn_queue = TurnQueue::from_ordered(turns);
        self.log.push(
            GameEventKind::PhaseStarted { phase },
            format!("{:?} phase begins", phase),
            self.tick,
        );
    }

    /// Submit `unit_id` as acting on the current turn
    ///
    /// On success the turn is consumed and the unit marked done; on failure
    /// the queue is untouched and the caller re-prompts the player.
    pub fn consume_turn(&mut self, unit_id: UnitId) -> Option<GameTurn> {
        let mut queue = std::mem::take(&mut self.turn_queue);
        let consumed = self
            .units
            .get(&unit_id)
            .and_then(|unit| queue.consume(unit, self));
        self.turn_queue = queue;

        if let Some(turn) = consumed {
            if let Some(unit) = self.units.get_mut(&unit_id) {
                unit.done = true;
            }
            self.log.push(
                GameEventKind::TurnConsumed {
                    player: turn.player,
                    unit: unit_id,
                },
                format!("unit {} acted for player {}", unit_id.0, turn.player.0),
                self.tick,
            );
        }
        consumed
    }

    /// Phase is over when no turns remain
    pub fn phase_done(&self) -> bool {
        self.turn_queue.is_empty()
    }

    /// End-of-turn housekeeping: clear done flags and flight paths,
    /// advance the tick
    pub fn end_turn(&mut self) {
        for unit in self.units.values_mut() {
            unit.done = false;
            unit.flight_path.clear();
        }
        self.tick += 1;
    }

    pub fn log_event(&mut self, kind: GameEventKind, description: String) {
        self.log.push(kind, description, self.tick);
    }
}
