//! Game event log
//!
//! A readable record of rule outcomes for reports and replays, separate from
//! tracing diagnostics.

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, Tick, UnitId};
use crate::game::GamePhase;

/// Log entry for one rules outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub tick: Tick,
    pub kind: GameEventKind,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEventKind {
    PhaseStarted { phase: GamePhase },
    PhaseEnded { phase: GamePhase },
    TurnConsumed { player: PlayerId, unit: UnitId },
    CritApplied { unit: UnitId },
    LocationSevered { unit: UnitId },
    LocationBreached { unit: UnitId },
    UnitLoaded { carrier: UnitId, cargo: UnitId },
    UnitUnloaded { carrier: UnitId, cargo: UnitId },
    UnitRecovered { carrier: UnitId, cargo: UnitId },
    DoorDestroyed { carrier: UnitId },
    UnitDestroyed { unit: UnitId },
}

/// Ordered event record for a game
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: GameEventKind, description: String, tick: Tick) {
        self.events.push(GameEvent {
            tick,
            kind,
            description,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
