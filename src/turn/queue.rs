//! The ordered turn queue for one phase
//!
//! Built at phase start from force composition, consumed front-to-back as
//! players act. The front entry is the single current turn; the phase ends
//! when the queue empties.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::types::PlayerId;
use crate::game::Game;
use crate::turn::game_turn::GameTurn;
use crate::unit::chassis::Unit;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnQueue {
    turns: VecDeque<GameTurn>,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from an externally ordered turn list (the initiative
    /// generator owns the interleaving)
    pub fn from_ordered(turns: Vec<GameTurn>) -> Self {
        Self {
            turns: turns.into(),
        }
    }

    pub fn push(&mut self, turn: GameTurn) {
        self.turns.push_back(turn);
    }

    /// Insert a turn at the front, pre-empting the current one
    ///
    /// Used for interrupt turns such as counter-grapples.
    pub fn push_front(&mut self, turn: GameTurn) {
        self.turns.push_front(turn);
    }

    /// The single current turn, if the phase is still running
    pub fn current(&self) -> Option<&GameTurn> {
        self.turns.front()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Empty queue means the phase is over
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Consume the current turn with `unit` acting
    ///
    /// Returns the consumed turn when the unit satisfies it; otherwise the
    /// queue is untouched and the caller rejects the submitted action.
    pub fn consume(&mut self, unit: &Unit, game: &Game) -> Option<GameTurn> {
        let current = self.turns.front()?;
        if !current.is_valid_entity(unit, game, false) {
            return None;
        }
        let consumed = self.turns.pop_front();
        if let Some(turn) = consumed {
            tracing::debug!(player = turn.player.0, unit = unit.id.0, "turn consumed");
        }
        consumed
    }

    /// Drop every remaining turn of a departed player; returns removed count
    pub fn remove_player_turns(&mut self, player: PlayerId) -> usize {
        let before = self.turns.len();
        self.turns.retain(|turn| turn.player != player);
        before - self.turns.len()
    }
}
