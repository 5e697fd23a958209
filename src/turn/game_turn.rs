//! Game turns: one required player action within a phase
//!
//! A turn names the player who must act and, for the constrained variants,
//! which unit or unit group may satisfy it. Turn objects never reject by
//! panicking; validity checks return bool and the caller refuses the action.

use serde::{Deserialize, Serialize};

use crate::core::types::{PlayerId, UnitId, UnitNumber};
use crate::game::Game;
use crate::unit::chassis::{Unit, UnitKind};

/// Variant-specific constraint carried by a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnConstraint {
    /// Any eligible unit of the player
    Any,
    /// Only the named unit (forced follow-up actions)
    Specific(UnitId),
    /// Only the named unit, evaluated as if it had not yet acted this round
    ///
    /// The grappled unit may already be marked done from the grapple that
    /// triggered this turn, yet must still be allowed to counter-attack.
    CounterGrapple(UnitId),
    /// Only units sharing a unit-number group tag (lance/group movement)
    UnitGroup(UnitNumber),
}

/// One required player action within a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTurn {
    pub player: PlayerId,
    pub constraint: TurnConstraint,
}

impl GameTurn {
    pub fn any(player: PlayerId) -> Self {
        Self {
            player,
            constraint: TurnConstraint::Any,
        }
    }

    pub fn specific(player: PlayerId, unit: UnitId) -> Self {
        Self {
            player,
            constraint: TurnConstraint::Specific(unit),
        }
    }

    pub fn counter_grapple(player: PlayerId, unit: UnitId) -> Self {
        Self {
            player,
            constraint: TurnConstraint::CounterGrapple(unit),
        }
    }

    pub fn unit_group(player: PlayerId, group: UnitNumber) -> Self {
        Self {
            player,
            constraint: TurnConstraint::UnitGroup(group),
        }
    }

    /// Coarse player-only check, used before a unit has been chosen
    pub fn is_valid(&self, player: PlayerId, game: &Game) -> bool {
        self.player == player && game.player(player).is_some()
    }

    /// Full check: may `unit` satisfy this turn?
    ///
    /// `use_non_infantry_check` additionally excludes unit classes whose
    /// movement is deferred to a later stage of the phase by game options.
    pub fn is_valid_entity(&self, unit: &Unit, game: &Game, use_non_infantry_check: bool) -> bool {
        let (constraint_ok, ignore_done) = match self.constraint {
            TurnConstraint::Any => (true, false),
            TurnConstraint::Specific(id) => (unit.id == id, false),
            TurnConstraint::CounterGrapple(id) => (unit.id == id, true),
            TurnConstraint::UnitGroup(group) => (unit.unit_number == Some(group), false),
        };
        constraint_ok && self.base_eligibility(unit, game, use_non_infantry_check, ignore_done)
    }

    fn base_eligibility(
        &self,
        unit: &Unit,
        game: &Game,
        use_non_infantry_check: bool,
        ignore_done: bool,
    ) -> bool {
        if unit.owner != self.player || !unit.is_selectable() {
            return false;
        }
        if unit.done && !ignore_done {
            return false;
        }
        if use_non_infantry_check {
            let opts = &game.options;
            if unit.kind == UnitKind::Infantry && opts.infantry_move_later {
                return false;
            }
            if unit.kind == UnitKind::ProtoMek && opts.protomek_move_later {
                return false;
            }
        }
        true
    }
}
