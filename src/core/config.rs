//! Game option flags and tuning constants
//!
//! All rule toggles and magic numbers are collected here with explanations of
//! their purpose and how they interact with each other.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RulesError};

/// Optional-rule toggles and pacing constants for a game
///
/// These mirror the tournament option sheet: deferred movement for infantry and
/// ProtoMeks, even-turn balancing, and aerospace recovery pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOptions {
    // === AEROSPACE RECOVERY ===
    /// Turns a recovery slot stays busy after a mid-game docking
    ///
    /// Pre-game loading is unconstrained by this; only `recover` consumes a
    /// slot. At the default (5), a bay that recovers a fighter cannot reuse
    /// that slot for five end-of-turn ticks.
    pub recovery_delay: u32,

    /// Recovery slots granted per functional door at setup
    ///
    /// Door destruction removes ready slots two at a time, so larger values
    /// soften the impact of losing a door mid-game.
    pub recovery_slots_per_door: u32,

    // === MOVEMENT TURN CATEGORIES ===
    /// Infantry declare movement only after all other units (deferred)
    pub infantry_move_later: bool,

    /// Infantry turns are interleaved evenly across the turn order
    pub infantry_move_even: bool,

    /// Infantry move in multi-unit groups instead of one turn each
    pub infantry_move_multi: bool,

    /// ProtoMeks declare movement only after all other units (deferred)
    pub protomek_move_later: bool,

    /// ProtoMek turns are interleaved evenly across the turn order
    pub protomek_move_even: bool,

    /// ProtoMeks move in multi-unit groups instead of one turn each
    pub protomek_move_multi: bool,

    /// Units consumed per multi-unit turn when a move-multi option is on
    ///
    /// A side with 7 infantry platoons and a group size of 4 gets two
    /// multi-turns (4 + 3).
    pub move_multi_group: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            recovery_delay: 5,
            recovery_slots_per_door: 2,
            infantry_move_later: false,
            infantry_move_even: false,
            infantry_move_multi: false,
            protomek_move_later: false,
            protomek_move_even: false,
            protomek_move_multi: false,
            move_multi_group: 4,
        }
    }
}

impl GameOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: GameOptions = toml::from_str(content)?;
        Ok(options)
    }

    /// Load options from a TOML file on disk
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate option combinations for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.recovery_delay == 0 {
            return Err(RulesError::InvalidOptions(
                "recovery_delay must be at least 1 turn".into(),
            ));
        }

        if self.move_multi_group == 0 {
            return Err(RulesError::InvalidOptions(
                "move_multi_group must be at least 1".into(),
            ));
        }

        // A unit class can defer OR interleave, not both
        if self.infantry_move_later && self.infantry_move_even {
            return Err(RulesError::InvalidOptions(
                "infantry_move_later and infantry_move_even are mutually exclusive".into(),
            ));
        }
        if self.protomek_move_later && self.protomek_move_even {
            return Err(RulesError::InvalidOptions(
                "protomek_move_later and protomek_move_even are mutually exclusive".into(),
            ));
        }

        Ok(())
    }
}
