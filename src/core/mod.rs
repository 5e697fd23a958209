pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use config::GameOptions;
pub use dice::{DiceRoller, ScriptedDice, SeededDice};
pub use error::{Result, RulesError};
pub use types::{PlayerId, Team, Tick, UnitId, UnitNumber, WeightClass};
