//! Turn scheduling: who must act next within a phase

pub mod counts;
pub mod game_turn;
pub mod queue;

pub use counts::{category_of, TurnCategory, TurnCounts};
pub use game_turn::{GameTurn, TurnConstraint};
pub use queue::TurnQueue;
