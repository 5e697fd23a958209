//! Hexlance - Turn-Based Hex Wargame Rules Engine

pub mod board;
pub mod combat;
pub mod core;
pub mod game;
pub mod transport;
pub mod turn;
pub mod unit;
