//! Board geometry: hex coordinates and facings

pub mod hex;

pub use hex::{Facing, HexCoord};
