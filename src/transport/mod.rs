//! Transport bays: capacity ledgers for unit-carrying space

pub mod bay;
pub mod kinds;

pub use bay::Bay;
pub use kinds::BayKind;
