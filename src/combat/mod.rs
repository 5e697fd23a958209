//! Combat resolution: hit sides, hit records, critical slots

pub mod critical;
pub mod hit;
pub mod side_table;

pub use critical::{CriticalSlot, SlotAddr, SlotKind, SystemSlot};
pub use hit::{CalledShot, HitData, HitEffect};
pub use side_table::{
    side_from_attack_position, side_table, FixedMoveSort, MoveSort, SideTable, Target,
};
