//! Core type definitions used throughout the rules engine

use serde::{Deserialize, Serialize};

/// Unique identifier for units (stable within a game, assigned sequentially)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Team assignment for a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(pub u8);

/// Lance/group tag shared by units that move together under multi-unit rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitNumber(pub u16);

/// Game turn counter (one full phase cycle per turn)
pub type Tick = u64;

/// Weight classification derived from tonnage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    Light,
    Medium,
    Heavy,
    Assault,
}

impl WeightClass {
    /// Classify a unit by its tonnage
    pub fn from_tonnage(tons: f64) -> Self {
        if tons <= 35.0 {
            WeightClass::Light
        } else if tons <= 55.0 {
            WeightClass::Medium
        } else if tons <= 75.0 {
            WeightClass::Heavy
        } else {
            WeightClass::Assault
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_id_equality() {
        let a = UnitId(1);
        let b = UnitId(1);
        let c = UnitId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_unit_id_hash() {
        use std::collections::HashMap;
        let mut map: HashMap<UnitId, &str> = HashMap::new();
        map.insert(UnitId(7), "atlas");
        assert_eq!(map.get(&UnitId(7)), Some(&"atlas"));
    }

    #[test]
    fn test_weight_class_boundaries() {
        assert_eq!(WeightClass::from_tonnage(20.0), WeightClass::Light);
        assert_eq!(WeightClass::from_tonnage(35.0), WeightClass::Light);
        assert_eq!(WeightClass::from_tonnage(40.0), WeightClass::Medium);
        assert_eq!(WeightClass::from_tonnage(75.0), WeightClass::Heavy);
        assert_eq!(WeightClass::from_tonnage(100.0), WeightClass::Assault);
    }

    #[test]
    fn test_weight_class_ordering() {
        assert!(WeightClass::Assault > WeightClass::Heavy);
        assert!(WeightClass::Heavy > WeightClass::Medium);
        assert!(WeightClass::Medium > WeightClass::Light);
    }
}
