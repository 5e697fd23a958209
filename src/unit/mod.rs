//! Unit model: chassis data, body locations, flight paths

pub mod chassis;
pub mod flight_path;
pub mod location;

pub use chassis::{Unit, UnitKind};
pub use flight_path::{FlightPath, Waypoint};
pub use location::Location;
