//! Domain model types for delivery dispatch.
//!
//! Provides the vehicle classes with their shared capability record, the
//! location states, delivery requests, and the per-class attribute tables
//! used for name-based queries.

mod attribute;
mod location;
mod request;
mod vehicle;

pub use attribute::{Accessor, AttributeValue, VehicleClass};
pub use location::Location;
pub use request::DeliveryRequest;
pub(crate) use vehicle::check_plate;
pub use vehicle::{Bicycle, Car, Vehicle, VehicleCore, VehicleId, VehicleSnapshot, VehicleType};
