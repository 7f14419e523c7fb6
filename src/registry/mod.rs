//! Append-only vehicle registry.
//!
//! The registry owns every vehicle created during its lifetime and indexes
//! them per class. It is created at service startup (or per test), handed to
//! whatever needs to create vehicles, and dropped with its owner. Vehicles are
//! never removed.

mod store;

pub use store::VehicleRegistry;
