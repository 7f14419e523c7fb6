//! Fleet configuration and generation.
//!
//! - [`FleetConfig`] — class constants and fleet sizing
//! - [`generate_fleet`] — random car count plus a fixed bicycle count
//! - [`PlateSource`] — plate identifier collaborator for new cars

mod config;
mod generator;

pub use config::{BicycleSpec, CarSpec, FleetConfig};
pub use generator::{generate_fleet, PlateSource, RandomPlates};
