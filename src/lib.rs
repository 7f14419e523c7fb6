//! # u-dispatch
//!
//! Delivery fleet dispatch: picks the best available vehicle for a parcel
//! given its weight and travel distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vehicle, Bicycle, Car, Location, DeliveryRequest)
//! - [`capability`] — Uniform resolution of optional capabilities (effective range)
//! - [`registry`] — Append-only vehicle registry with attribute-generic queries
//! - [`dispatch`] — Tightest-fit matching and dispatch with an error log
//! - [`fleet`] — Class constants and random fleet generation
//! - [`error`] — Error types

pub mod capability;
pub mod dispatch;
pub mod error;
pub mod fleet;
pub mod models;
pub mod registry;
