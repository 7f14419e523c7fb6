//! Error types for vehicle construction, configuration, and dispatch.

use thiserror::Error;

use crate::models::VehicleId;

/// Errors raised while constructing or mutating a vehicle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VehicleError {
    /// A car was built without a plate identifier.
    #[error("car requires a plate identifier")]
    MissingPlateId,
    /// A location name outside the fixed location set.
    #[error("invalid location `{value}`; expected one of: In garage, On route")]
    InvalidLocation {
        /// The rejected value.
        value: String,
    },
}

/// Errors raised by [`DispatchService`](crate::dispatch::DispatchService).
///
/// Running out of suitable vehicles is not an error; it is reported through
/// the service's error log instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// A request field was negative or not a finite number.
    #[error("delivery request field `{field}` must be a finite, non-negative number, got {value}")]
    InvalidRequest {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// Dispatch was called without a vehicle.
    #[error("vehicle should be present")]
    MissingVehicle,
    /// The vehicle id is not known to the registry.
    #[error("vehicle {0} is not registered")]
    UnknownVehicle(VehicleId),
}

/// Errors raised while validating a [`FleetConfig`](crate::fleet::FleetConfig).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A class constant was zero, negative, or not finite.
    #[error("fleet parameter `{name}` must be finite and positive, got {value}")]
    InvalidParameter {
        /// Dotted parameter path, e.g. `bicycle.capacity`.
        name: &'static str,
        /// Value found in the configuration.
        value: f64,
    },
}
