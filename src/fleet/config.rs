//! Fleet-wide class constants.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Construction parameters shared by every bicycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BicycleSpec {
    /// Maximum parcel weight.
    pub capacity: f64,
    /// Distance per time unit.
    pub speed: f64,
    /// Maximum one-way distance.
    pub range_limit: f64,
    /// Flat cost of one delivery.
    pub delivery_cost: f64,
}

impl Default for BicycleSpec {
    fn default() -> Self {
        Self {
            capacity: 10.0,
            speed: 10.0,
            range_limit: 30.0,
            delivery_cost: 20.0,
        }
    }
}

/// Construction parameters shared by every car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarSpec {
    /// Maximum parcel weight.
    pub capacity: f64,
    /// Distance per time unit.
    pub speed: f64,
    /// Flat cost of one delivery.
    pub delivery_cost: f64,
}

impl Default for CarSpec {
    fn default() -> Self {
        Self {
            capacity: 100.0,
            speed: 50.0,
            delivery_cost: 100.0,
        }
    }
}

/// Class constants plus fleet sizing.
///
/// Missing fields fall back to the defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_dispatch::fleet::FleetConfig;
///
/// let config = FleetConfig::default();
/// assert_eq!(config.bicycle.capacity, 10.0);
/// assert_eq!(config.car.capacity, 100.0);
/// assert_eq!(config.max_class_capacity(), 100.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    /// Bicycle class constants.
    pub bicycle: BicycleSpec,
    /// Car class constants.
    pub car: CarSpec,
    /// Bicycles created by fleet generation.
    pub bicycle_count: usize,
    /// Exclusive upper bound on the random car count.
    pub max_car_count: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            bicycle: BicycleSpec::default(),
            car: CarSpec::default(),
            bicycle_count: 10,
            max_car_count: 10,
        }
    }
}

impl FleetConfig {
    /// Checks that every class constant is finite and positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("bicycle.capacity", self.bicycle.capacity),
            ("bicycle.speed", self.bicycle.speed),
            ("bicycle.range_limit", self.bicycle.range_limit),
            ("bicycle.delivery_cost", self.bicycle.delivery_cost),
            ("car.capacity", self.car.capacity),
            ("car.speed", self.car.speed),
            ("car.delivery_cost", self.car.delivery_cost),
        ];
        for (name, value) in params {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Largest capacity of any vehicle class, whether or not such a
    /// vehicle exists in a given fleet.
    pub fn max_class_capacity(&self) -> f64 {
        self.bicycle.capacity.max(self.car.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FleetConfig::default();
        assert_eq!(config.bicycle.speed, 10.0);
        assert_eq!(config.bicycle.range_limit, 30.0);
        assert_eq!(config.bicycle.delivery_cost, 20.0);
        assert_eq!(config.car.speed, 50.0);
        assert_eq!(config.car.delivery_cost, 100.0);
        assert_eq!(config.bicycle_count, 10);
        assert_eq!(config.max_car_count, 10);
    }

    #[test]
    fn test_max_class_capacity_follows_largest() {
        let mut config = FleetConfig::default();
        config.bicycle.capacity = 150.0;
        assert_eq!(config.max_class_capacity(), 150.0);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let mut config = FleetConfig::default();
        config.car.speed = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "car.speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut config = FleetConfig::default();
        config.bicycle.range_limit = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FleetConfig =
            serde_json::from_str(r#"{"car":{"capacity":250.0},"bicycle_count":3}"#)
                .expect("parse");
        assert_eq!(config.car.capacity, 250.0);
        assert_eq!(config.car.speed, 50.0);
        assert_eq!(config.bicycle_count, 3);
        assert_eq!(config.bicycle, BicycleSpec::default());
    }
}
