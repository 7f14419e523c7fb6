//! Vehicle location states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;

/// Where a vehicle currently is.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Location;
///
/// let loc: Location = "On route".parse().unwrap();
/// assert_eq!(loc, Location::OnRoute);
/// assert!("Parked".parse::<Location>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    /// Idle at the depot.
    #[default]
    InGarage,
    /// Out on a delivery.
    OnRoute,
}

impl Location {
    /// Every valid location, in declaration order.
    pub const ALL: [Location; 2] = [Location::InGarage, Location::OnRoute];

    /// Human-readable name, also the accepted parse form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::InGarage => "In garage",
            Location::OnRoute => "On route",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = VehicleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|loc| loc.as_str() == value)
            .ok_or_else(|| VehicleError::InvalidLocation {
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_default_is_garage() {
        assert_eq!(Location::default(), Location::InGarage);
    }

    #[test]
    fn test_location_parse_roundtrip() {
        for loc in Location::ALL {
            assert_eq!(loc.as_str().parse::<Location>(), Ok(loc));
        }
    }

    #[test]
    fn test_location_parse_rejects_unknown() {
        let err = "Parked".parse::<Location>().unwrap_err();
        assert_eq!(
            err,
            VehicleError::InvalidLocation {
                value: "Parked".to_string()
            }
        );
        assert!(err.to_string().contains("Parked"));
    }

    #[test]
    fn test_location_parse_is_exact() {
        assert!("in garage".parse::<Location>().is_err());
        assert!("".parse::<Location>().is_err());
    }
}
