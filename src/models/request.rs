//! Delivery request type.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// A parcel to move: how heavy it is and how far it goes.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::DeliveryRequest;
///
/// let req = DeliveryRequest::new(5.0, 12.5).unwrap();
/// assert_eq!(req.weight(), 5.0);
/// assert!(DeliveryRequest::new(f64::NAN, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeliveryRequest")]
pub struct DeliveryRequest {
    weight: f64,
    distance: f64,
}

#[derive(Deserialize)]
struct RawDeliveryRequest {
    weight: f64,
    distance: f64,
}

impl TryFrom<RawDeliveryRequest> for DeliveryRequest {
    type Error = DispatchError;

    fn try_from(raw: RawDeliveryRequest) -> Result<Self, Self::Error> {
        DeliveryRequest::new(raw.weight, raw.distance)
    }
}

impl DeliveryRequest {
    /// Creates a validated request.
    ///
    /// Both fields must be finite and non-negative.
    pub fn new(weight: f64, distance: f64) -> Result<Self, DispatchError> {
        for (field, value) in [("weight", weight), ("distance", distance)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DispatchError::InvalidRequest { field, value });
            }
        }
        Ok(Self { weight, distance })
    }

    /// Parcel weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// One-way travel distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}
