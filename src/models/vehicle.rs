//! Vehicle types with capacity, speed, and cost parameters.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Location;
use crate::capability::effective_range;
use crate::error::VehicleError;

/// Registry-assigned vehicle identifier.
///
/// Ids are dense indices handed out in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub(crate) usize);

impl VehicleId {
    /// Position of this vehicle in registration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Concrete vehicle classes known to the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    /// Light, range-limited vehicle.
    Bicycle,
    /// Heavy vehicle with unlimited range and a plate identifier.
    Car,
}

impl VehicleType {
    /// All vehicle classes.
    pub const ALL: [VehicleType; 2] = [VehicleType::Bicycle, VehicleType::Car];
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Bicycle => f.write_str("Bicycle"),
            VehicleType::Car => f.write_str("Car"),
        }
    }
}

/// Capability record shared by every vehicle class.
///
/// Capacity, speed, and delivery cost are fixed at construction. The
/// remaining fields change only through [`Vehicle::dispatch`] and the
/// availability/location setters.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCore {
    id: VehicleId,
    capacity: f64,
    speed: f64,
    delivery_cost: f64,
    available: bool,
    location: Location,
    delivery_count: u32,
}

impl VehicleCore {
    fn new(id: VehicleId, capacity: f64, speed: f64, delivery_cost: f64) -> Self {
        Self {
            id,
            capacity,
            speed,
            delivery_cost,
            available: true,
            location: Location::InGarage,
            delivery_count: 0,
        }
    }

    /// Registry id.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Maximum parcel weight.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Distance covered per time unit.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Flat cost of one delivery.
    pub fn delivery_cost(&self) -> f64 {
        self.delivery_cost
    }

    /// Whether the vehicle can take a new delivery.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Number of deliveries dispatched so far.
    pub fn delivery_count(&self) -> u32 {
        self.delivery_count
    }
}

/// A range-limited light vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct Bicycle {
    core: VehicleCore,
    range_limit: f64,
}

impl Bicycle {
    pub(crate) fn new(
        id: VehicleId,
        capacity: f64,
        speed: f64,
        delivery_cost: f64,
        range_limit: f64,
    ) -> Self {
        Self {
            core: VehicleCore::new(id, capacity, speed, delivery_cost),
            range_limit,
        }
    }

    /// Shared capability record.
    pub fn core(&self) -> &VehicleCore {
        &self.core
    }

    /// Maximum one-way travel distance.
    pub fn range_limit(&self) -> f64 {
        self.range_limit
    }
}

/// A plated vehicle with unlimited range.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    core: VehicleCore,
    plate_id: String,
}

/// Rejects a blank plate identifier.
pub(crate) fn check_plate(plate_id: &str) -> Result<(), VehicleError> {
    if plate_id.trim().is_empty() {
        return Err(VehicleError::MissingPlateId);
    }
    Ok(())
}

impl Car {
    /// Fails with [`VehicleError::MissingPlateId`] if the plate is blank.
    pub(crate) fn new(
        id: VehicleId,
        capacity: f64,
        speed: f64,
        delivery_cost: f64,
        plate_id: String,
    ) -> Result<Self, VehicleError> {
        check_plate(&plate_id)?;
        Ok(Self {
            core: VehicleCore::new(id, capacity, speed, delivery_cost),
            plate_id,
        })
    }

    /// Shared capability record.
    pub fn core(&self) -> &VehicleCore {
        &self.core
    }

    /// Externally supplied registration identifier.
    pub fn plate_id(&self) -> &str {
        &self.plate_id
    }
}

impl AsRef<VehicleCore> for Bicycle {
    fn as_ref(&self) -> &VehicleCore {
        &self.core
    }
}

impl AsRef<VehicleCore> for Car {
    fn as_ref(&self) -> &VehicleCore {
        &self.core
    }
}

/// A vehicle of any class.
///
/// Vehicles are created through
/// [`VehicleRegistry`](crate::registry::VehicleRegistry), which assigns the
/// id and records the vehicle in one step.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Location, VehicleType};
/// use u_dispatch::registry::VehicleRegistry;
///
/// let mut registry = VehicleRegistry::new();
/// let id = registry.add_bicycle();
///
/// let bike = registry.get_mut(id).unwrap();
/// assert_eq!(bike.vehicle_type(), VehicleType::Bicycle);
/// assert_eq!(bike.delivery_time(25.0), 2.5);
///
/// bike.dispatch();
/// assert!(!bike.is_available());
/// assert_eq!(bike.location(), Location::OnRoute);
/// assert_eq!(bike.delivery_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    /// See [`Bicycle`].
    Bicycle(Bicycle),
    /// See [`Car`].
    Car(Car),
}

impl Vehicle {
    /// Shared capability record.
    pub fn core(&self) -> &VehicleCore {
        match self {
            Vehicle::Bicycle(b) => &b.core,
            Vehicle::Car(c) => &c.core,
        }
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        match self {
            Vehicle::Bicycle(b) => &mut b.core,
            Vehicle::Car(c) => &mut c.core,
        }
    }

    /// Concrete class of this vehicle.
    pub fn vehicle_type(&self) -> VehicleType {
        match self {
            Vehicle::Bicycle(_) => VehicleType::Bicycle,
            Vehicle::Car(_) => VehicleType::Car,
        }
    }

    /// Returns `true` for bicycles.
    pub fn is_bicycle(&self) -> bool {
        matches!(self, Vehicle::Bicycle(_))
    }

    /// Returns `true` for cars.
    pub fn is_car(&self) -> bool {
        matches!(self, Vehicle::Car(_))
    }

    /// Bicycle view, if this is one.
    pub fn as_bicycle(&self) -> Option<&Bicycle> {
        match self {
            Vehicle::Bicycle(b) => Some(b),
            Vehicle::Car(_) => None,
        }
    }

    /// Car view, if this is one.
    pub fn as_car(&self) -> Option<&Car> {
        match self {
            Vehicle::Car(c) => Some(c),
            Vehicle::Bicycle(_) => None,
        }
    }

    /// Registry id.
    pub fn id(&self) -> VehicleId {
        self.core().id
    }

    /// Maximum parcel weight.
    pub fn capacity(&self) -> f64 {
        self.core().capacity
    }

    /// Distance covered per time unit.
    pub fn speed(&self) -> f64 {
        self.core().speed
    }

    /// Flat cost of one delivery.
    pub fn delivery_cost(&self) -> f64 {
        self.core().delivery_cost
    }

    /// Whether the vehicle can take a new delivery.
    pub fn is_available(&self) -> bool {
        self.core().available
    }

    /// Current location.
    pub fn location(&self) -> Location {
        self.core().location
    }

    /// Number of deliveries dispatched so far.
    pub fn delivery_count(&self) -> u32 {
        self.core().delivery_count
    }

    /// Declared range limit; `None` for classes without one.
    ///
    /// Use [`effective_range`] when comparing vehicles.
    pub fn range_limit(&self) -> Option<f64> {
        self.as_bicycle().map(Bicycle::range_limit)
    }

    /// Plate identifier; `None` for classes without one.
    pub fn plate_id(&self) -> Option<&str> {
        self.as_car().map(Car::plate_id)
    }

    /// Time needed to cover `distance` at this vehicle's speed.
    pub fn delivery_time(&self, distance: f64) -> f64 {
        distance / self.core().speed
    }

    /// Sends the vehicle out: bumps the delivery count, marks it on route
    /// and unavailable.
    ///
    /// Does not check availability first. The count saturates at `u32::MAX`.
    pub fn dispatch(&mut self) {
        let core = self.core_mut();
        core.delivery_count = core.delivery_count.saturating_add(1);
        core.location = Location::OnRoute;
        core.available = false;
    }

    /// Overrides availability.
    pub fn set_available(&mut self, available: bool) {
        self.core_mut().available = available;
    }

    /// Moves the vehicle to `location`.
    pub fn set_location(&mut self, location: Location) {
        self.core_mut().location = location;
    }

    /// Moves the vehicle to the location named `value`.
    ///
    /// Fails with [`VehicleError::InvalidLocation`] for names outside
    /// [`Location::ALL`]; the vehicle is left untouched.
    pub fn set_location_named(&mut self, value: &str) -> Result<(), VehicleError> {
        let location = value.parse()?;
        self.set_location(location);
        Ok(())
    }

    /// Ranking order: capacity ascending, then effective range ascending.
    ///
    /// Vehicles equal on both keys compare `Equal` regardless of class.
    pub fn rank_cmp(&self, other: &Vehicle) -> Ordering {
        self.capacity()
            .total_cmp(&other.capacity())
            .then_with(|| effective_range(self).cmp(&effective_range(other)))
    }

    /// Point-in-time copy of the observable state.
    pub fn snapshot(&self) -> VehicleSnapshot {
        let core = self.core();
        VehicleSnapshot {
            id: core.id,
            vehicle_type: self.vehicle_type(),
            capacity: core.capacity,
            speed: core.speed,
            available: core.available,
            location: core.location,
            delivery_count: core.delivery_count,
            delivery_cost: core.delivery_cost,
            range_limit: self.range_limit(),
            plate_id: self.plate_id().map(str::to_string),
        }
    }
}

/// Serializable view of a vehicle's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    /// Registry id.
    pub id: VehicleId,
    /// Concrete class.
    pub vehicle_type: VehicleType,
    /// Maximum parcel weight.
    pub capacity: f64,
    /// Distance per time unit.
    pub speed: f64,
    /// Availability at snapshot time.
    pub available: bool,
    /// Location at snapshot time.
    pub location: Location,
    /// Deliveries dispatched so far.
    pub delivery_count: u32,
    /// Flat cost of one delivery.
    pub delivery_cost: f64,
    /// Bicycle range limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_limit: Option<f64>,
    /// Car plate identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bike(id: usize, capacity: f64, range: f64) -> Vehicle {
        Vehicle::Bicycle(Bicycle::new(VehicleId(id), capacity, 10.0, 20.0, range))
    }

    fn car(id: usize, capacity: f64) -> Vehicle {
        let car = Car::new(VehicleId(id), capacity, 50.0, 100.0, "VIN-1".to_string());
        Vehicle::Car(car.expect("plate"))
    }

    #[test]
    fn test_bicycle_new() {
        let v = bike(0, 10.0, 30.0);
        assert_eq!(v.id(), VehicleId(0));
        assert_eq!(v.vehicle_type(), VehicleType::Bicycle);
        assert_eq!(v.capacity(), 10.0);
        assert_eq!(v.speed(), 10.0);
        assert_eq!(v.delivery_cost(), 20.0);
        assert_eq!(v.range_limit(), Some(30.0));
        assert!(v.plate_id().is_none());
        assert!(v.is_available());
        assert_eq!(v.location(), Location::InGarage);
        assert_eq!(v.delivery_count(), 0);
        assert!(v.is_bicycle());
        assert!(!v.is_car());
    }

    #[test]
    fn test_car_new() {
        let v = car(3, 100.0);
        assert_eq!(v.vehicle_type(), VehicleType::Car);
        assert_eq!(v.plate_id(), Some("VIN-1"));
        assert!(v.range_limit().is_none());
        assert!(v.is_car());
    }

    #[test]
    fn test_car_requires_plate() {
        let err = Car::new(VehicleId(0), 100.0, 50.0, 100.0, "  ".to_string()).unwrap_err();
        assert_eq!(err, VehicleError::MissingPlateId);
        assert!(Car::new(VehicleId(0), 100.0, 50.0, 100.0, String::new()).is_err());
    }

    #[test]
    fn test_delivery_time_real_division() {
        let v = bike(0, 10.0, 30.0);
        assert!((v.delivery_time(25.0) - 2.5).abs() < 1e-10);
        let c = car(1, 100.0);
        assert!((c.delivery_time(25.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_dispatch_mutates_state() {
        let mut v = bike(0, 10.0, 30.0);
        v.dispatch();
        assert_eq!(v.delivery_count(), 1);
        assert_eq!(v.location(), Location::OnRoute);
        assert!(!v.is_available());
    }

    #[test]
    fn test_dispatch_unavailable_still_counts() {
        let mut v = bike(0, 10.0, 30.0);
        v.dispatch();
        v.dispatch();
        assert_eq!(v.delivery_count(), 2);
        assert!(!v.is_available());
    }

    #[test]
    fn test_dispatch_count_saturates() {
        let mut v = bike(0, 10.0, 30.0);
        v.core_mut().delivery_count = u32::MAX;
        v.dispatch();
        assert_eq!(v.delivery_count(), u32::MAX);
        assert_eq!(v.location(), Location::OnRoute);
    }

    #[test]
    fn test_check_plate() {
        assert!(check_plate("VIN-1").is_ok());
        assert_eq!(check_plate(""), Err(VehicleError::MissingPlateId));
        assert_eq!(check_plate(" \t"), Err(VehicleError::MissingPlateId));
    }

    #[test]
    fn test_set_location_named() {
        let mut v = car(0, 100.0);
        v.set_location_named("On route").expect("valid location");
        assert_eq!(v.location(), Location::OnRoute);

        let err = v.set_location_named("Moon").unwrap_err();
        assert_eq!(
            err,
            VehicleError::InvalidLocation {
                value: "Moon".to_string()
            }
        );
        assert_eq!(v.location(), Location::OnRoute);
    }

    #[test]
    fn test_rank_same_class_equal() {
        assert_eq!(bike(0, 10.0, 30.0).rank_cmp(&bike(1, 10.0, 30.0)), Ordering::Equal);
        assert_eq!(car(0, 100.0).rank_cmp(&car(1, 100.0)), Ordering::Equal);
    }

    #[test]
    fn test_rank_bicycle_below_car() {
        assert_eq!(bike(0, 10.0, 30.0).rank_cmp(&car(1, 100.0)), Ordering::Less);
        assert_eq!(car(1, 100.0).rank_cmp(&bike(0, 10.0, 30.0)), Ordering::Greater);
    }

    #[test]
    fn test_rank_range_breaks_ties() {
        assert_eq!(bike(0, 10.0, 30.0).rank_cmp(&bike(1, 10.0, 50.0)), Ordering::Less);
        // Same capacity: limited range ranks below unlimited.
        assert_eq!(bike(0, 100.0, 1e9).rank_cmp(&car(1, 100.0)), Ordering::Less);
    }

    #[test]
    fn test_snapshot_fields() {
        let mut v = car(2, 100.0);
        v.dispatch();
        let snap = v.snapshot();
        assert_eq!(snap.id, VehicleId(2));
        assert_eq!(snap.vehicle_type, VehicleType::Car);
        assert!(!snap.available);
        assert_eq!(snap.location, Location::OnRoute);
        assert_eq!(snap.delivery_count, 1);
        assert_eq!(snap.plate_id.as_deref(), Some("VIN-1"));
        assert!(snap.range_limit.is_none());
    }

    #[test]
    fn test_snapshot_json_omits_missing_fields() {
        let json = serde_json::to_value(bike(0, 10.0, 30.0).snapshot()).expect("serialize");
        assert_eq!(json["range_limit"], 30.0);
        assert_eq!(json["location"], "InGarage");
        assert!(json.get("plate_id").is_none());
    }

    fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
        prop_oneof![
            (1u32..5, 1u32..5).prop_map(|(c, r)| bike(0, c as f64 * 10.0, r as f64 * 10.0)),
            (1u32..5).prop_map(|c| car(1, c as f64 * 10.0)),
        ]
    }

    proptest! {
        #[test]
        fn prop_rank_antisymmetric(a in arb_vehicle(), b in arb_vehicle()) {
            prop_assert_eq!(a.rank_cmp(&b), b.rank_cmp(&a).reverse());
        }

        #[test]
        fn prop_delivery_time_linear(speed in 1.0f64..100.0, d in 0.0f64..1000.0) {
            let v = Vehicle::Bicycle(Bicycle::new(VehicleId(0), 10.0, speed, 20.0, 30.0));
            let twice = v.delivery_time(2.0 * d);
            prop_assert!((twice - 2.0 * v.delivery_time(d)).abs() < 1e-9);
        }
    }
}
