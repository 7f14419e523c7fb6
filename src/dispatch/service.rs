//! Tightest-fit vehicle dispatch over a fleet snapshot.

use log::{debug, info, warn};

use crate::capability::effective_range;
use crate::error::DispatchError;
use crate::models::{DeliveryRequest, Vehicle, VehicleId, VehicleSnapshot};
use crate::registry::VehicleRegistry;

/// Message recorded when a request cannot be served.
pub const NO_AVAILABLE_TRANSPORT: &str = "No available transport";

/// Matches delivery requests to vehicles and sends them out.
///
/// The service owns the registry and a fleet: the subset of registered
/// vehicles it may hand out. Unserviceable requests are not errors; they
/// return `None` and append [`NO_AVAILABLE_TRANSPORT`] to
/// [`errors`](Self::errors).
///
/// The class capacity ceiling comes from the registry's
/// [`FleetConfig`](crate::fleet::FleetConfig), the same constants every
/// vehicle in it was built from.
///
/// Matching and dispatching both take `&mut self`. To share a service
/// between threads, wrap it in a mutex and hold the lock across
/// [`match_and_dispatch`](Self::match_and_dispatch) so no vehicle is awarded
/// twice.
///
/// # Examples
///
/// ```
/// use u_dispatch::dispatch::DispatchService;
/// use u_dispatch::models::DeliveryRequest;
/// use u_dispatch::registry::VehicleRegistry;
///
/// let mut registry = VehicleRegistry::new();
/// let bike = registry.add_bicycle();
/// let car = registry.add_car("1HGCM82633A004352").unwrap();
///
/// let mut service = DispatchService::new(registry);
/// let small = DeliveryRequest::new(5.0, 5.0).unwrap();
/// let heavy = DeliveryRequest::new(15.0, 5.0).unwrap();
///
/// assert_eq!(service.match_vehicle(&small), Some(bike));
/// assert_eq!(service.match_vehicle(&heavy), Some(car));
/// assert!(service.errors().is_empty());
/// ```
#[derive(Debug)]
pub struct DispatchService {
    registry: VehicleRegistry,
    fleet: Vec<VehicleId>,
    errors: Vec<String>,
}

impl DispatchService {
    /// Creates a service whose fleet is every vehicle in `registry`.
    pub fn new(registry: VehicleRegistry) -> Self {
        let fleet = registry.ids(None);
        Self::build(registry, fleet)
    }

    /// Creates a service over an explicit fleet.
    ///
    /// Fails with [`DispatchError::UnknownVehicle`] if an id is not in
    /// `registry`.
    pub fn with_fleet(
        registry: VehicleRegistry,
        fleet: Vec<VehicleId>,
    ) -> Result<Self, DispatchError> {
        if let Some(&missing) = fleet.iter().find(|id| registry.get(**id).is_none()) {
            return Err(DispatchError::UnknownVehicle(missing));
        }
        Ok(Self::build(registry, fleet))
    }

    fn build(registry: VehicleRegistry, fleet: Vec<VehicleId>) -> Self {
        Self {
            registry,
            fleet,
            errors: Vec::new(),
        }
    }

    /// Registry backing this service.
    pub fn registry(&self) -> &VehicleRegistry {
        &self.registry
    }

    /// Mutable registry access, e.g. to adjust a vehicle by hand.
    pub fn registry_mut(&mut self) -> &mut VehicleRegistry {
        &mut self.registry
    }

    /// Fleet ids in fleet order.
    pub fn fleet(&self) -> &[VehicleId] {
        &self.fleet
    }

    /// Fleet vehicles in fleet order.
    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.fleet.iter().filter_map(move |id| self.registry.get(*id))
    }

    /// Fleet vehicles that can currently take a delivery.
    pub fn available(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles().filter(|v| v.is_available())
    }

    /// Messages recorded for unserviceable requests, oldest first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Drops every recorded message.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Snapshots of the fleet in fleet order.
    pub fn snapshot(&self) -> Vec<VehicleSnapshot> {
        self.vehicles().map(Vehicle::snapshot).collect()
    }

    /// Picks the tightest-fitting available vehicle for `request`.
    ///
    /// Candidates are available vehicles with capacity at least the weight
    /// and effective range at least the distance. The winner is the smallest
    /// by [`Vehicle::rank_cmp`]; on a full tie the earliest in fleet order.
    ///
    /// Returns `None` and records [`NO_AVAILABLE_TRANSPORT`] if nothing is
    /// available, the weight exceeds every vehicle class's capacity, or no
    /// candidate fits.
    pub fn match_vehicle(&mut self, request: &DeliveryRequest) -> Option<VehicleId> {
        let weight = request.weight();
        let distance = request.distance();

        if weight > self.registry.max_class_capacity() || self.available().next().is_none() {
            return self.no_match(request);
        }

        let best = self
            .available()
            .filter(|v| v.capacity() >= weight && effective_range(v).covers(distance))
            .min_by(|a, b| a.rank_cmp(b))
            .map(Vehicle::id);

        match best {
            Some(id) => {
                debug!("matched {id} for weight {weight}, distance {distance}");
                Some(id)
            }
            None => self.no_match(request),
        }
    }

    fn no_match(&mut self, request: &DeliveryRequest) -> Option<VehicleId> {
        warn!(
            "no vehicle for weight {}, distance {}",
            request.weight(),
            request.distance()
        );
        self.errors.push(NO_AVAILABLE_TRANSPORT.to_string());
        None
    }

    /// Sends `vehicle` out.
    ///
    /// Fails with [`DispatchError::MissingVehicle`] for `None` and
    /// [`DispatchError::UnknownVehicle`] for an id outside the registry.
    /// Availability is not re-checked.
    pub fn dispatch(&mut self, vehicle: Option<VehicleId>) -> Result<(), DispatchError> {
        let id = vehicle.ok_or(DispatchError::MissingVehicle)?;
        let vehicle = self
            .registry
            .get_mut(id)
            .ok_or(DispatchError::UnknownVehicle(id))?;
        vehicle.dispatch();
        info!(
            "dispatched {} {id} (deliveries: {})",
            vehicle.vehicle_type(),
            vehicle.delivery_count()
        );
        Ok(())
    }

    /// Matches `request` and dispatches the winner in one step.
    ///
    /// Returns the dispatched vehicle, or `None` if nothing matched.
    pub fn match_and_dispatch(
        &mut self,
        request: &DeliveryRequest,
    ) -> Result<Option<VehicleId>, DispatchError> {
        let matched = self.match_vehicle(request);
        if matched.is_some() {
            self.dispatch(matched)?;
        }
        Ok(matched)
    }
}
