//! Vehicle storage with per-class indices and attribute queries.

use std::collections::HashMap;

use log::{debug, warn};

use crate::error::{ConfigError, VehicleError};
use crate::fleet::FleetConfig;
use crate::models::{
    Accessor, AttributeValue, Bicycle, Car, Vehicle, VehicleClass, VehicleId, VehicleType,
};

/// Owns every vehicle ever created, in creation order.
///
/// Creating a vehicle and registering it are one step: the only way to
/// obtain a vehicle is through [`add_bicycle`](Self::add_bicycle) or
/// [`add_car`](Self::add_car), which assign the id and append the vehicle to
/// both the global list and its class list. Every vehicle takes its class
/// constants from the registry's [`FleetConfig`], which is validated once at
/// construction.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Car, VehicleType};
/// use u_dispatch::registry::VehicleRegistry;
///
/// let mut registry = VehicleRegistry::new();
/// registry.add_bicycle();
/// registry.add_car("1HGCM82633A004352").unwrap();
///
/// assert_eq!(registry.all(None).len(), 2);
/// assert_eq!(registry.all(Some(VehicleType::Car)).len(), 1);
///
/// let car = registry.find_by_attribute::<Car>("plate_id", "1HGCM82633A004352");
/// assert!(car.is_some());
/// ```
#[derive(Debug)]
pub struct VehicleRegistry {
    config: FleetConfig,
    vehicles: Vec<Vehicle>,
    by_type: HashMap<VehicleType, Vec<VehicleId>>,
}

impl Default for VehicleRegistry {
    fn default() -> Self {
        Self::empty(FleetConfig::default())
    }
}

impl VehicleRegistry {
    /// Creates an empty registry with the default class constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given class constants.
    ///
    /// Fails with [`ConfigError::InvalidParameter`] if any constant is not
    /// finite and positive.
    pub fn with_config(config: FleetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    fn empty(config: FleetConfig) -> Self {
        Self {
            config,
            vehicles: Vec::new(),
            by_type: HashMap::new(),
        }
    }

    /// Class constants and fleet sizing used for every new vehicle.
    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Largest capacity of any vehicle class this registry can create.
    pub fn max_class_capacity(&self) -> f64 {
        self.config.max_class_capacity()
    }

    /// Creates and registers a bicycle.
    pub fn add_bicycle(&mut self) -> VehicleId {
        let id = self.next_id();
        let spec = self.config.bicycle;
        self.register(Vehicle::Bicycle(Bicycle::new(
            id,
            spec.capacity,
            spec.speed,
            spec.delivery_cost,
            spec.range_limit,
        )))
    }

    /// Creates and registers a car.
    ///
    /// Fails with [`VehicleError::MissingPlateId`] for a blank plate; nothing
    /// is registered in that case.
    pub fn add_car(&mut self, plate_id: impl Into<String>) -> Result<VehicleId, VehicleError> {
        let id = self.next_id();
        let spec = self.config.car;
        let car = Car::new(
            id,
            spec.capacity,
            spec.speed,
            spec.delivery_cost,
            plate_id.into(),
        )?;
        Ok(self.register(Vehicle::Car(car)))
    }

    fn next_id(&self) -> VehicleId {
        VehicleId(self.vehicles.len())
    }

    fn register(&mut self, vehicle: Vehicle) -> VehicleId {
        let id = vehicle.id();
        let vehicle_type = vehicle.vehicle_type();
        debug_assert_eq!(id, self.next_id());
        self.vehicles.push(vehicle);
        self.by_type.entry(vehicle_type).or_default().push(id);
        debug!("registered {vehicle_type} {id}");
        id
    }

    /// Number of registered vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicle with the given id.
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id.0)
    }

    /// Mutable access to the vehicle with the given id.
    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(id.0)
    }

    /// Ids of every vehicle of `vehicle_type`, or of all vehicles for `None`,
    /// in registration order.
    pub fn ids(&self, vehicle_type: Option<VehicleType>) -> Vec<VehicleId> {
        match vehicle_type {
            None => self.vehicles.iter().map(Vehicle::id).collect(),
            Some(t) => self.by_type.get(&t).cloned().unwrap_or_default(),
        }
    }

    /// Every vehicle of `vehicle_type`, or all vehicles for `None`, in
    /// registration order.
    ///
    /// An unused class yields an empty list.
    pub fn all(&self, vehicle_type: Option<VehicleType>) -> Vec<&Vehicle> {
        match vehicle_type {
            None => self.vehicles.iter().collect(),
            Some(t) => self
                .by_type
                .get(&t)
                .map(|ids| ids.iter().map(|id| &self.vehicles[id.0]).collect())
                .unwrap_or_default(),
        }
    }

    /// Every vehicle of class `C` in registration order.
    pub fn iter_class<C: VehicleClass>(&self) -> impl Iterator<Item = &C> + '_ {
        self.by_type
            .get(&C::TYPE)
            .into_iter()
            .flatten()
            .filter_map(move |id| C::from_vehicle(&self.vehicles[id.0]))
    }

    /// First vehicle of class `C` whose attribute `name` equals `value`.
    ///
    /// Returns `None` when nothing matches, including when `C` has no
    /// attribute called `name`.
    pub fn find_by_attribute<'q, C: VehicleClass>(
        &self,
        name: &str,
        value: impl Into<AttributeValue<'q>>,
    ) -> Option<&C> {
        let accessor = lookup::<C>(name)?;
        let value = value.into();
        self.iter_class::<C>().find(|v| accessor.read(v) == value)
    }

    /// All vehicles of class `C` whose attribute `name` satisfies `predicate`.
    ///
    /// Returns an empty list when nothing matches, including when `C` has no
    /// attribute called `name`.
    pub fn filter_by_attribute<C, P>(&self, name: &str, predicate: P) -> Vec<&C>
    where
        C: VehicleClass,
        P: Fn(&AttributeValue<'_>) -> bool,
    {
        let Some(accessor) = lookup::<C>(name) else {
            return Vec::new();
        };
        self.iter_class::<C>()
            .filter(|v| predicate(&accessor.read(v)))
            .collect()
    }
}

fn lookup<C: VehicleClass>(name: &str) -> Option<&'static Accessor<C>> {
    let accessor = C::accessor(name);
    if accessor.is_none() {
        warn!("{} has no attribute `{name}`", C::TYPE);
    }
    accessor
}
