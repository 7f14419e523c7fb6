//! Named attribute accessors for attribute-generic queries.
//!
//! Every concrete vehicle class carries a static table mapping attribute
//! names to typed getters. The registry looks getters up by name, so callers
//! can query any attribute without each class writing its own finders.

use super::{Bicycle, Car, Location, Vehicle, VehicleCore, VehicleId, VehicleType};

/// Value produced by an attribute getter.
///
/// Equality is strict: variants never compare equal across kinds, so
/// `Count(1)` is not equal to `Number(1.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    /// Registry id.
    Id(VehicleId),
    /// Real-valued measure (capacity, speed, cost, range).
    Number(f64),
    /// Non-negative counter.
    Count(u32),
    /// Boolean flag.
    Flag(bool),
    /// Location state.
    Location(Location),
    /// Borrowed text.
    Text(&'a str),
}

impl<'a> AttributeValue<'a> {
    /// Numeric payload, if this is a [`AttributeValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is a [`AttributeValue::Text`].
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            AttributeValue::Text(s) => Some(*s),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue<'_> {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<u32> for AttributeValue<'_> {
    fn from(value: u32) -> Self {
        AttributeValue::Count(value)
    }
}

impl From<bool> for AttributeValue<'_> {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

impl From<Location> for AttributeValue<'_> {
    fn from(value: Location) -> Self {
        AttributeValue::Location(value)
    }
}

impl From<VehicleId> for AttributeValue<'_> {
    fn from(value: VehicleId) -> Self {
        AttributeValue::Id(value)
    }
}

impl<'a> From<&'a str> for AttributeValue<'a> {
    fn from(value: &'a str) -> Self {
        AttributeValue::Text(value)
    }
}

/// A named getter over a concrete vehicle class.
pub struct Accessor<C> {
    name: &'static str,
    get: for<'v> fn(&'v C) -> AttributeValue<'v>,
}

impl<C> Accessor<C> {
    const fn new(name: &'static str, get: for<'v> fn(&'v C) -> AttributeValue<'v>) -> Self {
        Self { name, get }
    }

    /// Attribute name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads the attribute from `vehicle`.
    pub fn read<'v>(&self, vehicle: &'v C) -> AttributeValue<'v> {
        (self.get)(vehicle)
    }
}

/// A concrete vehicle class that can be queried by attribute name.
pub trait VehicleClass: AsRef<VehicleCore> + Sized + 'static {
    /// Registry bucket this class is stored under.
    const TYPE: VehicleType;

    /// Attribute table, built once for the class.
    fn accessors() -> &'static [Accessor<Self>];

    /// Narrows a [`Vehicle`] to this class.
    fn from_vehicle(vehicle: &Vehicle) -> Option<&Self>;

    /// Looks up the getter for `name`.
    fn accessor(name: &str) -> Option<&'static Accessor<Self>> {
        Self::accessors().iter().find(|a| a.name == name)
    }

    /// Names of all queryable attributes.
    fn attribute_names() -> Vec<&'static str> {
        Self::accessors().iter().map(Accessor::name).collect()
    }
}

fn id<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Id(v.as_ref().id())
}

fn capacity<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Number(v.as_ref().capacity())
}

fn speed<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Number(v.as_ref().speed())
}

fn delivery_cost<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Number(v.as_ref().delivery_cost())
}

fn available<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Flag(v.as_ref().is_available())
}

fn location<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Location(v.as_ref().location())
}

fn delivery_count<C: AsRef<VehicleCore>>(v: &C) -> AttributeValue<'_> {
    AttributeValue::Count(v.as_ref().delivery_count())
}

fn range_limit(v: &Bicycle) -> AttributeValue<'_> {
    AttributeValue::Number(v.range_limit())
}

fn plate_id(v: &Car) -> AttributeValue<'_> {
    AttributeValue::Text(v.plate_id())
}

static BICYCLE_ACCESSORS: [Accessor<Bicycle>; 8] = [
    Accessor::new("id", id::<Bicycle>),
    Accessor::new("capacity", capacity::<Bicycle>),
    Accessor::new("speed", speed::<Bicycle>),
    Accessor::new("delivery_cost", delivery_cost::<Bicycle>),
    Accessor::new("available", available::<Bicycle>),
    Accessor::new("location", location::<Bicycle>),
    Accessor::new("delivery_count", delivery_count::<Bicycle>),
    Accessor::new("range_limit", range_limit),
];

static CAR_ACCESSORS: [Accessor<Car>; 8] = [
    Accessor::new("id", id::<Car>),
    Accessor::new("capacity", capacity::<Car>),
    Accessor::new("speed", speed::<Car>),
    Accessor::new("delivery_cost", delivery_cost::<Car>),
    Accessor::new("available", available::<Car>),
    Accessor::new("location", location::<Car>),
    Accessor::new("delivery_count", delivery_count::<Car>),
    Accessor::new("plate_id", plate_id),
];

impl VehicleClass for Bicycle {
    const TYPE: VehicleType = VehicleType::Bicycle;

    fn accessors() -> &'static [Accessor<Self>] {
        &BICYCLE_ACCESSORS
    }

    fn from_vehicle(vehicle: &Vehicle) -> Option<&Self> {
        vehicle.as_bicycle()
    }
}

impl VehicleClass for Car {
    const TYPE: VehicleType = VehicleType::Car;

    fn accessors() -> &'static [Accessor<Self>] {
        &CAR_ACCESSORS
    }

    fn from_vehicle(vehicle: &Vehicle) -> Option<&Self> {
        vehicle.as_car()
    }
}

impl Vehicle {
    /// Reads attribute `name` through the table of this vehicle's class.
    ///
    /// Returns `None` if the class has no such attribute.
    pub fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        match self {
            Vehicle::Bicycle(b) => Bicycle::accessor(name).map(|a| a.read(b)),
            Vehicle::Car(c) => Car::accessor(name).map(|a| a.read(c)),
        }
    }
}
