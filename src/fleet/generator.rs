//! Random fleet generation.

use log::info;
use rand::Rng;

use crate::error::VehicleError;
use crate::models::{check_plate, VehicleId};
use crate::registry::VehicleRegistry;

/// Supplies plate identifiers for new cars.
pub trait PlateSource {
    /// Returns the next identifier.
    fn next_plate(&mut self) -> String;
}

/// VIN-style plates: 17 characters from the VIN alphabet (no I, O, Q).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::fleet::{PlateSource, RandomPlates};
///
/// let mut plates = RandomPlates::new(StdRng::seed_from_u64(7));
/// let plate = plates.next_plate();
/// assert_eq!(plate.len(), 17);
/// assert!(!plate.contains(['I', 'O', 'Q']));
/// ```
pub struct RandomPlates<R> {
    rng: R,
}

const VIN_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPRSTUVWXYZ0123456789";
const VIN_LEN: usize = 17;

impl<R: Rng> RandomPlates<R> {
    /// Wraps a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlateSource for RandomPlates<R> {
    fn next_plate(&mut self) -> String {
        (0..VIN_LEN)
            .map(|_| VIN_ALPHABET[self.rng.random_range(0..VIN_ALPHABET.len())] as char)
            .collect()
    }
}

impl<F: FnMut() -> String> PlateSource for F {
    fn next_plate(&mut self) -> String {
        self()
    }
}

/// Populates `registry` with a random number of cars in
/// `0..max_car_count` followed by `bicycle_count` bicycles, both taken from
/// the registry's [`FleetConfig`](super::FleetConfig).
///
/// Every plate is drawn and checked before anything is registered, so a
/// blank plate fails with [`VehicleError::MissingPlateId`] and leaves the
/// registry untouched.
///
/// Returns the ids of the new vehicles, cars first.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_dispatch::fleet::{generate_fleet, RandomPlates};
/// use u_dispatch::models::VehicleType;
/// use u_dispatch::registry::VehicleRegistry;
///
/// let mut registry = VehicleRegistry::new();
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut plates = RandomPlates::new(StdRng::seed_from_u64(43));
///
/// let fleet = generate_fleet(&mut registry, &mut rng, &mut plates).unwrap();
/// assert_eq!(registry.all(Some(VehicleType::Bicycle)).len(), 10);
/// assert!(registry.all(Some(VehicleType::Car)).len() < 10);
/// assert_eq!(fleet.len(), registry.len());
/// ```
pub fn generate_fleet<R, P>(
    registry: &mut VehicleRegistry,
    rng: &mut R,
    plates: &mut P,
) -> Result<Vec<VehicleId>, VehicleError>
where
    R: Rng,
    P: PlateSource,
{
    let max_car_count = registry.config().max_car_count;
    let bicycle_count = registry.config().bicycle_count;
    let car_count = if max_car_count == 0 {
        0
    } else {
        rng.random_range(0..max_car_count)
    };

    let drawn = (0..car_count)
        .map(|_| {
            let plate = plates.next_plate();
            check_plate(&plate).map(|()| plate)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut fleet = Vec::with_capacity(car_count + bicycle_count);
    for plate in drawn {
        fleet.push(registry.add_car(plate)?);
    }
    for _ in 0..bicycle_count {
        fleet.push(registry.add_bicycle());
    }

    info!("generated fleet: {car_count} cars, {bicycle_count} bicycles");
    Ok(fleet)
}
