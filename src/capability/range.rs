//! Effective travel range.

use std::cmp::Ordering;

use crate::models::Vehicle;

/// Maximum one-way distance a vehicle can cover.
///
/// `Unbounded` orders above every `Limited` value.
///
/// # Examples
///
/// ```
/// use u_dispatch::capability::EffectiveRange;
///
/// assert!(EffectiveRange::Limited(30.0) < EffectiveRange::Unbounded);
/// assert!(EffectiveRange::Limited(30.0).covers(30.0));
/// assert!(!EffectiveRange::Limited(30.0).covers(31.0));
/// assert!(EffectiveRange::Unbounded.covers(f64::MAX));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum EffectiveRange {
    /// Declared finite limit.
    Limited(f64),
    /// No declared limit.
    Unbounded,
}

impl EffectiveRange {
    /// Returns `true` if a trip of `distance` fits within this range.
    pub fn covers(&self, distance: f64) -> bool {
        match self {
            EffectiveRange::Limited(limit) => distance <= *limit,
            EffectiveRange::Unbounded => true,
        }
    }

    /// Numeric form, with `Unbounded` as positive infinity.
    pub fn as_f64(&self) -> f64 {
        match self {
            EffectiveRange::Limited(limit) => *limit,
            EffectiveRange::Unbounded => f64::INFINITY,
        }
    }
}

impl PartialEq for EffectiveRange {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EffectiveRange {}

impl PartialOrd for EffectiveRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EffectiveRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (EffectiveRange::Limited(a), EffectiveRange::Limited(b)) => a.total_cmp(b),
            (EffectiveRange::Limited(_), EffectiveRange::Unbounded) => Ordering::Less,
            (EffectiveRange::Unbounded, EffectiveRange::Limited(_)) => Ordering::Greater,
            (EffectiveRange::Unbounded, EffectiveRange::Unbounded) => Ordering::Equal,
        }
    }
}

/// Resolves the range of any vehicle.
///
/// Classes with a declared range limit report it; all others are unbounded.
pub fn effective_range(vehicle: &Vehicle) -> EffectiveRange {
    match vehicle.range_limit() {
        Some(limit) => EffectiveRange::Limited(limit),
        None => EffectiveRange::Unbounded,
    }
}
