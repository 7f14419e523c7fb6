//! Capability resolution across vehicle classes.
//!
//! Not every class declares every capability. The resolver gives each
//! optional capability a uniform, comparable value so heterogeneous
//! vehicles can be ranked and filtered together.

mod range;

pub use range::{effective_range, EffectiveRange};
