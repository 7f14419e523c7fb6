//! Delivery dispatch.
//!
//! [`DispatchService`] owns a fleet snapshot and hands out the
//! tightest-fitting available vehicle for each request.

mod service;

pub use service::{DispatchService, NO_AVAILABLE_TRANSPORT};
