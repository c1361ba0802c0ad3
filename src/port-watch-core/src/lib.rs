#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain types for tracking vessels against a static table of port geofences.
//!
//! The crate owns the validity rules for vessel fixes, the occupancy classifier and the
//! viewport selection state. Fetching and publishing live in `vessel-tracker`.

mod domain;
mod error;
mod ports;

#[cfg(any(test, feature = "test"))]
mod test_helper;

pub use domain::*;
pub use error::*;
pub use ports::*;
