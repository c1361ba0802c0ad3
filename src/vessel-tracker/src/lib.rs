#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Fetches the vessel position feed, classifies vessels against the configured port
//! geofences and publishes the result as immutable snapshots for a map view.

pub mod error;
pub mod feed;
pub mod ingestor;
pub mod models;
pub mod settings;
pub mod startup;
pub mod tracker;

pub use error::{Error, Result};
