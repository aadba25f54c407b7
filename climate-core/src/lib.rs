//! Core library for the climate observation API.
//!
//! This crate defines:
//! - Configuration handling
//! - Read-only SQLite data access (the store)
//! - Shared domain models and the error taxonomy
//!
//! It is used by `climate-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::{Config, DEFAULT_BIND, DEFAULT_DATABASE};
pub use error::StoreError;
pub use model::{PrecipReading, Station, TempObservation, TempSummary};
pub use store::{ClimateStore, WINDOW_DAYS, parse_date};
