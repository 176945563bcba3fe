//! Core types for wayfare.
//!
//! Two independent list managers live here, both backed by a string-keyed
//! [`storage::KeyValueStore`]:
//! - the trip planner: [`calendar_grid::CalendarGrid`] and [`trip_store::TripStore`]
//! - the favorites tracker: [`favorites_store::FavoritesStore`]

pub mod calendar_grid;
pub mod config;
pub mod date_range;
pub mod display;
pub mod error;
pub mod favorite;
pub mod favorites_store;
pub mod idea;
pub mod ids;
pub mod migrate;
pub mod month;
pub mod storage;
pub mod trip;
pub mod trip_store;

pub use error::{WayfareError, WayfareResult};
