//! Data preparation for the basin dashboard.
//!
//! This crate turns the reference catalogs into the forms the dashboard
//! shows: synthetic discharge series, per station-year statistics, the
//! user's selection state, chart/map/preview structures and CSV exports.
//! Everything here is pure and synchronous; table storage lives in `gbd-db`.

pub mod export;
pub mod generator;
pub mod selection;
pub mod stats;
pub mod views;
