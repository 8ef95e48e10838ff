//! Core types and reference catalogs for the Godavari basin dashboard.
//!
//! The station list and the Polavaram cross-section survey are fixed
//! reference data embedded at compile time from `fixtures/`.

pub mod boundary;
pub mod config;
pub mod cross_section;
pub mod date_range;
pub mod discharge;
pub mod error;
pub mod station;

/// Embedded CSV of all discharge gauge stations (`STATION_CO,NAME,LAT,LONG`).
pub static STATIONS_CSV: &str = include_str!("../../fixtures/stations.csv");

/// Embedded CSV of the surveyed cross-section points
/// (`SITE,YEAR,REDUCED_DISTANCE,ELEVATION_CGL`).
pub static CROSS_SECTION_CSV: &str = include_str!("../../fixtures/cross_section.csv");

/// Embedded CSV of the cross-section site locations (`SITE,LAT,LONG`).
pub static CROSS_SECTION_SITES_CSV: &str = include_str!("../../fixtures/cross_section_sites.csv");
