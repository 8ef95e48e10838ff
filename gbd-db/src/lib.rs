//! In-memory SQLite tables for the basin dashboard.
//!
//! The station catalog, the cross-section survey and the generated
//! discharge readings are loaded once into an in-memory SQLite database
//! and read back through typed query methods. The view methods combine
//! those queries with a [`Selection`](gbd_data::selection::Selection) into
//! render-ready structures.
//!
//! # Usage
//!
//! ```rust
//! use gbd_core::config::DashboardConfig;
//! use gbd_db::Database;
//!
//! let db = Database::seeded(&DashboardConfig::default().with_seed(7)).unwrap();
//! let stations = db.query_stations().unwrap();
//! assert_eq!(stations.len(), 20);
//! let readings = db.query_discharge("AG000C3", 2020).unwrap();
//! assert_eq!(readings.len(), 366);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
pub mod models;
mod queries;
mod views;

use gbd_core::config::DashboardConfig;
use gbd_core::{CROSS_SECTION_CSV, CROSS_SECTION_SITES_CSV, STATIONS_CSV};
use gbd_data::generator::{seeded_rng, DischargeGenerator};
use rusqlite::Connection;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

/// In-memory SQLite database holding the dashboard tables.
///
/// Cheaply cloneable (via `Rc`) and meant for sharing across Dioxus
/// components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use gbd_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_stations("STATION_CO,NAME,LAT,LONG\nAG000C3,POLAVARAM,17.25167,81.6525\n").unwrap();
/// let stations = db.query_stations().unwrap();
/// assert_eq!(stations.len(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
    config: Rc<DashboardConfig>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied and the
    /// default configuration.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
            config: Rc::new(config),
        })
    }

    /// Build the full dashboard tables: embedded catalogs plus one
    /// generated discharge series per station and configured year.
    pub fn seeded(config: &DashboardConfig) -> anyhow::Result<Self> {
        let db = Self::with_config(config.clone())?;
        db.load_stations(STATIONS_CSV)?;
        db.load_cross_section_sites(CROSS_SECTION_SITES_CSV)?;
        db.load_cross_section(CROSS_SECTION_CSV)?;

        let stations = db.query_stations()?;
        let mut rng = seeded_rng(config.seed);
        let readings = DischargeGenerator::default().generate_all(&stations, config.years(), &mut rng);
        db.load_discharge(&readings)?;
        Ok(db)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

thread_local! {
    static SHARED: OnceCell<Database> = const { OnceCell::new() };
}

/// The per-thread dashboard database, built on first use.
///
/// `config` only matters on the first call; later calls return the same
/// tables. The WASM app is single-threaded, so this is process-wide there.
pub fn shared(config: &DashboardConfig) -> anyhow::Result<Database> {
    SHARED.with(|cell| {
        if let Some(db) = cell.get() {
            return Ok(db.clone());
        }
        let db = Database::seeded(config)?;
        log::info!("[GBD] shared: Built dashboard tables");
        Ok(cell.get_or_init(|| db).clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbd_core::cross_section::{CrossSectionPoint, CrossSectionSite};
    use gbd_core::station::Station;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_stations("STATION_CO,NAME,LAT,LONG\nAG000C3,POLAVARAM,17.25167,81.6525\n")
            .unwrap();
        let stations = db2.query_stations().unwrap();
        assert_eq!(stations.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.query_stations().unwrap().is_empty());
        assert!(db.query_discharge_years().unwrap().is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DashboardConfig {
            first_year: 2023,
            ..DashboardConfig::default()
        };
        assert!(Database::with_config(config).is_err());
    }

    #[test]
    fn seeded_database_covers_every_station_year() {
        let db = Database::seeded(&DashboardConfig::default().with_seed(3)).unwrap();
        assert_eq!(db.query_stations().unwrap(), Station::get_station_vector());
        assert_eq!(db.query_sites().unwrap(), CrossSectionSite::get_site_vector());
        assert_eq!(db.query_discharge_years().unwrap(), (2015..=2022).rev().collect::<Vec<_>>());
        assert_eq!(db.count_discharge().unwrap(), 20 * (6 * 365 + 2 * 366));
        assert_eq!(
            db.count_cross_section_points().unwrap(),
            CrossSectionPoint::get_cross_section_vector().len()
        );
    }

    #[test]
    fn same_seed_builds_same_tables() {
        let config = DashboardConfig::default().with_seed(21);
        let a = Database::seeded(&config).unwrap();
        let b = Database::seeded(&config).unwrap();
        let c = Database::seeded(&DashboardConfig::default().with_seed(22)).unwrap();
        assert_eq!(
            a.query_discharge("AG000C3", 2020).unwrap(),
            b.query_discharge("AG000C3", 2020).unwrap()
        );
        assert_ne!(
            a.query_discharge("AG000C3", 2020).unwrap(),
            c.query_discharge("AG000C3", 2020).unwrap()
        );
    }

    #[test]
    fn shared_database_is_built_once() {
        let config = DashboardConfig::default().with_seed(5);
        let first = shared(&config).unwrap();
        let second = shared(&DashboardConfig::default().with_seed(6)).unwrap();
        assert!(Rc::ptr_eq(&first.conn, &second.conn));
        assert_eq!(second.config().seed, Some(5));
    }
}
