//! Table loading for the in-memory database.
//!
//! Catalog loaders take CSV text (the embedded fixtures, or any text in
//! the same format); the discharge loader takes generated readings.
//!
//! # CSV Formats
//!
//! - **Stations** (has headers): `STATION_CO,NAME,LAT,LONG`
//! - **Cross-section sites** (has headers): `SITE,LAT,LONG`
//! - **Cross-section points** (has headers): `SITE,YEAR,REDUCED_DISTANCE,ELEVATION_CGL`

use crate::Database;
use gbd_core::cross_section::{CrossSectionPoint, CrossSectionSite};
use gbd_core::discharge::DischargeReading;
use gbd_core::station::Station;
use rusqlite::params;

impl Database {
    /// Load the station catalog; catalog order is kept for display.
    ///
    /// # Example CSV
    /// ```text
    /// STATION_CO,NAME,LAT,LONG
    /// AG000C3,POLAVARAM,17.25167,81.6525
    /// ```
    pub fn load_stations(&self, csv_data: &str) -> anyhow::Result<()> {
        let stations = Station::parse_station_csv(csv_data)?;
        let conn = self.conn.borrow();
        let offset: i64 = conn.query_row("SELECT COUNT(*) FROM stations", [], |row| row.get(0))?;
        for (i, s) in stations.iter().enumerate() {
            conn.execute(
                "INSERT OR REPLACE INTO stations (code, name, latitude, longitude, position)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![s.code, s.name, s.latitude, s.longitude, offset + i as i64],
            )?;
        }
        log::info!("[GBD] loader: Loaded {} stations", stations.len());
        Ok(())
    }

    pub fn load_cross_section_sites(&self, csv_data: &str) -> anyhow::Result<()> {
        let sites = CrossSectionSite::parse_site_csv(csv_data)?;
        let conn = self.conn.borrow();
        for s in &sites {
            conn.execute(
                "INSERT OR REPLACE INTO cross_section_sites (name, latitude, longitude)
                 VALUES (?1, ?2, ?3)",
                params![s.name, s.latitude, s.longitude],
            )?;
        }
        log::info!("[GBD] loader: Loaded {} cross-section sites", sites.len());
        Ok(())
    }

    /// Load surveyed points in file order.
    ///
    /// # Example CSV
    /// ```text
    /// SITE,YEAR,REDUCED_DISTANCE,ELEVATION_CGL
    /// Polavaram,2012,0,24.985
    /// ```
    pub fn load_cross_section(&self, csv_data: &str) -> anyhow::Result<()> {
        let points = CrossSectionPoint::parse_cross_section_csv(csv_data)?;
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO cross_section_points (site, year, reduced_distance, elevation)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for p in &points {
                stmt.execute(params![p.site, p.year, p.reduced_distance, p.elevation])?;
            }
        }
        tx.commit()?;
        log::info!("[GBD] loader: Loaded {} cross-section points", points.len());
        Ok(())
    }

    /// Load generated discharge readings in a single transaction.
    pub fn load_discharge(&self, readings: &[DischargeReading]) -> anyhow::Result<()> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO discharge (station_code, year, month, day, discharge)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for r in readings {
                stmt.execute(params![r.station_code, r.year, r.month, r.day, r.discharge])?;
            }
        }
        tx.commit()?;
        log::info!("[GBD] loader: Loaded {} discharge readings", readings.len());
        Ok(())
    }
}
