//! Typed query methods over the dashboard tables.
//!
//! Catalog and reading queries return the `gbd-core` record types, which
//! serialize to JSON for the chart and map bridge.

use crate::models::YearSummary;
use crate::Database;
use gbd_core::cross_section::{CrossSectionPoint, CrossSectionSite};
use gbd_core::discharge::DischargeReading;
use gbd_core::station::Station;
use rusqlite::{params, OptionalExtension};

impl Database {
    // ───────────────────── Catalog Queries ─────────────────────

    /// All stations in catalog order.
    pub fn query_stations(&self) -> anyhow::Result<Vec<Station>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT code, name, latitude, longitude FROM stations ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Station {
                    code: row.get(0)?,
                    name: row.get(1)?,
                    latitude: row.get(2)?,
                    longitude: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GBD] query: query_stations returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_station(&self, code: &str) -> anyhow::Result<Option<Station>> {
        let conn = self.conn.borrow();
        let station = conn
            .query_row(
                "SELECT code, name, latitude, longitude FROM stations WHERE code = ?1",
                params![code],
                |row| {
                    Ok(Station {
                        code: row.get(0)?,
                        name: row.get(1)?,
                        latitude: row.get(2)?,
                        longitude: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(station)
    }

    pub fn query_sites(&self) -> anyhow::Result<Vec<CrossSectionSite>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT name, latitude, longitude FROM cross_section_sites ORDER BY rowid")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CrossSectionSite {
                    name: row.get(0)?,
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("[GBD] query: query_sites returned {} records", rows.len());
        Ok(rows)
    }

    pub fn query_site(&self, name: &str) -> anyhow::Result<Option<CrossSectionSite>> {
        let conn = self.conn.borrow();
        let site = conn
            .query_row(
                "SELECT name, latitude, longitude FROM cross_section_sites WHERE name = ?1",
                params![name],
                |row| {
                    Ok(CrossSectionSite {
                        name: row.get(0)?,
                        latitude: row.get(1)?,
                        longitude: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(site)
    }

    // ───────────────────── Discharge Queries ─────────────────────

    /// Readings for one station and calendar year, in date order.
    ///
    /// An unknown station or uncovered year yields an empty vector.
    pub fn query_discharge(&self, station_code: &str, year: i32) -> anyhow::Result<Vec<DischargeReading>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT station_code, year, month, day, discharge FROM discharge
             WHERE station_code = ?1 AND year = ?2
             ORDER BY month, day",
        )?;
        let rows = stmt
            .query_map(params![station_code, year], |row| {
                Ok(DischargeReading {
                    station_code: row.get(0)?,
                    year: row.get(1)?,
                    month: row.get(2)?,
                    day: row.get(3)?,
                    discharge: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GBD] query: query_discharge({}, {}) returned {} records",
            station_code,
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Years with discharge data, most recent first.
    pub fn query_discharge_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM discharge ORDER BY year DESC")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Min/max/mean discharge per year for one station, oldest year first.
    pub fn query_discharge_summary(&self, station_code: &str) -> anyhow::Result<Vec<YearSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, COUNT(*), MIN(discharge), MAX(discharge), AVG(discharge)
             FROM discharge
             WHERE station_code = ?1
             GROUP BY year
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![station_code], |row| {
                let days: i64 = row.get(1)?;
                let min: f64 = row.get(2)?;
                let max: f64 = row.get(3)?;
                let mean: f64 = row.get(4)?;
                Ok(YearSummary {
                    year: row.get(0)?,
                    days: days as usize,
                    min,
                    max,
                    mean: mean.clamp(min, max),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GBD] query: query_discharge_summary({}) returned {} records",
            station_code,
            rows.len()
        );
        Ok(rows)
    }

    pub fn count_discharge(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM discharge", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ───────────────────── Cross-Section Queries ─────────────────────

    /// One survey profile, ordered by reduced distance.
    pub fn query_cross_section(&self, site: &str, year: i32) -> anyhow::Result<Vec<CrossSectionPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT site, year, reduced_distance, elevation FROM cross_section_points
             WHERE site = ?1 AND year = ?2
             ORDER BY reduced_distance, id",
        )?;
        let rows = stmt
            .query_map(params![site, year], |row| {
                Ok(CrossSectionPoint {
                    site: row.get(0)?,
                    year: row.get(1)?,
                    reduced_distance: row.get(2)?,
                    elevation: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[GBD] query: query_cross_section({}, {}) returned {} records",
            site,
            year,
            rows.len()
        );
        Ok(rows)
    }

    /// Points of `site` whose survey year is in `years`, in survey table order.
    pub fn query_cross_section_in_years(
        &self,
        site: &str,
        years: &[i32],
    ) -> anyhow::Result<Vec<CrossSectionPoint>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT site, year, reduced_distance, elevation FROM cross_section_points
             WHERE site = ?1
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![site], |row| {
                Ok(CrossSectionPoint {
                    site: row.get(0)?,
                    year: row.get(1)?,
                    reduced_distance: row.get(2)?,
                    elevation: row.get(3)?,
                })
            })?
            .filter(|p| p.as_ref().map_or(true, |p| years.contains(&p.year)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Survey years for a site, most recent first.
    pub fn query_cross_section_years(&self, site: &str) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT year FROM cross_section_points WHERE site = ?1 ORDER BY year DESC",
        )?;
        let years = stmt
            .query_map(params![site], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    pub fn count_cross_section_points(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM cross_section_points", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
