//! CSV file exports, the command-line counterpart of the download button.

use gbd_core::error::DashboardError;
use gbd_data::export::{cross_section_export, discharge_export, ExportFile};
use gbd_db::Database;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Write `discharge_<code>_<year>.csv` into `out_dir` and return its path.
pub fn export_discharge(
    db: &Database,
    code: &str,
    year: i32,
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let station = db
        .query_station(code)?
        .ok_or_else(|| DashboardError::UnknownStation(code.to_string()))?;
    let readings = db.query_discharge(&station.code, year)?;
    if readings.is_empty() {
        warn!(
            "[GBD] cmd: {} for {} {}; writing header only",
            DashboardError::EmptyResultSet,
            station.code,
            year
        );
    }
    write_export(&discharge_export(&station, year, &readings)?, out_dir)
}

/// Write `cross_section_<site>.csv` with the points of `years` (every
/// survey year when empty) into `out_dir`.
pub fn export_cross_section(
    db: &Database,
    site_name: &str,
    years: &[i32],
    out_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let site = db
        .query_site(site_name)?
        .ok_or_else(|| DashboardError::UnknownSite(site_name.to_string()))?;
    let years = if years.is_empty() {
        db.query_cross_section_years(&site.name)?
    } else {
        years.to_vec()
    };
    let points = db.query_cross_section_in_years(&site.name, &years)?;
    write_export(&cross_section_export(&site, &points)?, out_dir)
}

fn write_export(file: &ExportFile, out_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", out_dir.display(), e))?;
    let path = out_dir.join(&file.file_name);
    std::fs::write(&path, &file.contents)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
    info!(
        "[GBD] cmd: Wrote {} ({} lines)",
        path.display(),
        file.contents.lines().count()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbd_core::config::DashboardConfig;

    fn seeded() -> Database {
        Database::seeded(&DashboardConfig::default().with_seed(31)).unwrap()
    }

    fn read_records(path: &Path) -> (csv::StringRecord, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        let records = rdr.records().collect::<Result<Vec<_>, _>>().unwrap();
        (headers, records)
    }

    #[test]
    fn discharge_file_has_one_row_per_day() {
        let dir = tempfile::tempdir().unwrap();
        let db = seeded();
        let path = export_discharge(&db, "AG000C3", 2020, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "discharge_AG000C3_2020.csv");
        let (headers, records) = read_records(&path);
        assert_eq!(&headers[0], "STATION_CO");
        assert_eq!(records.len(), 366);
        assert_eq!(&records[0][8], "2020-01-01");
        assert_eq!(&records[365][8], "2020-12-31");
        for record in &records {
            let value: f64 = record[4].parse().unwrap();
            assert!((5.0..=50.0).contains(&value));
        }
    }

    #[test]
    fn discharge_without_rows_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_discharge(&seeded(), "AG000C3", 2001, dir.path()).unwrap();
        let (_, records) = read_records(&path);
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_station_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export_discharge(&seeded(), "NOPE", 2020, dir.path()).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn cross_section_defaults_to_every_survey() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_cross_section(&seeded(), "Polavaram", &[], dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "cross_section_Polavaram.csv");
        let (headers, records) = read_records(&path);
        assert_eq!(&headers[0], "Station Name");
        assert_eq!(records.len(), 119);
    }

    #[test]
    fn cross_section_limited_to_requested_year() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_cross_section(&seeded(), "Polavaram", &[2022], dir.path()).unwrap();
        let (_, records) = read_records(&path);
        assert_eq!(records.len(), 48);
        assert!(records.iter().all(|r| &r[1] == "2022"));
    }

    #[test]
    fn out_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports/2024");
        let path = export_cross_section(&seeded(), "Polavaram", &[2012], &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }
}
