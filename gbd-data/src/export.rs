//! CSV export of the filtered subsets offered for download.

use gbd_core::cross_section::{CrossSectionPoint, CrossSectionSite};
use gbd_core::discharge::DischargeReading;
use gbd_core::station::Station;
use gbd_utils::dates::format_date;
use serde::{Deserialize, Serialize};

pub const CSV_MIME: &str = "text/csv";

/// A row type with a fixed header line.
///
/// The header is written explicitly so an empty subset still exports as a
/// header-only file.
pub trait ExportRecord: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DischargeExportRow {
    #[serde(rename = "STATION_CO")]
    pub station_code: String,
    #[serde(rename = "YEAR")]
    pub year: i32,
    #[serde(rename = "MONTH")]
    pub month: u32,
    #[serde(rename = "DAY")]
    pub day: u32,
    #[serde(rename = "Discharge")]
    pub discharge: f64,
    #[serde(rename = "Station Name")]
    pub station_name: String,
    #[serde(rename = "Lat")]
    pub latitude: f64,
    #[serde(rename = "Long")]
    pub longitude: f64,
    /// `YYYY-MM-DD`
    #[serde(rename = "Date")]
    pub date: String,
}

impl ExportRecord for DischargeExportRow {
    const HEADERS: &'static [&'static str] = &[
        "STATION_CO",
        "YEAR",
        "MONTH",
        "DAY",
        "Discharge",
        "Station Name",
        "Lat",
        "Long",
        "Date",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionExportRow {
    #[serde(rename = "Station Name")]
    pub site: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Reduced Distance")]
    pub reduced_distance: f64,
    #[serde(rename = "Elevation CGL")]
    pub elevation: f64,
    #[serde(rename = "Lat")]
    pub latitude: f64,
    #[serde(rename = "Long")]
    pub longitude: f64,
}

impl ExportRecord for CrossSectionExportRow {
    const HEADERS: &'static [&'static str] = &[
        "Station Name",
        "Year",
        "Reduced Distance",
        "Elevation CGL",
        "Lat",
        "Long",
    ];
}

/// A ready-to-download file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

pub fn discharge_file_name(station_code: &str, year: i32) -> String {
    format!("discharge_{}_{}.csv", station_code, year)
}

pub fn cross_section_file_name(site: &str) -> String {
    format!("cross_section_{}.csv", site)
}

pub fn discharge_rows(station: &Station, readings: &[DischargeReading]) -> Vec<DischargeExportRow> {
    readings
        .iter()
        .map(|r| DischargeExportRow {
            station_code: r.station_code.clone(),
            year: r.year,
            month: r.month,
            day: r.day,
            discharge: r.discharge,
            station_name: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            date: r.date().map(|d| format_date(&d)).unwrap_or_default(),
        })
        .collect()
}

pub fn cross_section_rows(
    site: &CrossSectionSite,
    points: &[CrossSectionPoint],
) -> Vec<CrossSectionExportRow> {
    points
        .iter()
        .map(|p| CrossSectionExportRow {
            site: p.site.clone(),
            year: p.year,
            reduced_distance: p.reduced_distance,
            elevation: p.elevation,
            latitude: site.latitude,
            longitude: site.longitude,
        })
        .collect()
}

/// Header line plus one line per row; fields quoted only when needed.
pub fn to_csv<T: ExportRecord>(rows: &[T]) -> anyhow::Result<String> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    wtr.write_record(T::HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV export: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn discharge_export(
    station: &Station,
    year: i32,
    readings: &[DischargeReading],
) -> anyhow::Result<ExportFile> {
    Ok(ExportFile {
        file_name: discharge_file_name(&station.code, year),
        mime: CSV_MIME,
        contents: to_csv(&discharge_rows(station, readings))?,
    })
}

pub fn cross_section_export(
    site: &CrossSectionSite,
    points: &[CrossSectionPoint],
) -> anyhow::Result<ExportFile> {
    Ok(ExportFile {
        file_name: cross_section_file_name(&site.name),
        mime: CSV_MIME,
        contents: to_csv(&cross_section_rows(site, points))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{seeded_rng, DischargeGenerator};

    fn polavaram_station() -> Station {
        Station {
            code: "AG000C3".to_string(),
            name: "POLAVARAM".to_string(),
            latitude: 17.25167,
            longitude: 81.6525,
        }
    }

    fn read_back<T: for<'de> Deserialize<'de>>(contents: &str) -> Vec<T> {
        csv::Reader::from_reader(contents.as_bytes())
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .unwrap()
    }

    #[test]
    fn discharge_export_round_trips() {
        let station = polavaram_station();
        let readings =
            DischargeGenerator::default().generate_year(&station.code, 2020, &mut seeded_rng(Some(11)));
        let file = discharge_export(&station, 2020, &readings).unwrap();
        assert_eq!(file.file_name, "discharge_AG000C3_2020.csv");
        assert_eq!(file.mime, "text/csv");
        assert_eq!(file.contents.lines().count(), readings.len() + 1);
        assert_eq!(
            file.contents.lines().next(),
            Some("STATION_CO,YEAR,MONTH,DAY,Discharge,Station Name,Lat,Long,Date")
        );

        let rows: Vec<DischargeExportRow> = read_back(&file.contents);
        assert_eq!(rows, discharge_rows(&station, &readings));
        assert_eq!(rows[0].date, "2020-01-01");
        assert_eq!(rows[365].date, "2020-12-31");
    }

    #[test]
    fn cross_section_export_round_trips() {
        let points = CrossSectionPoint::get_cross_section_vector();
        let sites = CrossSectionSite::get_site_vector();
        let site = CrossSectionSite::find(&sites, "Polavaram").unwrap();
        let file = cross_section_export(site, &points).unwrap();
        assert_eq!(file.file_name, "cross_section_Polavaram.csv");
        assert_eq!(
            file.contents.lines().next(),
            Some("Station Name,Year,Reduced Distance,Elevation CGL,Lat,Long")
        );
        let rows: Vec<CrossSectionExportRow> = read_back(&file.contents);
        assert_eq!(rows.len(), 71 + 48);
        assert_eq!(rows, cross_section_rows(site, &points));
    }

    #[test]
    fn empty_subset_exports_header_only() {
        let file = discharge_export(&polavaram_station(), 2020, &[]).unwrap();
        assert_eq!(
            file.contents,
            "STATION_CO,YEAR,MONTH,DAY,Discharge,Station Name,Lat,Long,Date\n"
        );
    }

    #[test]
    fn names_with_delimiters_are_quoted() {
        let station = Station {
            name: "GODAVARI, \"UPPER\"".to_string(),
            ..polavaram_station()
        };
        let date = chrono::NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let readings = vec![DischargeReading::new("AG000C3", date, 12.5)];
        let contents = to_csv(&discharge_rows(&station, &readings)).unwrap();
        assert!(contents.contains("\"GODAVARI, \"\"UPPER\"\"\""));
        let rows: Vec<DischargeExportRow> = read_back(&contents);
        assert_eq!(rows[0].station_name, "GODAVARI, \"UPPER\"");
        assert_eq!(rows[0].discharge, 12.5);
    }
}
