//! Render-ready structures for the chart, map and preview outputs.
//!
//! The builders here only arrange data already filtered by the table
//! layer; each output consumes the same subset independently.

use crate::export::{cross_section_export, discharge_export, ExportFile};
use crate::stats::DischargeStats;
use gbd_core::cross_section::{CrossSectionPoint, CrossSectionSite};
use gbd_core::discharge::DischargeReading;
use gbd_core::station::Station;
use gbd_utils::colors::{hex_to_rgba, series_color, DEFAULT_MARKER, SELECTED_MARKER};
use gbd_utils::dates::format_date;
use serde::Serialize;

pub const DEFAULT_MAP_ZOOM: u8 = 7;
/// Opacity of the area under a cross-section profile
pub const PROFILE_FILL_ALPHA: f64 = 0.3;

pub const DATE_LABEL: &str = "Date";
pub const DISCHARGE_LABEL: &str = "Discharge (m³/s)";
pub const DISTANCE_LABEL: &str = "Reduced Distance (m)";
pub const ELEVATION_LABEL: &str = "Elevation (m)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePoint {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub distance: f64,
    pub elevation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<P> {
    pub name: String,
    pub color: String,
    /// Area fill under the line, if any
    pub fill_color: Option<String>,
    pub points: Vec<P>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData<P> {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries<P>>,
}

pub type HydrographChart = ChartData<DatePoint>;
pub type CrossSectionChart = ChartData<ProfilePoint>;

/// One chart series per comparison year, in the order given.
pub fn hydrograph_chart(
    station: &Station,
    by_year: Vec<(i32, Vec<DischargeReading>)>,
) -> HydrographChart {
    let series = by_year
        .into_iter()
        .enumerate()
        .map(|(i, (year, readings))| ChartSeries {
            name: year.to_string(),
            color: series_color(i).to_string(),
            fill_color: None,
            points: readings
                .iter()
                .filter_map(|r| {
                    r.date().map(|d| DatePoint {
                        date: format_date(&d),
                        value: r.discharge,
                    })
                })
                .collect(),
        })
        .collect();
    ChartData {
        title: format!("Discharge Hydrograph - {}", station.name),
        x_label: DATE_LABEL.to_string(),
        y_label: DISCHARGE_LABEL.to_string(),
        series,
    }
}

/// One filled profile per survey year, in the order given.
pub fn cross_section_chart(
    site: &str,
    by_year: Vec<(i32, Vec<CrossSectionPoint>)>,
) -> CrossSectionChart {
    let series = by_year
        .into_iter()
        .enumerate()
        .map(|(i, (year, points))| {
            let color = series_color(i);
            ChartSeries {
                name: year.to_string(),
                color: color.to_string(),
                fill_color: hex_to_rgba(color, PROFILE_FILL_ALPHA),
                points: points
                    .iter()
                    .map(|p| ProfilePoint {
                        distance: p.reduced_distance,
                        elevation: p.elevation,
                    })
                    .collect(),
            }
        })
        .collect();
    ChartData {
        title: format!("Cross-Section at {}", site),
        x_label: DISTANCE_LABEL.to_string(),
        y_label: ELEVATION_LABEL.to_string(),
        series,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Popup text
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub selected: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// `[lat, lon]`; `None` when there is nothing to place
    pub center: Option<[f64; 2]>,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

impl MapView {
    fn from_markers(markers: Vec<MapMarker>) -> Self {
        let n = markers.len() as f64;
        let center = (!markers.is_empty()).then(|| {
            [
                markers.iter().map(|m| m.latitude).sum::<f64>() / n,
                markers.iter().map(|m| m.longitude).sum::<f64>() / n,
            ]
        });
        MapView {
            center,
            zoom: DEFAULT_MAP_ZOOM,
            markers,
        }
    }

    pub fn selected(&self) -> impl Iterator<Item = &MapMarker> {
        self.markers.iter().filter(|m| m.selected)
    }
}

fn marker(label: String, latitude: f64, longitude: f64, selected: bool) -> MapMarker {
    MapMarker {
        label,
        latitude,
        longitude,
        selected,
        color: if selected { SELECTED_MARKER } else { DEFAULT_MARKER },
    }
}

pub fn station_map(stations: &[Station], selected_code: &str) -> MapView {
    MapView::from_markers(
        stations
            .iter()
            .map(|s| marker(s.label(), s.latitude, s.longitude, s.code == selected_code))
            .collect(),
    )
}

pub fn site_map(sites: &[CrossSectionSite], selected_site: &str) -> MapView {
    MapView::from_markers(
        sites
            .iter()
            .map(|s| marker(s.name.clone(), s.latitude, s.longitude, s.name == selected_site))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargePreviewRow {
    pub date: String,
    pub discharge: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSectionPreviewRow {
    pub year: i32,
    pub reduced_distance: f64,
    pub elevation: f64,
}

pub fn discharge_preview(readings: &[DischargeReading], rows: usize) -> Vec<DischargePreviewRow> {
    readings
        .iter()
        .take(rows)
        .map(|r| DischargePreviewRow {
            date: r.date().map(|d| format_date(&d)).unwrap_or_default(),
            discharge: r.discharge,
        })
        .collect()
}

pub fn cross_section_preview(points: &[CrossSectionPoint], rows: usize) -> Vec<CrossSectionPreviewRow> {
    points
        .iter()
        .take(rows)
        .map(|p| CrossSectionPreviewRow {
            year: p.year,
            reduced_distance: p.reduced_distance,
            elevation: p.elevation,
        })
        .collect()
}

/// Everything the discharge page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargeView {
    pub station: Station,
    pub year: i32,
    /// Station-year subset behind the statistics, preview and export
    pub readings: Vec<DischargeReading>,
    /// `None` when the subset is empty
    pub stats: Option<DischargeStats>,
    pub chart: HydrographChart,
    pub preview: Vec<DischargePreviewRow>,
    pub map: MapView,
    pub export: ExportFile,
}

impl DischargeView {
    pub fn assemble(
        station: Station,
        year: i32,
        readings: Vec<DischargeReading>,
        comparison: Vec<(i32, Vec<DischargeReading>)>,
        stations: &[Station],
        preview_rows: usize,
    ) -> anyhow::Result<Self> {
        let stats = DischargeStats::from_readings(&readings).ok();
        let chart = hydrograph_chart(&station, comparison);
        let preview = discharge_preview(&readings, preview_rows);
        let map = station_map(stations, &station.code);
        let export = discharge_export(&station, year, &readings)?;
        Ok(Self {
            station,
            year,
            readings,
            stats,
            chart,
            preview,
            map,
            export,
        })
    }
}

/// Everything the cross-section page shows for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossSectionView {
    pub site: CrossSectionSite,
    pub years: Vec<i32>,
    /// Site points whose survey year is selected, for preview and export
    pub points: Vec<CrossSectionPoint>,
    pub chart: CrossSectionChart,
    pub preview: Vec<CrossSectionPreviewRow>,
    pub map: MapView,
    pub export: ExportFile,
}

impl CrossSectionView {
    pub fn assemble(
        site: CrossSectionSite,
        profiles: Vec<(i32, Vec<CrossSectionPoint>)>,
        points: Vec<CrossSectionPoint>,
        sites: &[CrossSectionSite],
        preview_rows: usize,
    ) -> anyhow::Result<Self> {
        let years = profiles.iter().map(|(year, _)| *year).collect();
        let chart = cross_section_chart(&site.name, profiles);
        let preview = cross_section_preview(&points, preview_rows);
        let map = site_map(sites, &site.name);
        let export = cross_section_export(&site, &points)?;
        Ok(Self {
            site,
            years,
            points,
            chart,
            preview,
            map,
            export,
        })
    }
}
