//! Read-only commands: catalog listings, statistics, boundary check and
//! chart series.

use gbd_core::boundary::load_boundary;
use gbd_core::error::DashboardError;
use gbd_core::station::Station;
use gbd_data::selection::{Selection, SelectionEvent, ViewMode};
use gbd_data::stats::{metric_cards, DischargeStats, NO_DATA};
use gbd_db::Database;
use gbd_utils::numbers::{format_coordinate, format_thousands};
use log::info;
use std::io::Write;
use std::path::Path;

pub fn list_stations(db: &Database, out: &mut impl Write) -> anyhow::Result<()> {
    let stations = db.query_stations()?;
    for s in &stations {
        writeln!(
            out,
            "{:<10} {:<20} {:>10} {:>10}",
            s.code,
            s.name,
            format_coordinate(s.latitude),
            format_coordinate(s.longitude)
        )?;
    }
    info!("[GBD] cmd: Listed {} stations", stations.len());
    Ok(())
}

pub fn list_sites(db: &Database, out: &mut impl Write) -> anyhow::Result<()> {
    for site in db.query_sites()? {
        let years = db
            .query_cross_section_years(&site.name)?
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "{:<12} {:>10} {:>10}  surveys: {}",
            site.name,
            format_coordinate(site.latitude),
            format_coordinate(site.longitude),
            years
        )?;
    }
    Ok(())
}

/// Min, max and mean discharge for one station-year; an empty subset
/// prints "No data" for each metric.
pub fn year_stats(db: &Database, code: &str, year: i32, out: &mut impl Write) -> anyhow::Result<()> {
    let station = db
        .query_station(code)?
        .ok_or_else(|| DashboardError::UnknownStation(code.to_string()))?;
    let readings = db.query_discharge(&station.code, year)?;
    let stats = DischargeStats::from_readings(&readings).ok();
    writeln!(out, "{} {}", station.label(), year)?;
    for metric in metric_cards(stats.as_ref()) {
        writeln!(out, "  {:<24} {}", metric.label, metric.value)?;
    }
    Ok(())
}

/// One line per year with readings, aggregated in SQL.
pub fn station_summary(db: &Database, code: &str, out: &mut impl Write) -> anyhow::Result<()> {
    let station = db
        .query_station(code)?
        .ok_or_else(|| DashboardError::UnknownStation(code.to_string()))?;
    let summary = db.query_discharge_summary(&station.code)?;
    writeln!(out, "{}", station.label())?;
    if summary.is_empty() {
        writeln!(out, "  {}", NO_DATA)?;
        return Ok(());
    }
    writeln!(out, "  {:<6} {:>5} {:>10} {:>10} {:>10}", "Year", "Days", "Min", "Max", "Mean")?;
    for row in &summary {
        writeln!(
            out,
            "  {:<6} {:>5} {:>10} {:>10} {:>10}",
            row.year,
            row.days,
            format_thousands(row.min, 2),
            format_thousands(row.max, 2),
            format_thousands(row.mean, 2)
        )?;
    }
    Ok(())
}

/// Report whether the boundary file loads. An unavailable boundary is a
/// warning, not a failure.
pub fn check_boundary(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let status = load_boundary(path);
    match status.boundary() {
        Some(boundary) => {
            writeln!(
                out,
                "Boundary {}: {} feature(s)",
                path.display(),
                boundary.feature_count()
            )?;
            if let Some((min_lon, min_lat, max_lon, max_lat)) = boundary.bounds() {
                writeln!(
                    out,
                    "  bounds: lon {}..{}, lat {}..{}",
                    format_coordinate(min_lon),
                    format_coordinate(max_lon),
                    format_coordinate(min_lat),
                    format_coordinate(max_lat)
                )?;
            }
        }
        None => {
            writeln!(
                out,
                "Boundary unavailable: {}",
                status.warning().unwrap_or("unknown reason")
            )?;
        }
    }
    Ok(())
}

/// Chart series for a selection, as pretty JSON. Without `years` the
/// selector defaults apply.
pub fn print_series(
    db: &Database,
    mode: ViewMode,
    id: &str,
    years: &[i32],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let options = db.selection_options()?;
    let mut selection = Selection::defaults_for(mode, &options)
        .apply(&options, SelectionEvent::SelectEntity(id.to_string()));
    let wanted = match mode {
        ViewMode::Discharge => Station::code_from_label(id),
        ViewMode::CrossSection => id,
    };
    if selection.entity != wanted {
        return Err(match mode {
            ViewMode::Discharge => DashboardError::UnknownStation(wanted.to_string()),
            ViewMode::CrossSection => DashboardError::UnknownSite(id.to_string()),
        }
        .into());
    }
    if !years.is_empty() {
        selection = selection.apply(&options, SelectionEvent::SetComparisonYears(years.to_vec()));
    }

    let json = match mode {
        ViewMode::Discharge => serde_json::to_string_pretty(&db.discharge_view(&selection)?.chart)?,
        ViewMode::CrossSection => {
            serde_json::to_string_pretty(&db.cross_section_view(&selection)?.chart)?
        }
    };
    writeln!(out, "{}", json)?;
    Ok(())
}
