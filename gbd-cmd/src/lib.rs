//! Command implementations for the GBD CLI.
//!
//! Every command except `boundary` builds the same seeded in-memory tables
//! the dashboard uses, then prints or writes one slice of them.

use clap::{Args, Subcommand, ValueEnum};
use gbd_core::config::DashboardConfig;
use gbd_data::selection::ViewMode;
use gbd_db::Database;
use std::io::Write;
use std::path::PathBuf;

pub mod export;
pub mod query;

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Seed for the generated discharge series (fresh values when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags given here take precedence
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Basin boundary GeoJSON file
    #[arg(long, global = true)]
    pub boundary: Option<PathBuf>,
}

impl GlobalArgs {
    /// The configuration file (or defaults) with the flag overrides applied.
    pub fn dashboard_config(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_json_file(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(boundary) = &self.boundary {
            config.boundary_path = boundary.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesView {
    Discharge,
    CrossSection,
}

impl From<SeriesView> for ViewMode {
    fn from(view: SeriesView) -> Self {
        match view {
            SeriesView::Discharge => ViewMode::Discharge,
            SeriesView::CrossSection => ViewMode::CrossSection,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the gauging stations
    Stations,

    /// List the cross-section survey sites and their survey years
    Sites,

    /// Discharge statistics for a station, per year or for one year
    Stats {
        /// Station code, e.g. AG000C3
        #[arg(short, long)]
        station: String,

        /// Limit to one year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Write the daily discharge of one station-year as CSV
    ExportDischarge {
        #[arg(short, long)]
        station: String,

        #[arg(short, long)]
        year: i32,

        /// Directory the file is written into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Write the surveyed points of a site as CSV
    ExportCrossSection {
        #[arg(short, long)]
        site: String,

        /// Survey years to include (repeatable); all years when omitted
        #[arg(short, long = "year")]
        years: Vec<i32>,

        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Check that the basin boundary file loads
    Boundary,

    /// Print the chart series for a selection as JSON
    Series {
        #[arg(long, value_enum, default_value_t = SeriesView::Discharge)]
        view: SeriesView,

        /// Station code (discharge) or site name (cross-section)
        #[arg(short, long)]
        id: String,

        /// Comparison years, in overlay order (repeatable)
        #[arg(short, long = "year")]
        years: Vec<i32>,
    },
}

pub fn run(global: &GlobalArgs, command: Command) -> anyhow::Result<()> {
    let config = global.dashboard_config()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Command::Boundary = command {
        return query::check_boundary(&config.boundary_path, &mut out);
    }

    let db = Database::seeded(&config)?;
    execute(&db, command, &mut out)
}

/// Run a table-backed command against an already built database.
pub fn execute(db: &Database, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Stations => query::list_stations(db, out),
        Command::Sites => query::list_sites(db, out),
        Command::Stats { station, year } => match year {
            Some(year) => query::year_stats(db, &station, year, out),
            None => query::station_summary(db, &station, out),
        },
        Command::ExportDischarge {
            station,
            year,
            out_dir,
        } => {
            let path = export::export_discharge(db, &station, year, &out_dir)?;
            writeln!(out, "Wrote {}", path.display())?;
            Ok(())
        }
        Command::ExportCrossSection {
            site,
            years,
            out_dir,
        } => {
            let path = export::export_cross_section(db, &site, &years, &out_dir)?;
            writeln!(out, "Wrote {}", path.display())?;
            Ok(())
        }
        Command::Boundary => {
            query::check_boundary(&db.config().boundary_path, out)
        }
        Command::Series { view, id, years } => query::print_series(db, view.into(), &id, &years, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let global = GlobalArgs {
            seed: Some(9),
            config: None,
            boundary: Some(PathBuf::from("elsewhere.geojson")),
        };
        let config = global.dashboard_config().unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.boundary_path, PathBuf::from("elsewhere.geojson"));
        assert_eq!(config.first_year, 2015);
    }

    #[test]
    fn config_file_is_read_and_seed_flag_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 1, "first_year": 2019, "discharge_preview_rows": 3}}"#).unwrap();
        let global = GlobalArgs {
            seed: Some(2),
            config: Some(file.path().to_path_buf()),
            boundary: None,
        };
        let config = global.dashboard_config().unwrap();
        assert_eq!(config.seed, Some(2));
        assert_eq!(config.first_year, 2019);
        assert_eq!(config.last_year, 2022);
        assert_eq!(config.discharge_preview_rows, 3);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let global = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/gbd.json")),
            ..GlobalArgs::default()
        };
        assert!(global.dashboard_config().is_err());
    }

    #[test]
    fn execute_writes_export_into_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::seeded(&DashboardConfig::default().with_seed(4)).unwrap();
        let mut out = Vec::new();
        execute(
            &db,
            Command::ExportDischarge {
                station: "AG000C3".to_string(),
                year: 2016,
                out_dir: dir.path().to_path_buf(),
            },
            &mut out,
        )
        .unwrap();
        assert!(dir.path().join("discharge_AG000C3_2016.csv").exists());
        assert!(String::from_utf8(out).unwrap().starts_with("Wrote "));
    }
}
