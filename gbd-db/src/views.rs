//! Selection-driven views over the tables.

use crate::Database;
use gbd_core::error::DashboardError;
use gbd_data::selection::{Selection, SelectionOptions};
use gbd_data::views::{CrossSectionView, DischargeView};
use std::collections::BTreeMap;

impl Database {
    /// Choices for every selector, read from the loaded tables.
    pub fn selection_options(&self) -> anyhow::Result<SelectionOptions> {
        let stations = self.query_stations()?.into_iter().map(|s| s.code).collect();
        let sites: Vec<String> = self.query_sites()?.into_iter().map(|s| s.name).collect();
        let mut site_years = BTreeMap::new();
        for site in &sites {
            site_years.insert(site.clone(), self.query_cross_section_years(site)?);
        }
        Ok(SelectionOptions {
            stations,
            discharge_years: self.query_discharge_years()?,
            sites,
            site_years,
        })
    }

    /// Station-year subset plus one chart series per comparison year.
    pub fn discharge_view(&self, selection: &Selection) -> anyhow::Result<DischargeView> {
        let station = self
            .query_station(&selection.entity)?
            .ok_or_else(|| DashboardError::UnknownStation(selection.entity.clone()))?;
        let readings = self.query_discharge(&station.code, selection.year)?;
        if readings.is_empty() {
            log::warn!(
                "[GBD] views: {} for {} {}",
                DashboardError::EmptyResultSet,
                station.code,
                selection.year
            );
        }
        let comparison = selection
            .comparison_years
            .iter()
            .map(|&year| self.query_discharge(&station.code, year).map(|r| (year, r)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let stations = self.query_stations()?;
        let view = DischargeView::assemble(
            station,
            selection.year,
            readings,
            comparison,
            &stations,
            self.config().discharge_preview_rows,
        )?;
        log::info!(
            "[GBD] views: discharge view for {} {} with {} series",
            view.station.code,
            view.year,
            view.chart.series.len()
        );
        Ok(view)
    }

    /// One profile per selected survey year, plus the matching points for
    /// preview and export.
    pub fn cross_section_view(&self, selection: &Selection) -> anyhow::Result<CrossSectionView> {
        let site = self
            .query_site(&selection.entity)?
            .ok_or_else(|| DashboardError::UnknownSite(selection.entity.clone()))?;
        let profiles = selection
            .comparison_years
            .iter()
            .map(|&year| self.query_cross_section(&site.name, year).map(|p| (year, p)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        let points = self.query_cross_section_in_years(&site.name, &selection.comparison_years)?;
        let sites = self.query_sites()?;
        let view = CrossSectionView::assemble(
            site,
            profiles,
            points,
            &sites,
            self.config().cross_section_preview_rows,
        )?;
        log::info!(
            "[GBD] views: cross-section view for {} with {} profiles",
            view.site.name,
            view.chart.series.len()
        );
        Ok(view)
    }
}
