//! Dashboard selection state and its transitions.
//!
//! [`Selection::apply`] is the whole of the dashboard's control flow: every
//! widget interaction becomes a [`SelectionEvent`] and yields a new
//! selection, which the view layer then renders.

use gbd_core::error::DashboardError;
use gbd_core::station::Station;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of survey years preselected for comparison in cross-section mode
const DEFAULT_SURVEY_COMPARISON: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Discharge,
    CrossSection,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Discharge, ViewMode::CrossSection];

    /// Radio button label
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Discharge => "Discharge Data",
            ViewMode::CrossSection => "Cross-Section Data",
        }
    }

    pub fn from_label(label: &str) -> Option<ViewMode> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Choices offered by the selectors, derived from the loaded tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SelectionOptions {
    /// Station codes in catalog order
    pub stations: Vec<String>,
    /// Discharge years, most recent first
    pub discharge_years: Vec<i32>,
    /// Cross-section site names
    pub sites: Vec<String>,
    /// Survey years per site, most recent first
    pub site_years: BTreeMap<String, Vec<i32>>,
}

impl SelectionOptions {
    pub fn survey_years(&self, site: &str) -> &[i32] {
        self.site_years.get(site).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub mode: ViewMode,
    /// Station code in discharge mode, site name in cross-section mode
    pub entity: String,
    /// Primary year; only meaningful in discharge mode
    pub year: i32,
    /// Years to overlay on the chart, in selection order, no duplicates
    pub comparison_years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SwitchView(ViewMode),
    /// Station code (or `CODE - NAME` label) or site name
    SelectEntity(String),
    SelectYear(i32),
    SetComparisonYears(Vec<i32>),
    ToggleComparisonYear(i32),
}

impl Selection {
    /// Selection shown when the dashboard first opens.
    pub fn initial(options: &SelectionOptions) -> Selection {
        Self::defaults_for(ViewMode::Discharge, options)
    }

    /// Fresh selection for `mode`: first entity, latest year, and either the
    /// latest year (discharge) or the two latest surveys (cross-section) for
    /// comparison.
    pub fn defaults_for(mode: ViewMode, options: &SelectionOptions) -> Selection {
        match mode {
            ViewMode::Discharge => {
                let year = options.discharge_years.first().copied();
                Selection {
                    mode,
                    entity: options.stations.first().cloned().unwrap_or_default(),
                    year: year.unwrap_or_default(),
                    comparison_years: year.into_iter().collect(),
                }
            }
            ViewMode::CrossSection => {
                let site = options.sites.first().map(String::as_str).unwrap_or_default();
                Self::for_site(site, options)
            }
        }
    }

    fn for_site(site: &str, options: &SelectionOptions) -> Selection {
        let years = options.survey_years(site);
        Selection {
            mode: ViewMode::CrossSection,
            entity: site.to_string(),
            year: years.first().copied().unwrap_or_default(),
            comparison_years: years.iter().copied().take(DEFAULT_SURVEY_COMPARISON).collect(),
        }
    }

    pub fn apply(&self, options: &SelectionOptions, event: SelectionEvent) -> Selection {
        match event {
            SelectionEvent::SwitchView(mode) if mode == self.mode => self.clone(),
            SelectionEvent::SwitchView(mode) => Self::defaults_for(mode, options),
            SelectionEvent::SelectEntity(id) => self.select_entity(options, &id),
            SelectionEvent::SelectYear(year) => self.select_year(options, year),
            SelectionEvent::SetComparisonYears(years) => {
                let mut comparison_years = Vec::with_capacity(years.len());
                for year in years {
                    if !comparison_years.contains(&year) {
                        comparison_years.push(year);
                    }
                }
                Selection {
                    comparison_years,
                    ..self.clone()
                }
            }
            SelectionEvent::ToggleComparisonYear(year) => {
                let mut next = self.clone();
                if let Some(pos) = next.comparison_years.iter().position(|y| *y == year) {
                    next.comparison_years.remove(pos);
                } else {
                    next.comparison_years.push(year);
                }
                next
            }
        }
    }

    fn select_entity(&self, options: &SelectionOptions, id: &str) -> Selection {
        match self.mode {
            ViewMode::Discharge => {
                let code = Station::code_from_label(id);
                if options.stations.iter().any(|s| s == code) {
                    Selection {
                        entity: code.to_string(),
                        ..self.clone()
                    }
                } else {
                    self.reject(DashboardError::UnknownStation(code.to_string()))
                }
            }
            ViewMode::CrossSection => {
                if options.sites.iter().any(|s| s == id) {
                    Self::for_site(id, options)
                } else {
                    self.reject(DashboardError::UnknownSite(id.to_string()))
                }
            }
        }
    }

    fn select_year(&self, options: &SelectionOptions, year: i32) -> Selection {
        if self.mode != ViewMode::Discharge {
            return self.reject(DashboardError::InvalidSelection(
                "a single year applies to discharge data only".to_string(),
            ));
        }
        if !options.discharge_years.contains(&year) {
            return self.reject(DashboardError::InvalidSelection(format!(
                "year {} has no discharge data",
                year
            )));
        }
        let mut next = self.clone();
        if next.comparison_years == [self.year] {
            next.comparison_years = vec![year];
        }
        next.year = year;
        next
    }

    fn reject(&self, reason: DashboardError) -> Selection {
        warn!("[GBD] selection: {}; keeping previous selection", reason);
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SelectionOptions {
        let mut site_years = BTreeMap::new();
        site_years.insert("Polavaram".to_string(), vec![2022, 2012]);
        SelectionOptions {
            stations: vec![
                "AGH40A4".to_string(),
                "AG000C3".to_string(),
                "AGR10C6".to_string(),
            ],
            discharge_years: (2015..=2022).rev().collect(),
            sites: vec!["Polavaram".to_string()],
            site_years,
        }
    }

    #[test]
    fn initial_selection_defaults() {
        let selection = Selection::initial(&options());
        assert_eq!(selection.mode, ViewMode::Discharge);
        assert_eq!(selection.entity, "AGH40A4");
        assert_eq!(selection.year, 2022);
        assert_eq!(selection.comparison_years, vec![2022]);
    }

    #[test]
    fn cross_section_defaults_to_two_latest_surveys() {
        let opts = options();
        let selection = Selection::initial(&opts)
            .apply(&opts, SelectionEvent::SwitchView(ViewMode::CrossSection));
        assert_eq!(selection.entity, "Polavaram");
        assert_eq!(selection.comparison_years, vec![2022, 2012]);
    }

    #[test]
    fn switching_back_resets_discharge_defaults() {
        let opts = options();
        let selection = Selection::initial(&opts)
            .apply(&opts, SelectionEvent::SelectEntity("AG000C3".to_string()))
            .apply(&opts, SelectionEvent::SwitchView(ViewMode::CrossSection))
            .apply(&opts, SelectionEvent::SwitchView(ViewMode::Discharge));
        assert_eq!(selection, Selection::initial(&opts));
    }

    #[test]
    fn switching_to_same_view_is_a_no_op() {
        let opts = options();
        let selection = Selection::initial(&opts)
            .apply(&opts, SelectionEvent::SelectEntity("AG000C3".to_string()));
        let again = selection.apply(&opts, SelectionEvent::SwitchView(ViewMode::Discharge));
        assert_eq!(again, selection);
    }

    #[test]
    fn select_entity_accepts_labels() {
        let opts = options();
        let selection = Selection::initial(&opts).apply(
            &opts,
            SelectionEvent::SelectEntity("AG000C3 - POLAVARAM".to_string()),
        );
        assert_eq!(selection.entity, "AG000C3");
    }

    #[test]
    fn unknown_entity_keeps_previous_selection() {
        let opts = options();
        let selection = Selection::initial(&opts);
        let next = selection.apply(&opts, SelectionEvent::SelectEntity("NOPE".to_string()));
        assert_eq!(next, selection);
    }

    #[test]
    fn comparison_follows_year_while_untouched() {
        let opts = options();
        let selection = Selection::initial(&opts).apply(&opts, SelectionEvent::SelectYear(2020));
        assert_eq!(selection.year, 2020);
        assert_eq!(selection.comparison_years, vec![2020]);
    }

    #[test]
    fn customised_comparison_survives_year_change() {
        let opts = options();
        let selection = Selection::initial(&opts)
            .apply(&opts, SelectionEvent::ToggleComparisonYear(2018))
            .apply(&opts, SelectionEvent::SelectYear(2016));
        assert_eq!(selection.year, 2016);
        assert_eq!(selection.comparison_years, vec![2022, 2018]);
    }

    #[test]
    fn unknown_year_is_rejected() {
        let opts = options();
        let selection = Selection::initial(&opts);
        assert_eq!(selection.apply(&opts, SelectionEvent::SelectYear(1990)), selection);
    }

    #[test]
    fn toggle_twice_restores_set() {
        let opts = options();
        let selection = Selection::initial(&opts);
        let toggled = selection
            .apply(&opts, SelectionEvent::ToggleComparisonYear(2017))
            .apply(&opts, SelectionEvent::ToggleComparisonYear(2019));
        assert_eq!(toggled.comparison_years, vec![2022, 2017, 2019]);
        let restored = toggled
            .apply(&opts, SelectionEvent::ToggleComparisonYear(2019))
            .apply(&opts, SelectionEvent::ToggleComparisonYear(2017));
        assert_eq!(restored, selection);
    }

    #[test]
    fn set_comparison_drops_duplicates_in_order() {
        let opts = options();
        let selection = Selection::initial(&opts).apply(
            &opts,
            SelectionEvent::SetComparisonYears(vec![2019, 2016, 2019, 2021]),
        );
        assert_eq!(selection.comparison_years, vec![2019, 2016, 2021]);
        let cleared = selection.apply(&opts, SelectionEvent::SetComparisonYears(vec![]));
        assert!(cleared.comparison_years.is_empty());
    }

    #[test]
    fn view_mode_labels() {
        assert_eq!(ViewMode::from_label("Cross-Section Data"), Some(ViewMode::CrossSection));
        assert_eq!(ViewMode::from_label("Discharge Data"), Some(ViewMode::Discharge));
        assert_eq!(ViewMode::from_label("Rainfall"), None);
    }
}
