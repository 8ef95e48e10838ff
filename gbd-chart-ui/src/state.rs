//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gbd_core::cross_section::CrossSectionSite;
use gbd_core::station::Station;
use gbd_data::export::ExportFile;
use gbd_data::selection::{Selection, SelectionEvent, SelectionOptions, ViewMode};
use gbd_data::views::{CrossSectionView, DischargeView, MapView};
use gbd_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Warning shown when the basin boundary overlay is unavailable
    pub boundary_warning: Signal<Option<String>>,
    /// Boundary GeoJSON handed to the map, if available
    pub boundary_json: Signal<Option<String>>,
    pub stations: Signal<Vec<Station>>,
    pub sites: Signal<Vec<CrossSectionSite>>,
    pub options: Signal<SelectionOptions>,
    pub selection: Signal<Selection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        let options = SelectionOptions::default();
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            boundary_warning: Signal::new(None),
            boundary_json: Signal::new(None),
            stations: Signal::new(Vec::new()),
            sites: Signal::new(Vec::new()),
            selection: Signal::new(Selection::initial(&options)),
            options: Signal::new(options),
        }
    }

    /// Apply a selector event to the current selection.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let next = self.selection.read().apply(&self.options.read(), event);
        self.selection.set(next);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// What the main panel renders for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Discharge(DischargeView),
    CrossSection(CrossSectionView),
}

impl PageView {
    pub fn build(db: &Database, selection: &Selection) -> Result<PageView, String> {
        let view = match selection.mode {
            ViewMode::Discharge => db.discharge_view(selection).map(PageView::Discharge),
            ViewMode::CrossSection => db.cross_section_view(selection).map(PageView::CrossSection),
        };
        view.map_err(|e| e.to_string())
    }

    /// Header and cell text for the preview table.
    pub fn preview_table(&self) -> (Vec<String>, Vec<Vec<String>>) {
        match self {
            PageView::Discharge(view) => (
                vec!["Date".to_string(), "Discharge".to_string()],
                view.preview
                    .iter()
                    .map(|r| vec![r.date.clone(), format!("{:.2}", r.discharge)])
                    .collect(),
            ),
            PageView::CrossSection(view) => (
                vec![
                    "Year".to_string(),
                    "Reduced Distance".to_string(),
                    "Elevation CGL".to_string(),
                ],
                view.preview
                    .iter()
                    .map(|r| {
                        vec![
                            r.year.to_string(),
                            r.reduced_distance.to_string(),
                            r.elevation.to_string(),
                        ]
                    })
                    .collect(),
            ),
        }
    }

    pub fn map(&self) -> &MapView {
        match self {
            PageView::Discharge(view) => &view.map,
            PageView::CrossSection(view) => &view.map,
        }
    }

    pub fn export(&self) -> &ExportFile {
        match self {
            PageView::Discharge(view) => &view.export,
            PageView::CrossSection(view) => &view.export,
        }
    }
}
