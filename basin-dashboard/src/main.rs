//! Godavari River Basin Dashboard
//!
//! Two views over one sidebar: a discharge view (station map, hydrograph
//! with comparison years, metric cards) and a cross-section view (survey
//! site map, bed profiles per survey year). Both end in a data preview and
//! a CSV download of the selected subset.
//!
//! Data flow:
//! 1. `build.rs` copies the basin boundary GeoJSON into `OUT_DIR`.
//! 2. On mount, `gbd_db::shared` builds the in-memory tables: embedded
//!    catalogs plus discharge generated with a clock-derived seed.
//! 3. Selector components dispatch `SelectionEvent`s into `AppState`.
//! 4. A memo turns the selection into a `PageView`; an effect hands its map
//!    and chart to Leaflet and D3 through `js_bridge`.

use dioxus::prelude::*;
use gbd_chart_ui::components::{
    ChartContainer, ChartHeader, ComparisonYearSelector, DownloadButton, ErrorDisplay, InfoCard,
    LoadingSpinner, MetricCards, PreviewTable, SiteSelector, StationSelector, ViewModeSelector,
    WarningDisplay, YearSelector,
};
use gbd_chart_ui::js_bridge;
use gbd_chart_ui::state::{AppState, PageView};
use gbd_core::boundary::{boundary_from_embedded, DEFAULT_BOUNDARY_FILE};
use gbd_core::config::DashboardConfig;
use gbd_data::selection::{Selection, ViewMode};

/// Basin boundary, empty when the file was absent at build time.
const BOUNDARY_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/boundary.geojson"));

const MAP_ID: &str = "basin-map";
const CHART_ID: &str = "basin-chart";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const FULLSCREEN_CSS: &str =
    "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.css";
const FULLSCREEN_JS: &str = "https://unpkg.com/leaflet.fullscreen@3.0.2/Control.FullScreen.js";
const MINIMAP_CSS: &str =
    "https://unpkg.com/leaflet-minimap@3.6.1/dist/Control.MiniMap.min.css";
const MINIMAP_JS: &str = "https://unpkg.com/leaflet-minimap@3.6.1/dist/Control.MiniMap.min.js";
const DRAW_CSS: &str = "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.css";
const DRAW_JS: &str = "https://unpkg.com/leaflet-draw@1.0.4/dist/leaflet.draw.js";
const D3_JS: &str = "https://d3js.org/d3.v7.min.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("basin-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Build the tables and the boundary overlay on mount
    use_effect(move || {
        let boundary = boundary_from_embedded(BOUNDARY_GEOJSON, DEFAULT_BOUNDARY_FILE);
        if let Some(warning) = boundary.warning() {
            log::warn!("[GBD] dashboard: {}", warning);
            state.boundary_warning.set(Some(warning.to_string()));
        }
        state
            .boundary_json
            .set(boundary.boundary().map(|b| b.raw_json().to_string()));

        let config = DashboardConfig::default().with_seed(js_sys::Date::now() as u64);
        let db = match gbd_db::shared(&config) {
            Ok(db) => db,
            Err(e) => {
                log::error!("[GBD] dashboard: Failed to build tables: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to build dashboard data: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let catalogs = db
            .selection_options()
            .and_then(|options| Ok((options, db.query_stations()?, db.query_sites()?)));
        match catalogs {
            Ok((options, stations, sites)) => {
                state.selection.set(Selection::initial(&options));
                state.options.set(options);
                state.stations.set(stations);
                state.sites.set(sites);
                state.db.set(Some(db));
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to read dashboard data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    let page = use_memo(move || {
        let db = state.db.read().clone()?;
        Some(PageView::build(&db, &state.selection.read()))
    });

    // Re-render map and chart whenever the page view changes
    use_effect(move || {
        let Some(Ok(current)) = page() else {
            return;
        };
        js_bridge::init_scripts();

        let map_json = serde_json::to_string(current.map()).unwrap_or_default();
        js_bridge::render_map(MAP_ID, &map_json, state.boundary_json.read().as_deref());

        let chart_json = match &current {
            PageView::Discharge(view) => serde_json::to_string(&view.chart),
            PageView::CrossSection(view) => serde_json::to_string(&view.chart),
        };
        let Ok(chart_json) = chart_json else {
            js_bridge::destroy_chart(CHART_ID);
            return;
        };
        match current {
            PageView::Discharge(_) => js_bridge::render_hydrograph(CHART_ID, &chart_json),
            PageView::CrossSection(_) => js_bridge::render_profile_chart(CHART_ID, &chart_json),
        }
    });

    rsx! {
        document::Title { "Godavari River Basin Dashboard" }
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Link { rel: "stylesheet", href: FULLSCREEN_CSS }
        document::Link { rel: "stylesheet", href: MINIMAP_CSS }
        document::Link { rel: "stylesheet", href: DRAW_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: FULLSCREEN_JS }
        document::Script { src: MINIMAP_JS }
        document::Script { src: DRAW_JS }
        document::Script { src: D3_JS }

        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            Sidebar {}

            div {
                style: "flex: 1; padding: 16px 24px; min-width: 0;",

                ChartHeader {
                    title: "Godavari River Basin Monitoring Dashboard".to_string(),
                    unit_description: "Synthetic daily discharge (m³/s) and surveyed river cross-sections".to_string(),
                }

                if let Some(warning) = (state.boundary_warning)() {
                    WarningDisplay { message: warning }
                }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                } else if (state.loading)() {
                    LoadingSpinner {}
                } else {
                    {match page() {
                        Some(Ok(view)) => rsx! { MainPanel { view } },
                        Some(Err(err)) => rsx! { ErrorDisplay { message: err } },
                        None => rsx! { LoadingSpinner {} },
                    }}
                }
            }
        }
    }
}

/// Selectors for the current view mode.
#[component]
fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let mode = state.selection.read().mode;

    rsx! {
        div {
            style: "width: 280px; padding: 16px; background: #0e2f44; color: #FFFFFF; display: flex; flex-direction: column; gap: 16px;",
            h2 { style: "margin: 0; font-size: 18px; color: #4a90e2;", "Dashboard Controls" }
            ViewModeSelector {}
            if mode == ViewMode::Discharge {
                YearSelector {}
                StationSelector {}
            } else {
                SiteSelector {}
            }
            ComparisonYearSelector {}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct MainPanelProps {
    view: PageView,
}

#[component]
fn MainPanel(props: MainPanelProps) -> Element {
    let (headers, rows) = props.view.preview_table();
    let export = props.view.export().clone();
    let chart_heading = match &props.view {
        PageView::Discharge(_) => "Hydrograph",
        PageView::CrossSection(_) => "River Cross-Section",
    };

    rsx! {
        {match &props.view {
            PageView::Discharge(view) => rsx! {
                InfoCard {
                    code: view.station.code.clone(),
                    name: view.station.name.clone(),
                    latitude: view.station.latitude,
                    longitude: view.station.longitude,
                }
                MetricCards { stats: view.stats.clone() }
            },
            PageView::CrossSection(view) => rsx! {
                InfoCard {
                    name: view.site.name.clone(),
                    latitude: view.site.latitude,
                    longitude: view.site.longitude,
                }
            },
        }}

        ChartContainer {
            id: MAP_ID.to_string(),
            min_height: 500,
        }

        h3 { style: "color: #0e2f44;", "{chart_heading}" }
        ChartContainer {
            id: CHART_ID.to_string(),
            min_height: 420,
        }

        PreviewTable { headers, rows }
        DownloadButton { file: export }
    }
}
