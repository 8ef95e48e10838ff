//! Reusable Dioxus RSX components for the basin dashboard.

mod banner;
mod chart_container;
mod chart_header;
mod download_button;
mod info_card;
mod loading_spinner;
mod metric_cards;
mod preview_table;
mod site_selector;
mod station_selector;
mod view_mode_selector;
mod year_selector;

pub use banner::{ErrorDisplay, WarningDisplay};
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use download_button::DownloadButton;
pub use info_card::InfoCard;
pub use loading_spinner::LoadingSpinner;
pub use metric_cards::MetricCards;
pub use preview_table::PreviewTable;
pub use site_selector::SiteSelector;
pub use station_selector::StationSelector;
pub use view_mode_selector::ViewModeSelector;
pub use year_selector::{ComparisonYearSelector, YearSelector};
