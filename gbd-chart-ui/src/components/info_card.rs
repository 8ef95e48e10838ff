//! Station information card.

use dioxus::prelude::*;
use gbd_utils::numbers::format_coordinate;

#[derive(Props, Clone, PartialEq)]
pub struct InfoCardProps {
    /// Station code; omitted for cross-section sites
    #[props(default)]
    pub code: Option<String>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[component]
pub fn InfoCard(props: InfoCardProps) -> Element {
    let latitude = format_coordinate(props.latitude);
    let longitude = format_coordinate(props.longitude);

    rsx! {
        div {
            style: "background: linear-gradient(135deg, #f5f9ff 0%, #e0ecff 100%); padding: 15px; border-radius: 12px; margin-bottom: 1rem; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); border-left: 4px solid #4a90e2; line-height: 1.6;",
            h4 { style: "margin: 0 0 6px 0;", "Station Information" }
            if let Some(code) = props.code.as_ref() {
                div { strong { "Station Code: " } "{code}" }
            }
            div { strong { "Station Name: " } "{props.name}" }
            div { strong { "Latitude: " } "{latitude}" }
            div { strong { "Longitude: " } "{longitude}" }
        }
    }
}
