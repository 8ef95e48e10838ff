//! Discharge statistics cards.

use dioxus::prelude::*;
use gbd_data::stats::{metric_cards, DischargeStats};

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardsProps {
    /// `None` renders every card as "No data"
    #[props(!optional)]
    pub stats: Option<DischargeStats>,
}

#[component]
pub fn MetricCards(props: MetricCardsProps) -> Element {
    let cards = metric_cards(props.stats.as_ref());

    rsx! {
        div {
            h4 { style: "margin: 8px 0;", "Discharge Statistics" }
            for card in cards {
                div {
                    style: "background: white; border: 1px solid #E0E0E0; border-left: 4px solid #4a90e2; border-radius: 8px; padding: 8px 12px; margin-bottom: 8px;",
                    div { style: "font-size: 12px; color: #555;", "{card.label}" }
                    div { style: "font-size: 1.5rem; font-weight: 700; color: #0e2f44;", "{card.value}" }
                }
            }
        }
    }
}
