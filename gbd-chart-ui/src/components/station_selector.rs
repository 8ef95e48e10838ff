//! Dropdown selector for choosing a gauge station.

use crate::state::AppState;
use dioxus::prelude::*;
use gbd_data::selection::SelectionEvent;

/// Station dropdown labelled `CODE - NAME`, in catalog order.
#[component]
pub fn StationSelector() -> Element {
    let mut state = use_context::<AppState>();
    let stations = state.stations.read().clone();
    let selected = state.selection.read().entity.clone();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(SelectionEvent::SelectEntity(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "station-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Select Station"
            }
            select {
                id: "station-select",
                style: "width: 100%;",
                onchange: on_change,
                for station in stations.iter() {
                    option {
                        value: "{station.code}",
                        selected: station.code == selected,
                        {station.label()}
                    }
                }
            }
        }
    }
}
