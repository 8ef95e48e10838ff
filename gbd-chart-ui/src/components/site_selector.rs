//! Dropdown selector for choosing a cross-section survey site.

use crate::state::AppState;
use dioxus::prelude::*;
use gbd_data::selection::SelectionEvent;

#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let sites = state.sites.read().clone();
    let selected = state.selection.read().entity.clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "site-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Select Station"
            }
            select {
                id: "site-select",
                style: "width: 100%;",
                onchange: move |evt: Event<FormData>| {
                    state.dispatch(SelectionEvent::SelectEntity(evt.value()));
                },
                for site in sites.iter() {
                    option {
                        value: "{site.name}",
                        selected: site.name == selected,
                        "{site.name}"
                    }
                }
            }
        }
    }
}
