//! Radio buttons switching between the discharge and cross-section views.

use crate::state::AppState;
use dioxus::prelude::*;
use gbd_data::selection::{SelectionEvent, ViewMode};

#[component]
pub fn ViewModeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state.selection.read().mode;

    let on_change = move |evt: Event<FormData>| {
        if let Some(mode) = ViewMode::from_label(&evt.value()) {
            state.dispatch(SelectionEvent::SwitchView(mode));
        }
    };

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Select View"
            }
            for mode in ViewMode::ALL {
                label {
                    style: "display: block; margin: 2px 0; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "view-mode",
                        value: mode.label(),
                        checked: mode == current,
                        onchange: on_change,
                    }
                    " "
                    {mode.label()}
                }
            }
        }
    }
}
