//! Year dropdown and multi-year comparison checkboxes.

use crate::state::AppState;
use dioxus::prelude::*;
use gbd_data::selection::{SelectionEvent, ViewMode};

/// Single-year dropdown for the discharge view, most recent year first.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.options.read().discharge_years.clone();
    let selected = state.selection.read().year;

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.dispatch(SelectionEvent::SelectYear(year));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Select Year"
            }
            select {
                id: "year-select",
                style: "width: 100%;",
                onchange: on_change,
                for year in years {
                    option {
                        value: "{year}",
                        selected: year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}

/// Checkbox per available year; ticking toggles the year's chart series.
///
/// Offers discharge years in the discharge view and the selected site's
/// survey years in the cross-section view.
#[component]
pub fn ComparisonYearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection.read().clone();
    let (title, years) = {
        let options = state.options.read();
        match selection.mode {
            ViewMode::Discharge => ("Multi-Year Comparison", options.discharge_years.clone()),
            ViewMode::CrossSection => ("Select Years", options.survey_years(&selection.entity).to_vec()),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "{title}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for year in years {
                    label {
                        style: "cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: selection.comparison_years.contains(&year),
                            onchange: move |_| state.dispatch(SelectionEvent::ToggleComparisonYear(year)),
                        }
                        " {year}"
                    }
                }
            }
        }
    }
}
