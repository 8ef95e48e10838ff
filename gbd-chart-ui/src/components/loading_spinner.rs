//! Spinner shown while the basin tables are built.

use dioxus::prelude::*;

const SPIN_KEYFRAMES: &str = "@keyframes gbd-spin { to { transform: rotate(360deg); } }";

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        style { {SPIN_KEYFRAMES} }
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 12px; padding: 40px; color: #0e2f44;",
            div {
                style: "width: 32px; height: 32px; border: 4px solid #e0ecff; border-top-color: #4a90e2; border-radius: 50%; animation: gbd-spin 1s linear infinite;",
            }
            "Preparing basin data..."
        }
    }
}
