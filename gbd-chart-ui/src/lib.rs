//! Shared Dioxus components and map/chart bridge for the basin dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals, and the page view derived from it
//! - `components`: Reusable RSX components (selectors, cards, tables, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
