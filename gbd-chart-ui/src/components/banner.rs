//! Error and warning banners above the main panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BannerProps {
    pub message: String,
}

#[derive(Clone, Copy)]
enum BannerKind {
    Error,
    Warning,
}

impl BannerKind {
    fn style(self) -> &'static str {
        match self {
            BannerKind::Error => "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 8px; border-left: 4px solid #C62828;",
            BannerKind::Warning => "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 8px; border-left: 4px solid #FFB300;",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            BannerKind::Error => "Error: ",
            BannerKind::Warning => "Warning: ",
        }
    }
}

fn banner(kind: BannerKind, message: &str) -> Element {
    rsx! {
        div {
            style: kind.style(),
            strong { {kind.prefix()} }
            "{message}"
        }
    }
}

/// Failure that replaces the main panel.
#[component]
pub fn ErrorDisplay(props: BannerProps) -> Element {
    banner(BannerKind::Error, &props.message)
}

/// Non-fatal notice, e.g. a missing boundary overlay.
#[component]
pub fn WarningDisplay(props: BannerProps) -> Element {
    banner(BannerKind::Warning, &props.message)
}
