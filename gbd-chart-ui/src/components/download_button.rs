//! CSV download button.

use crate::js_bridge;
use dioxus::prelude::*;
use gbd_data::export::ExportFile;

#[derive(Props, Clone, PartialEq)]
pub struct DownloadButtonProps {
    pub file: ExportFile,
}

#[component]
pub fn DownloadButton(props: DownloadButtonProps) -> Element {
    let file = props.file.clone();
    let on_click = move |_| {
        log::info!("[GBD] download: {}", file.file_name);
        js_bridge::trigger_download(&file.file_name, file.mime, &file.contents);
    };

    rsx! {
        button {
            style: "background: linear-gradient(135deg, #4a90e2 0%, #2a6cbe 100%); color: white; border: none; border-radius: 8px; padding: 0.5rem 1rem; font-weight: 600; cursor: pointer; margin-top: 8px;",
            onclick: on_click,
            "Download Data (CSV)"
        }
    }
}
