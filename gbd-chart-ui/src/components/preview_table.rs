//! Tabular preview of the first rows of the selected subset.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PreviewTableProps {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[component]
pub fn PreviewTable(props: PreviewTableProps) -> Element {
    rsx! {
        div {
            h3 { style: "color: #0e2f44;", "Data Preview" }
            if props.rows.is_empty() {
                p { style: "color: #666;", "No data" }
            } else {
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                    thead {
                        tr {
                            for header in props.headers.iter() {
                                th {
                                    style: "text-align: right; padding: 4px 8px; border-bottom: 2px solid #4a90e2;",
                                    "{header}"
                                }
                            }
                        }
                    }
                    tbody {
                        for row in props.rows.iter() {
                            tr {
                                for cell in row.iter() {
                                    td {
                                        style: "text-align: right; padding: 4px 8px; border-bottom: 1px solid #EEE;",
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
