//! Candidate table for the current page.

use dioxus::prelude::*;
use tracker_core::Candidate;

use super::CandidateRow;

/// Props for CandidateTable component.
#[derive(Props, Clone, PartialEq)]
pub struct CandidateTableProps {
    /// Rows of the current page.
    pub candidates: Vec<Candidate>,
    pub on_update_status: EventHandler<Candidate>,
    pub on_download: EventHandler<Candidate>,
    /// Whether loading.
    #[props(default = false)]
    pub loading: bool,
}

#[component]
pub fn CandidateTable(props: CandidateTableProps) -> Element {
    rsx! {
        if props.loading {
            div { class: "loading", "Loading candidates..." }
        } else if props.candidates.is_empty() {
            div { class: "empty-state",
                p { "No candidates found." }
                p { class: "hint", "Try clearing the filters" }
            }
        } else {
            div { class: "table-container",
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Phone" }
                            th { "Department" }
                            th { class: "text-right", "Experience" }
                            th { "Status" }
                            th { "Applied" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for candidate in props.candidates.iter() {
                            CandidateRow {
                                key: "{candidate.id}",
                                candidate: candidate.clone(),
                                on_update_status: props.on_update_status,
                                on_download: props.on_download,
                            }
                        }
                    }
                }
            }
        }
    }
}
