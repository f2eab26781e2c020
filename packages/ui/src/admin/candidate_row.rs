//! Candidate row component for the admin table.

use dioxus::prelude::*;
use tracker_core::Candidate;

use super::StatusBadge;

/// Props for CandidateRow component.
#[derive(Props, Clone, PartialEq)]
pub struct CandidateRowProps {
    /// The candidate to display.
    pub candidate: Candidate,
    /// Callback when "Update status" is clicked.
    pub on_update_status: EventHandler<Candidate>,
    /// Callback when "Resume" is clicked.
    pub on_download: EventHandler<Candidate>,
}

/// Table row component for displaying a single candidate.
#[component]
pub fn CandidateRow(props: CandidateRowProps) -> Element {
    let candidate = props.candidate.clone();
    let applied = candidate.created_at.format("%Y-%m-%d").to_string();

    let candidate_for_update = candidate.clone();
    let candidate_for_download = candidate.clone();

    rsx! {
        tr {
            class: "candidate-row",

            td { class: "candidate-name", "{candidate.full_name}" }
            td { class: "candidate-email", "{candidate.email}" }
            td { class: "candidate-phone", "{candidate.phone}" }
            td { "{candidate.department}" }
            td { class: "text-right", "{candidate.years_of_experience}" }
            td {
                StatusBadge { status: candidate.current_status }
            }
            td { class: "candidate-created", "{applied}" }
            td { class: "candidate-actions",
                button {
                    class: "btn btn-small btn-primary",
                    onclick: move |_| props.on_update_status.call(candidate_for_update.clone()),
                    "Update status"
                }
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: move |_| props.on_download.call(candidate_for_download.clone()),
                    "Resume"
                }
            }
        }
    }
}
