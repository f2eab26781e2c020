//! Candidate status badge.

use dioxus::prelude::*;
use tracker_core::CandidateStatus;

/// Badge for displaying a candidate status.
#[component]
pub fn StatusBadge(status: CandidateStatus) -> Element {
    let bg_class = match status {
        CandidateStatus::Submitted => "badge-submitted",
        CandidateStatus::Interview => "badge-interview",
        CandidateStatus::Shortlisted => "badge-shortlisted",
        CandidateStatus::Hired => "badge-hired",
    };

    rsx! {
        span {
            class: "status-badge {bg_class}",
            "{status}"
        }
    }
}
