//! Public status lookup page.

use api::ApiClient;
use dioxus::prelude::*;
use tracker_core::{CandidateId, StatusHistoryEntry};

use crate::StatusHistoryList;

/// Fetch history for a raw route segment. `None` means the lookup failed.
async fn load_history(client: &ApiClient, raw_id: &str) -> Option<Vec<StatusHistoryEntry>> {
    let Ok(id) = CandidateId::parse(raw_id) else {
        tracing::warn!("Not a candidate id: {:?}", raw_id);
        return None;
    };
    match client.get_candidate_status(id).await {
        Ok(entries) => {
            tracing::info!("Loaded {} status entries for candidate {}", entries.len(), id);
            Some(entries)
        }
        Err(err) => {
            tracing::warn!("Failed to load status of candidate {}: {}", id, err);
            None
        }
    }
}

/// Status history of one candidate, keyed by the route identifier.
#[component]
pub fn CandidateStatusPage(candidate_id: String) -> Element {
    let client = use_context::<ApiClient>();

    let candidate_label = candidate_id.clone();
    let history = use_resource(use_reactive!(|(candidate_id,)| {
        let client = client.clone();
        async move { load_history(&client, &candidate_id).await }
    }));

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Application Status" }
                    p { class: "page-description", "Candidate #{candidate_label}" }
                }
            }

            div { class: "card",
                match &*history.read() {
                    None => rsx! {
                        div { class: "loading", "Loading status..." }
                    },
                    Some(None) => rsx! {
                        div { class: "error-message", "Failed to load status history." }
                    },
                    Some(Some(entries)) if entries.is_empty() => rsx! {
                        div { class: "empty-state",
                            p { "No status updates found." }
                        }
                    },
                    Some(Some(entries)) => rsx! {
                        StatusHistoryList { entries: entries.clone() }
                    },
                }
            }
        }
    }
}
