//! Status history list shared by the status page and the admin modal.

use chrono::Local;
use dioxus::prelude::*;
use tracker_core::StatusHistoryEntry;

use crate::admin::StatusBadge;

/// Renders history entries in the order given.
#[component]
pub fn StatusHistoryList(entries: Vec<StatusHistoryEntry>) -> Element {
    rsx! {
        ul { class: "history-list",
            for entry in entries.iter() {
                li {
                    key: "{entry.id}",
                    class: "history-entry",
                    div { class: "history-entry-header",
                        StatusBadge { status: entry.status }
                        span { class: "history-time",
                            {entry.changed_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()}
                        }
                    }
                    p { class: "history-feedback", "{entry.feedback_text()}" }
                    p { class: "history-actor", "by {entry.changed_by}" }
                }
            }
        }
    }
}
