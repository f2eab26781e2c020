//! Modal for changing a candidate's status.

use dioxus::prelude::*;
use tracker_core::{CandidateStatus, StatusModal};

use crate::StatusHistoryList;

/// Props for StatusModalDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusModalDialogProps {
    pub modal: StatusModal,
    /// Whether the update request is in flight.
    #[props(default = false)]
    pub saving: bool,
    pub on_status_change: EventHandler<CandidateStatus>,
    pub on_feedback_change: EventHandler<String>,
    pub on_save: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn StatusModalDialog(props: StatusModalDialogProps) -> Element {
    let modal = &props.modal;
    let candidate = modal.candidate();
    let selected = modal.new_status;
    let on_status_change = props.on_status_change;

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                div { class: "modal-header",
                    h2 { class: "modal-title", "Update status: {candidate.full_name}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| props.on_cancel.call(()),
                        "×"
                    }
                }

                div { class: "form-group",
                    label { r#for: "new-status", "New status" }
                    select {
                        id: "new-status",
                        value: "{selected}",
                        onchange: move |e| match e.value().parse::<CandidateStatus>() {
                            Ok(status) => on_status_change.call(status),
                            Err(err) => tracing::warn!("Ignoring status selection: {}", err),
                        },
                        for status in CandidateStatus::ALL {
                            option {
                                value: status.as_str(),
                                selected: status == selected,
                                "{status}"
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { r#for: "status-feedback", "Feedback" }
                    textarea {
                        id: "status-feedback",
                        rows: 4,
                        placeholder: "Optional notes for this change",
                        value: "{modal.feedback}",
                        oninput: move |e| props.on_feedback_change.call(e.value()),
                    }
                }

                div { class: "modal-section",
                    h3 { "Status history" }
                    if modal.is_loading_history() {
                        div { class: "loading", "Loading history..." }
                    } else if modal.history_entries().is_empty() {
                        div { class: "empty-state",
                            p { "No status updates found." }
                        }
                    } else {
                        StatusHistoryList { entries: modal.history_entries().to_vec() }
                    }
                }

                div { class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: props.saving,
                        onclick: move |_| props.on_save.call(()),
                        if props.saving { "Saving..." } else { "Save" }
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
