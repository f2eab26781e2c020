//! Admin candidate list page: filters, pagination, status updates and
//! resume downloads.

use api::{AdminToken, ApiClient};
use dioxus::prelude::*;
use tracker_core::{
    Candidate, CandidateListState, CandidateStatus, DepartmentFilter, StatusFilter, StatusModal,
    close_if_bound,
};

use super::{CandidateTable, FilterBar, PaginationBar, StatusModalDialog};
use crate::{browser, session};

const RESUME_MIME: &str = "application/pdf";

/// Props for AdminCandidatesPage.
#[derive(Props, Clone, PartialEq)]
pub struct AdminCandidatesPageProps {
    /// Credential of the current admin session.
    pub token: AdminToken,
    /// Called after the session ends, by logout or by a rejected credential.
    pub on_logout: EventHandler<()>,
}

/// Admin candidate list page component.
#[component]
pub fn AdminCandidatesPage(props: AdminCandidatesPageProps) -> Element {
    let client = use_context::<ApiClient>();

    let mut state = use_signal(CandidateListState::default);
    let mut modal = use_signal(|| None::<StatusModal>);
    let mut saving = use_signal(|| false);
    let mut load_error = use_signal(|| None::<String>);

    let on_logout = props.on_logout;
    let expire_session = move || {
        session::end_session();
        on_logout.call(());
    };

    // Load every candidate; filtering happens client-side
    let list_client = client.clone();
    let list_token = props.token.clone();
    let mut candidates = use_resource(move || {
        let client = list_client.clone();
        let token = list_token.clone();
        async move { client.list_all_candidates(&token, None).await }
    });

    use_effect(move || {
        let rejected = match &*candidates.read() {
            Some(Ok(list)) => {
                state.write().replace_candidates(list.clone());
                load_error.set(None);
                false
            }
            Some(Err(err)) if err.is_unauthorized() => true,
            Some(Err(err)) => {
                tracing::warn!("Failed to load candidates: {}", err);
                load_error.set(Some("Failed to load candidates.".to_string()));
                false
            }
            None => false,
        };
        if rejected {
            expire_session();
        }
    });

    // Open the modal and fetch history for that candidate
    let history_client = client.clone();
    let on_update_status = move |candidate: Candidate| {
        let id = candidate.id;
        modal.set(Some(StatusModal::open(candidate)));

        let client = history_client.clone();
        spawn(async move {
            match client.get_candidate_status(id).await {
                Ok(entries) => {
                    if let Some(open) = modal.write().as_mut() {
                        open.receive_history(id, entries);
                    }
                }
                Err(err) => {
                    tracing::warn!("Failed to load history of candidate {}: {}", id, err);
                    let current = modal
                        .write()
                        .as_mut()
                        .is_some_and(|open| open.history_failed(id));
                    if current {
                        browser::alert("Failed to load status history.");
                    }
                }
            }
        });
    };

    let save_client = client.clone();
    let save_token = props.token.clone();
    let on_save = move |_| {
        let Some(open) = modal() else {
            return;
        };
        let id = open.candidate().id;
        let update = open.update_request();
        let client = save_client.clone();
        let token = save_token.clone();

        spawn(async move {
            saving.set(true);
            let result = client.update_candidate_status(&token, id, &update).await;
            saving.set(false);

            match result {
                Ok(entry) => {
                    state.write().apply_status_change(&entry);
                    close_if_bound(&mut modal.write(), id);
                }
                Err(err) if err.is_unauthorized() => expire_session(),
                Err(err) => {
                    tracing::warn!("Failed to update candidate {}: {}", id, err);
                    browser::alert("Failed to update status.");
                }
            }
        });
    };

    let download_client = client.clone();
    let download_token = props.token.clone();
    let on_download = move |candidate: Candidate| {
        let client = download_client.clone();
        let token = download_token.clone();

        spawn(async move {
            let downloaded = match client.download_resume(&token, candidate.id).await {
                Ok(bytes) => {
                    browser::download_file(&candidate.resume_file_name(), &bytes, RESUME_MIME)
                        .map_err(|err| err.to_string())
                }
                Err(err) if err.is_unauthorized() => {
                    expire_session();
                    return;
                }
                Err(err) => Err(err.to_string()),
            };
            if let Err(err) = downloaded {
                tracing::warn!(
                    "Failed to download resume of candidate {}: {}",
                    candidate.id,
                    err
                );
                browser::alert("Failed to download resume.");
            }
        });
    };

    let list = state.read();
    let rows = list.page_rows();
    let pagination = list.pagination();
    let filter = list.filter().clone();
    let total_loaded = list.candidates().len();
    drop(list);

    let loading = !candidates.finished();

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Candidates" }
                    p { class: "page-description", "{total_loaded} applications received" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| expire_session(),
                    "Log out"
                }
            }

            if let Some(err) = load_error() {
                div { class: "error-banner",
                    span { "{err}" }
                    button {
                        onclick: move |_| {
                            load_error.set(None);
                            candidates.restart();
                        },
                        "Retry"
                    }
                }
            }

            div { class: "card",
                FilterBar {
                    filter,
                    on_search: move |search: String| state.write().set_search(search),
                    on_status: move |status: StatusFilter| state.write().set_status_filter(status),
                    on_department: move |department: DepartmentFilter| {
                        state.write().set_department_filter(department)
                    },
                    on_reset: move |_| state.write().reset_filters(),
                }

                CandidateTable {
                    candidates: rows,
                    loading,
                    on_update_status,
                    on_download,
                }

                if !loading {
                    PaginationBar {
                        pagination,
                        on_page: move |page: usize| state.write().go_to_page(page),
                    }
                }
            }

            if let Some(open) = modal() {
                StatusModalDialog {
                    modal: open,
                    saving: saving(),
                    on_status_change: move |status: CandidateStatus| {
                        if let Some(open) = modal.write().as_mut() {
                            open.new_status = status;
                        }
                    },
                    on_feedback_change: move |feedback: String| {
                        if let Some(open) = modal.write().as_mut() {
                            open.feedback = feedback;
                        }
                    },
                    on_save,
                    on_cancel: move |_| modal.set(None),
                }
            }
        }
    }
}
