//! This crate contains all shared UI for the workspace.
//!
//! Components read the backend client from context; the app provides an
//! [`api::ApiClient`] at the root.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

pub mod admin;
pub mod browser;
pub mod session;

mod candidate_form;
pub use candidate_form::CandidateForm;

mod history_list;
pub use history_list::StatusHistoryList;

mod login_page;
pub use login_page::AdminLoginPage;

mod status_page;
pub use status_page::CandidateStatusPage;
