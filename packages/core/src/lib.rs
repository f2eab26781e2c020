//! Core domain types for the candidate tracker.
//!
//! This crate contains shared types and the browser-free state logic used by
//! the API client and the UI:
//! - Candidate, CandidateStatus and Department for applicant records
//! - StatusHistoryEntry and StatusUpdate for status transitions
//! - Filters, pagination and the admin list/modal state machines
//! - Registration validation and phone normalization

mod admin;
mod candidate;
mod error;
mod filter;
mod history;
mod modal;
mod pagination;
mod phone;
mod registration;
pub mod timestamp;

pub use admin::CandidateListState;
pub use candidate::{Candidate, CandidateId, CandidateStatus, Department};
pub use error::ParseValueError;
pub use filter::{CandidateFilter, DepartmentFilter, Filter, StatusFilter, ALL_OPTION};
pub use history::{StatusHistoryEntry, StatusUpdate};
pub use modal::{HistoryState, StatusModal, close_if_bound};
pub use pagination::{PAGE_SIZE, Pagination};
pub use phone::{PHONE_PREFIX, is_valid_phone, normalize_phone};
pub use registration::{
    MAX_RESUME_BYTES, MINIMUM_AGE, NewCandidate, RegistrationError, RegistrationForm, ResumeFile,
    age_on, is_adult,
};
