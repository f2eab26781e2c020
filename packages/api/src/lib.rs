//! REST client for the candidate tracker backend.
//!
//! This crate wraps every backend call the front end makes:
//! - Public endpoints: registration and status history
//! - Admin endpoints: candidate listing, status updates, resume download
//!
//! Requests go through `reqwest`, which uses the browser's fetch on wasm32
//! and a native HTTP stack elsewhere.

mod admin;
mod auth;
mod candidates;
mod client;
mod config;
mod error;

pub use admin::{CandidateQuery, FETCH_BATCH_SIZE};
pub use auth::{ADMIN_HEADER, AdminToken};
pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;

// Re-export core types for convenience
pub use tracker_core::{
    Candidate, CandidateId, CandidateStatus, Department, NewCandidate, StatusHistoryEntry,
    StatusUpdate,
};
