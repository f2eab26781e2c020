//! Admin components for reviewing candidates.

mod candidate_row;
mod candidate_table;
mod candidates_page;
mod filter_bar;
mod pagination_bar;
mod status_badge;
mod status_modal;

pub use candidate_row::CandidateRow;
pub use candidate_table::CandidateTable;
pub use candidates_page::AdminCandidatesPage;
pub use filter_bar::FilterBar;
pub use pagination_bar::PaginationBar;
pub use status_badge::StatusBadge;
pub use status_modal::StatusModalDialog;
