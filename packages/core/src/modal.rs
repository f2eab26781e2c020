//! State of the "update status" modal.

use crate::{Candidate, CandidateId, CandidateStatus, StatusHistoryEntry, StatusUpdate};

/// Progress of the history fetch started when the modal opens.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HistoryState {
    #[default]
    Loading,
    Loaded(Vec<StatusHistoryEntry>),
    /// The fetch failed; the modal shows an empty history.
    Failed,
}

/// Modal bound to one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusModal {
    candidate: Candidate,
    pub new_status: CandidateStatus,
    pub feedback: String,
    history: HistoryState,
}

impl StatusModal {
    /// Open the modal with the candidate's current status preselected.
    pub fn open(candidate: Candidate) -> Self {
        Self {
            new_status: candidate.current_status,
            feedback: String::new(),
            history: HistoryState::Loading,
            candidate,
        }
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Whether the modal still shows `id`.
    pub fn is_bound_to(&self, id: CandidateId) -> bool {
        self.candidate.id == id
    }

    pub fn history(&self) -> &HistoryState {
        &self.history
    }

    pub fn is_loading_history(&self) -> bool {
        matches!(self.history, HistoryState::Loading)
    }

    /// History entries to render; empty while loading or after a failure.
    pub fn history_entries(&self) -> &[StatusHistoryEntry] {
        match &self.history {
            HistoryState::Loaded(entries) => entries,
            HistoryState::Loading | HistoryState::Failed => &[],
        }
    }

    /// Store fetched history. Responses for another candidate are dropped.
    pub fn receive_history(
        &mut self,
        for_candidate: CandidateId,
        entries: Vec<StatusHistoryEntry>,
    ) -> bool {
        if !self.is_bound_to(for_candidate) {
            return false;
        }
        self.history = HistoryState::Loaded(entries);
        true
    }

    /// Record a failed fetch. Returns false for a stale response.
    pub fn history_failed(&mut self, for_candidate: CandidateId) -> bool {
        if !self.is_bound_to(for_candidate) {
            return false;
        }
        self.history = HistoryState::Failed;
        true
    }

    /// Request body for the selected status and feedback.
    pub fn update_request(&self) -> StatusUpdate {
        StatusUpdate::new(self.new_status, &self.feedback)
    }
}

/// Close the modal after a save for `saved`.
///
/// A modal that was closed or reopened for another candidate while the save
/// was in flight is left alone.
pub fn close_if_bound(slot: &mut Option<StatusModal>, saved: CandidateId) -> bool {
    if slot.as_ref().is_some_and(|modal| modal.is_bound_to(saved)) {
        *slot = None;
        true
    } else {
        false
    }
}
