//! Status history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CandidateId, CandidateStatus};

/// One immutable record of a status transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub id: i64,
    pub candidate_id: CandidateId,
    pub status: CandidateStatus,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(with = "crate::timestamp")]
    pub changed_at: DateTime<Utc>,
    /// Actor that made the change (`system` for the initial entry).
    pub changed_by: String,
}

impl StatusHistoryEntry {
    /// Feedback for display; blank feedback reads as "No feedback".
    pub fn feedback_text(&self) -> &str {
        match self.feedback.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => "No feedback",
        }
    }
}

/// Body of an admin status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: CandidateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl StatusUpdate {
    /// Build an update, dropping feedback that is only whitespace.
    pub fn new(status: CandidateStatus, feedback: &str) -> Self {
        let feedback = feedback.trim();
        Self {
            status,
            feedback: (!feedback.is_empty()).then(|| feedback.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn blank_feedback_is_omitted() {
        let update = StatusUpdate::new(CandidateStatus::Interview, "   ");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "status": "Interview" })
        );

        let update = StatusUpdate::new(CandidateStatus::Hired, " welcome aboard ");
        assert_eq!(update.feedback.as_deref(), Some("welcome aboard"));
    }

    #[test]
    fn entry_feedback_text() {
        let raw = r#"{"id":1,"candidate_id":3,"status":"Submitted","feedback":"","changed_at":"2024-01-01T00:00:00","changed_by":"system"}"#;
        let entry: StatusHistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.feedback_text(), "No feedback");

        let raw = r#"{"id":2,"candidate_id":3,"status":"Interview","feedback":null,"changed_at":"2024-01-02T00:00:00Z","changed_by":"admin_1"}"#;
        let entry: StatusHistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.feedback, None);
        assert_eq!(entry.status, CandidateStatus::Interview);
    }
}
