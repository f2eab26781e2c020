//! Public candidate endpoints.

use reqwest::multipart::{Form, Part};
use tracker_core::{Candidate, CandidateId, NewCandidate, StatusHistoryEntry};

use crate::{ApiClient, ApiError};

const RESUME_MIME: &str = "application/pdf";

impl ApiClient {
    /// Register a candidate.
    ///
    /// The profile and resume are sent as one multipart body. Returns the
    /// created record, including the identifier for the status page.
    pub async fn register_candidate(
        &self,
        candidate: &NewCandidate,
    ) -> Result<Candidate, ApiError> {
        let resume = Part::bytes(candidate.resume.content.clone())
            .file_name(candidate.resume.name.clone())
            .mime_str(RESUME_MIME)?;

        let form = Form::new()
            .text("full_name", candidate.full_name.clone())
            .text(
                "date_of_birth",
                candidate.date_of_birth.format("%Y-%m-%d").to_string(),
            )
            .text(
                "years_of_experience",
                candidate.years_of_experience.to_string(),
            )
            .text("department", candidate.department.as_str())
            .text("email", candidate.email.clone())
            .text("phone", candidate.phone.clone())
            .part("resume", resume);

        let created: Candidate = self
            .send_json(self.post("candidates/").multipart(form))
            .await?;
        tracing::info!("Registered candidate {}", created.id);
        Ok(created)
    }

    /// Status history of one candidate, in the order the backend returns it.
    pub async fn get_candidate_status(
        &self,
        id: CandidateId,
    ) -> Result<Vec<StatusHistoryEntry>, ApiError> {
        self.send_json(self.get(&format!("candidates/{id}/status")))
            .await
    }
}
