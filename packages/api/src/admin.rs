//! Admin endpoints. Every call carries the admin credential header.

use bytes::Bytes;
use tracker_core::{Candidate, CandidateId, Department, StatusHistoryEntry, StatusUpdate};

use crate::{AdminToken, ApiClient, ApiError};

/// Page size used when fetching the full candidate list.
pub const FETCH_BATCH_SIZE: usize = 100;

/// Query for one page of the admin candidate listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateQuery {
    pub skip: usize,
    pub limit: usize,
    /// Server-side department filter.
    pub department: Option<Department>,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 10,
            department: None,
        }
    }
}

impl CandidateQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("skip", self.skip.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(department) = self.department {
            params.push(("department", department.as_str().to_string()));
        }
        params
    }
}

impl ApiClient {
    /// One page of candidates.
    pub async fn list_candidates(
        &self,
        token: &AdminToken,
        query: &CandidateQuery,
    ) -> Result<Vec<Candidate>, ApiError> {
        let request =
            Self::with_admin(self.get("admin/candidates/"), token).query(&query.params());
        self.send_json(request).await
    }

    /// Every candidate, fetched in batches until a short batch comes back.
    pub async fn list_all_candidates(
        &self,
        token: &AdminToken,
        department: Option<Department>,
    ) -> Result<Vec<Candidate>, ApiError> {
        let mut all = Vec::new();
        let mut query = CandidateQuery {
            skip: 0,
            limit: FETCH_BATCH_SIZE,
            department,
        };

        loop {
            let batch = self.list_candidates(token, &query).await?;
            let done = batch.len() < query.limit;
            all.extend(batch);
            if done {
                break;
            }
            query.skip += query.limit;
        }

        tracing::info!("Loaded {} candidates", all.len());
        Ok(all)
    }

    /// Record a status change. Returns the history entry the backend created.
    pub async fn update_candidate_status(
        &self,
        token: &AdminToken,
        id: CandidateId,
        update: &StatusUpdate,
    ) -> Result<StatusHistoryEntry, ApiError> {
        let path = format!("admin/candidates/{id}/status");
        let request = Self::with_admin(self.post(&path), token).json(update);
        let entry: StatusHistoryEntry = self.send_json(request).await?;
        tracing::info!("Candidate {} moved to {}", id, entry.status);
        Ok(entry)
    }

    /// Raw resume file of a candidate.
    pub async fn download_resume(
        &self,
        token: &AdminToken,
        id: CandidateId,
    ) -> Result<Bytes, ApiError> {
        let request = Self::with_admin(self.get(&format!("admin/candidates/{id}/resume")), token);
        Ok(self.send(request).await?.bytes().await?)
    }

    /// Check a credential with a one-row listing.
    pub async fn verify_admin_token(&self, token: &AdminToken) -> Result<(), ApiError> {
        let probe = CandidateQuery {
            limit: 1,
            ..Default::default()
        };
        self.list_candidates(token, &probe).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn department_is_only_sent_when_set() {
        let query = CandidateQuery::default();
        assert_eq!(
            query.params(),
            vec![("skip", "0".to_string()), ("limit", "10".to_string())]
        );

        let query = CandidateQuery {
            department: Some(Department::It),
            ..Default::default()
        };
        assert_eq!(query.params()[2], ("department", "IT".to_string()));
    }
}
