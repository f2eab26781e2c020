//! Candidate domain types.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Backend-assigned identifier of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub i64);

impl CandidateId {
    /// Parse a candidate ID from a route segment.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department a candidate applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    #[default]
    #[serde(rename = "IT")]
    It,
    Operations,
    Management,
    Support,
}

impl Department {
    /// Every department, in display order.
    pub const ALL: [Department; 4] = [
        Department::It,
        Department::Operations,
        Department::Management,
        Department::Support,
    ];

    /// Wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Operations => "Operations",
            Department::Management => "Management",
            Department::Support => "Support",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseValueError::new("department", s))
    }
}

/// Where a candidate stands in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    /// Application received, not yet reviewed.
    #[default]
    Submitted,
    Interview,
    Shortlisted,
    Hired,
}

impl CandidateStatus {
    /// Every status, in pipeline order.
    pub const ALL: [CandidateStatus; 4] = [
        CandidateStatus::Submitted,
        CandidateStatus::Interview,
        CandidateStatus::Shortlisted,
        CandidateStatus::Hired,
    ];

    /// Wire and display name.
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateStatus::Submitted => "Submitted",
            CandidateStatus::Interview => "Interview",
            CandidateStatus::Shortlisted => "Shortlisted",
            CandidateStatus::Hired => "Hired",
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandidateStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseValueError::new("status", s))
    }
}

/// An applicant record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub full_name: String,
    /// Date of birth as stored by the backend, normally `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Stored unvalidated by the backend; may be negative.
    pub years_of_experience: i64,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub current_status: CandidateStatus,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    /// Server-side location of the uploaded resume.
    #[serde(default)]
    pub resume_url: String,
}

impl Candidate {
    /// Case-insensitive substring match against name or email.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }

    /// File name offered when downloading this candidate's resume.
    pub fn resume_file_name(&self) -> String {
        format!("resume-{}.pdf", self.id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn candidate_decodes_backend_json() {
        let raw = r#"{
            "id": 7,
            "full_name": "Lina Haddad",
            "date_of_birth": "1995-04-12",
            "years_of_experience": 4,
            "department": "IT",
            "email": "lina@example.com",
            "phone": "+962791234567",
            "current_status": "Shortlisted",
            "created_at": "2024-05-01T09:30:00.000123",
            "resume_url": "uploads/Lina Haddad-cv.pdf"
        }"#;

        let candidate: Candidate = serde_json::from_str(raw).unwrap();
        assert_eq!(candidate.id, CandidateId(7));
        assert_eq!(candidate.department, Department::It);
        assert_eq!(candidate.current_status, CandidateStatus::Shortlisted);
        assert_eq!(candidate.resume_file_name(), "resume-7.pdf");
    }

    #[test]
    fn unvalidated_rows_still_decode() {
        let raw = r#"[
            {
                "id": 1,
                "full_name": "Omar Khalil",
                "date_of_birth": "1992-11-03",
                "years_of_experience": 6,
                "department": "Support",
                "email": "omar@example.com",
                "phone": "+962791234567",
                "current_status": "Submitted",
                "created_at": "2024-05-01T09:30:00"
            },
            {
                "id": 2,
                "full_name": "Sara Nassar",
                "date_of_birth": "03/11/1992",
                "years_of_experience": -1,
                "department": "IT",
                "email": "sara@example.com",
                "phone": "+962791234568",
                "current_status": "Interview",
                "created_at": "2024-05-02T10:00:00"
            }
        ]"#;

        let candidates: Vec<Candidate> = serde_json::from_str(raw).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].years_of_experience, -1);
        assert_eq!(candidates[1].date_of_birth, "03/11/1992");
        assert!(candidates[0].resume_url.is_empty());
    }

    #[test]
    fn enum_names_match_the_wire() {
        assert_eq!(serde_json::to_string(&Department::It).unwrap(), r#""IT""#);
        for status in CandidateStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<CandidateStatus>().unwrap(), status);
        }
        assert!("All".parse::<Department>().is_err());
        assert!("hired".parse::<CandidateStatus>().is_err());
    }

    #[test]
    fn parse_id_from_route() {
        assert_eq!(CandidateId::parse(" 42 ").unwrap(), CandidateId(42));
        assert!(CandidateId::parse("abc").is_err());
    }
}
