//! Client-side filters for the admin candidate list.

use std::str::FromStr;

use crate::{Candidate, CandidateStatus, Department};

/// Select-box value that means "no constraint".
pub const ALL_OPTION: &str = "All";

/// A select-box filter: no constraint, or equality with one value.
///
/// The "All" sentinel only exists on the client. This type has no serde impls
/// so it can never end up in a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// Whether `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(required) => required == value,
        }
    }
}

impl<T: FromStr> Filter<T> {
    /// Parse the value of a `<select>` option.
    pub fn from_select(value: &str) -> Result<Self, T::Err> {
        if value == ALL_OPTION {
            Ok(Filter::All)
        } else {
            value.parse().map(Filter::Only)
        }
    }
}

impl<T: std::fmt::Display> Filter<T> {
    /// Value of the matching `<select>` option.
    pub fn select_value(&self) -> String {
        match self {
            Filter::All => ALL_OPTION.to_string(),
            Filter::Only(value) => value.to_string(),
        }
    }
}

pub type StatusFilter = Filter<CandidateStatus>;
pub type DepartmentFilter = Filter<Department>;

/// The three admin list predicates, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    pub status: StatusFilter,
    pub department: DepartmentFilter,
    /// Raw search box text; matched case-insensitively against name or email.
    pub search: String,
}

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.admits(candidate, &self.search.to_lowercase())
    }

    /// Keep the candidates that pass every predicate, preserving order.
    pub fn apply<'a>(&self, candidates: &'a [Candidate]) -> Vec<&'a Candidate> {
        let needle = self.search.to_lowercase();
        candidates
            .iter()
            .filter(|c| self.admits(c, &needle))
            .collect()
    }

    fn admits(&self, candidate: &Candidate, needle: &str) -> bool {
        self.status.admits(&candidate.current_status)
            && self.department.admits(&candidate.department)
            && candidate.matches_search(needle)
    }

    pub fn is_default(&self) -> bool {
        *self == CandidateFilter::default()
    }
}
