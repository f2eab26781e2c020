//! State of the admin candidate list: loaded rows, filters and current page.

use crate::{
    Candidate, CandidateFilter, CandidateId, DepartmentFilter, PAGE_SIZE, Pagination,
    StatusFilter, StatusHistoryEntry,
};

/// Admin list state. Every filter change returns to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateListState {
    candidates: Vec<Candidate>,
    filter: CandidateFilter,
    page: usize,
}

impl Default for CandidateListState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CandidateListState {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            filter: CandidateFilter::default(),
            page: 1,
        }
    }

    /// Swap in a freshly fetched list, keeping the current filters.
    pub fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.page = self.pagination().page();
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn filter(&self) -> &CandidateFilter {
        &self.filter
    }

    pub fn find(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.page = 1;
    }

    pub fn set_department_filter(&mut self, department: DepartmentFilter) {
        self.filter.department = department;
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filter = CandidateFilter::default();
        self.page = 1;
    }

    /// Candidates passing every filter, in load order.
    pub fn filtered(&self) -> Vec<&Candidate> {
        self.filter.apply(&self.candidates)
    }

    /// Pagination over the filtered rows, clamped to the last page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, PAGE_SIZE, self.filtered().len())
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<Candidate> {
        let filtered = self.filtered();
        self.pagination()
            .slice(&filtered)
            .iter()
            .map(|c| (*c).clone())
            .collect()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = Pagination::new(page, PAGE_SIZE, self.filtered().len()).page();
    }

    pub fn next_page(&mut self) {
        let pagination = self.pagination();
        if pagination.has_next() {
            self.page = pagination.page() + 1;
        }
    }

    pub fn previous_page(&mut self) {
        let pagination = self.pagination();
        if pagination.has_previous() {
            self.page = pagination.page() - 1;
        }
    }

    /// Apply a status change the server confirmed.
    ///
    /// Only `current_status` of the matching candidate is touched. Returns
    /// false when the candidate is not in the list.
    pub fn apply_status_change(&mut self, entry: &StatusHistoryEntry) -> bool {
        let Some(candidate) = self
            .candidates
            .iter_mut()
            .find(|c| c.id == entry.candidate_id)
        else {
            return false;
        };
        candidate.current_status = entry.status;
        self.page = self.pagination().page();
        true
    }
}
