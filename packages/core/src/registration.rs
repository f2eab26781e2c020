//! Candidate registration form and its validation rules.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::{Department, PHONE_PREFIX, is_valid_phone};

/// Largest accepted resume upload (5 MiB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Applicants must be at least this old on the day they register.
pub const MINIMUM_AGE: i32 = 18;

/// Reasons a registration is blocked before submission.
///
/// The `Display` text is shown to the applicant as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("You must be at least 18 years old.")]
    Underage,
    #[error("Resume must be less than 5MB.")]
    ResumeTooLarge,
    #[error("Phone must start with +962 and have 9 additional digits.")]
    InvalidPhone,
    #[error("Please attach your resume (PDF).")]
    MissingResume,
    #[error("Your resume is still loading, please wait.")]
    ResumeLoading,
}

/// Whole years between `birth` and `today`.
///
/// Birth year is subtracted from the current year, minus one more if the
/// birthday has not come around yet this year.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn is_adult(birth: NaiveDate, today: NaiveDate) -> bool {
    age_on(birth, today) >= MINIMUM_AGE
}

/// A file picked in the resume input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    /// Size reported by the browser, in bytes.
    pub size: u64,
    /// File contents; left empty when the file is too large to upload.
    pub content: Vec<u8>,
}

/// Raw state of the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    /// Value of the date input (`YYYY-MM-DD`), possibly empty.
    pub date_of_birth: String,
    pub years_of_experience: u32,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub resume: Option<ResumeFile>,
    /// Read currently in progress for the resume input.
    pending_read: Option<u64>,
    reads_started: u64,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            date_of_birth: String::new(),
            years_of_experience: 0,
            department: Department::default(),
            email: String::new(),
            phone: PHONE_PREFIX.to_string(),
            resume: None,
            pending_read: None,
            reads_started: 0,
        }
    }
}

/// A registration that passed validation, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub years_of_experience: u32,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub resume: ResumeFile,
}

impl RegistrationForm {
    /// Mark a newly picked file as being read. Returns the read's ticket.
    ///
    /// Any earlier selection is dropped; its read can no longer complete.
    pub fn begin_resume_read(&mut self) -> u64 {
        self.reads_started += 1;
        self.pending_read = Some(self.reads_started);
        self.resume = None;
        self.reads_started
    }

    /// Store the outcome of read `ticket`. Superseded reads are ignored.
    pub fn finish_resume_read(&mut self, ticket: u64, resume: Option<ResumeFile>) -> bool {
        if self.pending_read != Some(ticket) {
            return false;
        }
        self.pending_read = None;
        self.resume = resume;
        true
    }

    /// Forget the selected file, including one still being read.
    pub fn clear_resume(&mut self) {
        self.pending_read = None;
        self.resume = None;
    }

    pub fn is_reading_resume(&self) -> bool {
        self.pending_read.is_some()
    }

    /// Check the form as of `today`, stopping at the first failed rule.
    ///
    /// Rules run in order: age, resume size, phone format, resume present.
    pub fn validate(&self, today: NaiveDate) -> Result<NewCandidate, RegistrationError> {
        let date_of_birth = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d")
            .ok()
            .filter(|dob| is_adult(*dob, today))
            .ok_or(RegistrationError::Underage)?;

        if self
            .resume
            .as_ref()
            .is_some_and(|resume| resume.size > MAX_RESUME_BYTES)
        {
            return Err(RegistrationError::ResumeTooLarge);
        }

        if !is_valid_phone(&self.phone) {
            return Err(RegistrationError::InvalidPhone);
        }

        if self.is_reading_resume() {
            return Err(RegistrationError::ResumeLoading);
        }
        let resume = self.resume.clone().ok_or(RegistrationError::MissingResume)?;

        Ok(NewCandidate {
            full_name: self.full_name.trim().to_string(),
            date_of_birth,
            years_of_experience: self.years_of_experience,
            department: self.department,
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            resume,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resume(size: u64) -> ResumeFile {
        ResumeFile {
            name: "cv.pdf".to_string(),
            size,
            content: vec![0; 16],
        }
    }

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            full_name: " Lina Haddad ".to_string(),
            date_of_birth: "1995-04-12".to_string(),
            years_of_experience: 4,
            department: Department::Support,
            email: "lina@example.com".to_string(),
            phone: "+962791234567".to_string(),
            resume: Some(resume(1024)),
            ..Default::default()
        }
    }

    #[test]
    fn exactly_eighteen_today_passes() {
        let today = date(2026, 10, 19);
        assert!(is_adult(date(2008, 10, 19), today));
        assert!(!is_adult(date(2008, 10, 20), today));
        assert_eq!(age_on(date(2008, 10, 20), today), 17);
    }

    #[test]
    fn leap_day_birthdays() {
        let birth = date(2008, 2, 29);
        assert!(!is_adult(birth, date(2026, 2, 28)));
        assert!(is_adult(birth, date(2026, 3, 1)));
    }

    #[test]
    fn valid_form_produces_trimmed_candidate() {
        let candidate = valid_form().validate(date(2026, 10, 19)).unwrap();
        assert_eq!(candidate.full_name, "Lina Haddad");
        assert_eq!(candidate.date_of_birth, date(1995, 4, 12));
        assert_eq!(candidate.department, Department::Support);
    }

    #[test]
    fn first_failing_rule_wins() {
        let today = date(2026, 10, 19);

        let mut form = valid_form();
        form.date_of_birth = "2015-01-01".to_string();
        form.phone = "+962".to_string();
        form.resume = Some(resume(MAX_RESUME_BYTES + 1));
        assert_eq!(form.validate(today), Err(RegistrationError::Underage));

        form.date_of_birth = "1990-01-01".to_string();
        assert_eq!(form.validate(today), Err(RegistrationError::ResumeTooLarge));

        form.resume = Some(resume(MAX_RESUME_BYTES));
        assert_eq!(form.validate(today), Err(RegistrationError::InvalidPhone));

        form.phone = "+962791234567".to_string();
        form.resume = None;
        assert_eq!(form.validate(today), Err(RegistrationError::MissingResume));
    }

    #[test]
    fn file_still_being_read_is_not_missing() {
        let today = date(2026, 10, 19);
        let mut form = valid_form();

        let ticket = form.begin_resume_read();
        assert!(form.is_reading_resume());
        assert_eq!(form.validate(today), Err(RegistrationError::ResumeLoading));

        assert!(form.finish_resume_read(ticket, Some(resume(2048))));
        assert!(!form.is_reading_resume());
        assert_eq!(form.validate(today).unwrap().resume.size, 2048);
    }

    #[test]
    fn superseded_read_is_ignored() {
        let mut form = valid_form();
        let first = form.begin_resume_read();
        let second = form.begin_resume_read();

        assert!(!form.finish_resume_read(first, Some(resume(1))));
        assert!(form.is_reading_resume());
        assert!(form.resume.is_none());

        form.clear_resume();
        assert!(!form.finish_resume_read(second, Some(resume(2))));
        assert!(form.resume.is_none());
        assert_eq!(
            form.validate(date(2026, 10, 19)),
            Err(RegistrationError::MissingResume)
        );
    }

    #[test]
    fn missing_birth_date_counts_as_underage() {
        let mut form = valid_form();
        form.date_of_birth = String::new();
        assert_eq!(
            form.validate(date(2026, 10, 19)),
            Err(RegistrationError::Underage)
        );
    }

    #[test]
    fn messages_match_the_form_copy() {
        assert_eq!(
            RegistrationError::InvalidPhone.to_string(),
            "Phone must start with +962 and have 9 additional digits."
        );
        assert_eq!(
            RegistrationError::ResumeTooLarge.to_string(),
            "Resume must be less than 5MB."
        );
    }

    #[test]
    fn defaults_match_the_empty_form() {
        let form = RegistrationForm::default();
        assert_eq!(form.phone, PHONE_PREFIX);
        assert_eq!(form.department, Department::It);
        assert_eq!(form.years_of_experience, 0);
    }
}
