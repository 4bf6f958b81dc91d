//! Job form state.
//!
//! A [`JobForm`] holds a working copy of a job listing and the validation
//! errors for its fields. It starts blank (create mode) or seeded from an
//! existing listing (edit mode), validates synchronously and hands a valid
//! listing to a [`SubmitHandler`] without knowing how it is stored.
//!
//! Editing a field always clears that field's error, whatever the new value.
//! Errors only come back on the next validation pass.

use super::error::StateError;
use super::job::{JobField, JobRecord};
use chrono::{NaiveDate, Utc};
use log::*;
use std::collections::BTreeMap;

/// Date format used for stored dates and for the validation cutoff.
///
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation messages keyed by field.
///
pub type FieldErrors = BTreeMap<JobField, String>;

/// Specifying whether the form creates a new listing or edits one.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(JobRecord),
}

impl FormMode {
    /// Return the form heading for this mode.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Post a Job",
            FormMode::Edit(_) => "Edit Job",
        }
    }

    /// Return the submit action label for this mode.
    ///
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Job",
            FormMode::Edit(_) => "Update Job",
        }
    }
}

/// Specifying the derived validation phase of a form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormPhase {
    Clean,
    Invalid,
}

/// Receiver of validated listings.
///
/// The handler decides how the listing is stored and whether to clear the
/// form through `reset`.
pub trait SubmitHandler {
    fn submit(&mut self, record: JobRecord, reset: ResetForm<'_>);
}

/// Reset capability bound to the form being submitted.
///
pub struct ResetForm<'a> {
    form: &'a mut JobForm,
}

impl ResetForm<'_> {
    /// Clear the bound form.
    ///
    pub fn reset(self) {
        self.form.reset();
    }
}

/// Working state of a job form.
///
#[derive(Clone, Debug)]
pub struct JobForm {
    mode: FormMode,
    record: JobRecord,
    errors: FieldErrors,
    focus: JobField,
}

impl Default for JobForm {
    fn default() -> Self {
        JobForm::new(None)
    }
}

impl JobForm {
    /// Return a new form, seeded from the source listing if one is given.
    ///
    pub fn new(source: Option<JobRecord>) -> Self {
        let (mode, record) = match source {
            Some(source) => (FormMode::Edit(source.clone()), source),
            None => (FormMode::Create, JobRecord::default()),
        };
        JobForm {
            mode,
            record,
            errors: FieldErrors::new(),
            focus: JobField::Title,
        }
    }

    /// Replace the working listing with a new source listing. Unsaved edits
    /// are discarded and the form switches to edit mode. Existing errors are
    /// left for the next validation pass. Without a source this is a no-op.
    ///
    pub fn resynchronize(&mut self, source: Option<JobRecord>) -> &mut Self {
        if let Some(source) = source {
            debug!("Re-seeding job form from listing {:?}...", source.id);
            self.record = source.clone();
            self.mode = FormMode::Edit(source);
        }
        self
    }

    /// Return whether the form creates or edits a listing.
    ///
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Return the working listing.
    ///
    pub fn record(&self) -> &JobRecord {
        &self.record
    }

    /// Return every field error, keyed by field.
    ///
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Return the error shown for the given field, if any.
    ///
    pub fn error(&self, field: JobField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Return the derived validation phase.
    ///
    pub fn phase(&self) -> FormPhase {
        if self.errors.is_empty() {
            FormPhase::Clean
        } else {
            FormPhase::Invalid
        }
    }

    /// Overwrite one field and clear its error.
    ///
    pub fn set_field(&mut self, field: JobField, value: impl Into<String>) -> &mut Self {
        *self.record.get_mut(field) = value.into();
        self.errors.remove(&field);
        self
    }

    /// Overwrite one field addressed by its serialized name.
    ///
    #[allow(dead_code)]
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&mut Self, StateError> {
        let field = name.parse::<JobField>()?;
        Ok(self.set_field(field, value))
    }

    /// Recompute every field error against today's UTC date. Returns true
    /// when no field has an error.
    ///
    pub fn validate(&mut self) -> bool {
        self.validate_on(Utc::now().date_naive())
    }

    /// Recompute every field error against the given date. Returns true when
    /// no field has an error.
    ///
    pub fn validate_on(&mut self, today: NaiveDate) -> bool {
        self.errors = validate_record(&self.record, today);
        self.errors.is_empty()
    }

    /// Validate against today's UTC date and pass a valid listing on.
    ///
    pub fn submit<H: SubmitHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        if !self.validate() {
            debug!("Job form has {} invalid field(s).", self.errors.len());
            return false;
        }
        self.hand_over(handler)
    }

    /// Validate against the given date and pass a valid listing on. Returns
    /// whether the handler was called.
    ///
    #[allow(dead_code)]
    pub fn submit_on<H: SubmitHandler + ?Sized>(
        &mut self,
        today: NaiveDate,
        handler: &mut H,
    ) -> bool {
        if !self.validate_on(today) {
            debug!("Job form has {} invalid field(s).", self.errors.len());
            return false;
        }
        self.hand_over(handler)
    }

    /// Validate against the given date and pass a valid listing to a closure.
    ///
    #[allow(dead_code)]
    pub fn submit_with<F>(&mut self, today: NaiveDate, on_submit: F) -> bool
    where
        F: FnOnce(JobRecord, ResetForm<'_>),
    {
        if !self.validate_on(today) {
            return false;
        }
        let record = self.record.clone();
        on_submit(record, ResetForm { form: self });
        true
    }

    fn hand_over<H: SubmitHandler + ?Sized>(&mut self, handler: &mut H) -> bool {
        let record = self.record.clone();
        handler.submit(record, ResetForm { form: self });
        true
    }

    /// Clear every field and error, whatever the mode.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.record = JobRecord::default();
        self.errors.clear();
        self
    }

    /// Return the field receiving keystrokes.
    ///
    pub fn focus(&self) -> JobField {
        self.focus
    }

    /// Move focus to the given field.
    ///
    #[allow(dead_code)]
    pub fn set_focus(&mut self, field: JobField) -> &mut Self {
        self.focus = field;
        self
    }

    /// Move focus to the next field, wrapping to the first.
    ///
    pub fn focus_next(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    /// Move focus to the previous field, wrapping to the last.
    ///
    pub fn focus_previous(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    /// Append a character to the focused field.
    ///
    pub fn push_char(&mut self, c: char) -> &mut Self {
        let mut value = self.record.get(self.focus).to_string();
        value.push(c);
        self.set_field(self.focus, value)
    }

    /// Remove the last character from the focused field.
    ///
    pub fn pop_char(&mut self) -> &mut Self {
        let mut value = self.record.get(self.focus).to_string();
        value.pop();
        self.set_field(self.focus, value)
    }
}

/// Return the error mapping for a listing. Every field is checked.
///
/// Dates are compared as `YYYY-MM-DD` strings, which order the same way as
/// the dates they represent.
pub fn validate_record(record: &JobRecord, today: NaiveDate) -> FieldErrors {
    let today = today.format(DATE_FORMAT).to_string();
    let mut errors = FieldErrors::new();

    let required = [
        (JobField::Title, "Job title is required"),
        (JobField::Description, "Job description is required"),
        (JobField::Location, "Job location is required"),
        (JobField::Salary, "Salary is required"),
        (JobField::Skills, "Skills are required"),
        (JobField::Category, "Category is required"),
    ];
    for (field, message) in required {
        if record.get(field).trim().is_empty() {
            errors.insert(field, message.to_string());
        }
    }

    if record.date_of_post.is_empty() || record.date_of_post.as_str() > today.as_str() {
        errors.insert(JobField::DateOfPost, "Invalid date of post".to_string());
    }
    if record.last_date.is_empty() || record.last_date.as_str() < today.as_str() {
        errors.insert(JobField::LastDate, "Invalid last date".to_string());
    }
    errors
}
