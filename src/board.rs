//! Report Board - presentation model for the bug list
//!
//! Holds the submission form and the last-known list of reports. Every
//! mutation is followed by an explicit, separate re-list. Storage failures are
//! logged and swallowed: the board keeps showing the last list it managed to
//! load, and no failure is fatal.

use crate::Error;
use crate::report::{self, BugReport, ReportDate};
use crate::storage::ReportStore;

/// The bug submission form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub category: Option<String>,
    pub steps: Option<String>,
    /// Filing date, captured when the draft is created
    pub date: ReportDate,
}

impl Draft {
    /// A blank draft dated today
    pub fn new() -> Self {
        Self::dated(ReportDate::today())
    }

    pub fn dated(date: ReportDate) -> Self {
        Self {
            category: None,
            steps: None,
            date,
        }
    }

    /// Both required fields are filled in
    pub fn is_complete(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.category) && filled(&self.steps)
    }

    /// Label for the submit action
    pub fn prompt(&self) -> &'static str {
        if self.is_complete() { "Save" } else { "Enter bug info" }
    }

    fn clear(&mut self) {
        self.category = None;
        self.steps = None;
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of submitting the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Insert was issued (storage failures are logged, not reported here)
    Saved,
    /// A required field was empty; nothing was written and the draft is kept
    Rejected(&'static str),
}

pub struct ReportBoard<S: ReportStore> {
    store: S,
    draft: Draft,
    reports: Vec<BugReport>,
}

impl<S: ReportStore> ReportBoard<S> {
    pub fn new(store: S, draft: Draft) -> Self {
        Self {
            store,
            draft,
            reports: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Last successfully loaded list
    pub fn reports(&self) -> &[BugReport] {
        &self.reports
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Startup: create the table if needed, then load the list.
    pub fn mount(&mut self) {
        if let Err(e) = self.store.ensure_schema() {
            tracing::error!("Failed to create report table: {}", e);
        }
        self.refresh();
    }

    /// Reload the full list. On failure the previous list is kept.
    pub fn refresh(&mut self) {
        match self.store.list_all() {
            Ok(reports) => self.reports = reports,
            Err(e) => tracing::warn!("Failed to load bug reports: {}", e),
        }
    }

    pub fn set_category(&mut self, text: impl Into<String>) {
        self.draft.category = Some(text.into());
    }

    pub fn set_steps(&mut self, text: impl Into<String>) {
        self.draft.steps = Some(text.into());
    }

    /// Insert the draft, clear the form, then reload the list.
    pub fn submit(&mut self) -> Submission {
        let category = self.draft.category.as_deref().unwrap_or("");
        let steps = self.draft.steps.as_deref().unwrap_or("");

        if let Err(Error::MissingField(field)) = report::validate_fields(category, steps) {
            tracing::debug!("Submission rejected: {} is empty", field);
            return Submission::Rejected(field);
        }

        let date = self.draft.date.to_string();
        if let Err(e) = self.store.insert(category, steps, &date) {
            tracing::warn!("Failed to save bug report: {}", e);
        }

        self.draft.clear();
        self.refresh();
        Submission::Saved
    }

    /// Delete a report, then reload the list.
    pub fn remove(&mut self, id: i64) {
        if let Err(e) = self.store.delete(id) {
            tracing::warn!("Failed to delete bug report {}: {}", id, e);
        }
        self.refresh();
    }
}
