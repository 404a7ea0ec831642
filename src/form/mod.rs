//! Cycle form submission: validation, feedback and reset.
//!
//! The handler never looks anything up by itself. The form and the message
//! panel are handed to it on every submission through the [`CycleForm`] and
//! [`MessageDisplay`] traits, so it can be driven by the terminal UI or by a
//! plain struct in tests.

pub mod entry;

use thiserror::Error;
use tracing::{debug, info};

pub use entry::{CycleEntry, MessageClass};

/// Element id of the form itself.
pub const FORM_ID: &str = "cycleForm";
/// Element id of the message panel.
pub const MESSAGE_ID: &str = "message";

/// The inputs of the cycle form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    StartDate,
    EndDate,
    Symptoms,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::StartDate, FormField::EndDate, FormField::Symptoms];

    pub fn id(self) -> &'static str {
        match self {
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
            FormField::Symptoms => "symptoms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::StartDate => "Start Date",
            FormField::EndDate => "End Date",
            FormField::Symptoms => "Symptoms",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::StartDate => FormField::EndDate,
            FormField::EndDate => FormField::Symptoms,
            FormField::Symptoms => FormField::StartDate,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::StartDate => FormField::Symptoms,
            FormField::EndDate => FormField::StartDate,
            FormField::Symptoms => FormField::EndDate,
        }
    }
}

/// Read access to the form inputs plus a reset back to the empty state.
pub trait CycleForm {
    fn value(&self, field: FormField) -> &str;
    fn reset(&mut self);
}

/// Where feedback goes. Each call replaces whatever was shown before.
pub trait MessageDisplay {
    fn show(&mut self, text: &str, class: MessageClass);
}

/// A single submit dispatch. Listeners may cancel the host's default action.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both start and end dates.")]
    MissingRequiredDate,
}

/// What a submission ended up showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(CycleEntry),
    Rejected(FormError),
}

/// Submit listener for the cycle form. Holds no state between submissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmitHandler;

impl SubmitHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle<F, D>(&self, event: &mut SubmitEvent, form: &mut F, display: &mut D) -> Submission
    where
        F: CycleForm + ?Sized,
        D: MessageDisplay + ?Sized,
    {
        event.prevent_default();

        let start_date = form.value(FormField::StartDate);
        let end_date = form.value(FormField::EndDate);

        if start_date.is_empty() || end_date.is_empty() {
            let err = FormError::MissingRequiredDate;
            debug!(
                start_empty = start_date.is_empty(),
                end_empty = end_date.is_empty(),
                "rejected cycle submission"
            );
            display.show(&err.to_string(), MessageClass::Error);
            return Submission::Rejected(err);
        }

        let entry = CycleEntry::from_fields(start_date, end_date, form.value(FormField::Symptoms));
        display.show(&entry.confirmation(), MessageClass::Success);
        info!(
            start = %entry.start_date,
            end = %entry.end_date,
            symptoms = entry.symptoms.len(),
            "cycle added"
        );

        form.reset();
        Submission::Accepted(entry)
    }
}
