//! Creation-form submission state machine.
//!
//! DESIGN
//! ======
//! `Editing -> Submitting -> Submitted` on success, `Submitting -> Editing`
//! with a message on failure. The async call itself lives outside this
//! crate; the form hands out a [`SubmitTicket`] and accepts exactly one
//! completion for it. Cancelling bumps the generation so a late completion
//! is recognized as stale and dropped.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::{Deserialize, Serialize};

use crate::draft::{DraftError, DraftListing, NewListing};

/// User-facing message for any failed submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "Error creating product. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Handle for one in-flight submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    pub listing: NewListing,
}

/// Acknowledgement returned by the create boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub receipt_id: String,
}

/// What a completion did to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft discarded; the page should navigate away.
    Accepted(SubmitReceipt),
    /// Back to editing with [`SUBMIT_FAILED_MESSAGE`] shown.
    Failed,
    /// The ticket was cancelled or superseded; nothing changed.
    Stale,
}

/// Creation form: the draft plus submission phase and error line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub draft: DraftListing,
    phase: FormPhase,
    generation: u64,
    error: Option<String>,
}

impl CreateForm {
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Validate the draft and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// [`DraftError::AlreadySubmitting`] while a ticket is outstanding, or the
    /// draft's validation error (the phase stays `Editing`).
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, DraftError> {
        if self.phase == FormPhase::Submitting {
            return Err(DraftError::AlreadySubmitting);
        }
        let listing = self.draft.validate()?;
        self.generation += 1;
        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(SubmitTicket { generation: self.generation, listing })
    }

    /// Apply the boundary's answer for `ticket`.
    pub fn complete(&mut self, ticket: &SubmitTicket, result: Result<SubmitReceipt, String>) -> SubmitOutcome {
        if self.phase != FormPhase::Submitting || ticket.generation != self.generation {
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(receipt) => {
                self.phase = FormPhase::Submitted;
                self.draft = DraftListing::default();
                SubmitOutcome::Accepted(receipt)
            }
            Err(_) => {
                self.phase = FormPhase::Editing;
                self.error = Some(SUBMIT_FAILED_MESSAGE.to_owned());
                SubmitOutcome::Failed
            }
        }
    }

    /// Abandon the in-flight submission and return to editing.
    pub fn cancel_submit(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.generation += 1;
            self.phase = FormPhase::Editing;
        }
    }
}
