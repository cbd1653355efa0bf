//! Form state: field values, dirty flags, validation and the submission
//! lifecycle (Idle -> Submitting -> Success | Error).

use crate::core::validator::{self, ValidationResult};
use crate::domain::model::{
    Field, FieldEdit, FormStatus, SignupRequest, SubmissionOutcome, SubmissionReceipt,
};
use crate::domain::ports::SubmissionClient;
use crate::utils::error::{Result, SignupError};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Pristine,
    Valid,
    Invalid(&'static str),
}

/// Proof that a submission was started; hands the value snapshot to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    id: u64,
    request: SignupRequest,
}

impl SubmissionTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn request(&self) -> &SignupRequest {
        &self.request
    }
}

pub struct FormController<C: SubmissionClient> {
    client: C,
    values: SignupRequest,
    dirty: HashSet<Field>,
    validation: ValidationResult,
    outcome: Option<SubmissionOutcome>,
    pending_ticket: Option<u64>,
    next_ticket: u64,
}

impl<C: SubmissionClient> FormController<C> {
    pub fn new(client: C) -> Self {
        let values = SignupRequest::default();
        let validation = validator::validate(&values);
        Self {
            client,
            values,
            dirty: HashSet::new(),
            validation,
            outcome: None,
            pending_ticket: None,
            next_ticket: 1,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn values(&self) -> &SignupRequest {
        &self.values
    }

    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn status(&self) -> FormStatus {
        FormStatus::from(self.outcome.as_ref())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.outcome, Some(SubmissionOutcome::Pending))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && self.values.gdpr_consent_and_updates
            && self.validation.is_valid()
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        if !self.dirty.contains(&field) {
            return FieldState::Pristine;
        }
        match self.validation.error(field) {
            Some(message) => FieldState::Invalid(message),
            None => FieldState::Valid,
        }
    }

    /// Records one user edit and re-validates the whole form.
    pub fn apply(&mut self, edit: FieldEdit) -> &ValidationResult {
        let field = edit.field();
        self.values.apply(edit);
        self.dirty.insert(field);
        self.validation = validator::validate(&self.values);

        if matches!(
            self.outcome,
            Some(SubmissionOutcome::Success(_)) | Some(SubmissionOutcome::Failure(_))
        ) {
            tracing::debug!("Form edited after submission, clearing previous outcome");
            self.outcome = None;
        }

        tracing::trace!(
            "Field '{}' changed, {} field(s) invalid",
            field,
            self.validation.len()
        );
        &self.validation
    }

    /// Moves the form into Submitting and snapshots the current values.
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket> {
        if self.is_submitting() {
            tracing::warn!("Submit ignored: a submission is already in flight");
            return Err(SignupError::SubmissionInFlight);
        }

        self.validation = validator::validate(&self.values);
        if !self.can_submit() {
            for field in Field::ALL {
                self.dirty.insert(field);
            }
            return Err(self
                .validation
                .clone()
                .into_result()
                .err()
                .unwrap_or_else(|| SignupError::ValidationError {
                    fields: vec![Field::GdprConsentAndUpdates.as_str().to_string()],
                }));
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.pending_ticket = Some(id);
        self.outcome = Some(SubmissionOutcome::Pending);
        tracing::debug!("Submission #{} started", id);

        Ok(SubmissionTicket {
            id,
            request: self.values.clone(),
        })
    }

    /// Resolves the pending submission. Tickets that are no longer pending are ignored.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<SubmissionReceipt>,
    ) -> FormStatus {
        if self.pending_ticket != Some(ticket.id) {
            tracing::debug!("Ignoring result of stale submission #{}", ticket.id);
            return self.status();
        }
        self.pending_ticket = None;

        match result {
            Ok(receipt) => {
                tracing::info!(
                    "Submission #{} accepted with HTTP {}",
                    ticket.id,
                    receipt.status
                );
                self.clear_fields();
                self.outcome = Some(SubmissionOutcome::Success(receipt));
            }
            Err(e) => {
                tracing::warn!("Submission #{} failed: {}", ticket.id, e);
                self.outcome = Some(SubmissionOutcome::Failure(e.to_string()));
            }
        }
        self.status()
    }

    /// Validates, sends once and records the outcome.
    pub async fn submit(&mut self) -> Result<FormStatus> {
        let ticket = self.begin_submission()?;
        let result = self.client.submit(ticket.request()).await;
        Ok(self.complete_submission(ticket, result))
    }

    /// "Sign up another": leaves the success screen for a fresh form.
    pub fn dismiss(&mut self) {
        if matches!(self.outcome, Some(SubmissionOutcome::Success(_))) {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.clear_fields();
        self.outcome = None;
        self.pending_ticket = None;
    }

    fn clear_fields(&mut self) {
        self.values = SignupRequest::default();
        self.dirty.clear();
        self.validation = validator::validate(&self.values);
    }
}
