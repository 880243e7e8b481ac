// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session create/edit submission flow.
//!
//! ```text
//! Idle -> Validating -> Submitting -> Success  -> Idle
//!            |              |      -> Conflict -> Idle (edit)
//!            v              |                  -> Submitting (force create)
//!           Idle            -> Error    -> Idle
//! ```
//!
//! The flow owns the form. It never performs I/O: [`Submission::submit`]
//! and [`Submission::force_create`] hand back the request to send, and
//! [`Submission::complete`] takes the server's answer.

use crate::error::CoreError;
use planif_domain::{Conflict, DomainError, Session, SessionForm, SessionPayload, validate_session_form};

/// The phases of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Validating,
    Submitting,
    Conflict,
    Success,
    Error,
}

impl SubmissionPhase {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Conflict => "conflict",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Returns true if moving from this phase to `next` is permitted.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Validating)
                | (Self::Validating, Self::Idle | Self::Submitting)
                | (
                    Self::Submitting,
                    Self::Success | Self::Conflict | Self::Error
                )
                | (Self::Conflict, Self::Idle | Self::Submitting)
                | (Self::Success | Self::Error, Self::Idle)
        )
    }

    /// Validates a transition.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if the transition is not allowed.
    pub const fn validate_transition(&self, next: Self) -> Result<(), CoreError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.as_str(),
                to: next.as_str(),
            })
        }
    }
}

/// How a payload is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// `POST /sessions`.
    Create,
    /// `PUT /sessions/{id}`.
    Edit(i64),
    /// The create path that skips the conflict check.
    ForceCreate,
}

/// A request the caller must send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: SubmitMode,
    pub payload: SessionPayload,
}

/// What the server answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerOutcome {
    /// 2xx.
    Accepted,
    /// 409 with the reported conflicts.
    Conflict(Vec<Conflict>),
    /// Any other failure, with a message for the user.
    Rejected { message: String },
}

/// The submission state, with the data each phase carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting(SubmitRequest),
    Conflict {
        conflicts: Vec<Conflict>,
        /// The payload that was refused, kept for a forced re-submit.
        pending: SessionPayload,
    },
    Success,
    Error { message: String },
}

impl SubmissionState {
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        match self {
            Self::Idle => SubmissionPhase::Idle,
            Self::Validating => SubmissionPhase::Validating,
            Self::Submitting(_) => SubmissionPhase::Submitting,
            Self::Conflict { .. } => SubmissionPhase::Conflict,
            Self::Success => SubmissionPhase::Success,
            Self::Error { .. } => SubmissionPhase::Error,
        }
    }
}

/// The session form and its submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    form: SessionForm,
    editing_session_id: Option<i64>,
    state: SubmissionState,
    validation_errors: Vec<DomainError>,
}

impl Submission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.state.phase()
    }

    #[must_use]
    pub const fn form(&self) -> &SessionForm {
        &self.form
    }

    /// The form, for the caller to fill in.
    pub const fn form_mut(&mut self) -> &mut SessionForm {
        &mut self.form
    }

    #[must_use]
    pub const fn editing_session_id(&self) -> Option<i64> {
        self.editing_session_id
    }

    /// The errors from the last failed validation.
    #[must_use]
    pub fn validation_errors(&self) -> &[DomainError] {
        &self.validation_errors
    }

    /// The conflicts currently shown, if any.
    #[must_use]
    pub fn conflicts(&self) -> &[Conflict] {
        match &self.state {
            SubmissionState::Conflict { conflicts, .. } => conflicts,
            _ => &[],
        }
    }

    fn transition(&mut self, next: SubmissionState) -> Result<(), CoreError> {
        self.state.phase().validate_transition(next.phase())?;
        tracing::debug!(
            from = self.state.phase().as_str(),
            to = next.phase().as_str(),
            "Submission transition"
        );
        self.state = next;
        Ok(())
    }

    /// Starts a new session with a blank form.
    pub fn open_create(&mut self) {
        self.form = SessionForm::default();
        self.editing_session_id = None;
        self.validation_errors.clear();
        self.state = SubmissionState::Idle;
    }

    /// Loads an existing session into the form for editing.
    pub fn open_edit(&mut self, session: &Session) {
        self.form = SessionForm::from_session(session);
        self.editing_session_id = Some(session.id);
        self.validation_errors.clear();
        self.state = SubmissionState::Idle;
    }

    /// Validates the form and, when valid, moves to `Submitting`.
    ///
    /// # Arguments
    ///
    /// * `planning_id` - The planning the session belongs to
    ///
    /// # Returns
    ///
    /// The request to send: `Create`, or `Edit` when a session is being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The flow is not idle
    /// - The form is invalid; the flow is back in `Idle` with the form intact
    pub fn submit(&mut self, planning_id: i64) -> Result<SubmitRequest, CoreError> {
        self.transition(SubmissionState::Validating)?;
        match validate_session_form(&self.form, planning_id) {
            Ok(payload) => {
                self.validation_errors.clear();
                let mode: SubmitMode = self
                    .editing_session_id
                    .map_or(SubmitMode::Create, SubmitMode::Edit);
                let request: SubmitRequest = SubmitRequest { mode, payload };
                self.transition(SubmissionState::Submitting(request.clone()))?;
                Ok(request)
            }
            Err(errors) => {
                tracing::info!(errors = errors.len(), "Session form is invalid");
                self.validation_errors.clone_from(&errors);
                self.transition(SubmissionState::Idle)?;
                Err(CoreError::ValidationFailed(errors))
            }
        }
    }

    /// Applies the server's answer to the request in flight.
    ///
    /// On success the form is reset; the caller reloads sessions, redraws the
    /// grid and then calls [`Self::acknowledge`].
    ///
    /// # Errors
    ///
    /// Returns an error if no request is in flight.
    pub fn complete(&mut self, outcome: ServerOutcome) -> Result<&SubmissionState, CoreError> {
        let SubmissionState::Submitting(request) = &self.state else {
            return Err(CoreError::InvalidTransition {
                from: self.state.phase().as_str(),
                to: "completed",
            });
        };
        let next: SubmissionState = match outcome {
            ServerOutcome::Accepted => SubmissionState::Success,
            ServerOutcome::Conflict(conflicts) => {
                tracing::info!(conflicts = conflicts.len(), "Server reported conflicts");
                SubmissionState::Conflict {
                    conflicts,
                    pending: request.payload.clone(),
                }
            }
            ServerOutcome::Rejected { message } => {
                tracing::warn!(%message, "Session submission failed");
                SubmissionState::Error { message }
            }
        };
        self.transition(next)?;
        if self.state == SubmissionState::Success {
            self.form = SessionForm::default();
            self.editing_session_id = None;
        }
        Ok(&self.state)
    }

    /// Leaves the conflict panel to edit the form again.
    ///
    /// # Errors
    ///
    /// Returns an error if no conflict is shown.
    pub fn edit_after_conflict(&mut self) -> Result<(), CoreError> {
        if self.phase() != SubmissionPhase::Conflict {
            return Err(CoreError::InvalidTransition {
                from: self.phase().as_str(),
                to: SubmissionPhase::Idle.as_str(),
            });
        }
        self.transition(SubmissionState::Idle)
    }

    /// Re-submits the refused payload unchanged, skipping the conflict check.
    ///
    /// # Errors
    ///
    /// Returns an error if no conflict is shown.
    pub fn force_create(&mut self) -> Result<SubmitRequest, CoreError> {
        let SubmissionState::Conflict { pending, .. } = &self.state else {
            return Err(CoreError::InvalidTransition {
                from: self.state.phase().as_str(),
                to: SubmissionPhase::Submitting.as_str(),
            });
        };
        let request: SubmitRequest = SubmitRequest {
            mode: SubmitMode::ForceCreate,
            payload: pending.clone(),
        };
        self.transition(SubmissionState::Submitting(request.clone()))?;
        Ok(request)
    }

    /// Returns to `Idle` after a success or an error has been shown.
    ///
    /// After an error the form is left as entered.
    ///
    /// # Errors
    ///
    /// Returns an error unless the flow is in `Success` or `Error`.
    pub fn acknowledge(&mut self) -> Result<(), CoreError> {
        if !matches!(
            self.phase(),
            SubmissionPhase::Success | SubmissionPhase::Error
        ) {
            return Err(CoreError::InvalidTransition {
                from: self.phase().as_str(),
                to: SubmissionPhase::Idle.as_str(),
            });
        }
        self.transition(SubmissionState::Idle)
    }
}
