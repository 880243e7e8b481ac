// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session actions that combine the board's submission flow with the backend.

use crate::client::ApiClient;
use crate::error::FlowError;
use crate::loader::reload_sessions;
use crate::resources::Resource;
use crate::sessions::server_outcome;
use planif::{
    CoreError, PlacementReport, PlanningBoard, ServerOutcome, SubmissionState, SubmitRequest,
};
use planif_domain::{Conflict, Session};

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; sessions were reloaded and the grid redrawn.
    Saved { report: PlacementReport },
    /// Refused with conflicts; the board stays in the conflict phase.
    Conflicts(Vec<Conflict>),
    /// Refused for another reason; the form is kept as entered.
    Failed { message: String },
}

/// Drives session create, edit, view and delete against the backend.
#[derive(Debug)]
pub struct SessionController<'a> {
    client: &'a ApiClient,
    board: &'a mut PlanningBoard,
}

impl<'a> SessionController<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient, board: &'a mut PlanningBoard) -> Self {
        Self { client, board }
    }

    #[must_use]
    pub const fn board(&self) -> &PlanningBoard {
        self.board
    }

    pub const fn board_mut(&mut self) -> &mut PlanningBoard {
        self.board
    }

    /// Validates the form and sends it.
    ///
    /// Nothing is sent when the form is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No planning is selected
    /// - The form is invalid
    /// - The submission flow is not idle
    /// - Sessions cannot be reloaded after a save
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FlowError> {
        let planning_id: i64 = self
            .board
            .planning_id()
            .ok_or(CoreError::NoPlanningSelected)?;
        let request: SubmitRequest = self.board.submission_mut().submit(planning_id)?;
        self.send(request).await
    }

    /// Re-sends the payload refused with conflicts, overriding them.
    ///
    /// # Errors
    ///
    /// Returns an error if no conflict is shown, or if sessions cannot be
    /// reloaded after a save.
    pub async fn force_create(&mut self) -> Result<SubmitOutcome, FlowError> {
        let request: SubmitRequest = self.board.submission_mut().force_create()?;
        tracing::warn!("Overriding reported conflicts");
        self.send(request).await
    }

    /// Closes the conflict panel and returns to the form.
    ///
    /// # Errors
    ///
    /// Returns an error if no conflict is shown.
    pub fn edit_after_conflict(&mut self) -> Result<(), FlowError> {
        self.board.submission_mut().edit_after_conflict()?;
        Ok(())
    }

    async fn send(&mut self, request: SubmitRequest) -> Result<SubmitOutcome, FlowError> {
        let outcome: ServerOutcome = server_outcome(self.client.send_session(&request).await);
        let state: SubmissionState = self.board.submission_mut().complete(outcome)?.clone();

        match state {
            SubmissionState::Success => {
                self.board.submission_mut().acknowledge()?;
                reload_sessions(self.client, self.board).await?;
                Ok(SubmitOutcome::Saved {
                    report: self.board.report().clone(),
                })
            }
            SubmissionState::Conflict { conflicts, .. } => Ok(SubmitOutcome::Conflicts(conflicts)),
            SubmissionState::Error { message } => {
                self.board.submission_mut().acknowledge()?;
                Ok(SubmitOutcome::Failed { message })
            }
            other => Err(CoreError::InvalidTransition {
                from: other.phase().as_str(),
                to: "completed",
            }
            .into()),
        }
    }

    /// Fetches a session for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn view(&self, id: i64) -> Result<Option<Session>, FlowError> {
        Ok(self.client.session(id).await?)
    }

    /// Fetches a session and loads it into the form for editing.
    ///
    /// Returns `false` when the backend has no such session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn edit(&mut self, id: i64) -> Result<bool, FlowError> {
        let Some(session) = self.client.session(id).await? else {
            tracing::warn!(session_id = id, "Session not found");
            return Ok(false);
        };
        self.board.submission_mut().open_edit(&session);
        Ok(true)
    }

    /// Deletes a session and redraws the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the deletion or the reload fails.
    pub async fn delete(&mut self, id: i64) -> Result<(), FlowError> {
        self.client.delete(Resource::Sessions, id).await?;
        reload_sessions(self.client, self.board).await
    }
}
