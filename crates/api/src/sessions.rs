// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sending session payloads and reading the conflict answer.

use crate::client::{ApiClient, RawResponse};
use crate::error::ApiError;
use crate::resources::Resource;
use planif::{ServerOutcome, SubmitMode, SubmitRequest};
use planif_domain::{Conflict, Session};
use reqwest::Method;
use serde_json::Value;

const CONFLICT_STATUS: u16 = 409;

/// What a session write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResponse {
    /// 2xx, with the stored session when the backend echoed it.
    Saved(Option<Session>),
    /// 409 carrying a conflict list.
    Conflicts(Vec<Conflict>),
}

/// Reads the conflict list from a 409 body.
///
/// Accepts `{"conflits": [...]}` or a bare array. Returns `None` when the
/// body carries no list, in which case the 409 is a plain duplicate.
#[must_use]
pub fn parse_conflicts(body: &str) -> Option<Vec<Conflict>> {
    let value: Value = serde_json::from_str(body).ok()?;
    let list: Value = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("conflits")?,
        _ => return None,
    };
    match serde_json::from_value::<Vec<Conflict>>(list) {
        Ok(conflicts) => Some(conflicts),
        Err(err) => {
            tracing::warn!("Unreadable conflict list: {err}");
            None
        }
    }
}

/// Maps a session write result onto what the submission flow understands.
#[must_use]
pub fn server_outcome(result: Result<SessionResponse, ApiError>) -> ServerOutcome {
    match result {
        Ok(SessionResponse::Saved(_)) => ServerOutcome::Accepted,
        Ok(SessionResponse::Conflicts(conflicts)) => ServerOutcome::Conflict(conflicts),
        Err(err) => ServerOutcome::Rejected {
            message: err.to_string(),
        },
    }
}

impl ApiClient {
    /// Sends a session payload the way its mode requires.
    ///
    /// `Create` posts to `/sessions`, `Edit(id)` puts to `/sessions/{id}`,
    /// and `ForceCreate` posts to the configured force path.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, or on any non-2xx status other
    /// than a 409 carrying conflicts.
    pub async fn send_session(&self, request: &SubmitRequest) -> Result<SessionResponse, ApiError> {
        let (method, path): (Method, String) = match request.mode {
            SubmitMode::Create => (Method::POST, Resource::Sessions.path().to_string()),
            SubmitMode::Edit(id) => (Method::PUT, Resource::Sessions.item_path(id)),
            SubmitMode::ForceCreate => (Method::POST, self.config().force_path.clone()),
        };
        tracing::info!(mode = ?request.mode, %method, %path, "Submitting session");

        let response: RawResponse = self.send(method, &path, Some(&request.payload)).await?;
        if response.status == CONFLICT_STATUS {
            if let Some(conflicts) = parse_conflicts(&response.body) {
                tracing::info!(conflicts = conflicts.len(), "Session refused with conflicts");
                return Ok(SessionResponse::Conflicts(conflicts));
            }
        }

        let response: RawResponse = response.error_for_status()?;
        Ok(SessionResponse::Saved(saved_session(&response)))
    }
}

/// Reads the stored session from a 2xx body.
///
/// Accepts the bare session or the `{"session": {...}, ...}` envelope. The
/// write already succeeded, so an unreadable body only loses the echo.
fn saved_session(response: &RawResponse) -> Option<Session> {
    let value: Value = match response.json::<Value>() {
        Ok(value) => value?,
        Err(err) => {
            tracing::warn!(url = %response.url, "Unreadable answer to a saved session: {err}");
            return None;
        }
    };
    let session: Value = match value {
        Value::Object(mut map) if map.get("session").is_some_and(Value::is_object) => {
            map.remove("session")?
        }
        other => other,
    };
    match serde_json::from_value::<Session>(session) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(url = %response.url, "Saved session could not be decoded: {err}");
            None
        }
    }
}
