// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The backend's conflict resolution endpoints.
//!
//! Analysis and solutions are computed server-side; the client only
//! relays them.

use crate::client::ApiClient;
use crate::error::ApiError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const RESOLUTION_PATH: &str = "/admin/planning/resolution";

/// The answer to a resolution action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Everything else the backend sent.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

fn resolution_path(action: &str) -> String {
    format!("{RESOLUTION_PATH}/{action}")
}

impl ApiClient {
    async fn resolution_get(&self, action: &str) -> Result<Value, ApiError> {
        Ok(self
            .get_json(&resolution_path(action))
            .await?
            .unwrap_or(Value::Null))
    }

    async fn resolution_post<B: Serialize + ?Sized>(
        &self,
        action: &str,
        body: Option<&B>,
    ) -> Result<ActionResult, ApiError> {
        let result: ActionResult = self
            .send_json(Method::POST, &resolution_path(action), body)
            .await?
            .unwrap_or_default();
        tracing::info!(
            action,
            success = result.success,
            message = result.message.as_deref().unwrap_or(""),
            "Resolution action finished"
        );
        Ok(result)
    }

    /// `GET analyse/{planning}`: the planning's conflicts with their solutions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn analyse_planning(&self, planning_id: i64) -> Result<Value, ApiError> {
        self.resolution_get(&format!("analyse/{planning_id}")).await
    }

    /// `GET solutions/{planning}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn planning_solutions(&self, planning_id: i64) -> Result<Value, ApiError> {
        self.resolution_get(&format!("solutions/{planning_id}")).await
    }

    /// `GET resume/{planning}`: counts of conflicts and what can be resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn resolution_summary(&self, planning_id: i64) -> Result<Value, ApiError> {
        self.resolution_get(&format!("resume/{planning_id}")).await
    }

    /// `POST appliquer-solution` with a solution as returned by the analysis.
    ///
    /// # Errors
    ///
    /// Returns an error if the solution is not a JSON object, or the request
    /// fails.
    pub async fn apply_solution(&self, solution: &Value) -> Result<ActionResult, ApiError> {
        if !solution.is_object() {
            return Err(ApiError::Decode {
                url: self.url(&resolution_path("appliquer-solution")),
                message: String::from("a solution must be a JSON object"),
            });
        }
        self.resolution_post("appliquer-solution", Some(solution))
            .await
    }

    /// `POST resoudre-tout/{planning}`: let the backend resolve every conflict
    /// it can.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn resolve_all(&self, planning_id: i64) -> Result<ActionResult, ApiError> {
        self.resolution_post::<Value>(&format!("resoudre-tout/{planning_id}"), None)
            .await
    }

    /// `DELETE conflit/{id}`: dismiss a recorded conflict.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn dismiss_conflict(&self, conflict_id: i64) -> Result<(), ApiError> {
        self.send::<Value>(
            Method::DELETE,
            &resolution_path(&format!("conflit/{conflict_id}")),
            None,
        )
        .await?
        .error_for_status()?;
        tracing::info!(conflict_id, "Dismissed conflict");
        Ok(())
    }
}
