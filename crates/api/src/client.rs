// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Thin JSON-over-HTTP wrapper around the planning backend.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiErrorKind};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response with any status, body read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Turns a non-2xx response into an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` unless the status is 2xx.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            return Ok(self);
        }
        let message: String = error_message(self.status, &self.body);
        tracing::warn!(
            url = %self.url,
            status = self.status,
            kind = %ApiErrorKind::from_status(self.status),
            %message,
            "Backend returned an error"
        );
        Err(ApiError::Status {
            url: self.url,
            status: self.status,
            message,
            body: self.body,
        })
    }

    /// Decodes the body, treating an empty body as absent.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>, ApiError> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.body)
            .map(Some)
            .map_err(|err| ApiError::Decode {
                url: self.url.clone(),
                message: err.to_string(),
            })
    }
}

/// Picks the message shown for a failed response.
///
/// Uses the body's `message`, then its `error`, then `HTTP <status>`.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|field| v.get(*field).and_then(Value::as_str))
        })
        .filter(|m| !m.trim().is_empty())
        .map_or_else(|| format!("HTTP {status}"), ToString::to_string)
}

/// The backend client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Builds a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder: ClientBuilder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http: Client = builder.build().map_err(ApiError::Client)?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Joins a path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder: RequestBuilder = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        match &self.config.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request and reads the whole body, whatever the status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body cannot be
    /// read. A body that cannot be encoded fails as a configuration error.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, ApiError> {
        let url: String = self.url(path);
        tracing::debug!(%method, %url, "Sending request");

        let mut builder: RequestBuilder = self.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let transport = |source: reqwest::Error| {
            let kind: ApiErrorKind = ApiErrorKind::from_transport(&source);
            tracing::warn!(url = %url, %kind, "Request failed: {source}");
            ApiError::Transport {
                url: url.clone(),
                kind,
                source,
            }
        };

        let response: Response = builder.send().await.map_err(transport)?;
        let status: u16 = response.status().as_u16();
        let text: String = response.text().await.map_err(transport)?;
        tracing::debug!(%url, status, bytes = text.len(), "Received response");

        Ok(RawResponse {
            url,
            status,
            body: text,
        })
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or invalid JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        self.send::<Value>(Method::GET, path, None)
            .await?
            .error_for_status()?
            .json()
    }

    /// Sends a JSON body and decodes the JSON answer, if any.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status or invalid JSON.
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, ApiError> {
        self.send(method, path, body)
            .await?
            .error_for_status()?
            .json()
    }

    /// Checks that the backend answers on at least one well-known endpoint.
    ///
    /// Endpoints are probed concurrently; the first 2xx wins.
    pub async fn check_connection(&self) -> bool {
        let probes = ["/salles", "/sessions", "/creneaux"].map(|path| {
            Box::pin(async move {
                self.send::<Value>(Method::GET, path, None)
                    .await?
                    .error_for_status()
            })
        });
        match futures::future::select_ok(probes).await {
            Ok((response, _)) => {
                tracing::info!(url = %response.url, "Backend is reachable");
                true
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), "Backend is unreachable: {err}");
                false
            }
        }
    }
}
