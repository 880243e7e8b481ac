// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! The kind of a failure is derived from the transport error or the HTTP
//! status alone; response messages are shown to the user but never parsed
//! for classification.

use planif::CoreError;
use planif_domain::DomainError;
use thiserror::Error;

/// Broad classes of API failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The backend could not be reached.
    ConnectionRefused,
    /// The request did not complete in time.
    Timeout,
    /// 404.
    EndpointNotFound,
    /// 405.
    MethodNotAllowed,
    /// 5xx.
    ServerError,
    /// 401 or 403.
    Unauthorized,
    /// 409 without a conflict list.
    DuplicateEntry,
    /// Any other non-2xx status.
    Http(u16),
    /// A body could not be decoded or encoded.
    Decode,
    /// The client could not be set up.
    Configuration,
}

impl ApiErrorKind {
    /// Classifies a non-2xx HTTP status.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::EndpointNotFound,
            405 => Self::MethodNotAllowed,
            409 => Self::DuplicateEntry,
            500..=599 => Self::ServerError,
            other => Self::Http(other),
        }
    }

    /// Classifies a transport failure.
    #[must_use]
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode
        } else if err.is_builder() {
            Self::Configuration
        } else {
            Self::ConnectionRefused
        }
    }

    /// Returns the stable error code (`CONNECTION_REFUSED`, ...).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConnectionRefused => "CONNECTION_REFUSED",
            Self::Timeout => "TIMEOUT",
            Self::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::ServerError => "SERVER_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::DuplicateEntry => "DUPLICATE_ENTRY",
            Self::Http(_) => "HTTP_ERROR",
            Self::Decode => "DECODE_ERROR",
            Self::Configuration => "CONFIGURATION_ERROR",
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API-level errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// The requested URL.
        url: String,
        /// The classified failure.
        kind: ApiErrorKind,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The message for the user: `message`, then `error` from the body,
        /// then `HTTP <status>`.
        message: String,
        /// The raw response body.
        body: String,
    },
    /// A body could not be decoded or encoded.
    #[error("Invalid JSON for {url}: {message}")]
    Decode {
        /// The requested URL.
        url: String,
        /// The parser error.
        message: String,
    },
    /// The HTTP client could not be built.
    #[error("Failed to set up HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Returns the class of this failure.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport { kind, .. } => *kind,
            Self::Status { status, .. } => ApiErrorKind::from_status(*status),
            Self::Decode { .. } => ApiErrorKind::Decode,
            Self::Client(_) => ApiErrorKind::Configuration,
        }
    }

    /// Returns the HTTP status, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors from page flows that combine API calls with board state.
#[derive(Debug, Error)]
pub enum FlowError {
    /// An API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The board rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<DomainError> for FlowError {
    fn from(err: DomainError) -> Self {
        Self::Core(CoreError::from(err))
    }
}
