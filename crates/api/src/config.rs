// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

/// The backend every page talks to unless configured otherwise.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Where a session is re-submitted when the user overrides its conflicts.
pub const DEFAULT_FORCE_PATH: &str = "/sessions?force=true";

/// Connection settings for [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,
    /// Bearer token sent on every request, if any.
    pub token: Option<String>,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Path, relative to the base URL, of the conflict-overriding create.
    pub force_path: String,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with no token and no timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: None,
            force_path: String::from(DEFAULT_FORCE_PATH),
        }
    }

    /// Sets the bearer token. Blank tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_force_path(mut self, force_path: impl Into<String>) -> Self {
        self.force_path = force_path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
