// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod admin;
mod client;
mod config;
mod controller;
mod error;
mod loader;
mod resources;
mod sessions;

#[cfg(test)]
mod tests;

pub use admin::ActionResult;
pub use client::{ApiClient, RawResponse, error_message};
pub use config::{ClientConfig, DEFAULT_API_BASE, DEFAULT_FORCE_PATH};
pub use controller::{SessionController, SubmitOutcome};
pub use error::{ApiError, ApiErrorKind, FlowError};
pub use loader::{ensure_planning, load_board, reload_sessions};
pub use resources::Resource;
pub use sessions::{SessionResponse, parse_conflicts, server_outcome};
