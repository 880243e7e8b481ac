// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use planif_domain::DomainError;

/// Errors that can occur while driving the planning board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The session form failed validation; every failed rule is listed.
    ValidationFailed(Vec<DomainError>),
    /// The submission flow was asked to move between incompatible states.
    InvalidTransition {
        /// The current phase.
        from: &'static str,
        /// The requested phase.
        to: &'static str,
    },
    /// No planning is selected, so sessions cannot be created.
    NoPlanningSelected,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ValidationFailed(errors) => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Validation failed: {}", messages.join("; "))
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid submission transition from {from} to {to}")
            }
            Self::NoPlanningSelected => write!(f, "No planning is selected"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
