// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while normalizing or validating domain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time of day could not be parsed.
    InvalidTime(String),
    /// A `"HH:MM - HH:MM"` range could not be parsed.
    InvalidTimeRange(String),
    /// A weekday name is not recognized.
    UnknownWeekday(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A required form field is empty.
    MissingField {
        /// The wire name of the field.
        field: &'static str,
        /// The human-readable field label.
        label: &'static str,
    },
    /// A form field holding an identifier is not a valid integer.
    InvalidIdentifier {
        /// The wire name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// No slot was selected for the session.
    NoSlotSelected,
    /// Session duration is outside `[1, 8]` hours or not an integer.
    InvalidDuration {
        /// The rejected value, as entered.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTime(value) => write!(f, "Invalid time of day: '{value}'"),
            Self::InvalidTimeRange(value) => {
                write!(f, "Invalid time range: '{value}' (expected 'HH:MM - HH:MM')")
            }
            Self::UnknownWeekday(value) => write!(f, "Unknown weekday: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::MissingField { label, .. } => write!(f, "{label} is required"),
            Self::InvalidIdentifier { field, value } => {
                write!(f, "Invalid identifier for '{field}': '{value}'")
            }
            Self::NoSlotSelected => write!(f, "Select at least one slot"),
            Self::InvalidDuration { value } => {
                write!(
                    f,
                    "Duration must be a whole number of hours between 1 and 8, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
