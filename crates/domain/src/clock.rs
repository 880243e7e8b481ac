// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Times of day and calendar dates as the backend sends them.
//!
//! Times arrive as `"HH:MM:SS"` strings, `[h, m, s]` arrays or
//! `{hour, minute}` objects depending on the serializer that produced
//! them. Everything is reduced to minute precision here.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// A time of day at minute precision, displayed as `HH:MM`.
///
/// Ordering matches the lexical order of the zero-padded 24h form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is above 23 or the minute above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTime(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    /// Parses `H:MM`, `HH:MM` or `HH:MM:SS`; seconds are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTime(s.to_string());
        let mut parts = s.trim().split(':');
        let hour: u8 = parts
            .next()
            .and_then(|h| h.parse().ok())
            .ok_or_else(invalid)?;
        let minute_text: &str = parts.next().ok_or_else(invalid)?;
        if minute_text.len() != 2 {
            return Err(invalid());
        }
        let minute: u8 = minute_text.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTime {
    Text(String),
    Parts(Vec<u8>),
    Object { hour: u8, minute: u8 },
}

impl TryFrom<RawTime> for TimeOfDay {
    type Error = DomainError;

    fn try_from(raw: RawTime) -> Result<Self, Self::Error> {
        match raw {
            RawTime::Text(text) => text.parse(),
            RawTime::Parts(parts) => match parts.as_slice() {
                [hour, minute, ..] => Self::new(*hour, *minute),
                _ => Err(DomainError::InvalidTime(format!("{parts:?}"))),
            },
            RawTime::Object { hour, minute } => Self::new(hour, minute),
        }
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: RawTime = RawTime::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TimeOfDay {
    /// Serialized as `HH:MM:SS`, the form the backend stores.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{self}:00"))
    }
}

/// Parses a `"HH:MM - HH:MM"` slot label into its start and end.
///
/// # Errors
///
/// Returns an error if the separator is missing or either side is not a time.
pub fn parse_time_range(label: &str) -> Result<(TimeOfDay, TimeOfDay), DomainError> {
    let (start, end) = label
        .split_once(" - ")
        .ok_or_else(|| DomainError::InvalidTimeRange(label.to_string()))?;
    let start: TimeOfDay = start
        .parse()
        .map_err(|_| DomainError::InvalidTimeRange(label.to_string()))?;
    let end: TimeOfDay = end
        .parse()
        .map_err(|_| DomainError::InvalidTimeRange(label.to_string()))?;
    Ok((start, end))
}

/// Parses the calendar date at the start of an ISO date or date-time string.
///
/// `2024-03-11`, `2024-03-11T09:00` and `2024-03-11T09:00:00Z` all yield
/// 2024-03-11.
///
/// # Errors
///
/// Returns an error if the first ten characters are not a `YYYY-MM-DD` date.
pub fn parse_date_prefix(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    let prefix: &str = trimmed.get(..10).unwrap_or(trimmed);
    Date::parse(prefix, format_description!("[year]-[month]-[day]")).map_err(|err| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_display_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Parts(Vec<i32>),
}

fn raw_date_to_date(raw: RawDate) -> Result<Date, DomainError> {
    match raw {
        RawDate::Text(text) => parse_date_prefix(&text),
        RawDate::Parts(parts) => {
            let invalid = |error: String| DomainError::DateParseError {
                date_string: format!("{parts:?}"),
                error,
            };
            let [year, month, day, ..] = parts.as_slice() else {
                return Err(invalid(String::from("expected [year, month, day]")));
            };
            let month: u8 = u8::try_from(*month).map_err(|e| invalid(e.to_string()))?;
            let month: time::Month =
                time::Month::try_from(month).map_err(|e| invalid(e.to_string()))?;
            let day: u8 = u8::try_from(*day).map_err(|e| invalid(e.to_string()))?;
            Date::from_calendar_date(*year, month, day).map_err(|e| invalid(e.to_string()))
        }
    }
}

/// Deserializes an optional calendar date from a string or `[y, m, d]` array.
///
/// Unparseable values are logged and treated as absent.
///
/// # Errors
///
/// Returns an error only if the value has an unsupported JSON shape.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDate> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw_date_to_date(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }))
}

/// Serializes an optional date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::ref_option)]
pub fn serialize_optional_date<S: Serializer>(
    date: &Option<Date>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&format_iso_date(*date)),
        None => serializer.serialize_none(),
    }
}

/// Deserializes an optional time of day, treating malformed values as absent.
///
/// # Errors
///
/// Returns an error only if the value has an unsupported JSON shape.
pub fn deserialize_lenient_time<'de, D>(deserializer: D) -> Result<Option<TimeOfDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawTime> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match TimeOfDay::try_from(raw) {
        Ok(time) => Some(time),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }))
}
