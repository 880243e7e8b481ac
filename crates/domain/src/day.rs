// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A day of the week, keyed the way the backend names it (`LUNDI`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Lundi,
    Mardi,
    Mercredi,
    Jeudi,
    Vendredi,
    Samedi,
    Dimanche,
}

impl DayOfWeek {
    /// The weekdays shown as grid columns, in display order.
    pub const GRID_DAYS: [Self; 5] = [
        Self::Lundi,
        Self::Mardi,
        Self::Mercredi,
        Self::Jeudi,
        Self::Vendredi,
    ];

    /// Returns the uppercase ASCII key used for grid lookup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lundi => "LUNDI",
            Self::Mardi => "MARDI",
            Self::Mercredi => "MERCREDI",
            Self::Jeudi => "JEUDI",
            Self::Vendredi => "VENDREDI",
            Self::Samedi => "SAMEDI",
            Self::Dimanche => "DIMANCHE",
        }
    }

    /// Returns the capitalized display label (`Lundi`, ...).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lundi => "Lundi",
            Self::Mardi => "Mardi",
            Self::Mercredi => "Mercredi",
            Self::Jeudi => "Jeudi",
            Self::Vendredi => "Vendredi",
            Self::Samedi => "Samedi",
            Self::Dimanche => "Dimanche",
        }
    }

    /// Returns the weekday a calendar date falls on.
    #[must_use]
    pub const fn from_date(date: time::Date) -> Self {
        match date.weekday() {
            time::Weekday::Monday => Self::Lundi,
            time::Weekday::Tuesday => Self::Mardi,
            time::Weekday::Wednesday => Self::Mercredi,
            time::Weekday::Thursday => Self::Jeudi,
            time::Weekday::Friday => Self::Vendredi,
            time::Weekday::Saturday => Self::Samedi,
            time::Weekday::Sunday => Self::Dimanche,
        }
    }
}

/// Normalizes a weekday name into its uppercase ASCII lookup key.
///
/// The backend may send `Lundi`, `lundi`, `MERCREDI` or accented forms;
/// all of them collapse to the same key.
#[must_use]
pub fn normalize_weekday_key(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .map(|c| match c {
            'É' | 'È' | 'Ê' => 'E',
            'Ç' => 'C',
            'À' | 'Â' => 'A',
            other => other,
        })
        .collect()
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_weekday_key(s).as_str() {
            "LUNDI" | "MONDAY" => Ok(Self::Lundi),
            "MARDI" | "TUESDAY" => Ok(Self::Mardi),
            "MERCREDI" | "WEDNESDAY" => Ok(Self::Mercredi),
            "JEUDI" | "THURSDAY" => Ok(Self::Jeudi),
            "VENDREDI" | "FRIDAY" => Ok(Self::Vendredi),
            "SAMEDI" | "SATURDAY" => Ok(Self::Samedi),
            "DIMANCHE" | "SUNDAY" => Ok(Self::Dimanche),
            _ => Err(DomainError::UnknownWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DayOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserializes an optional weekday, treating unknown names as absent.
///
/// One malformed record must not make a whole collection unreadable.
///
/// # Errors
///
/// Returns an error only if the value is neither null nor a string.
pub fn deserialize_lenient_day<'de, D>(deserializer: D) -> Result<Option<DayOfWeek>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse::<DayOfWeek>() {
        Ok(day) => Some(day),
        Err(err) => {
            tracing::warn!(value = %value, "{err}");
            None
        }
    }))
}
