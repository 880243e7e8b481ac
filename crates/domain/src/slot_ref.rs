// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot references carried by sessions.
//!
//! The backend has sent a session's slots in four shapes over time: bare
//! ids, `"HH:MM - HH:MM"` labels, `{id}` stubs and full slot objects.
//! They are told apart once, at deserialization, into [`SlotRef`].

use crate::clock::{TimeOfDay, parse_time_range};
use crate::types::Slot;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One entry of a session's slot list, as the backend sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotRef {
    /// A bare slot id.
    Id(i64),
    /// A `"HH:MM - HH:MM"` label, to be matched against slot times.
    TimeRange {
        /// Start of the range.
        start: TimeOfDay,
        /// End of the range.
        end: TimeOfDay,
    },
    /// An object carrying an id but no weekday.
    Partial {
        /// The slot id to look up.
        id: i64,
    },
    /// A slot object that already carries its weekday.
    Full(Slot),
    /// Anything else; kept verbatim for diagnostics.
    Unrecognized(Value),
}

impl SlotRef {
    /// Classifies a raw JSON value.
    ///
    /// Never fails: shapes that cannot be used end up as
    /// [`SlotRef::Unrecognized`].
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match &value {
            Value::Number(number) => number.as_i64().map_or(Self::Unrecognized(value), Self::Id),
            Value::String(text) if text.contains(" - ") => match parse_time_range(text) {
                Ok((start, end)) => Self::TimeRange { start, end },
                Err(_) => Self::Unrecognized(value),
            },
            Value::Object(map) => {
                let has_day: bool = map.get("jourSemaine").is_some_and(|v| !v.is_null());
                let id: Option<i64> = map.get("id").and_then(Value::as_i64);
                if has_day {
                    match serde_json::from_value::<Slot>(value.clone()) {
                        Ok(slot) if slot.jour_semaine.is_some() => Self::Full(slot),
                        _ => id.map_or(Self::Unrecognized(value), |id| Self::Partial { id }),
                    }
                } else {
                    id.map_or(Self::Unrecognized(value), |id| Self::Partial { id })
                }
            }
            _ => Self::Unrecognized(value),
        }
    }

    /// Returns the slot id this reference names directly, if any.
    #[must_use]
    pub fn slot_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) | Self::Partial { id } => Some(*id),
            Self::Full(slot) => Some(slot.id),
            Self::TimeRange { .. } | Self::Unrecognized(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for SlotRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

impl Serialize for SlotRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => serializer.serialize_i64(*id),
            Self::TimeRange { start, end } => serializer.serialize_str(&format!("{start} - {end}")),
            Self::Partial { id } => serde_json::json!({ "id": id }).serialize(serializer),
            Self::Full(slot) => slot.serialize(serializer),
            Self::Unrecognized(value) => value.serialize(serializer),
        }
    }
}
