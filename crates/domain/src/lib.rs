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

mod clock;
mod conflict;
mod day;
mod error;
mod slot_ref;
mod types;
mod validation;
mod week;

#[cfg(test)]
mod tests;

pub use clock::{
    TimeOfDay, format_display_date, format_iso_date, parse_date_prefix, parse_time_range,
};
pub use conflict::{Conflict, ConflictKind, Remedy};
pub use day::{DayOfWeek, normalize_weekday_key};
pub use error::DomainError;
pub use slot_ref::SlotRef;
pub use types::{
    Equipment, Group, Instructor, NamedRef, NewPlanning, Planning, ResolvedSlot, Room, Session,
    Slot, Student, format_session_datetime, status_key,
};
pub use validation::{
    MAX_DURATION_HOURS, MIN_DURATION_HOURS, SessionForm, SessionPayload, parse_duration,
    parse_selected_ids, validate_session_form,
};
pub use week::{WeekView, monday_of, shift_weeks};
