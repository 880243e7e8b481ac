// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Choosing the planning a page works on.

use planif_domain::{DomainError, Planning, Session, Slot, monday_of, shift_weeks};
use time::Date;

/// Finds the planning covering this week or next week.
///
/// The first planning (in backend order) whose `semaine` is either Monday
/// wins.
///
/// # Errors
///
/// Returns an error if next week's Monday is outside the supported date range.
pub fn select_planning(plannings: &[Planning], today: Date) -> Result<Option<&Planning>, DomainError> {
    let this_monday: Date = monday_of(today);
    let next_monday: Date = shift_weeks(this_monday, 1)?;
    Ok(plannings
        .iter()
        .find(|p| p.semaine == Some(this_monday) || p.semaine == Some(next_monday)))
}

/// Returns the week a new planning should be created for.
///
/// That is the date of the first slot dated on or after this Monday, or this
/// Monday when no such slot is loaded.
#[must_use]
pub fn planning_week_for_creation(slots: &[Slot], today: Date) -> Date {
    let monday: Date = monday_of(today);
    slots
        .iter()
        .filter_map(|slot| slot.date)
        .find(|date| *date >= monday)
        .unwrap_or(monday)
}

/// Returns the sessions to display for a planning.
///
/// When no session belongs to the planning, every session is returned.
#[must_use]
pub fn sessions_for_planning(sessions: &[Session], planning_id: Option<i64>) -> Vec<&Session> {
    let Some(planning_id) = planning_id else {
        return sessions.iter().collect();
    };
    let matching: Vec<&Session> = sessions.iter().filter(|s| s.belongs_to(planning_id)).collect();
    if matching.is_empty() {
        tracing::info!(
            planning_id,
            total = sessions.len(),
            "No session in planning; showing all sessions"
        );
        sessions.iter().collect()
    } else {
        matching
    }
}
