// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::grid::{Grid, Placement, SessionCard};
use crate::resolution::{Resolution, SlotCatalog, resolve_slot_refs};
use planif_domain::Session;

/// Why a session has no card on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnplacedReason {
    /// The session carries no slot reference at all.
    NoSlotReference,
    /// None of its slot references resolved.
    NoResolvableSlot,
    /// Its slots resolved, but no grid cell matched.
    NoMatchingCell,
}

impl UnplacedReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoSlotReference => "aucun créneau référencé",
            Self::NoResolvableSlot => "aucun créneau résolu",
            Self::NoMatchingCell => "aucune cellule correspondante",
        }
    }
}

impl std::fmt::Display for UnplacedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A session that could not be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplacedSession {
    pub session_id: i64,
    pub title: String,
    pub reason: UnplacedReason,
}

/// Counts from placing sessions on the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementReport {
    /// Cards inserted.
    pub placed: usize,
    /// Insertions skipped because the session already had a card in the cell.
    pub duplicates: usize,
    /// Slot references that could not be resolved.
    pub dropped_refs: usize,
    /// Resolved slots that matched no cell.
    pub missing_cells: usize,
    /// Sessions with no card at all.
    pub unplaced: Vec<UnplacedSession>,
}

impl PlacementReport {
    /// `N session(s) non affichée(s)`, when any session was left out.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.unplaced.is_empty() {
            None
        } else {
            Some(format!(
                "{} session(s) non affichée(s)",
                self.unplaced.len()
            ))
        }
    }
}

/// Places each session on the grid.
///
/// Sessions are resolved against `catalog`, addressed by weekday, start time
/// and room, and carded once per cell. Nothing is silently discarded: every
/// session left off the grid is listed in the report with its reason.
///
/// # Arguments
///
/// * `grid` - A materialized grid; existing cards are kept
/// * `sessions` - The sessions to display
/// * `catalog` - The slots loaded for the page
pub fn render_sessions<'a, I>(grid: &mut Grid, sessions: I, catalog: &SlotCatalog) -> PlacementReport
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut report: PlacementReport = PlacementReport::default();

    for session in sessions {
        let unplaced = |reason: UnplacedReason| UnplacedSession {
            session_id: session.id,
            title: session.title().to_string(),
            reason,
        };

        if session.creneaux.is_empty() {
            tracing::warn!(session_id = session.id, "Session has no slot reference");
            report.unplaced.push(unplaced(UnplacedReason::NoSlotReference));
            continue;
        }

        let resolution: Resolution = resolve_slot_refs(session, catalog);
        report.dropped_refs += resolution.dropped.len();
        if resolution.slots.is_empty() {
            tracing::warn!(session_id = session.id, "No slot of the session could be resolved");
            report.unplaced.push(unplaced(UnplacedReason::NoResolvableSlot));
            continue;
        }

        let room_id: Option<i64> = session.room_id();
        let mut shown: bool = false;
        for slot in &resolution.slots {
            let Some(key) = grid.locate_cell(slot.day, slot.start, room_id) else {
                tracing::warn!(
                    session_id = session.id,
                    day = %slot.day,
                    time = %slot.start,
                    room_id = ?room_id,
                    "No grid cell for session slot"
                );
                report.missing_cells += 1;
                continue;
            };
            match grid.place(key, SessionCard::new(session, slot)) {
                Placement::Inserted => {
                    report.placed += 1;
                    shown = true;
                }
                Placement::Duplicate => {
                    report.duplicates += 1;
                    shown = true;
                }
                Placement::MissingCell => report.missing_cells += 1,
            }
        }

        if !shown {
            report.unplaced.push(unplaced(UnplacedReason::NoMatchingCell));
        }
    }

    tracing::info!(
        placed = report.placed,
        duplicates = report.duplicates,
        unplaced = report.unplaced.len(),
        "Rendered sessions"
    );
    report
}
