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

mod board;
mod error;
mod filters;
mod grid;
mod placement;
mod planning;
mod render;
mod resolution;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use board::PlanningBoard;
pub use error::CoreError;
pub use filters::{GridFilter, RoomFilter, StatusFilter};
pub use grid::{CardAction, Cell, CellKey, Grid, Placement, RoomRow, SessionCard};
pub use placement::{PlacementReport, UnplacedReason, UnplacedSession, render_sessions};
pub use planning::{planning_week_for_creation, select_planning, sessions_for_planning};
pub use render::{render_conflicts, render_grid, render_remedies, render_session_details};
pub use resolution::{DropReason, DroppedRef, Resolution, SlotCatalog, resolve_slot_refs};
pub use submission::{
    ServerOutcome, Submission, SubmissionPhase, SubmissionState, SubmitMode, SubmitRequest,
};
