// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading the planning page.
//!
//! Loads run in a fixed order: slots, then the planning (created when this
//! week and next week have none), then rooms, then sessions, instructors,
//! groups and equipment concurrently. A failing step aborts the load.

use crate::client::ApiClient;
use crate::error::FlowError;
use planif::{PlacementReport, PlanningBoard, planning_week_for_creation, select_planning};
use planif_domain::{Equipment, Group, Instructor, NewPlanning, Planning, Session, Slot};
use time::Date;

/// Finds this week's or next week's planning, creating one when neither
/// exists.
///
/// # Arguments
///
/// * `client` - The backend client
/// * `slots` - The loaded slots; the new planning starts on the first one
///   dated this week or later
/// * `today` - The current date
///
/// # Errors
///
/// Returns an error if listing or creating plannings fails.
pub async fn ensure_planning(
    client: &ApiClient,
    slots: &[Slot],
    today: Date,
) -> Result<Planning, FlowError> {
    let plannings: Vec<Planning> = client.plannings().await?;
    if let Some(existing) = select_planning(&plannings, today)? {
        tracing::info!(planning_id = existing.id, "Using existing planning");
        return Ok(existing.clone());
    }

    let week: Date = planning_week_for_creation(slots, today);
    tracing::info!(%week, "No planning for this week or next; creating one");
    let created: Planning = client.create_planning(&NewPlanning::for_week(week)).await?;
    tracing::info!(planning_id = created.id, "Created planning");
    Ok(created)
}

/// Loads everything the planning page shows and places the sessions.
///
/// # Errors
///
/// Returns an error if any request fails, or if `today` is outside the
/// supported date range.
pub async fn load_board(client: &ApiClient, today: Date) -> Result<PlanningBoard, FlowError> {
    let mut board: PlanningBoard = PlanningBoard::new(today)?;

    let slots: Vec<Slot> = client.slots().await?;
    tracing::info!(count = slots.len(), "Loaded slots");
    let planning: Planning = ensure_planning(client, &slots, today).await?;
    board.set_slots(slots);
    board.set_planning(planning);

    board.set_rooms(client.rooms().await?);
    tracing::info!(count = board.rooms().len(), "Loaded rooms");

    let (sessions, instructors, groups, equipment): (
        Vec<Session>,
        Vec<Instructor>,
        Vec<Group>,
        Vec<Equipment>,
    ) = tokio::try_join!(
        client.sessions(),
        client.instructors(),
        client.groups(),
        client.equipment()
    )?;
    tracing::info!(
        sessions = sessions.len(),
        instructors = instructors.len(),
        groups = groups.len(),
        equipment = equipment.len(),
        "Loaded page data"
    );
    board.set_instructors(instructors);
    board.set_groups(groups);
    board.set_equipment(equipment);
    board.set_sessions(sessions);

    log_report(&board);
    Ok(board)
}

/// Reloads sessions and redraws the grid.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn reload_sessions(client: &ApiClient, board: &mut PlanningBoard) -> Result<(), FlowError> {
    board.set_sessions(client.sessions().await?);
    log_report(board);
    Ok(())
}

fn log_report(board: &PlanningBoard) {
    let report: &PlacementReport = board.report();
    tracing::info!(
        placed = report.placed,
        duplicates = report.duplicates,
        unplaced = report.unplaced.len(),
        "Grid redrawn"
    );
    if let Some(summary) = report.summary() {
        tracing::warn!("{summary}");
    }
}
