// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use color_eyre::Result;
use color_eyre::eyre::{bail, eyre};
use planif::{
    GridFilter, PlacementReport, PlanningBoard, RoomFilter, StatusFilter, render_conflicts,
    render_grid, render_remedies, render_session_details,
};
use planif_api::{
    ActionResult, ApiClient, Resource, SessionController, SubmitOutcome, load_board,
};
use planif_domain::{Conflict, ConflictKind, Planning, Session, Slot, format_iso_date};
use serde_json::Value;
use time::Date;

use crate::form::SessionFormArgs;

/// What every command needs.
#[derive(Debug)]
pub struct Context {
    pub client: ApiClient,
    pub today: Date,
}

const DEFAULT_STATUS: &str = "PLANIFIE";

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &PlacementReport) {
    let Some(summary) = report.summary() else {
        return;
    };
    println!();
    println!("{summary}:");
    for session in &report.unplaced {
        println!(
            "- #{} {} ({})",
            session.session_id,
            session.title,
            session.reason.as_str()
        );
    }
}

pub async fn grid(
    context: &Context,
    salle: RoomFilter,
    statut: StatusFilter,
    week_offset: i64,
) -> Result<()> {
    let mut board: PlanningBoard = load_board(&context.client, context.today).await?;
    board.shift_week(week_offset)?;
    board.set_filter(GridFilter {
        room: salle,
        status: statut,
    });

    if let Some(planning) = board.planning() {
        println!(
            "Planning #{} {}",
            planning.id,
            planning.nom.as_deref().unwrap_or("")
        );
    }
    print!("{}", render_grid(board.grid(), Some(board.week()), board.filter()));
    print_report(board.report());
    Ok(())
}

pub async fn list(context: &Context, resource: Resource) -> Result<()> {
    let items: Vec<Value> = context.client.list(resource).await?;
    print_json(&Value::Array(items))
}

pub async fn ping(context: &Context) -> Result<()> {
    if context.client.check_connection().await {
        println!("Backend joignable: {}", context.client.config().base_url);
        Ok(())
    } else {
        bail!(
            "Backend injoignable: {}",
            context.client.config().base_url
        )
    }
}

pub async fn show_session(context: &Context, id: i64) -> Result<()> {
    let session: Session = context
        .client
        .session(id)
        .await?
        .ok_or_else(|| eyre!("Session {id} introuvable"))?;
    print!("{}", render_session_details(&session));
    Ok(())
}

fn print_conflicts(conflicts: &[Conflict]) {
    print!("{}", render_conflicts(conflicts));
    let kinds: BTreeSet<&str> = conflicts.iter().map(|c| c.kind.as_str()).collect();
    for kind in kinds {
        println!();
        print!("{}", render_remedies(&ConflictKind::from(kind.to_string())));
    }
}

/// Reports a submission, overriding conflicts when `force` is set.
async fn finish(
    controller: &mut SessionController<'_>,
    outcome: SubmitOutcome,
    force: bool,
) -> Result<()> {
    let outcome: SubmitOutcome = match outcome {
        SubmitOutcome::Conflicts(conflicts) => {
            print_conflicts(&conflicts);
            if !force {
                bail!("Session non enregistrée; utilisez --force pour passer outre les conflits");
            }
            controller.force_create().await?
        }
        other => other,
    };

    match outcome {
        SubmitOutcome::Saved { report } => {
            println!("Session enregistrée");
            print_report(&report);
            Ok(())
        }
        SubmitOutcome::Conflicts(conflicts) => {
            print_conflicts(&conflicts);
            bail!("Le serveur signale toujours des conflits")
        }
        SubmitOutcome::Failed { message } => bail!(message),
    }
}

pub async fn create_session(context: &Context, form: SessionFormArgs, force: bool) -> Result<()> {
    let mut board: PlanningBoard = load_board(&context.client, context.today).await?;
    board.submission_mut().open_create();
    board.submission_mut().form_mut().statut = String::from(DEFAULT_STATUS);
    form.apply_to(board.submission_mut().form_mut());

    let mut controller: SessionController<'_> = SessionController::new(&context.client, &mut board);
    let outcome: SubmitOutcome = controller.submit().await?;
    finish(&mut controller, outcome, force).await
}

pub async fn edit_session(
    context: &Context,
    id: i64,
    form: SessionFormArgs,
    force: bool,
) -> Result<()> {
    let mut board: PlanningBoard = load_board(&context.client, context.today).await?;
    let mut controller: SessionController<'_> = SessionController::new(&context.client, &mut board);
    if !controller.edit(id).await? {
        bail!("Session {id} introuvable");
    }
    form.apply_to(controller.board_mut().submission_mut().form_mut());

    let outcome: SubmitOutcome = controller.submit().await?;
    finish(&mut controller, outcome, force).await
}

pub async fn delete_session(context: &Context, id: i64) -> Result<()> {
    let mut board: PlanningBoard = load_board(&context.client, context.today).await?;
    SessionController::new(&context.client, &mut board)
        .delete(id)
        .await?;
    println!("Session {id} supprimée");
    print_report(board.report());
    Ok(())
}

fn print_planning(planning: &Planning) {
    println!(
        "#{} {} semaine {} ({})",
        planning.id,
        planning.nom.as_deref().unwrap_or("-"),
        planning.semaine.map_or_else(|| String::from("-"), format_iso_date),
        planning.statut.as_deref().unwrap_or("-")
    );
}

pub async fn ensure_planning(context: &Context) -> Result<()> {
    let slots: Vec<Slot> = context.client.slots().await?;
    let planning: Planning =
        planif_api::ensure_planning(&context.client, &slots, context.today).await?;
    print_planning(&planning);
    Ok(())
}

pub async fn list_plannings(context: &Context) -> Result<()> {
    for planning in context.client.plannings().await? {
        print_planning(&planning);
    }
    Ok(())
}

pub async fn list_conflicts(context: &Context) -> Result<()> {
    let conflicts: Vec<Conflict> = context.client.recorded_conflicts().await?;
    print!("{}", render_conflicts(&conflicts));
    Ok(())
}

fn print_action(result: &ActionResult) -> Result<()> {
    let message: &str = result.message.as_deref().unwrap_or("");
    if result.success {
        println!("OK {message}");
        Ok(())
    } else {
        bail!("Échec: {message}")
    }
}

pub async fn apply_solution(context: &Context, solution: &str) -> Result<()> {
    let solution: Value = serde_json::from_str(solution)?;
    print_action(&context.client.apply_solution(&solution).await?)
}

pub async fn resolve_all(context: &Context, planning: i64) -> Result<()> {
    print_action(&context.client.resolve_all(planning).await?)
}

pub fn remedies(kind: &str) {
    print!("{}", render_remedies(&ConflictKind::from(kind.trim().to_uppercase())));
}
