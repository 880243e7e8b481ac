// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text views of the board.

use crate::filters::GridFilter;
use crate::grid::{Grid, RoomRow};
use planif_domain::{Conflict, ConflictKind, DayOfWeek, Session, WeekView, format_display_date, format_session_datetime};
use std::fmt::Write as _;

const COLUMN_WIDTH: usize = 24;

fn pad(text: &str) -> String {
    let truncated: String = text.chars().take(COLUMN_WIDTH - 1).collect();
    format!("{truncated:<COLUMN_WIDTH$}")
}

fn render_row(out: &mut String, grid: &Grid, row: &RoomRow, filter: &GridFilter, header: &str) {
    let capacity: String = row
        .room
        .capacite
        .map_or_else(|| String::from("-"), |c| c.to_string());
    let _ = writeln!(out, "Salle {} (Capacité: {capacity})", row.room.nom);
    let _ = writeln!(out, "{}", header.trim_end());

    for &time in grid.times() {
        // Stacked cards take one line each.
        let cards_per_day: Vec<Vec<String>> = DayOfWeek::GRID_DAYS
            .iter()
            .map(|&day| {
                row.cell(day, time)
                    .map(|cell| {
                        cell.cards
                            .iter()
                            .filter(|card| filter.card_visible(card))
                            .map(|card| format!("[{}] {}", card.status_class, card.title))
                            .collect::<Vec<String>>()
                    })
                    .unwrap_or_default()
            })
            .collect();
        let height: usize = cards_per_day.iter().map(Vec::len).max().unwrap_or(0).max(1);

        for line in 0..height {
            let label: String = if line == 0 {
                time.to_string()
            } else {
                String::new()
            };
            let _ = write!(out, "{label:<7}");
            for cards in &cards_per_day {
                let text: &str = cards.get(line).map_or("", String::as_str);
                let _ = write!(out, "{}", pad(text));
            }
            let _ = writeln!(out);
        }
    }
}

/// Renders the grid as one table per visible room.
///
/// When a week is given, each day column shows its date.
#[must_use]
pub fn render_grid(grid: &Grid, week: Option<&WeekView>, filter: &GridFilter) -> String {
    let mut out: String = String::new();

    if let Some(week) = week {
        let _ = writeln!(out, "Semaine du {}", week.period_label());
    }

    let mut header: String = format!("{:<7}", "");
    for (index, day) in DayOfWeek::GRID_DAYS.iter().enumerate() {
        let title: String = match week.and_then(|w| w.weekdays().get(index).copied()) {
            Some(date) => format!("{} {}", day.label(), format_display_date(date)),
            None => day.label().to_string(),
        };
        header.push_str(&pad(&title));
    }

    let mut any_row: bool = false;
    for row in filter.visible_rows(grid.rows()) {
        any_row = true;
        let _ = writeln!(out);
        render_row(&mut out, grid, row, filter, &header);
    }

    if !any_row {
        let _ = writeln!(out, "Aucune salle à afficher");
    } else if grid.times().is_empty() {
        let _ = writeln!(out, "Aucun créneau chargé");
    }
    out
}

/// Renders the conflicts reported for a submission.
#[must_use]
pub fn render_conflicts(conflicts: &[Conflict]) -> String {
    let mut out: String = format!("{} conflit(s) détecté(s)\n", conflicts.len());
    for conflict in conflicts {
        let code: &str = conflict.kind.as_str();
        let label: &str = conflict.kind.label();
        if code.is_empty() || code == label {
            let _ = writeln!(out, "- {label}");
        } else {
            let _ = writeln!(out, "- {code} ({label})");
        }
        let _ = writeln!(
            out,
            "  {}",
            conflict.description.as_deref().unwrap_or("Pas de description")
        );
        let severity: String = conflict
            .severite
            .map_or_else(|| String::from("?"), |s| s.to_string());
        let _ = writeln!(out, "  Sévérité: {severity}/5");
    }
    out
}

/// Renders the usual remedies for a kind of conflict.
#[must_use]
pub fn render_remedies(kind: &ConflictKind) -> String {
    let mut out: String = format!("{}\n", kind.label());
    for remedy in kind.remedies() {
        let _ = writeln!(
            out,
            "- {} (impact {}): {}",
            remedy.title, remedy.impact, remedy.description
        );
    }
    out
}

/// Renders every field of a session.
#[must_use]
pub fn render_session_details(session: &Session) -> String {
    let name = |value: Option<String>| value.unwrap_or_else(|| String::from("-"));
    let lines: [(&str, String); 9] = [
        ("ID", session.id.to_string()),
        ("Cours", session.title().to_string()),
        (
            "Description",
            name(session.description.clone().filter(|d| !d.trim().is_empty())),
        ),
        ("Formateur", name(session.instructor_name())),
        ("Salle", name(session.room_name())),
        ("Groupe", name(session.group_name())),
        ("Statut", name(session.statut.clone())),
        (
            "Période",
            format!(
                "{} → {}",
                format_session_datetime(session.date_debut.as_deref()),
                format_session_datetime(session.date_fin.as_deref())
            ),
        ),
        ("Créneaux", session.creneaux.len().to_string()),
    ];

    let mut out: String = String::new();
    for (label, value) in lines {
        let _ = writeln!(out, "{label:<12} {value}");
    }
    out
}
