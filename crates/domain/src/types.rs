// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{
    TimeOfDay, deserialize_lenient_date, deserialize_lenient_time, format_display_date,
    parse_date_prefix, serialize_optional_date,
};
use crate::day::{DayOfWeek, deserialize_lenient_day};
use crate::slot_ref::SlotRef;
use serde::{Deserialize, Serialize};
use time::Date;

/// A weekly time window (créneau), optionally bound to a calendar date.
///
/// Slots are loaded once per page and only ever read on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// The backend identifier.
    pub id: i64,
    /// The calendar date this slot is bound to, if any.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        serialize_with = "serialize_optional_date"
    )]
    pub date: Option<Date>,
    /// The weekday, normalized to its uppercase ASCII key.
    #[serde(default, deserialize_with = "deserialize_lenient_day")]
    pub jour_semaine: Option<DayOfWeek>,
    /// Start time.
    #[serde(default, deserialize_with = "deserialize_lenient_time")]
    pub heure_debut: Option<TimeOfDay>,
    /// End time.
    #[serde(default, deserialize_with = "deserialize_lenient_time")]
    pub heure_fin: Option<TimeOfDay>,
    /// Backend status (`LIBRE`, `OCCUPE`, ...).
    #[serde(default)]
    pub statut: Option<String>,
}

impl Slot {
    /// Returns the fully resolved form of this slot.
    ///
    /// # Returns
    ///
    /// * `Some(ResolvedSlot)` if both the weekday and the start time are known
    /// * `None` otherwise
    #[must_use]
    pub fn resolved(&self) -> Option<ResolvedSlot> {
        Some(ResolvedSlot {
            id: Some(self.id),
            day: self.jour_semaine?,
            start: self.heure_debut?,
            end: self.heure_fin,
            date: self.date,
        })
    }

    /// Returns the `HH:MM - HH:MM` label used by legacy slot references.
    #[must_use]
    pub fn range_label(&self) -> Option<String> {
        Some(format!("{} - {}", self.heure_debut?, self.heure_fin?))
    }
}

/// A slot with everything needed to address a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedSlot {
    /// The backend identifier, when the slot came from the catalogue.
    pub id: Option<i64>,
    /// The weekday.
    pub day: DayOfWeek,
    /// Start time.
    pub start: TimeOfDay,
    /// End time, when known.
    pub end: Option<TimeOfDay>,
    /// Calendar date, when bound to one.
    pub date: Option<Date>,
}

impl ResolvedSlot {
    /// Returns `HH:MM - HH:MM`, or just the start when the end is unknown.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.end.map_or_else(
            || self.start.to_string(),
            |end| format!("{} - {end}", self.start),
        )
    }
}

/// A room (salle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub nom: String,
    /// Seating capacity.
    #[serde(default)]
    pub capacite: Option<u32>,
}

/// An instructor (formateur).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialite: Option<String>,
}

impl Instructor {
    /// Returns `prenom nom`, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom).trim().to_string()
    }
}

/// A student cohort (groupe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub effectif: Option<u32>,
}

/// A piece of equipment (materiel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub quantite: Option<u32>,
}

/// A student (etudiant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// The weekly container sessions belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planning {
    pub id: i64,
    #[serde(default)]
    pub nom: Option<String>,
    /// The Monday of the week this planning covers.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_date",
        serialize_with = "serialize_optional_date"
    )]
    pub semaine: Option<Date>,
    #[serde(default)]
    pub statut: Option<String>,
}

/// Payload for creating a planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPlanning {
    pub nom: String,
    pub statut: String,
    #[serde(serialize_with = "serialize_optional_date")]
    pub semaine: Option<Date>,
}

impl NewPlanning {
    /// Builds the in-progress planning for the week starting at `week`.
    #[must_use]
    pub fn for_week(week: Date) -> Self {
        Self {
            nom: format!("Planning {}", crate::clock::format_iso_date(week)),
            statut: String::from("EN_COURS"),
            semaine: Some(week),
        }
    }
}

/// A reference to another record carrying an id and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
}

impl NamedRef {
    /// Returns `prenom nom` when both are present, otherwise whichever is.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        let full: String = [self.prenom.as_deref(), self.nom.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<&str>>()
            .join(" ");
        if full.trim().is_empty() {
            None
        } else {
            Some(full.trim().to_string())
        }
    }
}

/// Wire shape of a session; merged into [`Session`] on deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSession {
    id: i64,
    #[serde(default, alias = "titre")]
    nom_cours: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    duree: Option<u32>,
    #[serde(default)]
    statut: Option<String>,
    #[serde(default)]
    date_debut: Option<String>,
    #[serde(default)]
    date_fin: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    formateur: Option<NamedRef>,
    #[serde(default)]
    formateur_nom: Option<String>,
    #[serde(default)]
    salle: Option<NamedRef>,
    #[serde(default)]
    salle_id: Option<i64>,
    #[serde(default)]
    salle_nom: Option<String>,
    #[serde(default)]
    groupe: Option<NamedRef>,
    #[serde(default)]
    groupe_nom: Option<String>,
    #[serde(default)]
    planning_id: Option<i64>,
    #[serde(default)]
    planning: Option<NamedRef>,
    #[serde(default)]
    creneaux_horaires: Option<Vec<SlotRef>>,
    #[serde(default)]
    creneaux: Option<Vec<SlotRef>>,
    #[serde(default)]
    creneau: Option<SlotRef>,
    #[serde(default)]
    materiel_requis_ids: Option<Vec<i64>>,
}

/// A scheduled training session.
///
/// Slot references are normalized into [`SlotRef`] once, here, whichever
/// of `creneauxHoraires`, `creneaux` or `creneau` the backend used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSession")]
pub struct Session {
    pub id: i64,
    pub nom_cours: Option<String>,
    pub description: Option<String>,
    pub duree: Option<u32>,
    pub statut: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
    /// Date of the first slot, sent by backends that omit `dateDebut`.
    pub date: Option<String>,
    pub formateur: Option<NamedRef>,
    pub formateur_nom: Option<String>,
    pub salle: Option<NamedRef>,
    pub salle_id: Option<i64>,
    pub salle_nom: Option<String>,
    pub groupe: Option<NamedRef>,
    pub groupe_nom: Option<String>,
    pub planning_id: Option<i64>,
    pub creneaux: Vec<SlotRef>,
    pub materiel_requis_ids: Vec<i64>,
}

impl From<RawSession> for Session {
    fn from(raw: RawSession) -> Self {
        let creneaux: Vec<SlotRef> = raw
            .creneaux_horaires
            .or(raw.creneaux)
            .or_else(|| raw.creneau.map(|single| vec![single]))
            .unwrap_or_default();
        Self {
            id: raw.id,
            nom_cours: raw.nom_cours,
            description: raw.description,
            duree: raw.duree,
            statut: raw.statut,
            date_debut: raw.date_debut,
            date_fin: raw.date_fin,
            date: raw.date,
            formateur: raw.formateur,
            formateur_nom: raw.formateur_nom,
            salle: raw.salle,
            salle_id: raw.salle_id,
            salle_nom: raw.salle_nom,
            groupe: raw.groupe,
            groupe_nom: raw.groupe_nom,
            planning_id: raw.planning_id.or_else(|| raw.planning.map(|p| p.id)),
            creneaux,
            materiel_requis_ids: raw.materiel_requis_ids.unwrap_or_default(),
        }
    }
}

impl Session {
    /// Returns the room id from `salle.id`, falling back to `salleId`.
    #[must_use]
    pub fn room_id(&self) -> Option<i64> {
        self.salle.as_ref().map(|s| s.id).or(self.salle_id)
    }

    /// Returns the calendar date part of `dateDebut`, falling back to `date`.
    #[must_use]
    pub fn start_date(&self) -> Option<Date> {
        let raw: &str = self.date_debut.as_deref().or(self.date.as_deref())?;
        match parse_date_prefix(raw) {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(session_id = self.id, "{err}");
                None
            }
        }
    }

    /// Returns `prenom nom` of the nested instructor, falling back to `formateurNom`.
    #[must_use]
    pub fn instructor_name(&self) -> Option<String> {
        self.formateur
            .as_ref()
            .and_then(NamedRef::display_name)
            .or_else(|| non_blank(self.formateur_nom.as_deref()))
    }

    #[must_use]
    pub fn room_name(&self) -> Option<String> {
        self.salle
            .as_ref()
            .and_then(|s| non_blank(s.nom.as_deref()))
            .or_else(|| non_blank(self.salle_nom.as_deref()))
    }

    #[must_use]
    pub fn group_name(&self) -> Option<String> {
        self.groupe
            .as_ref()
            .and_then(|g| non_blank(g.nom.as_deref()))
            .or_else(|| non_blank(self.groupe_nom.as_deref()))
    }

    /// Returns the course title, or `Session` when the backend sent none.
    #[must_use]
    pub fn title(&self) -> &str {
        self.nom_cours
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Session")
    }

    /// Returns the status as a lowercase ASCII key (`planifie`, `en_cours`, ...).
    ///
    /// Sessions without a status are treated as planned.
    #[must_use]
    pub fn status_key(&self) -> String {
        status_key(self.statut.as_deref().unwrap_or("planifie"))
    }

    /// Whether this session belongs to the given planning.
    #[must_use]
    pub fn belongs_to(&self, planning_id: i64) -> bool {
        self.planning_id == Some(planning_id)
    }
}

fn non_blank(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(ToString::to_string)
}

/// Lowercases a status and strips the accents the backend may send.
#[must_use]
pub fn status_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'é' | 'è' | 'ê' => 'e',
            other => other,
        })
        .collect()
}

/// Formats a `dateDebut`/`dateFin` value as `DD/MM/YYYY HH:MM` for display.
///
/// Falls back to the raw text when it cannot be parsed, and `-` when absent.
#[must_use]
pub fn format_session_datetime(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::from("-");
    };
    let Ok(date) = parse_date_prefix(raw) else {
        return raw.to_string();
    };
    let time_part: Option<&str> = raw.get(11..16);
    match time_part.and_then(|t| t.parse::<TimeOfDay>().ok()) {
        Some(time) => format!("{} {time}", format_display_date(date)),
        None => format_display_date(date),
    }
}
