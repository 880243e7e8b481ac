// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Session;
use serde::{Deserialize, Serialize};

/// Smallest accepted session duration, in hours.
pub const MIN_DURATION_HOURS: u32 = 1;
/// Largest accepted session duration, in hours.
pub const MAX_DURATION_HOURS: u32 = 8;

/// The session form as entered, before any parsing.
///
/// Fields hold raw text the way a form control would; multi-selects hold
/// the list of selected option values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionForm {
    pub nom_cours: String,
    pub description: String,
    pub duree: String,
    pub statut: String,
    pub formateur_id: String,
    pub salle_id: String,
    pub groupe_id: String,
    pub date_debut: String,
    pub date_fin: String,
    pub creneau_ids: Vec<String>,
    pub materiel_ids: Vec<String>,
}

impl SessionForm {
    /// Prefills a form from an existing session, for editing.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self {
            nom_cours: session.nom_cours.clone().unwrap_or_default(),
            description: session.description.clone().unwrap_or_default(),
            duree: session.duree.map(|d| d.to_string()).unwrap_or_default(),
            statut: session.statut.clone().unwrap_or_default(),
            formateur_id: session
                .formateur
                .as_ref()
                .map(|f| f.id.to_string())
                .unwrap_or_default(),
            salle_id: session.room_id().map(|id| id.to_string()).unwrap_or_default(),
            groupe_id: session
                .groupe
                .as_ref()
                .map(|g| g.id.to_string())
                .unwrap_or_default(),
            date_debut: session.date_debut.clone().unwrap_or_default(),
            date_fin: session.date_fin.clone().unwrap_or_default(),
            creneau_ids: session
                .creneaux
                .iter()
                .filter_map(crate::SlotRef::slot_id)
                .map(|id| id.to_string())
                .collect(),
            materiel_ids: session
                .materiel_requis_ids
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// The session body sent to `POST /sessions` and `PUT /sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub nom_cours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duree: u32,
    pub statut: String,
    pub formateur_id: i64,
    pub salle_id: i64,
    pub groupe_id: Option<i64>,
    pub planning_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<String>,
    pub creneau_ids: Vec<i64>,
    pub materiel_requis_ids: Vec<i64>,
}

/// Parses the values of a multi-select into ids.
///
/// Malformed values are dropped rather than rejected.
#[must_use]
pub fn parse_selected_ids(values: &[String]) -> Vec<i64> {
    values
        .iter()
        .filter_map(|value| value.trim().parse::<i64>().ok())
        .collect()
}

/// Parses a session duration in hours.
///
/// # Errors
///
/// Returns an error unless the value is a whole number in `[1, 8]`.
pub fn parse_duration(value: &str) -> Result<u32, DomainError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|hours| (MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(hours))
        .ok_or_else(|| DomainError::InvalidDuration {
            value: value.to_string(),
        })
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_id(value: &str, field: &'static str) -> Result<i64, DomainError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
}

/// Validates a session form and builds the request payload.
///
/// Every rule is checked so the caller can show all problems at once.
///
/// # Arguments
///
/// * `form` - The form as entered
/// * `planning_id` - The planning the session is created in
///
/// # Returns
///
/// * `Ok(SessionPayload)` if the form is valid
/// * `Err(Vec<DomainError>)` listing every rule that failed
///
/// # Errors
///
/// Returns an error if:
/// - No slot is selected (malformed selections do not count)
/// - The title, instructor, room or status is empty
/// - The instructor or room is not a valid id
/// - The duration is not a whole number in `[1, 8]`
pub fn validate_session_form(
    form: &SessionForm,
    planning_id: i64,
) -> Result<SessionPayload, Vec<DomainError>> {
    let mut errors: Vec<DomainError> = Vec::new();

    let creneau_ids: Vec<i64> = parse_selected_ids(&form.creneau_ids);
    if creneau_ids.is_empty() {
        errors.push(DomainError::NoSlotSelected);
    }

    let required: [(&str, &'static str, &'static str); 4] = [
        (&form.nom_cours, "nomCours", "Session title"),
        (&form.formateur_id, "formateurId", "Instructor"),
        (&form.salle_id, "salleId", "Room"),
        (&form.statut, "statut", "Status"),
    ];
    for (value, field, label) in required {
        if value.trim().is_empty() {
            errors.push(DomainError::MissingField { field, label });
        }
    }

    let formateur_id: Option<i64> = non_empty(&form.formateur_id)
        .map(|v| required_id(&v, "formateurId"))
        .transpose()
        .unwrap_or_else(|err| {
            errors.push(err);
            None
        });
    let salle_id: Option<i64> = non_empty(&form.salle_id)
        .map(|v| required_id(&v, "salleId"))
        .transpose()
        .unwrap_or_else(|err| {
            errors.push(err);
            None
        });

    let duree: Option<u32> = match parse_duration(&form.duree) {
        Ok(hours) => Some(hours),
        Err(err) => {
            errors.push(err);
            None
        }
    };

    match (formateur_id, salle_id, duree) {
        (Some(formateur_id), Some(salle_id), Some(duree)) if errors.is_empty() => {
            Ok(SessionPayload {
                nom_cours: form.nom_cours.trim().to_string(),
                description: non_empty(&form.description),
                duree,
                statut: form.statut.trim().to_string(),
                formateur_id,
                salle_id,
                groupe_id: form.groupe_id.trim().parse::<i64>().ok(),
                planning_id,
                date_debut: non_empty(&form.date_debut),
                date_fin: non_empty(&form.date_fin),
                creneau_ids,
                materiel_requis_ids: parse_selected_ids(&form.materiel_ids),
            })
        }
        _ => Err(errors),
    }
}
