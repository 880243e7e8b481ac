// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};

/// The kind of scheduling collision the backend reported.
///
/// Unknown kinds are preserved verbatim so newer backends still display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConflictKind {
    /// The instructor is double-booked.
    Instructor,
    /// The room is double-booked.
    Room,
    /// Required equipment is unavailable.
    Equipment,
    /// The group is double-booked.
    Group,
    /// Two sessions overlap in time.
    SessionOverlap,
    /// A planning constraint is not met.
    ConstraintViolated,
    /// Any other kind, as sent.
    Other(String),
}

impl ConflictKind {
    /// Returns the backend code (`CONFLIT_SALLE`, ...).
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Instructor => "CONFLIT_FORMATEUR",
            Self::Room => "CONFLIT_SALLE",
            Self::Equipment => "CONFLIT_MATERIEL",
            Self::Group => "CONFLIT_GROUPE",
            Self::SessionOverlap => "CHEVAUCHEMENT_SESSION",
            Self::ConstraintViolated => "CONTRAINTE_NON_RESPECTEE",
            Self::Other(code) => code,
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Instructor => "Conflit de formateur",
            Self::Room => "Conflit de salle",
            Self::Equipment => "Conflit de matériel",
            Self::Group => "Conflit de groupe",
            Self::SessionOverlap => "Chevauchement de sessions",
            Self::ConstraintViolated => "Contrainte non respectée",
            Self::Other(code) if code.is_empty() => "Conflit",
            Self::Other(code) => code,
        }
    }

    /// Returns the remedies usually proposed for this kind of conflict.
    #[must_use]
    pub const fn remedies(&self) -> &'static [Remedy] {
        match self {
            Self::Room => &ROOM_REMEDIES,
            Self::Instructor => &INSTRUCTOR_REMEDIES,
            Self::Equipment => &EQUIPMENT_REMEDIES,
            Self::Group => &GROUP_REMEDIES,
            Self::SessionOverlap => &OVERLAP_REMEDIES,
            Self::ConstraintViolated => &CONSTRAINT_REMEDIES,
            Self::Other(_) => &DEFAULT_REMEDIES,
        }
    }
}

impl From<String> for ConflictKind {
    fn from(code: String) -> Self {
        match code.as_str() {
            "CONFLIT_FORMATEUR" => Self::Instructor,
            "CONFLIT_SALLE" => Self::Room,
            "CONFLIT_MATERIEL" => Self::Equipment,
            "CONFLIT_GROUPE" => Self::Group,
            "CHEVAUCHEMENT_SESSION" => Self::SessionOverlap,
            "CONTRAINTE_NON_RESPECTEE" => Self::ConstraintViolated,
            _ => Self::Other(code),
        }
    }
}

impl From<ConflictKind> for String {
    fn from(kind: ConflictKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduling collision reported by the backend.
///
/// Conflicts are never stored on the client; they are shown alongside
/// the form that caused them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type", default = "unknown_kind", deserialize_with = "deserialize_kind")]
    pub kind: ConflictKind,
    #[serde(default)]
    pub description: Option<String>,
    /// Severity on a 1-5 scale.
    #[serde(default)]
    pub severite: Option<u8>,
    #[serde(default)]
    pub creneau_id: Option<i64>,
    #[serde(default)]
    pub planning_id: Option<i64>,
}

fn unknown_kind() -> ConflictKind {
    ConflictKind::Other(String::new())
}

/// A `null` type is read as the unknown kind.
fn deserialize_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ConflictKind, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map_or_else(unknown_kind, ConflictKind::from))
}

/// A suggested way of resolving a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remedy {
    pub title: &'static str,
    pub description: &'static str,
    /// Expected disruption: faible, moyen, élevé or variable.
    pub impact: &'static str,
}

const fn remedy(title: &'static str, description: &'static str, impact: &'static str) -> Remedy {
    Remedy {
        title,
        description,
        impact,
    }
}

const ROOM_REMEDIES: [Remedy; 3] = [
    remedy(
        "Changer de salle",
        "Attribuer une autre salle à l'une des sessions en conflit.",
        "faible",
    ),
    remedy(
        "Déplacer la session",
        "Reprogrammer la session sur un autre créneau libre.",
        "moyen",
    ),
    remedy(
        "Fusionner les sessions",
        "Regrouper les sessions concernées si elles sont compatibles.",
        "élevé",
    ),
];

const INSTRUCTOR_REMEDIES: [Remedy; 2] = [
    remedy(
        "Remplacer le formateur",
        "Affecter un autre formateur disponible à la session.",
        "faible",
    ),
    remedy(
        "Reporter la session",
        "Décaler la session sur un moment où le formateur est disponible.",
        "moyen",
    ),
];

const EQUIPMENT_REMEDIES: [Remedy; 2] = [
    remedy(
        "Emprunter du matériel",
        "Emprunter du matériel supplémentaire pour la session.",
        "faible",
    ),
    remedy(
        "Optimiser l'utilisation",
        "Réorganiser le partage du matériel existant.",
        "moyen",
    ),
];

const GROUP_REMEDIES: [Remedy; 2] = [
    remedy(
        "Diviser le groupe",
        "Répartir le groupe en sous-groupes plus petits.",
        "élevé",
    ),
    remedy(
        "Modifier l'horaire",
        "Déplacer l'une des sessions sur un autre créneau.",
        "moyen",
    ),
];

const OVERLAP_REMEDIES: [Remedy; 1] = [remedy(
    "Ajuster les horaires",
    "Raccourcir les sessions pour qu'elles ne se chevauchent plus.",
    "faible",
)];

const CONSTRAINT_REMEDIES: [Remedy; 1] = [remedy(
    "Revoir le planning",
    "Retravailler le planning pour respecter toutes les contraintes.",
    "élevé",
)];

const DEFAULT_REMEDIES: [Remedy; 1] = [remedy(
    "Analyser manuellement",
    "Examiner le conflit en détail pour trouver une solution adaptée.",
    "variable",
)];
