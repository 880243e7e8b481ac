// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use planif_domain::{Room, Session, Slot, TimeOfDay};
use serde_json::{Value, json};

pub fn create_test_room(id: i64, nom: &str) -> Room {
    Room {
        id,
        nom: nom.to_string(),
        capacite: Some(20),
    }
}

/// A slot on `day` from `start` to `end`, optionally dated.
pub fn create_test_slot(id: i64, day: &str, start: &str, end: &str, date: Option<&str>) -> Slot {
    serde_json::from_value(json!({
        "id": id,
        "jourSemaine": day,
        "heureDebut": start,
        "heureFin": end,
        "date": date,
    }))
    .unwrap()
}

/// Monday and Tuesday, 08:00 to 10:00.
pub fn create_test_week_slots() -> Vec<Slot> {
    vec![
        create_test_slot(1, "LUNDI", "08:00:00", "10:00:00", Some("2024-03-11")),
        create_test_slot(2, "MARDI", "08:00:00", "10:00:00", Some("2024-03-12")),
    ]
}

/// A session in room `room_id` referencing `creneaux` as given.
pub fn create_test_session(id: i64, room_id: Option<i64>, creneaux: Value) -> Session {
    let mut value: Value = json!({
        "id": id,
        "nomCours": format!("Cours {id}"),
        "statut": "PLANIFIE",
        "formateur": {"id": 4, "nom": "Martin", "prenom": "Claire"},
        "creneaux": creneaux,
        "planningId": 1,
    });
    if let Some(room_id) = room_id {
        value["salle"] = json!({"id": room_id, "nom": format!("Salle {room_id}")});
    }
    serde_json::from_value(value).unwrap()
}

pub fn time_of_day(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}
