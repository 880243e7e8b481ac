// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Conflict, ConflictKind, DayOfWeek, Session, Slot, SlotRef, TimeOfDay, format_session_datetime,
    normalize_weekday_key, parse_time_range, status_key,
};
use serde_json::json;
use time::macros::date;

fn time_of_day(hour: u8, minute: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute).unwrap()
}

#[test]
fn test_weekday_spellings_share_one_key() {
    assert_eq!(normalize_weekday_key("Lundi"), "LUNDI");
    assert_eq!(normalize_weekday_key("LUNDI"), "LUNDI");
    assert_eq!(normalize_weekday_key("lundi"), "LUNDI");
    assert_eq!(normalize_weekday_key("  lundi "), "LUNDI");

    for raw in ["Lundi", "LUNDI", "lundi", "Monday"] {
        let day: DayOfWeek = raw.parse().unwrap();
        assert_eq!(day, DayOfWeek::Lundi);
        assert_eq!(day.as_str(), "LUNDI");
    }
}

#[test]
fn test_weekday_strips_accents() {
    assert_eq!(normalize_weekday_key("Écolé"), "ECOLE");
    assert_eq!(normalize_weekday_key("ça"), "CA");
    assert_eq!(normalize_weekday_key("à"), "A");
}

#[test]
fn test_unknown_weekday_is_rejected() {
    let result: Result<DayOfWeek, _> = "Funday".parse::<DayOfWeek>();
    assert!(result.is_err());
}

#[test]
fn test_weekday_from_date() {
    assert_eq!(DayOfWeek::from_date(date!(2024 - 03 - 11)), DayOfWeek::Lundi);
    assert_eq!(DayOfWeek::from_date(date!(2024 - 03 - 17)), DayOfWeek::Dimanche);
}

#[test]
fn test_time_of_day_parses_every_string_form() {
    assert_eq!("08:00".parse::<TimeOfDay>().unwrap(), time_of_day(8, 0));
    assert_eq!("08:30:00".parse::<TimeOfDay>().unwrap(), time_of_day(8, 30));
    assert_eq!("8:05".parse::<TimeOfDay>().unwrap(), time_of_day(8, 5));
    assert!("24:00".parse::<TimeOfDay>().is_err());
    assert!("08".parse::<TimeOfDay>().is_err());
    assert!("08:5".parse::<TimeOfDay>().is_err());
}

#[test]
fn test_time_of_day_displays_zero_padded() {
    assert_eq!(time_of_day(8, 5).to_string(), "08:05");
    assert!(time_of_day(8, 0) < time_of_day(10, 0));
    assert!(time_of_day(9, 59) < time_of_day(10, 0));
}

#[test]
fn test_slot_accepts_array_and_object_times() {
    let slot: Slot = serde_json::from_value(json!({
        "id": 1,
        "jourSemaine": "Mardi",
        "heureDebut": [14, 0, 0],
        "heureFin": {"hour": 16, "minute": 0},
        "date": [2024, 3, 12]
    }))
    .unwrap();

    assert_eq!(slot.jour_semaine, Some(DayOfWeek::Mardi));
    assert_eq!(slot.heure_debut, Some(time_of_day(14, 0)));
    assert_eq!(slot.heure_fin, Some(time_of_day(16, 0)));
    assert_eq!(slot.date, Some(date!(2024 - 03 - 12)));
}

#[test]
fn test_slot_with_unknown_weekday_is_kept_but_unresolved() {
    let slot: Slot = serde_json::from_value(json!({
        "id": 3,
        "jourSemaine": "Someday",
        "heureDebut": "08:00:00"
    }))
    .unwrap();

    assert_eq!(slot.jour_semaine, None);
    assert!(slot.resolved().is_none());
}

#[test]
fn test_slot_resolved_requires_day_and_start() {
    let slot: Slot = serde_json::from_value(json!({
        "id": 7,
        "jourSemaine": "JEUDI",
        "heureDebut": "10:00:00",
        "heureFin": "12:00:00",
        "date": "2024-03-14"
    }))
    .unwrap();

    let resolved = slot.resolved().unwrap();
    assert_eq!(resolved.id, Some(7));
    assert_eq!(resolved.day, DayOfWeek::Jeudi);
    assert_eq!(resolved.time_label(), "10:00 - 12:00");
    assert_eq!(slot.range_label().as_deref(), Some("10:00 - 12:00"));
}

#[test]
fn test_slot_ref_classifies_the_four_shapes() {
    assert_eq!(SlotRef::from_value(json!(4)), SlotRef::Id(4));
    assert_eq!(
        SlotRef::from_value(json!("08:00 - 10:00")),
        SlotRef::TimeRange {
            start: time_of_day(8, 0),
            end: time_of_day(10, 0),
        }
    );
    assert_eq!(
        SlotRef::from_value(json!({"id": 9})),
        SlotRef::Partial { id: 9 }
    );

    let full: SlotRef = SlotRef::from_value(json!({
        "id": 2,
        "jourSemaine": "LUNDI",
        "heureDebut": "08:00:00"
    }));
    assert!(matches!(full, SlotRef::Full(ref slot) if slot.id == 2));
}

#[test]
fn test_slot_ref_keeps_unusable_values() {
    assert!(matches!(
        SlotRef::from_value(json!("morning")),
        SlotRef::Unrecognized(_)
    ));
    assert!(matches!(
        SlotRef::from_value(json!("xx - yy")),
        SlotRef::Unrecognized(_)
    ));
    assert!(matches!(
        SlotRef::from_value(json!({"label": "x"})),
        SlotRef::Unrecognized(_)
    ));
    assert!(matches!(
        SlotRef::from_value(json!(1.5)),
        SlotRef::Unrecognized(_)
    ));
}

#[test]
fn test_parse_time_range() {
    let (start, end) = parse_time_range("08:00 - 10:00").unwrap();
    assert_eq!(start, time_of_day(8, 0));
    assert_eq!(end, time_of_day(10, 0));
    assert!(parse_time_range("08:00-10:00").is_err());
}

#[test]
fn test_session_prefers_creneaux_horaires() {
    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "nomCours": "Rust",
        "creneauxHoraires": ["08:00 - 10:00"],
        "creneaux": [1, 2]
    }))
    .unwrap();

    assert_eq!(session.creneaux.len(), 1);
    assert!(matches!(session.creneaux[0], SlotRef::TimeRange { .. }));
}

#[test]
fn test_session_falls_back_to_single_creneau() {
    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "creneau": {"id": 5}
    }))
    .unwrap();

    assert_eq!(session.creneaux, vec![SlotRef::Partial { id: 5 }]);
    assert_eq!(session.title(), "Session");
}

#[test]
fn test_session_room_and_planning_fallbacks() {
    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "salleId": 12,
        "planning": {"id": 3, "semaine": "2024-03-11"}
    }))
    .unwrap();

    assert_eq!(session.room_id(), Some(12));
    assert_eq!(session.planning_id, Some(3));
    assert!(session.belongs_to(3));

    let session: Session = serde_json::from_value(json!({
        "id": 2,
        "salle": {"id": 4, "nom": "B12"},
        "salleId": 12
    }))
    .unwrap();
    assert_eq!(session.room_id(), Some(4));
}

#[test]
fn test_session_start_date_ignores_time_part() {
    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "dateDebut": "2024-03-11T09:00"
    }))
    .unwrap();

    assert_eq!(session.start_date(), Some(date!(2024 - 03 - 11)));
}

#[test]
fn test_status_key_strips_accents() {
    assert_eq!(status_key("PLANIFIÉ"), "planifie");
    assert_eq!(status_key("Annulée"), "annulee");
    assert_eq!(status_key("EN_COURS"), "en_cours");
}

#[test]
fn test_format_session_datetime() {
    assert_eq!(
        format_session_datetime(Some("2024-03-11T09:00:00")),
        "11/03/2024 09:00"
    );
    assert_eq!(format_session_datetime(Some("2024-03-11")), "11/03/2024");
    assert_eq!(format_session_datetime(Some("soon")), "soon");
    assert_eq!(format_session_datetime(None), "-");
}

#[test]
fn test_conflict_kind_round_trips_unknown_codes() {
    let conflict: Conflict = serde_json::from_value(json!({
        "type": "CONFLIT_SALLE",
        "description": "x",
        "severite": 3
    }))
    .unwrap();
    assert_eq!(conflict.kind, ConflictKind::Room);
    assert_eq!(conflict.severite, Some(3));

    let conflict: Conflict = serde_json::from_value(json!({"type": "NOUVEAU"})).unwrap();
    assert_eq!(conflict.kind, ConflictKind::Other(String::from("NOUVEAU")));
    assert_eq!(conflict.kind.label(), "NOUVEAU");
    assert_eq!(conflict.kind.remedies().len(), 1);

    let conflict: Conflict = serde_json::from_value(json!({})).unwrap();
    assert_eq!(conflict.kind.label(), "Conflit");
}

#[test]
fn test_conflict_with_null_type_is_unknown_kind() {
    let conflict: Conflict =
        serde_json::from_value(json!({"type": null, "description": "x", "severite": 3})).unwrap();
    assert_eq!(conflict.kind, ConflictKind::Other(String::new()));
    assert_eq!(conflict.kind.label(), "Conflit");
    assert_eq!(conflict.description.as_deref(), Some("x"));
}

#[test]
fn test_room_conflict_remedies() {
    let remedies = ConflictKind::Room.remedies();
    assert_eq!(remedies.len(), 3);
    assert_eq!(remedies[0].title, "Changer de salle");
    assert_eq!(remedies[0].impact, "faible");
}

#[test]
fn test_session_reads_flat_names_and_null_equipment() {
    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "formateurNom": "Martin Claire",
        "salleNom": " A101 ",
        "groupeNom": "",
        "materielRequisIds": null,
    }))
    .unwrap();
    assert_eq!(session.instructor_name().as_deref(), Some("Martin Claire"));
    assert_eq!(session.room_name().as_deref(), Some("A101"));
    assert_eq!(session.group_name(), None);
    assert!(session.materiel_requis_ids.is_empty());
}

#[test]
fn test_session_start_date_falls_back_to_date() {
    let session: Session =
        serde_json::from_value(json!({"id": 1, "date": "2024-03-12"})).unwrap();
    assert_eq!(session.start_date(), Some(date!(2024 - 03 - 12)));

    let session: Session = serde_json::from_value(json!({
        "id": 1,
        "dateDebut": "2024-03-11T08:00:00",
        "date": "2024-03-12"
    }))
    .unwrap();
    assert_eq!(session.start_date(), Some(date!(2024 - 03 - 11)));
}
