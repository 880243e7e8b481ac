// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, Session, SessionForm, SessionPayload, parse_duration, parse_selected_ids,
    validate_session_form,
};
use serde_json::json;

fn valid_form() -> SessionForm {
    SessionForm {
        nom_cours: String::from("Rust avancé"),
        description: String::new(),
        duree: String::from("2"),
        statut: String::from("PLANIFIE"),
        formateur_id: String::from("4"),
        salle_id: String::from("7"),
        groupe_id: String::from("3"),
        date_debut: String::new(),
        date_fin: String::new(),
        creneau_ids: vec![String::from("11"), String::from("12")],
        materiel_ids: vec![String::from("1")],
    }
}

#[test]
fn test_valid_form_builds_payload() {
    let payload: SessionPayload = validate_session_form(&valid_form(), 5).unwrap();

    assert_eq!(payload.nom_cours, "Rust avancé");
    assert_eq!(payload.duree, 2);
    assert_eq!(payload.formateur_id, 4);
    assert_eq!(payload.salle_id, 7);
    assert_eq!(payload.groupe_id, Some(3));
    assert_eq!(payload.planning_id, 5);
    assert_eq!(payload.creneau_ids, vec![11, 12]);
    assert_eq!(payload.materiel_requis_ids, vec![1]);
    assert_eq!(payload.description, None);
}

#[test]
fn test_payload_uses_backend_field_names() {
    let payload: SessionPayload = validate_session_form(&valid_form(), 5).unwrap();
    let value: serde_json::Value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["nomCours"], json!("Rust avancé"));
    assert_eq!(value["formateurId"], json!(4));
    assert_eq!(value["salleId"], json!(7));
    assert_eq!(value["planningId"], json!(5));
    assert_eq!(value["creneauIds"], json!([11, 12]));
    assert_eq!(value["materielRequisIds"], json!([1]));
    assert!(value.get("description").is_none());
}

#[test]
fn test_duration_bounds() {
    assert_eq!(parse_duration("1"), Ok(1));
    assert_eq!(parse_duration("8"), Ok(8));
    assert!(parse_duration("0").is_err());
    assert!(parse_duration("9").is_err());
    assert!(parse_duration("2.5").is_err());
    assert!(parse_duration("").is_err());
    assert!(parse_duration("-1").is_err());
}

#[test]
fn test_out_of_range_duration_rejects_form() {
    let mut form: SessionForm = valid_form();
    form.duree = String::from("9");

    let errors: Vec<DomainError> = validate_session_form(&form, 5).unwrap_err();
    assert_eq!(
        errors,
        vec![DomainError::InvalidDuration {
            value: String::from("9"),
        }]
    );
}

#[test]
fn test_malformed_selections_are_dropped() {
    let values: Vec<String> = vec![
        String::from("3"),
        String::from("abc"),
        String::new(),
        String::from(" 8 "),
    ];
    assert_eq!(parse_selected_ids(&values), vec![3, 8]);
}

#[test]
fn test_only_malformed_slots_count_as_none_selected() {
    let mut form: SessionForm = valid_form();
    form.creneau_ids = vec![String::from("NaN"), String::from("x")];

    let errors: Vec<DomainError> = validate_session_form(&form, 5).unwrap_err();
    assert_eq!(errors, vec![DomainError::NoSlotSelected]);
}

#[test]
fn test_every_failure_is_reported() {
    let form: SessionForm = SessionForm::default();

    let errors: Vec<DomainError> = validate_session_form(&form, 5).unwrap_err();
    assert!(errors.contains(&DomainError::NoSlotSelected));
    assert!(errors.contains(&DomainError::MissingField {
        field: "nomCours",
        label: "Session title",
    }));
    assert!(errors.contains(&DomainError::MissingField {
        field: "formateurId",
        label: "Instructor",
    }));
    assert!(errors.contains(&DomainError::MissingField {
        field: "salleId",
        label: "Room",
    }));
    assert!(errors.contains(&DomainError::MissingField {
        field: "statut",
        label: "Status",
    }));
    assert!(errors.contains(&DomainError::InvalidDuration {
        value: String::new(),
    }));
}

#[test]
fn test_non_numeric_room_is_rejected() {
    let mut form: SessionForm = valid_form();
    form.salle_id = String::from("B12");

    let errors: Vec<DomainError> = validate_session_form(&form, 5).unwrap_err();
    assert_eq!(
        errors,
        vec![DomainError::InvalidIdentifier {
            field: "salleId",
            value: String::from("B12"),
        }]
    );
}

#[test]
fn test_missing_group_is_allowed() {
    let mut form: SessionForm = valid_form();
    form.groupe_id = String::new();

    let payload: SessionPayload = validate_session_form(&form, 5).unwrap();
    assert_eq!(payload.groupe_id, None);
}

#[test]
fn test_form_prefills_from_session() {
    let session: Session = serde_json::from_value(json!({
        "id": 10,
        "nomCours": "SQL",
        "duree": 3,
        "statut": "CONFIRMEE",
        "formateur": {"id": 4, "nom": "Martin"},
        "salle": {"id": 7, "nom": "A1"},
        "creneaux": [11, {"id": 12}, "08:00 - 10:00"],
        "materielRequisIds": [2]
    }))
    .unwrap();

    let form: SessionForm = SessionForm::from_session(&session);
    assert_eq!(form.nom_cours, "SQL");
    assert_eq!(form.duree, "3");
    assert_eq!(form.formateur_id, "4");
    assert_eq!(form.salle_id, "7");
    assert_eq!(form.groupe_id, "");
    assert_eq!(form.creneau_ids, vec![String::from("11"), String::from("12")]);
    assert_eq!(form.materiel_ids, vec![String::from("2")]);

    let payload: SessionPayload = validate_session_form(&form, 1).unwrap();
    assert_eq!(payload.statut, "CONFIRMEE");
}
