// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use planif::{Cell, CellKey, PlanningBoard};
use planif_domain::{DayOfWeek, TimeOfDay};
use serde_json::{Value, json};
use std::collections::HashSet;

use super::helpers::{
    MockBackend, RecordedRequest, create_page_backend, create_test_client, planning_json,
    session_json, test_today,
};
use crate::{ApiClient, ApiErrorKind, FlowError, load_board, reload_sessions};

#[tokio::test]
async fn test_load_order_and_fan_out() {
    let backend: MockBackend = create_page_backend();
    let client: ApiClient = create_test_client(&backend.serve().await);

    load_board(&client, test_today()).await.unwrap();

    let routes: Vec<String> = backend.routes_hit();
    assert_eq!(routes.len(), 7);
    assert_eq!(
        &routes[..3],
        &[
            String::from("GET /creneaux"),
            String::from("GET /plannings"),
            String::from("GET /salles")
        ]
    );
    let fan_out: HashSet<&str> = routes[3..].iter().map(String::as_str).collect();
    assert_eq!(
        fan_out,
        HashSet::from([
            "GET /sessions",
            "GET /formateurs",
            "GET /groupes",
            "GET /materiels"
        ])
    );
}

#[tokio::test]
async fn test_one_session_fills_exactly_one_cell() {
    let backend: MockBackend = create_page_backend();
    let client: ApiClient = create_test_client(&backend.serve().await);

    let board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    assert_eq!(board.planning_id(), Some(7));
    assert_eq!(board.instructors().len(), 1);
    assert_eq!(board.groups().len(), 1);
    let occupied: Vec<&Cell> = board.grid().occupied_cells().collect();
    assert_eq!(occupied.len(), 1);
    assert_eq!(
        occupied[0].key,
        CellKey {
            day: DayOfWeek::Lundi,
            time: TimeOfDay::new(8, 0).unwrap(),
            room_id: 1,
        }
    );
    assert_eq!(occupied[0].cards[0].session_id, 10);
    assert_eq!(board.report().summary(), None);
}

#[tokio::test]
async fn test_next_week_planning_is_reused() {
    let backend: MockBackend = create_page_backend();
    backend.respond(
        "GET",
        "/plannings",
        200,
        &json!([planning_json(3, "2024-03-04"), planning_json(8, "2024-03-18")]),
    );
    let client: ApiClient = create_test_client(&backend.serve().await);

    let board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    assert_eq!(board.planning_id(), Some(8));
    assert!(!backend.routes_hit().contains(&String::from("POST /plannings")));
}

#[tokio::test]
async fn test_missing_planning_is_created_for_first_slot_week() {
    let backend: MockBackend = create_page_backend();
    backend
        .respond("GET", "/plannings", 200, &json!([planning_json(3, "2024-03-04")]))
        .respond("POST", "/plannings", 201, &planning_json(9, "2024-03-11"))
        .respond("GET", "/sessions", 200, &json!([session_json(10, 1, 9, &json!([2]))]));
    let client: ApiClient = create_test_client(&backend.serve().await);

    let board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    assert_eq!(board.planning_id(), Some(9));
    assert_eq!(board.grid().card_count(), 1);

    let requests: Vec<RecordedRequest> = backend.requests();
    assert_eq!(requests[2].route(), "POST /plannings");
    let body: &Value = requests[2].body.as_ref().unwrap();
    assert_eq!(body["semaine"], json!("2024-03-11"));
    assert_eq!(body["statut"], json!("EN_COURS"));
    assert_eq!(body["nom"], json!("Planning 2024-03-11"));
}

#[tokio::test]
async fn test_empty_backend_gives_empty_grid() {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond("GET", "/creneaux", 200, &json!([]))
        .respond("GET", "/plannings", 200, &json!([]))
        .respond("POST", "/plannings", 201, &planning_json(1, "2024-03-11"))
        .respond("GET", "/salles", 200, &json!([]))
        .respond("GET", "/sessions", 200, &json!([session_json(10, 1, 1, &json!([1]))]))
        .respond("GET", "/formateurs", 200, &json!([]))
        .respond("GET", "/groupes", 200, &json!([]))
        .respond("GET", "/materiels", 200, &json!([]));
    let client: ApiClient = create_test_client(&backend.serve().await);

    let board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    assert_eq!(board.grid().cell_count(), 0);
    assert_eq!(board.grid().card_count(), 0);
    assert_eq!(
        board.report().summary().as_deref(),
        Some("1 session(s) non affichée(s)")
    );
    let post: RecordedRequest = backend
        .requests()
        .into_iter()
        .find(|r| r.route() == "POST /plannings")
        .unwrap();
    assert_eq!(post.body.unwrap()["semaine"], json!("2024-03-11"));
}

#[tokio::test]
async fn test_failed_fan_out_aborts_load() {
    let backend: MockBackend = create_page_backend();
    backend.respond("GET", "/groupes", 500, &json!({"message": "Erreur interne"}));
    let client: ApiClient = create_test_client(&backend.serve().await);

    let err: FlowError = load_board(&client, test_today()).await.unwrap_err();

    let FlowError::Api(api) = err else {
        panic!("expected an API error");
    };
    assert_eq!(api.kind(), ApiErrorKind::ServerError);
    assert_eq!(api.to_string(), "Erreur interne");
}

#[tokio::test]
async fn test_failed_slots_stop_before_plannings() {
    let backend: MockBackend = create_page_backend();
    backend.respond("GET", "/creneaux", 404, &json!({"error": "Not Found"}));
    let client: ApiClient = create_test_client(&backend.serve().await);

    assert!(load_board(&client, test_today()).await.is_err());
    assert_eq!(backend.routes_hit(), vec![String::from("GET /creneaux")]);
}

#[tokio::test]
async fn test_sessions_of_other_plannings_are_shown_when_none_match() {
    let backend: MockBackend = create_page_backend();
    backend.respond("GET", "/sessions", 200, &json!([session_json(10, 1, 42, &json!([1]))]));
    let client: ApiClient = create_test_client(&backend.serve().await);

    let board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    assert_eq!(board.planning_id(), Some(7));
    assert_eq!(board.grid().card_count(), 1);
}

#[tokio::test]
async fn test_reload_sessions_redraws() {
    let backend: MockBackend = create_page_backend();
    let client: ApiClient = create_test_client(&backend.serve().await);
    let mut board: PlanningBoard = load_board(&client, test_today()).await.unwrap();

    backend.respond(
        "GET",
        "/sessions",
        200,
        &json!([
            session_json(10, 1, 7, &json!([1])),
            session_json(11, 1, 7, &json!(["08:00 - 10:00"]))
        ]),
    );
    reload_sessions(&client, &mut board).await.unwrap();

    assert_eq!(board.sessions().len(), 2);
    assert_eq!(board.grid().card_count(), 2);
}
