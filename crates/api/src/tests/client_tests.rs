// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use planif_domain::{DayOfWeek, Room, Session, Slot, SlotRef};
use serde_json::{Value, json};

use super::helpers::{MockBackend, create_test_client, session_json, week_slots_json};
use crate::{ApiClient, ApiError, ApiErrorKind, ClientConfig, Resource};

#[tokio::test]
async fn test_bearer_token_is_sent_when_configured() {
    let backend: MockBackend = MockBackend::new();
    backend.respond("GET", "/salles", 200, &json!([]));
    let base: String = backend.serve().await;

    let client: ApiClient =
        ApiClient::new(ClientConfig::new(&base).with_token(Some(String::from("s3cret")))).unwrap();
    client.rooms().await.unwrap();

    let anonymous: ApiClient = create_test_client(&base);
    anonymous.rooms().await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer s3cret"));
    assert_eq!(requests[1].authorization, None);
}

#[tokio::test]
async fn test_lists_decode_backend_records() {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond("GET", "/creneaux", 200, &week_slots_json())
        .respond("GET", "/salles", 200, &json!([{"id": 1, "nom": "A101", "capacite": 20}]))
        .respond(
            "GET",
            "/sessions",
            200,
            &json!([session_json(10, 1, 7, &json!(["08:00 - 10:00"]))]),
        );
    let client: ApiClient = create_test_client(&backend.serve().await);

    let slots: Vec<Slot> = client.slots().await.unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[1].jour_semaine, Some(DayOfWeek::Mardi));

    let rooms: Vec<Room> = client.rooms().await.unwrap();
    assert_eq!(rooms[0].capacite, Some(20));

    let sessions: Vec<Session> = client.sessions().await.unwrap();
    assert!(matches!(sessions[0].creneaux[0], SlotRef::TimeRange { .. }));
}

#[tokio::test]
async fn test_empty_bodies_are_absent_not_errors() {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond_raw("GET", "/groupes", 200, "")
        .respond_raw("GET", "/sessions/5", 200, "")
        .respond_raw("DELETE", "/sessions/5", 204, "");
    let client: ApiClient = create_test_client(&backend.serve().await);

    assert!(client.groups().await.unwrap().is_empty());
    assert_eq!(client.session(5).await.unwrap(), None);
    client.delete(Resource::Sessions, 5).await.unwrap();
}

#[tokio::test]
async fn test_status_errors_carry_kind_and_message() {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond("GET", "/salles", 500, &json!({"message": "Base indisponible"}))
        .respond("GET", "/groupes", 405, &json!({"error": "Method Not Allowed"}))
        .respond_raw("GET", "/materiels", 403, "");
    let client: ApiClient = create_test_client(&backend.serve().await);

    let err: ApiError = client.rooms().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::ServerError);
    assert_eq!(err.to_string(), "Base indisponible");

    let err: ApiError = client.groups().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::MethodNotAllowed);
    assert_eq!(err.to_string(), "Method Not Allowed");

    let err: ApiError = client.equipment().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(err.to_string(), "HTTP 403");

    // Unscripted routes answer 404.
    let err: ApiError = client.students().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::EndpointNotFound);
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let backend: MockBackend = MockBackend::new();
    backend.respond_raw("GET", "/salles", 200, "[{\"id\": ");
    let client: ApiClient = create_test_client(&backend.serve().await);

    let err: ApiError = client.rooms().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_closed_port_is_connection_refused() {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client: ApiClient = create_test_client(&format!("http://{addr}/api"));
    let err: ApiError = client.rooms().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::ConnectionRefused);
    assert_eq!(err.status(), None);
    assert!(!client.check_connection().await);
}

#[tokio::test]
async fn test_check_connection_needs_one_healthy_endpoint() {
    let backend: MockBackend = MockBackend::new();
    backend.respond("GET", "/sessions", 200, &json!([]));
    let client: ApiClient = create_test_client(&backend.serve().await);

    assert!(client.check_connection().await);
}

#[tokio::test]
async fn test_lookup_endpoints() {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond("GET", "/etudiants/3/statistiques", 200, &json!({"sessions": 4}))
        .respond(
            "GET",
            "/etudiants/3/planning",
            200,
            &json!([session_json(10, 1, 7, &json!([1]))]),
        )
        .respond("GET", "/formateurs/4/statistiques", 200, &json!({"heures": 12}));
    let client: ApiClient = create_test_client(&backend.serve().await);

    let stats: Option<Value> = client.student_statistics(3).await.unwrap();
    assert_eq!(stats, Some(json!({"sessions": 4})));
    assert_eq!(client.student_sessions(3).await.unwrap().len(), 1);
    assert_eq!(
        client.instructor_statistics(4).await.unwrap(),
        Some(json!({"heures": 12}))
    );
}
