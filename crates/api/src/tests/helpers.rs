// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A scripted backend served by axum on a loopback port.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use time::{Date, Month};

use crate::{ApiClient, ClientConfig};

/// One request the mock backend received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path and query, without the `/api` prefix.
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn route(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `method path` with `status` and a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: &Value) -> &Self {
        self.respond_raw(method, path, status, &body.to_string())
    }

    /// Answers `method path` with `status` and a body as given.
    pub fn respond_raw(&self, method: &str, path: &str, status: u16, body: &str) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), (status, body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn routes_hit(&self) -> Vec<String> {
        self.requests().iter().map(RecordedRequest::route).collect()
    }

    /// Serves the backend and returns its API base URL.
    pub async fn serve(&self) -> String {
        let listener: tokio::net::TcpListener =
            tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app: Router = Router::new().fallback(handle).with_state(self.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }
}

async fn handle(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let full: &str = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let path: String = full.strip_prefix("/api").unwrap_or(full).to_string();
    let recorded: RecordedRequest = RecordedRequest {
        method: method.to_string(),
        path,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        body: serde_json::from_str(&body).ok(),
    };
    let key: String = recorded.route();
    backend.requests.lock().unwrap().push(recorded);

    let (status, body): (u16, String) = backend
        .routes
        .lock()
        .unwrap()
        .get(&key)
        .cloned()
        .unwrap_or_else(|| (404, json!({"message": format!("No route for {key}")}).to_string()));
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

pub fn create_test_client(base_url: &str) -> ApiClient {
    ApiClient::new(ClientConfig::new(base_url)).unwrap()
}

/// Wednesday 13 March 2024; its week starts on Monday the 11th.
pub fn test_today() -> Date {
    Date::from_calendar_date(2024, Month::March, 13).unwrap()
}

/// Monday and Tuesday, 08:00 to 10:00, in the week of [`test_today`].
pub fn week_slots_json() -> Value {
    json!([
        {"id": 1, "date": "2024-03-11", "jourSemaine": "LUNDI", "heureDebut": "08:00:00", "heureFin": "10:00:00"},
        {"id": 2, "date": "2024-03-12", "jourSemaine": "MARDI", "heureDebut": "08:00:00", "heureFin": "10:00:00"}
    ])
}

pub fn planning_json(id: i64, semaine: &str) -> Value {
    json!({"id": id, "nom": format!("Planning {semaine}"), "semaine": semaine, "statut": "EN_COURS"})
}

pub fn session_json(id: i64, room_id: i64, planning_id: i64, creneaux: &Value) -> Value {
    json!({
        "id": id,
        "nomCours": format!("Cours {id}"),
        "statut": "PLANIFIE",
        "duree": 2,
        "formateur": {"id": 4, "nom": "Martin", "prenom": "Claire"},
        "salle": {"id": room_id, "nom": "A101"},
        "planningId": planning_id,
        "creneaux": creneaux,
    })
}

/// The 201 answer to a session write: an envelope around the stored session.
pub fn created_session_json(id: i64) -> Value {
    json!({
        "sessionId": id,
        "statut": "PLANIFIE",
        "aDesConflits": false,
        "message": "Session créée avec succès",
        "session": {
            "id": id,
            "nomCours": "Algorithmique",
            "formateurNom": "Martin Claire",
            "salleId": 1,
            "salleNom": "A101",
            "date": "2024-03-11",
            "creneauIds": [2]
        }
    })
}

/// A backend with one room, the week's slots, planning 7 for this week and
/// one session on slot 1.
pub fn create_page_backend() -> MockBackend {
    let backend: MockBackend = MockBackend::new();
    backend
        .respond("GET", "/creneaux", 200, &week_slots_json())
        .respond("GET", "/plannings", 200, &json!([planning_json(7, "2024-03-11")]))
        .respond("GET", "/salles", 200, &json!([{"id": 1, "nom": "A101", "capacite": 20}]))
        .respond("GET", "/sessions", 200, &json!([session_json(10, 1, 7, &json!([1]))]))
        .respond("GET", "/formateurs", 200, &json!([{"id": 4, "nom": "Martin", "prenom": "Claire"}]))
        .respond("GET", "/groupes", 200, &json!([{"id": 3, "nom": "G1"}]))
        .respond("GET", "/materiels", 200, &json!([]));
    backend
}

/// A form that passes validation: slot 2, instructor 4, room 1, 2 hours.
pub fn fill_valid_form(form: &mut planif_domain::SessionForm) {
    form.nom_cours = String::from("Algorithmique");
    form.duree = String::from("2");
    form.statut = String::from("PLANIFIE");
    form.formateur_id = String::from("4");
    form.salle_id = String::from("1");
    form.creneau_ids = vec![String::from("2")];
}
