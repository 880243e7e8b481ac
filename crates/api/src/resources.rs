// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The backend's REST collections and typed accessors for them.

use crate::client::ApiClient;
use crate::error::ApiError;
use planif_domain::{
    Conflict, Equipment, Group, Instructor, NewPlanning, Planning, Room, Session, Slot, Student,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A CRUD collection on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Etudiants,
    Formateurs,
    Salles,
    Materiels,
    Groupes,
    Sessions,
    Creneaux,
    Plannings,
    Disponibilites,
    Conflits,
}

impl Resource {
    pub const ALL: [Self; 10] = [
        Self::Etudiants,
        Self::Formateurs,
        Self::Salles,
        Self::Materiels,
        Self::Groupes,
        Self::Sessions,
        Self::Creneaux,
        Self::Plannings,
        Self::Disponibilites,
        Self::Conflits,
    ];

    /// The collection path, relative to the API base.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Etudiants => "/etudiants",
            Self::Formateurs => "/formateurs",
            Self::Salles => "/salles",
            Self::Materiels => "/materiels",
            Self::Groupes => "/groupes",
            Self::Sessions => "/sessions",
            Self::Creneaux => "/creneaux",
            Self::Plannings => "/plannings",
            Self::Disponibilites => "/disponibilites",
            Self::Conflits => "/conflits",
        }
    }

    /// The path of one item in the collection.
    #[must_use]
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.path())
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = format!("/{}", s.trim().trim_start_matches('/').to_lowercase());
        Self::ALL
            .into_iter()
            .find(|r| r.path() == wanted)
            .ok_or_else(|| format!("Unknown resource: {s}"))
    }
}

impl ApiClient {
    /// Lists a collection. An empty answer is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a list of `T`.
    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        let items: Vec<T> = self.get_json(resource.path()).await?.unwrap_or_default();
        tracing::debug!(resource = resource.path(), count = items.len(), "Listed resource");
        Ok(items)
    }

    /// Fetches one item. An empty answer is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
    ) -> Result<Option<T>, ApiError> {
        self.get_json(&resource.item_path(id)).await
    }

    /// Creates an item and returns the backend's copy, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the answer is not a `T`.
    pub async fn create<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: Resource,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        self.send_json(Method::POST, resource.path(), Some(body))
            .await
    }

    /// Replaces an item and returns the backend's copy, if it sent one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the answer is not a `T`.
    pub async fn update<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
        body: &B,
    ) -> Result<Option<T>, ApiError> {
        self.send_json(Method::PUT, &resource.item_path(id), Some(body))
            .await
    }

    /// Deletes an item. Whatever the backend answers on success is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, resource: Resource, id: i64) -> Result<(), ApiError> {
        self.send::<Value>(Method::DELETE, &resource.item_path(id), None)
            .await?
            .error_for_status()?;
        tracing::info!(resource = resource.path(), id, "Deleted item");
        Ok(())
    }

    /// Loads every slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn slots(&self) -> Result<Vec<Slot>, ApiError> {
        self.list(Resource::Creneaux).await
    }

    /// Loads every room.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.list(Resource::Salles).await
    }

    /// Loads every session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.list(Resource::Sessions).await
    }

    /// Loads one session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn session(&self, id: i64) -> Result<Option<Session>, ApiError> {
        self.fetch(Resource::Sessions, id).await
    }

    /// Loads every planning.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn plannings(&self) -> Result<Vec<Planning>, ApiError> {
        self.list(Resource::Plannings).await
    }

    /// Creates a planning.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body cannot be decoded, or
    /// the backend answers with an empty body.
    pub async fn create_planning(&self, planning: &NewPlanning) -> Result<Planning, ApiError> {
        let url: String = self.url(Resource::Plannings.path());
        self.create(Resource::Plannings, planning)
            .await?
            .ok_or_else(|| ApiError::Decode {
                url,
                message: String::from("empty body where a planning was expected"),
            })
    }

    /// Loads every instructor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn instructors(&self) -> Result<Vec<Instructor>, ApiError> {
        self.list(Resource::Formateurs).await
    }

    /// Loads every group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn groups(&self) -> Result<Vec<Group>, ApiError> {
        self.list(Resource::Groupes).await
    }

    /// Loads every piece of equipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn equipment(&self) -> Result<Vec<Equipment>, ApiError> {
        self.list(Resource::Materiels).await
    }

    /// Loads every student.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn students(&self) -> Result<Vec<Student>, ApiError> {
        self.list(Resource::Etudiants).await
    }

    /// Loads the conflicts the backend has recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn recorded_conflicts(&self) -> Result<Vec<Conflict>, ApiError> {
        self.list(Resource::Conflits).await
    }

    /// Availability records, kept as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn availabilities(&self) -> Result<Vec<Value>, ApiError> {
        self.list(Resource::Disponibilites).await
    }

    /// `GET /etudiants/{id}/statistiques`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn student_statistics(&self, id: i64) -> Result<Option<Value>, ApiError> {
        self.get_json(&format!("{}/statistiques", Resource::Etudiants.item_path(id)))
            .await
    }

    /// `GET /etudiants/{id}/planning`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn student_sessions(&self, id: i64) -> Result<Vec<Session>, ApiError> {
        let sessions: Option<Vec<Session>> = self
            .get_json(&format!("{}/planning", Resource::Etudiants.item_path(id)))
            .await?;
        Ok(sessions.unwrap_or_default())
    }

    /// `GET /formateurs/{id}/statistiques`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn instructor_statistics(&self, id: i64) -> Result<Option<Value>, ApiError> {
        self.get_json(&format!("{}/statistiques", Resource::Formateurs.item_path(id)))
            .await
    }
}
