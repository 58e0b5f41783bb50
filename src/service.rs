use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};

use crate::error::SyncError;
use crate::models::{Task, TaskId, TaskPatch};

/// Interface to the remote task endpoint.
///
/// The controller only ever talks to this trait; tests substitute a
/// scripted double, production uses [`HttpTaskService`].
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch all task records, including soft-deleted ones. The caller
    /// filters those out before storing.
    async fn list(&self) -> Result<Vec<Task>, SyncError>;

    /// Create a task with the given name; returns the server record with
    /// its assigned id.
    async fn create(&self, name: &str) -> Result<Task, SyncError>;

    /// Apply a partial update. Any success response is full confirmation;
    /// the response body, if any, is ignored.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<(), SyncError>;

    /// Delete a task. A not-found answer counts as success: the desired
    /// end state (absence) already holds.
    async fn delete(&self, id: TaskId) -> Result<(), SyncError>;
}

/// `TaskService` backed by the remote HTTP CRUD endpoint.
#[derive(Debug)]
pub struct HttpTaskService {
    client: Client,
    base: Url,
}

impl HttpTaskService {
    /// Builds a service handle for the given base address.
    ///
    /// Fails fast with `Configuration` on an empty or unparseable address
    /// so no later operation has to re-check it.
    pub fn new(base_url: &str) -> Result<Self, SyncError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(SyncError::Configuration(
                "no service address configured; set --url or TASKS_API".into(),
            ));
        }
        let base = Url::parse(trimmed)
            .map_err(|e| SyncError::Configuration(format!("invalid service address '{trimmed}': {e}")))?;
        Ok(HttpTaskService { client: Client::new(), base })
    }

    fn item_url(&self, id: TaskId) -> Url {
        let path = format!("{}/{id}", self.base.path().trim_end_matches('/'));
        let mut url = self.base.clone();
        url.set_path(&path);
        url
    }
}

/// Maps a transport-level failure (the call never produced a response).
fn network_error(e: reqwest::Error) -> SyncError {
    let detail = if e.is_connect() {
        format!("could not connect to the service: {e}")
    } else if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    SyncError::Network(detail)
}

/// Turns a non-success response into a `Service` error, reading a JSON
/// `message` field from the body when one is present.
async fn service_error(response: Response) -> SyncError {
    let status = response.status().as_u16();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .or_else(|| Some(body.to_string()).filter(|s| s != "null")),
        Err(_) => None,
    };
    SyncError::service(status, message)
}

#[async_trait]
impl TaskService for HttpTaskService {
    async fn list(&self) -> Result<Vec<Task>, SyncError> {
        tracing::debug!(url = %self.base, "fetching task list");
        let response = self
            .client
            .get(self.base.clone())
            .send()
            .await
            .map_err(network_error)?;
        if !response.status().is_success() {
            return Err(service_error(response).await);
        }
        let status = response.status().as_u16();
        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| SyncError::service(status, Some(format!("unexpected response body: {e}"))))
    }

    async fn create(&self, name: &str) -> Result<Task, SyncError> {
        tracing::debug!(name, "creating task");
        let response = self
            .client
            .post(self.base.clone())
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(network_error)?;
        if !response.status().is_success() {
            return Err(service_error(response).await);
        }
        let status = response.status().as_u16();
        response
            .json::<Task>()
            .await
            .map_err(|e| SyncError::service(status, Some(format!("unexpected response body: {e}"))))
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<(), SyncError> {
        tracing::debug!(id, ?patch, "updating task");
        let response = self
            .client
            .patch(self.item_url(id))
            .json(patch)
            .send()
            .await
            .map_err(network_error)?;
        if !response.status().is_success() {
            return Err(service_error(response).await);
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> Result<(), SyncError> {
        tracing::debug!(id, "deleting task");
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(network_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(id, "task not found on delete; treating as already gone");
            return Ok(());
        }
        if !response.status().is_success() {
            return Err(service_error(response).await);
        }
        Ok(())
    }
}
