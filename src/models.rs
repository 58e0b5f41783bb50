use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Identifier of a task. Server-assigned ids are small serial numbers;
/// provisional ids are epoch milliseconds, so the two ranges stay disjoint
/// for the lifetime of an in-flight create.
pub type TaskId = u64;

/// Represents a single task as exchanged with the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier within the collection.
    pub id: TaskId,
    /// Display text, stored and transmitted trimmed.
    pub name: String,
    /// Whether the task has been completed.
    #[serde(default)]
    pub completed: bool,
    /// Server-side soft-delete marker. Records carrying it are filtered
    /// out before they ever enter the local collection.
    #[serde(default)]
    pub deleted: bool,
}

impl Task {
    /// Builds a provisional task standing in for an in-flight create.
    ///
    /// It is replaced, never merged, once the server record arrives.
    pub fn provisional(name: &str) -> Self {
        Task {
            id: provisional_id(),
            name: name.to_string(),
            completed: false,
            deleted: false,
        }
    }
}

/// Generates a client-side id for a provisional task.
pub fn provisional_id() -> TaskId {
    Utc::now().timestamp_millis() as TaskId
}

/// Partial update of a task.
///
/// Doubles as the PATCH request body (fields left `None` are omitted) and
/// as the argument to `TaskStore::patch_by_id`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that renames a task.
    pub fn rename(name: &str) -> Self {
        TaskPatch { name: Some(name.to_string()), completed: None }
    }

    /// Patch that sets the completion flag.
    pub fn complete(completed: bool) -> Self {
        TaskPatch { name: None, completed: Some(completed) }
    }
}
