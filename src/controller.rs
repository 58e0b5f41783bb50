use crate::error::SyncError;
use crate::models::{Task, TaskId, TaskPatch};
use crate::service::TaskService;
use crate::store::TaskStore;

/// Orchestrates one network operation per user intent over the shared
/// [`TaskStore`]: validate locally, apply the optimistic mutation, issue
/// the call, then reconcile with the server outcome or roll back.
///
/// Rollback is scoped to the record an operation touched, never a full
/// collection restore, so undoing one failed operation cannot erase an
/// unrelated mutation that landed while it was in flight.
pub struct SyncController<S: TaskService> {
    store: TaskStore,
    service: S,
    loading: bool,
    last_error: Option<SyncError>,
    draft: String,
}

impl<S: TaskService> SyncController<S> {
    pub fn new(service: S) -> Self {
        SyncController {
            store: TaskStore::new(),
            service,
            loading: false,
            last_error: None,
            draft: String::new(),
        }
    }

    /// Fetches the full collection from the service.
    ///
    /// No optimistic step: on success the filtered records replace the
    /// collection wholesale, on failure the collection is cleared and the
    /// error recorded.
    pub async fn fetch(&mut self) -> Result<(), SyncError> {
        self.loading = true;
        self.last_error = None;
        let result = self.service.list().await;
        self.loading = false;
        match result {
            Ok(records) => {
                let active: Vec<Task> = records.into_iter().filter(|t| !t.deleted).collect();
                self.store.replace_all(active);
                if self.store.reversed() {
                    self.store.reverse_order();
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch tasks");
                self.store.replace_all(Vec::new());
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Creates a task from the current draft text.
    ///
    /// The provisional entry appears immediately (at the front when the
    /// display is newest-first) and is replaced by the server record on
    /// success. On failure it is removed and the draft text comes back so
    /// the user does not lose their entry.
    pub async fn add(&mut self) -> Result<(), SyncError> {
        let title = self.draft.trim().to_string();
        if title.is_empty() {
            return Err(SyncError::Validation("task title must not be empty".into()));
        }
        self.last_error = None;

        let provisional = Task::provisional(&title);
        let provisional_id = provisional.id;
        self.store.insert_provisional(provisional, self.store.reversed());
        self.draft.clear();

        match self.service.create(&title).await {
            Ok(server_task) => {
                self.store.commit_provisional(provisional_id, server_task);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to add task");
                self.store.remove_by_id(provisional_id);
                self.draft = title;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Renames a task.
    ///
    /// Rejected locally when the id is unknown, the new name trims to
    /// empty, or the name is unchanged; none of these reach the network.
    pub async fn edit(&mut self, id: TaskId, new_name: &str) -> Result<(), SyncError> {
        let trimmed = new_name.trim().to_string();
        if trimmed.is_empty() {
            return Err(SyncError::Validation("task title must not be empty".into()));
        }
        let current = match self.store.get(id) {
            Some(t) => t,
            None => return Err(SyncError::Validation(format!("task {id} not found"))),
        };
        if current.name == trimmed {
            return Err(SyncError::Validation("title is unchanged".into()));
        }
        self.last_error = None;

        let patch = TaskPatch::rename(&trimmed);
        let prior = self.store.patch_by_id(id, &patch);

        match self.service.update(id, &patch).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to edit task");
                if let Some(prior) = prior {
                    self.store.restore_record(prior);
                }
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Flips a task's completion state.
    pub async fn toggle_complete(&mut self, id: TaskId) -> Result<(), SyncError> {
        let target = match self.store.get(id) {
            Some(t) => t,
            None => return Err(SyncError::Validation(format!("task {id} not found"))),
        };
        self.last_error = None;

        let patch = TaskPatch::complete(!target.completed);
        let prior = self.store.patch_by_id(id, &patch);

        match self.service.update(id, &patch).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to toggle task completion");
                if let Some(prior) = prior {
                    self.store.restore_record(prior);
                }
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Deletes a task.
    ///
    /// The entry disappears immediately; a not-found answer from the
    /// service arrives as success, so only a real failure re-inserts it at
    /// its prior position.
    pub async fn delete(&mut self, id: TaskId) -> Result<(), SyncError> {
        let (index, removed) = match self.store.remove_by_id(id) {
            Some(entry) => entry,
            None => return Err(SyncError::Validation(format!("task {id} not found"))),
        };
        self.last_error = None;

        match self.service.delete(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(id, error = %e, "failed to delete task");
                self.store.insert_at(index, removed);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Toggles the display order. Purely local and synchronous; never
    /// touches the network or the held error.
    pub fn toggle_order(&mut self) {
        self.store.toggle_order();
    }

    // Read surface for the presentation collaborator.

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&SyncError> {
        self.last_error.as_ref()
    }

    pub fn reversed(&self) -> bool {
        self.store.reversed()
    }

    /// The add-form input text.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }
}
