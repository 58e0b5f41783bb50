use crate::models::{Task, TaskId, TaskPatch};

/// The authoritative local collection of tasks plus the display-order flag.
///
/// Empty at process start, populated by the first fetch, discarded on
/// teardown. All writes go through the methods below; the collection never
/// holds a soft-deleted record and never holds two tasks with the same id.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    reversed: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Replaces the entire collection. Used after a fetch; the input must
    /// already exclude soft-deleted records.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Inserts a provisional task at the head or tail.
    ///
    /// `at_front` mirrors the reversed flag: with newest-first display the
    /// new entry belongs on top.
    pub fn insert_provisional(&mut self, task: Task, at_front: bool) {
        if at_front {
            self.tasks.insert(0, task);
        } else {
            self.tasks.push(task);
        }
    }

    /// Replaces the task carrying `provisional_id` with the server record.
    ///
    /// If no task has that id (a concurrent delete raced the create), the
    /// server record is dropped silently. Defined no-op, not an error.
    pub fn commit_provisional(&mut self, provisional_id: TaskId, server_task: Task) {
        if let Some(t) = self.tasks.iter_mut().find(|t| t.id == provisional_id) {
            *t = server_task;
        }
    }

    /// Removes the task with the given id, returning its prior position and
    /// record so a rollback can re-insert it exactly where it was.
    pub fn remove_by_id(&mut self, id: TaskId) -> Option<(usize, Task)> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some((idx, self.tasks.remove(idx)))
    }

    /// Re-inserts a task at a given position, clamped to the current length.
    pub fn insert_at(&mut self, index: usize, task: Task) {
        let index = index.min(self.tasks.len());
        self.tasks.insert(index, task);
    }

    /// Shallow-merges the patch into the task with the given id, returning
    /// the pre-patch record for rollback. No-op (`None`) if absent.
    pub fn patch_by_id(&mut self, id: TaskId, patch: &TaskPatch) -> Option<Task> {
        let t = self.tasks.iter_mut().find(|t| t.id == id)?;
        let prior = t.clone();
        if let Some(name) = &patch.name {
            t.name = name.clone();
        }
        if let Some(completed) = patch.completed {
            t.completed = completed;
        }
        Some(prior)
    }

    /// Puts a record back in place of whatever currently carries its id.
    pub fn restore_record(&mut self, record: Task) {
        if let Some(t) = self.tasks.iter_mut().find(|t| t.id == record.id) {
            *t = record;
        }
    }

    /// Reverses the display order in place. An involution: applying it
    /// twice restores the original order.
    pub fn reverse_order(&mut self) {
        self.tasks.reverse();
    }

    /// Flips the display-order flag and reverses the collection to match.
    pub fn toggle_order(&mut self) {
        self.reversed = !self.reversed;
        self.reverse_order();
    }

    /// Captures the full collection state.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Restores a previously captured state. Total replace, not a merge.
    pub fn restore(&mut self, snapshot: Vec<Task>) {
        self.tasks = snapshot;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn reversed(&self) -> bool {
        self.reversed
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
