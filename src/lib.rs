//! Optimistic state synchronization for a remote task list.
//!
//! The engine keeps a local in-memory view of task records aligned with a
//! remote CRUD endpoint: every user intent mutates the local collection
//! immediately, then reconciles against the server response, rolling the
//! touched record back cleanly when the call fails.

pub mod commands;
pub mod controller;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use controller::SyncController;
pub use error::SyncError;
pub use models::{Task, TaskId, TaskPatch};
pub use service::{HttpTaskService, TaskService};
pub use store::TaskStore;
