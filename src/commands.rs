use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::controller::SyncController;
use crate::error::SyncError;
use crate::models::TaskId;
use crate::service::{HttpTaskService, TaskService};

/// Builds a controller for the configured service address.
///
/// The address comes from `--url` when given, otherwise from the
/// `TASKS_API` environment variable.
pub fn build_controller(url: Option<String>) -> Result<SyncController<HttpTaskService>, SyncError> {
    let address = url
        .or_else(|| std::env::var("TASKS_API").ok())
        .unwrap_or_default();
    let service = HttpTaskService::new(&address)?;
    Ok(SyncController::new(service))
}

/// Fetches and prints the task list.
pub async fn cmd_list(url: Option<String>, reverse: bool) {
    let mut controller = match build_controller(url) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if controller.fetch().await.is_err() {
        return report_held_error(&controller);
    }
    if reverse {
        controller.toggle_order();
    }
    print_tasks(&controller);
}

/// Adds a new task and prints the resulting list.
pub async fn cmd_add(url: Option<String>, name: String) {
    let mut controller = match build_controller(url) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if controller.fetch().await.is_err() {
        return report_held_error(&controller);
    }
    controller.set_draft(&name);
    match controller.add().await {
        Ok(()) => {
            println!("Task added.");
            print_tasks(&controller);
        }
        Err(e) => report_error(&e),
    }
}

/// Toggles a task's completion state.
pub async fn cmd_complete(url: Option<String>, id: TaskId) {
    let mut controller = match build_controller(url) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if controller.fetch().await.is_err() {
        return report_held_error(&controller);
    }
    match controller.toggle_complete(id).await {
        Ok(()) => {
            let state = controller
                .store()
                .get(id)
                .map(|t| if t.completed { "complete" } else { "pending" })
                .unwrap_or("unknown");
            println!("Task {id} is now {state}.");
            print_tasks(&controller);
        }
        Err(e) => report_error(&e),
    }
}

/// Renames a task.
pub async fn cmd_edit(url: Option<String>, id: TaskId, name: String) {
    let mut controller = match build_controller(url) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if controller.fetch().await.is_err() {
        return report_held_error(&controller);
    }
    match controller.edit(id, &name).await {
        Ok(()) => {
            println!("Task {id} updated.");
            print_tasks(&controller);
        }
        Err(e) => report_error(&e),
    }
}

/// Deletes a task.
pub async fn cmd_remove(url: Option<String>, id: TaskId) {
    let mut controller = match build_controller(url) {
        Ok(c) => c,
        Err(e) => return report_error(&e),
    };
    if controller.fetch().await.is_err() {
        return report_held_error(&controller);
    }
    match controller.delete(id).await {
        Ok(()) => {
            println!("Task {id} removed.");
            print_tasks(&controller);
        }
        Err(e) => report_error(&e),
    }
}

fn report_error(e: &SyncError) {
    eprintln!("{}", e.reason());
}

fn report_held_error<S: TaskService>(controller: &SyncController<S>) {
    if let Some(e) = controller.last_error() {
        report_error(e);
    }
}

/// Renders the collection as a table, in display order.
fn print_tasks<S: TaskService>(controller: &SyncController<S>) {
    if controller.tasks().is_empty() {
        println!("No tasks yet.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    for t in controller.tasks() {
        let status = if t.completed { "Done" } else { "Pending" };
        let status_color = if t.completed { Color::Green } else { Color::Yellow };
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.name),
            Cell::new(status).fg(status_color),
        ]);
    }

    println!("{table}");
}
