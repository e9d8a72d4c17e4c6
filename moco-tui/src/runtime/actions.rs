use crate::api::Backend;
use crate::app::App;
use crate::last_task::{LastTask, LastTaskStore};
use crate::time_utils::{now_local, today_local};
use moco::NewTimeEntry;
use tracing::{debug, warn};

use super::action_queue::{Action, ActionRx};

pub(super) async fn run_action<B: Backend + ?Sized>(
    action: Action,
    app: &mut App,
    backend: &B,
    store: &LastTaskStore,
) {
    match action {
        Action::SubmitEntry(entry) => submit_entry(app, backend, &entry).await,
        Action::DeleteEntry { id } => delete_entry(app, backend, id).await,
        Action::ReloadEntries => reload_entries(app, backend).await,
        Action::SaveLastTask(task) => save_last_task(app, store, &task),
    }
}

/// Run everything queued so far, in order.
pub(super) async fn drain_actions<B: Backend + ?Sized>(
    action_rx: &mut ActionRx,
    app: &mut App,
    backend: &B,
    store: &LastTaskStore,
) {
    while let Ok(action) = action_rx.try_recv() {
        run_action(action, app, backend, store).await;
    }
}

/// Fetch the trailing window of entries ending today. Failures keep the
/// entries already on screen.
pub(crate) async fn reload_entries<B: Backend + ?Sized>(app: &mut App, backend: &B) {
    match backend.fetch_time_entries(today_local()).await {
        Ok(entries) => {
            debug!(count = entries.len(), "Reloaded time entries");
            app.apply_entries(entries, now_local());
        }
        Err(e) => {
            warn!("Failed to reload time entries: {:#}", e);
            app.entries_load_failed(e);
        }
    }
}

async fn submit_entry<B: Backend + ?Sized>(app: &mut App, backend: &B, entry: &NewTimeEntry) {
    match backend.create_time_entry(entry).await {
        Ok(id) => {
            debug!(id, date = %entry.date, hours = entry.hours, "Created time entry");
            app.entry_submitted();
            reload_entries(app, backend).await;
        }
        Err(e) => {
            warn!("Failed to create time entry: {:#}", e);
            app.entry_submit_failed(e);
        }
    }
}

async fn delete_entry<B: Backend + ?Sized>(app: &mut App, backend: &B, id: i64) {
    if app.confirmed_delete() != Some(id) {
        debug!(id, "Skipping delete, confirmation no longer pending");
        return;
    }

    match backend.delete_time_entry(id).await {
        Ok(()) => {
            debug!(id, "Deleted time entry");
            app.entry_deleted();
            reload_entries(app, backend).await;
        }
        Err(e) => {
            warn!(id, "Failed to delete time entry: {:#}", e);
            app.entry_delete_failed(e);
        }
    }
}

fn save_last_task(app: &mut App, store: &LastTaskStore, task: &LastTask) {
    if let Err(e) = store.save(task) {
        warn!("Failed to save last task: {:#}", e);
        app.set_error(format!("Error saving last task: {}", e));
    }
}
