use crate::api::Backend;
use crate::app::App;
use crate::last_task::LastTaskStore;
use crate::runtime::reload_entries;
use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{info, warn};

/// Everything that has to happen before the first frame.
///
/// Failing to load projects is fatal. A broken last-task file or a failed
/// entries load is not: the app starts without them.
pub async fn initialize_app_state<B: Backend + ?Sized>(
    backend: &B,
    store: &LastTaskStore,
) -> Result<App> {
    let projects = backend
        .fetch_projects()
        .await
        .context("Failed to load assigned projects")?;
    info!(count = projects.len(), "Loaded assigned projects");

    let last_task = match store.load() {
        Ok(task) => task,
        Err(e) => {
            warn!(path = %store.path().display(), "Ignoring last task: {:#}", e);
            None
        }
    };

    let mut app = App::new(&projects, last_task, Instant::now());
    reload_entries(&mut app, backend).await;
    Ok(app)
}
