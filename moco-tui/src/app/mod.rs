use crate::last_task::LastTask;
use crate::time_utils::today_string;
use moco::{Project, TimeEntry};
use std::time::{Duration, Instant};
use time::OffsetDateTime;

mod entries;
mod form;
mod layout;
mod navigation;
mod state;
mod submission;
mod task_list;
mod timers;

pub use entries::EntriesTable;
pub use form::TimeEntryForm;
pub use layout::PaneLayout;
pub use state::{FormField, Pane, StatusKind, StatusMessage, TextInput, Viewport};
pub use task_list::{map_projects_to_items, SelectableItem, TaskList, TaskSelection};
pub use timers::{OneShotTimer, RepeatingTimer};

/// How often the time entries are reloaded in the background.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10);
/// How long a status message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);

pub struct App {
    pub running: bool,
    pub focused_pane: Pane,
    pub form: TimeEntryForm,

    // Task list
    pub task_list: TaskList,
    pub selected_task: Option<TaskSelection>,

    // Time entries, as fetched and as displayed
    pub entries: Vec<TimeEntry>,
    pub table: EntriesTable,
    pub selected_entry: Option<TimeEntry>,
    pub confirming_delete: bool,
    pub last_reload: Option<OffsetDateTime>,

    pub viewport: Viewport,

    status: Option<StatusMessage>,
    status_timer: OneShotTimer,
    refresh_timer: RepeatingTimer,
}

impl App {
    /// Build the controller and start the refresh timer at `now`.
    pub fn new(projects: &[Project], last_task: Option<LastTask>, now: Instant) -> Self {
        let mut refresh_timer = RepeatingTimer::new(REFRESH_INTERVAL);
        refresh_timer.start(now);

        let mut app = Self {
            running: true,
            focused_pane: Pane::TaskList,
            form: TimeEntryForm::new(&today_string()),
            task_list: TaskList::new(map_projects_to_items(projects)),
            selected_task: None,
            entries: Vec::new(),
            table: EntriesTable::default(),
            selected_entry: None,
            confirming_delete: false,
            last_reload: None,
            viewport: Viewport::default(),
            status: None,
            status_timer: OneShotTimer::default(),
            refresh_timer,
        };

        if let Some(task) = last_task {
            app.restore_last_task(task);
        }
        app
    }

    fn restore_last_task(&mut self, task: LastTask) {
        if self.task_list.select(task.project_id, task.task_id) {
            self.selected_task = self.task_list.highlighted();
        } else {
            // No longer assigned, but still submittable until the user picks another task.
            self.selected_task = Some(TaskSelection {
                project_id: task.project_id,
                task_id: task.task_id,
                title: task.task_title,
            });
        }
    }

    /// Stop background refreshes and leave the event loop.
    pub fn quit(&mut self) {
        self.refresh_timer.stop();
        self.running = false;
    }

    #[cfg(test)]
    pub fn is_refreshing(&self) -> bool {
        self.refresh_timer.is_running()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_status_at(StatusKind::Error, text.into(), Instant::now());
    }

    pub fn set_success(&mut self, text: impl Into<String>) {
        self.set_status_at(StatusKind::Success, text.into(), Instant::now());
    }

    /// Replaces any visible message and restarts its expiry.
    pub fn set_status_at(&mut self, kind: StatusKind, text: String, now: Instant) {
        self.status = Some(StatusMessage { kind, text });
        self.status_timer.arm(now, MESSAGE_TTL);
    }

    /// Advance both timers. Returns true when an entries reload is due.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.status_timer.fire_if_due(now) {
            self.status = None;
        }
        self.refresh_timer.fire_if_due(now)
    }

    /// Replace the entry set after a successful reload.
    pub fn apply_entries(&mut self, entries: Vec<TimeEntry>, loaded_at: OffsetDateTime) {
        self.table.replace(&entries);
        self.entries = entries;
        self.last_reload = Some(loaded_at);

        let previous_id = self.selected_entry.as_ref().map(|e| e.id);
        self.selected_entry = self
            .table
            .cursor()
            .and_then(|i| self.table.entry_at(i))
            .cloned();
        if self.selected_entry.is_none() {
            self.table.clear_cursor();
        }
        // A pending confirmation only ever applies to the entry it was armed on.
        if self.selected_entry.as_ref().map(|e| e.id) != previous_id {
            self.confirming_delete = false;
        }
    }

    pub fn entries_load_failed(&mut self, err: impl std::fmt::Display) {
        self.set_error(format!("Error loading time entries: {}", err));
    }

    pub fn entry_submitted(&mut self) {
        self.set_success("Time entry submitted successfully!");
        self.form.clear(&today_string());
    }

    pub fn entry_submit_failed(&mut self, err: impl std::fmt::Display) {
        self.set_error(format!("Error submitting time entry: {}", err));
    }

    pub fn entry_deleted(&mut self) {
        self.set_success("Time entry deleted");
        self.confirming_delete = false;
        self.selected_entry = None;
        self.table.clear_cursor();
    }

    pub fn entry_delete_failed(&mut self, err: impl std::fmt::Display) {
        self.set_error(format!("Error deleting time entry: {}", err));
        self.confirming_delete = false;
    }
}
