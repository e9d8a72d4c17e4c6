use crate::app::{App, Pane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod form;
mod task_list;
mod time_entries;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Pane-level keys first, everything else goes to the focused pane.
pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Esc => app.escape(),
        KeyCode::Tab => app.cycle_pane(),
        KeyCode::Left => app.left(),
        KeyCode::Right => {
            if let Some(task) = app.right() {
                enqueue_action(action_tx, Action::SaveLastTask(task));
            }
        }
        KeyCode::Enter => {
            if app.focused_pane == Pane::Form {
                if let Some(entry) = app.submit() {
                    enqueue_action(action_tx, Action::SubmitEntry(entry));
                }
            } else if let Some(id) = app.confirmed_delete() {
                enqueue_action(action_tx, Action::DeleteEntry { id });
            }
        }
        _ => match app.focused_pane {
            Pane::TaskList => task_list::handle_task_list_key(key, app),
            Pane::Form => form::handle_form_key(key, app),
            Pane::TimeEntries => time_entries::handle_time_entries_key(key, app, action_tx),
        },
    }
}
