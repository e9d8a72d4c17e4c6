use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_time_entries_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.arm_delete() {
                enqueue_action(action_tx, Action::DeleteEntry { id });
            }
        }
        _ => {}
    }
}
