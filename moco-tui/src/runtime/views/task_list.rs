use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_task_list_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        _ => {}
    }
}
