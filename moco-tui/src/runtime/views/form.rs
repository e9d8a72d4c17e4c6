use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Field navigation and text editing. Letters, including j and k, are typed.
pub(super) fn handle_form_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => app.move_down(),
        KeyCode::Up => app.move_up(),
        _ => {
            let Some(input) = app.form.active_input_mut() else {
                return;
            };
            match key.code {
                KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.clear()
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.insert(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Home => input.home(),
                KeyCode::End => input.end(),
                _ => {}
            }
        }
    }
}
