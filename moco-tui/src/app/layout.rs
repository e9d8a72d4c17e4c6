use ratatui::layout::{Constraint, Layout, Position, Rect};

use super::{Pane, Viewport};

/// Height of the form block in the right column.
pub const FORM_HEIGHT: u16 = 14;

/// Screen regions of the three panes plus the help footer.
///
/// Shared by the renderer and by mouse hit-testing so a click always lands in
/// the pane that is drawn under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub task_list: Rect,
    pub form: Rect,
    pub time_entries: Rect,
    pub footer: Rect,
}

impl PaneLayout {
    pub fn new(area: Rect) -> Self {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [task_list, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);
        let [form, time_entries] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)]).areas(right);

        Self {
            task_list,
            form,
            time_entries,
            footer,
        }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(Rect::new(0, 0, viewport.width, viewport.height))
    }

    pub fn pane_at(&self, x: u16, y: u16) -> Option<Pane> {
        let position = Position::new(x, y);
        if self.task_list.contains(position) {
            Some(Pane::TaskList)
        } else if self.form.contains(position) {
            Some(Pane::Form)
        } else if self.time_entries.contains(position) {
            Some(Pane::TimeEntries)
        } else {
            None
        }
    }
}
