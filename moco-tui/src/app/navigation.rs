use super::*;

impl App {
    /// Move focus to `pane`. Leaving the form blurs it, entering it focuses
    /// the first field. Any pane change drops a pending delete confirmation.
    pub fn focus_pane(&mut self, pane: Pane) {
        if self.focused_pane == pane {
            return;
        }
        self.confirming_delete = false;
        if pane == Pane::Form {
            self.form.focus_first();
        } else {
            self.form.blur();
        }
        self.focused_pane = pane;
    }

    /// Tab: task list -> form -> time entries -> task list.
    pub fn cycle_pane(&mut self) {
        self.focus_pane(self.focused_pane.next());
    }

    /// Esc unwinds one level: pending confirmation, then pane focus, then the app.
    pub fn escape(&mut self) {
        if self.confirming_delete {
            self.cancel_delete();
        } else if self.focused_pane != Pane::TaskList {
            self.focus_pane(Pane::TaskList);
        } else {
            self.quit();
        }
    }

    pub fn left(&mut self) {
        self.focus_pane(Pane::TaskList);
    }

    /// Right from the task list opens the form. Returns the selection to
    /// remember as the last used task.
    pub fn right(&mut self) -> Option<LastTask> {
        if self.focused_pane != Pane::TaskList {
            return None;
        }
        self.focus_pane(Pane::Form);
        self.selected_task.as_ref().map(|task| LastTask {
            project_id: task.project_id,
            task_id: task.task_id,
            task_title: task.title.clone(),
        })
    }

    pub fn move_down(&mut self) {
        match self.focused_pane {
            Pane::TaskList => {
                if self.task_list.move_down() {
                    self.selected_task = self.task_list.highlighted();
                }
            }
            Pane::Form => self.form.focus_next(),
            Pane::TimeEntries => {
                self.table.move_down();
                self.sync_selected_entry();
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.focused_pane {
            Pane::TaskList => {
                if self.task_list.move_up() {
                    self.selected_task = self.task_list.highlighted();
                }
            }
            Pane::Form => self.form.focus_previous(),
            Pane::TimeEntries => {
                self.table.move_up();
                self.sync_selected_entry();
            }
        }
    }

    fn sync_selected_entry(&mut self) {
        let selected = self
            .table
            .cursor()
            .and_then(|i| self.table.entry_at(i))
            .cloned();
        if selected.as_ref().map(|e| e.id) != self.selected_entry.as_ref().map(|e| e.id) {
            self.confirming_delete = false;
        }
        self.selected_entry = selected;
    }

    /// The delete key. The first press arms the confirmation, the second
    /// returns the id to delete.
    pub fn arm_delete(&mut self) -> Option<i64> {
        if self.focused_pane != Pane::TimeEntries {
            return None;
        }
        let id = self.selected_entry.as_ref()?.id;
        if self.confirming_delete {
            Some(id)
        } else {
            self.confirming_delete = true;
            None
        }
    }

    /// Enter outside the form: the id to delete if a confirmation is pending.
    pub fn confirmed_delete(&self) -> Option<i64> {
        if !self.confirming_delete {
            return None;
        }
        self.selected_entry.as_ref().map(|e| e.id)
    }

    pub fn cancel_delete(&mut self) {
        self.confirming_delete = false;
        self.selected_entry = None;
        self.table.clear_cursor();
    }

    pub fn click(&mut self, x: u16, y: u16) {
        if let Some(pane) = PaneLayout::for_viewport(self.viewport).pane_at(x, y) {
            self.focus_pane(pane);
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::*;
    use super::*;

    #[test]
    fn tab_cycles_panes_and_manages_form_focus() {
        let mut app = test_app();

        app.cycle_pane();
        assert_eq!(app.focused_pane, Pane::Form);
        assert_eq!(app.form.focused_field(), Some(FormField::Date));

        app.cycle_pane();
        assert_eq!(app.focused_pane, Pane::TimeEntries);
        assert_eq!(app.form.focused_field(), None);

        app.cycle_pane();
        assert_eq!(app.focused_pane, Pane::TaskList);
    }

    #[test]
    fn escape_from_table_returns_to_task_list() {
        let mut app = app_with_entries();
        app.escape();

        assert_eq!(app.focused_pane, Pane::TaskList);
        assert!(app.running);
    }

    #[test]
    fn escape_from_task_list_quits() {
        let mut app = test_app();
        app.escape();

        assert!(!app.running);
        assert!(!app.is_refreshing());
    }

    #[test]
    fn escape_cancels_pending_delete_in_place() {
        let mut app = app_with_entries();
        app.move_down();
        app.arm_delete();

        app.escape();

        assert!(!app.confirming_delete);
        assert_eq!(app.selected_entry, None);
        assert_eq!(app.focused_pane, Pane::TimeEntries);
    }

    #[test]
    fn escape_from_form_blurs_fields() {
        let mut app = test_app();
        app.focus_pane(Pane::Form);
        app.move_down();

        app.escape();

        assert_eq!(app.focused_pane, Pane::TaskList);
        assert_eq!(app.form.focused_field(), None);
    }

    #[test]
    fn task_list_navigation_updates_selection() {
        let mut app = test_app();

        app.move_down();
        assert_eq!(app.selected_task.as_ref().unwrap().title, "Website / Design");

        app.move_down();
        app.move_down();
        let task = app.selected_task.as_ref().unwrap();
        assert_eq!((task.project_id, task.task_id), (2, 21));

        app.move_up();
        assert_eq!(app.selected_task.as_ref().unwrap().task_id, 12);
    }

    #[test]
    fn form_navigation_wraps_fields() {
        let mut app = test_app();
        app.focus_pane(Pane::Form);

        app.move_up();
        assert_eq!(app.form.focused_field(), Some(FormField::Description));
        app.move_down();
        assert_eq!(app.form.focused_field(), Some(FormField::Date));
    }

    #[test]
    fn right_opens_form_and_remembers_task() {
        let mut app = test_app();
        app.move_down();
        app.focus_pane(Pane::Form);
        app.focus_pane(Pane::TaskList);
        app.form.focus_next();

        let last = app.right().unwrap();

        assert_eq!(app.focused_pane, Pane::Form);
        assert_eq!(app.form.focused_field(), Some(FormField::Date));
        assert_eq!(last.task_id, 11);
        assert_eq!(last.task_title, "Website / Design");
    }

    #[test]
    fn right_outside_task_list_does_nothing() {
        let mut app = app_with_entries();
        assert_eq!(app.right(), None);
        assert_eq!(app.focused_pane, Pane::TimeEntries);
    }

    #[test]
    fn left_returns_to_task_list() {
        let mut app = test_app();
        app.focus_pane(Pane::Form);
        app.left();
        assert_eq!(app.focused_pane, Pane::TaskList);
    }

    #[test]
    fn delete_needs_a_selected_entry() {
        let mut app = app_with_entries();
        assert_eq!(app.arm_delete(), None);
        assert!(!app.confirming_delete);
    }

    #[test]
    fn second_delete_press_confirms() {
        let mut app = app_with_entries();
        app.move_down();

        assert_eq!(app.arm_delete(), None);
        assert!(app.confirming_delete);
        assert_eq!(app.confirmed_delete(), Some(2));
        assert_eq!(app.arm_delete(), Some(2));
    }

    #[test]
    fn moving_the_cursor_drops_confirmation() {
        let mut app = app_with_entries();
        app.move_down();
        app.arm_delete();

        app.move_down();

        assert!(!app.confirming_delete);
        assert_eq!(app.selected_entry.as_ref().map(|e| e.id), Some(3));
    }

    #[test]
    fn pane_change_drops_confirmation() {
        let mut app = app_with_entries();
        app.move_down();
        app.arm_delete();

        app.cycle_pane();

        assert!(!app.confirming_delete);
    }

    #[test]
    fn click_focuses_pane_under_pointer() {
        let mut app = test_app();
        app.resize(100, 40);

        app.click(75, 2);
        assert_eq!(app.focused_pane, Pane::Form);
        assert_eq!(app.form.focused_field(), Some(FormField::Date));

        app.click(75, 30);
        assert_eq!(app.focused_pane, Pane::TimeEntries);

        app.click(10, 10);
        assert_eq!(app.focused_pane, Pane::TaskList);
    }

    #[test]
    fn resize_only_records_viewport() {
        let mut app = test_app();
        app.resize(120, 50);

        assert_eq!(
            app.viewport,
            Viewport {
                width: 120,
                height: 50
            }
        );
        assert_eq!(app.focused_pane, Pane::TaskList);
    }
}
