use crate::duration::parse_duration;
use moco::NewTimeEntry;

use super::*;

impl App {
    /// Validate the form against the selected task.
    ///
    /// Checks run in a fixed order and the first failure is returned as the
    /// message to show.
    pub fn build_submission(&self) -> Result<NewTimeEntry, String> {
        let task = self
            .selected_task
            .as_ref()
            .ok_or_else(|| "Please select a project first".to_string())?;

        let hours = parse_duration(&self.form.duration.value)
            .map_err(|e| format!("Invalid duration: {}", e))?;

        let date = self.form.date.value.trim();
        if date.is_empty() {
            return Err("Please enter a date".to_string());
        }

        let description = self.form.description.value.trim();
        if description.is_empty() {
            return Err("Please enter a description".to_string());
        }

        if task.project_id <= 0 || task.task_id <= 0 {
            return Err("Invalid project or task ID".to_string());
        }

        Ok(NewTimeEntry {
            date: date.to_string(),
            hours,
            project_id: task.project_id,
            task_id: task.task_id,
            description: description.to_string(),
        })
    }

    /// Enter in the form. A validation failure becomes the status message.
    pub fn submit(&mut self) -> Option<NewTimeEntry> {
        match self.build_submission() {
            Ok(entry) => Some(entry),
            Err(message) => {
                self.set_error(message);
                None
            }
        }
    }
}
