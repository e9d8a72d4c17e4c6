use super::{FormField, TextInput};

/// The three inputs of the "new time entry" form.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntryForm {
    pub date: TextInput,
    pub duration: TextInput,
    pub description: TextInput,
    field: FormField,
    focused: bool,
}

impl TimeEntryForm {
    pub fn new(today: &str) -> Self {
        Self {
            date: TextInput::from_str(today),
            duration: TextInput::new(),
            description: TextInput::new(),
            field: FormField::Date,
            focused: false,
        }
    }

    /// The field receiving keystrokes, if any.
    pub fn focused_field(&self) -> Option<FormField> {
        self.focused.then_some(self.field)
    }

    pub fn focus_first(&mut self) {
        self.field = FormField::Date;
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
        self.focused = true;
    }

    pub fn focus_previous(&mut self) {
        self.field = self.field.previous();
        self.focused = true;
    }

    pub fn input(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Date => &self.date,
            FormField::Duration => &self.duration,
            FormField::Description => &self.description,
        }
    }

    /// The input under focus, `None` while all fields are blurred.
    pub fn active_input_mut(&mut self) -> Option<&mut TextInput> {
        if !self.focused {
            return None;
        }
        Some(match self.field {
            FormField::Date => &mut self.date,
            FormField::Duration => &mut self.duration,
            FormField::Description => &mut self.description,
        })
    }

    /// Reset after a successful submission. Focus is left untouched.
    pub fn clear(&mut self, today: &str) {
        self.date.set(today);
        self.duration.clear();
        self.description.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_blurred_with_today() {
        let form = TimeEntryForm::new("2024-01-15");
        assert_eq!(form.focused_field(), None);
        assert_eq!(form.date.value, "2024-01-15");
        assert!(form.duration.value.is_empty());
    }

    #[test]
    fn blurred_form_swallows_input() {
        let mut form = TimeEntryForm::new("2024-01-15");
        assert!(form.active_input_mut().is_none());
    }

    #[test]
    fn focus_cycles_and_routes_input() {
        let mut form = TimeEntryForm::new("2024-01-15");
        form.focus_first();
        form.focus_next();
        form.active_input_mut().unwrap().insert('2');
        form.focus_previous();
        form.focus_previous();

        assert_eq!(form.duration.value, "2");
        assert_eq!(form.focused_field(), Some(FormField::Description));
    }

    #[test]
    fn clear_resets_date_and_empties_rest() {
        let mut form = TimeEntryForm::new("2024-01-10");
        form.duration.set("1:30");
        form.description.set("Standup");

        form.clear("2024-01-15");

        assert_eq!(form.date.value, "2024-01-15");
        assert_eq!(form.duration.value, "");
        assert_eq!(form.description.value, "");
    }
}
