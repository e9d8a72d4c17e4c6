use super::*;
use crate::app::{FormField, StatusKind};
use ratatui::layout::{Constraint, Layout};

pub fn render_form(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = pane_block(" New Time Entry ", Pane::Form, app, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [task_area, date_area, duration_area, description_area, status_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(inner);

    let task_line = match &app.selected_task {
        Some(task) => Line::from(vec![
            Span::styled("Task: ", theme.muted),
            Span::raw(task.title.clone()),
        ]),
        None => Line::from(Span::styled("Task: none selected", theme.muted)),
    };
    frame.render_widget(Paragraph::new(task_line), task_area);

    let field_areas = [
        (FormField::Date, date_area),
        (FormField::Duration, duration_area),
        (FormField::Description, description_area),
    ];
    for (field, field_area) in field_areas {
        render_field(frame, field_area, app, field, theme);
    }

    if let Some(status) = app.status() {
        let style = match status.kind {
            StatusKind::Success => theme.success,
            StatusKind::Error => theme.error,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(status.text.clone(), style)),
            status_area,
        );
    }
}

fn render_field(frame: &mut Frame, area: Rect, app: &App, field: FormField, theme: &Theme) {
    let focused = app.form.focused_field() == Some(field);
    let input = app.form.input(field);

    let border_style = if focused {
        theme.focused_border
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .border_style(border_style);
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(input.value.as_str()).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let (before, _) = input.split_at_cursor();
        let offset = (before.chars().count() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}
