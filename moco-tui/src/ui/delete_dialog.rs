use super::utils::centered_rect;
use super::*;
use ratatui::{layout::Alignment, widgets::Clear};

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, theme: &Theme) {
    let Some(entry) = &app.selected_entry else {
        return;
    };

    let area = centered_rect(52, 8, frame.area());
    frame.render_widget(Clear, area);

    let detail = format!("{}  ·  {:.2}h  ·  {}", entry.date, entry.hours, entry.task_name);
    let text = vec![
        Line::from(""),
        Line::from(entry.description.clone()),
        Line::from(Span::styled(detail, theme.muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[d/Enter] Delete", theme.danger),
            Span::raw("    "),
            Span::raw("[Esc] Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Entry? ")
                .border_style(theme.danger)
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
