use super::*;
use crate::time_utils::{format_clock, parse_iso_date};
use ratatui::{
    layout::Constraint,
    widgets::{Cell, Row, Table, TableState},
};
use time::Weekday;

fn german_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Montag",
        Weekday::Tuesday => "Dienstag",
        Weekday::Wednesday => "Mittwoch",
        Weekday::Thursday => "Donnerstag",
        Weekday::Friday => "Freitag",
        Weekday::Saturday => "Samstag",
        Weekday::Sunday => "Sonntag",
    }
}

/// "Montag, 15.01.2024". Dates that do not parse are shown as they came.
pub fn format_day_header(date: &str) -> String {
    match parse_iso_date(date) {
        Some(d) => format!(
            "{}, {:02}.{:02}.{:04}",
            german_weekday(d.weekday()),
            d.day(),
            d.month() as u8,
            d.year()
        ),
        None => date.to_string(),
    }
}

pub fn render_time_entries(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut block = pane_block(" Time Entries ", Pane::TimeEntries, app, theme);
    if let Some(loaded_at) = app.last_reload {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" Last update: {} ", format_clock(loaded_at)),
            theme.muted,
        )));
    }

    if app.table.is_empty() {
        let empty = Paragraph::new(Span::styled("No time entries", theme.muted)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut rows = Vec::new();
    let mut selected_row = None;
    let mut entry_index = 0usize;

    for bucket in app.table.buckets() {
        rows.push(
            Row::new(vec![Cell::from(format_day_header(&bucket.date))]).style(theme.date_header),
        );
        for entry in &bucket.entries {
            if app.table.cursor() == Some(entry_index) {
                selected_row = Some(rows.len());
            }
            rows.push(Row::new(vec![
                Cell::from(entry.description.clone()),
                Cell::from(format!("{:.2}", entry.hours)),
                Cell::from(entry.task_name.clone()),
            ]));
            entry_index += 1;
        }
        rows.push(
            Row::new(vec![
                Cell::from("Total:"),
                Cell::from(bucket.total_label()),
                Cell::from(""),
            ])
            .style(theme.total),
        );
        rows.push(Row::new(vec![Cell::from("")]));
    }

    let header = Row::new(vec!["Entry", "Hours", "Task"]).style(theme.muted);
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Length(7),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(theme.highlight);

    let mut state = TableState::default().with_selected(selected_row);
    frame.render_stateful_widget(table, area, &mut state);
}
