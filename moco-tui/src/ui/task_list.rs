use super::*;
use crate::app::SelectableItem;
use ratatui::widgets::{List, ListItem, ListState};

pub fn render_task_list(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = pane_block(" Tasks ", Pane::TaskList, app, theme);
    let items = app.task_list.items();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled("No assigned projects", theme.muted)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| match item {
            SelectableItem::ProjectHeader { name, customer } => {
                let mut spans = vec![Span::styled(name.clone(), theme.project_header)];
                if !customer.is_empty() {
                    spans.push(Span::styled(format!(" ({})", customer), theme.customer));
                }
                ListItem::new(Line::from(spans))
            }
            SelectableItem::TaskRow {
                position,
                task_name,
                ..
            } => ListItem::new(Line::from(format!("[{}] {}", position, task_name))),
        })
        .collect();

    let cursor = app.task_list.cursor();
    let on_task = items.get(cursor).is_some_and(SelectableItem::is_selectable);
    let mut state = ListState::default().with_selected(on_task.then_some(cursor));

    let list = List::new(list_items)
        .block(block)
        .highlight_style(theme.highlight)
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut state);
}
