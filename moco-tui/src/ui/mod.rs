use crate::app::{App, Pane, PaneLayout};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod form;
mod task_list;
mod theme;
mod time_entries;
pub(super) mod utils;

pub use theme::Theme;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let layout = PaneLayout::new(frame.area());

    task_list::render_task_list(frame, layout.task_list, app, theme);
    form::render_form(frame, layout.form, app, theme);
    time_entries::render_time_entries(frame, layout.time_entries, app, theme);
    render_footer(frame, layout.footer, theme);

    if app.confirming_delete {
        delete_dialog::render_delete_confirm_dialog(frame, app, theme);
    }
}

/// Bordered block whose border lights up when `pane` has focus.
fn pane_block<'a>(title: &'a str, pane: Pane, app: &App, theme: &Theme) -> Block<'a> {
    let border_style = if app.focused_pane == pane {
        theme.focused_border
    } else {
        theme.border
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let help = Line::from(vec![
        Span::styled(" Tab", theme.highlight),
        Span::styled(" pane  ", theme.muted),
        Span::styled("↑↓/jk", theme.highlight),
        Span::styled(" move  ", theme.muted),
        Span::styled("→", theme.highlight),
        Span::styled(" book task  ", theme.muted),
        Span::styled("Enter", theme.highlight),
        Span::styled(" submit  ", theme.muted),
        Span::styled("d", theme.highlight),
        Span::styled(" delete  ", theme.muted),
        Span::styled("Esc", theme.highlight),
        Span::styled(" back/quit", theme.muted),
    ]);
    frame.render_widget(Paragraph::new(help), area);
}
