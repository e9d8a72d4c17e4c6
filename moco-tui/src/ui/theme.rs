use ratatui::style::{Color, Modifier, Style};

/// Colors and text styles used by the renderer. Built once at startup.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub focused_border: Style,
    pub project_header: Style,
    pub customer: Style,
    pub highlight: Style,
    pub muted: Style,
    pub date_header: Style,
    pub total: Style,
    pub success: Style,
    pub error: Style,
    pub danger: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Magenta),
            project_header: Style::default().add_modifier(Modifier::BOLD),
            customer: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            date_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            total: Style::default().add_modifier(Modifier::BOLD),
            success: Style::default().fg(Color::Green),
            error: Style::default().fg(Color::Red),
            danger: Style::default().fg(Color::Red),
        }
    }
}
