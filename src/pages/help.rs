use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::ui_utils::centered_rect;

#[derive(Debug, Default)]
pub struct HelpPage;

fn binding(keys: &'static str, text: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{keys:<14}"), Style::new().bold().fg(color)),
        Span::raw(text),
    ])
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 64, 24);
        frame.render_widget(Clear, popup);
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), popup);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10),
                Constraint::Length(9),
                Constraint::Min(0),
            ])
            .split(popup);

        let nav_help = vec![
            binding("← → / h l", "Previous / next section", Color::Cyan),
            binding("1-8", "Jump to a section", Color::Cyan),
            binding("m", "Open or close the menu", Color::Cyan),
            binding("↑↓ / k j", "Scroll or move selection", Color::Cyan),
            binding("PgUp PgDn", "Scroll a page", Color::Cyan),
            binding("Enter", "Open post / edit contact form", Color::Cyan),
            binding("Esc", "Close overlay / stop editing", Color::Cyan),
            binding("q / Ctrl-C", "Quit", Color::Cyan),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let form_help = vec![
            binding("Tab / ↓", "Next field", Color::Yellow),
            binding("Shift-Tab / ↑", "Previous field", Color::Yellow),
            binding("Enter", "Next field, or send on the button", Color::Yellow),
            binding("Ctrl-S", "Send message", Color::Yellow),
            binding("Esc", "Leave the form", Color::Yellow),
            Line::from("All fields are required.".italic()),
            Line::from("Fields are locked while a message is sending.".italic()),
        ];
        frame.render_widget(
            Paragraph::new(form_help).block(Block::bordered().title("Contact form")),
            sections[1],
        );

        let tips = vec![
            binding("r", "Download resume (Home)", Color::Magenta),
            binding("?", "Toggle this help", Color::Magenta),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Other")),
            sections[2],
        );
    }
}
