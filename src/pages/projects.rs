use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::{heading, render_text_page, tag_line};

#[derive(Debug, Default)]
pub struct ProjectsPage;

impl ProjectsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let mut lines = heading("My Projects");
        for project in &portfolio.projects {
            lines.push(Line::from(vec![
                Span::raw(project.title.clone()).bold(),
                Span::raw("  "),
                Span::raw(project.date.clone()).dark_gray(),
            ]));
            lines.push(Line::from(project.description.clone()));
            lines.push(tag_line(&project.tags));
            lines.push(Line::default());
        }
        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Projects", Self::text(portfolio), scroll);
    }
}
