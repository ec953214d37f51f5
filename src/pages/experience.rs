use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::{heading, render_text_page};

#[derive(Debug, Default)]
pub struct ExperiencePage;

impl ExperiencePage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let mut lines = heading("Professional Experience");
        for exp in &portfolio.experience {
            lines.push(Line::from(exp.title.clone()).bold());
            lines.push(Line::from(vec![
                Span::raw(exp.company.clone()).blue(),
                Span::raw(format!(" • {}", exp.location)),
            ]));
            lines.push(Line::from(exp.period.clone()).dark_gray());
            for item in &exp.highlights {
                lines.push(Line::from(format!("  • {item}")));
            }
            lines.push(Line::default());
        }
        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Experience", Self::text(portfolio), scroll);
    }
}
