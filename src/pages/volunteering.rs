use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::{heading, render_text_page};

#[derive(Debug, Default)]
pub struct VolunteeringPage;

impl VolunteeringPage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let mut lines = heading("Volunteering");
        for entry in &portfolio.volunteering {
            lines.push(Line::from(vec![
                Span::raw("♥ ").red(),
                Span::raw(entry.role.clone()).bold(),
            ]));
            lines.push(Line::from(format!("{} | {}", entry.organisation, entry.period)).dark_gray());
            for (title, text) in &entry.notes {
                lines.push(Line::from(vec![
                    Span::raw(format!("{title}: ")).bold().cyan(),
                    Span::raw(text.clone()),
                ]));
            }
            lines.push(Line::default());
        }
        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Volunteering", Self::text(portfolio), scroll);
    }
}
