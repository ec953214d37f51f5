use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::{heading, render_text_page};

#[derive(Debug, Default)]
pub struct ResearchPage;

impl ResearchPage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let mut lines = heading("Research & Patents");
        for publication in &portfolio.publications {
            lines.push(Line::from(publication.title.clone()).bold());
            lines.push(Line::from(publication.venue.clone()).italic().dark_gray());
            lines.push(Line::from(publication.abstract_text.clone()));
            if !publication.metrics.is_empty() {
                let metrics: Vec<Span> = publication
                    .metrics
                    .iter()
                    .flat_map(|m| {
                        [
                            Span::raw(m.value.clone()).bold().green(),
                            Span::raw(format!(" {}    ", m.label)),
                        ]
                    })
                    .collect();
                lines.push(Line::from(metrics));
            }
            lines.push(Line::from(publication.date.clone()).dark_gray());
            lines.push(Line::default());
        }
        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Research", Self::text(portfolio), scroll);
    }
}
