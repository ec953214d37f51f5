use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::{heading, render_text_page};

#[derive(Debug, Default)]
pub struct AchievementsPage;

impl AchievementsPage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let mut lines = heading("Achievements & Recognition");
        for achievement in &portfolio.achievements {
            lines.push(Line::from(vec![
                Span::raw("🏆 ").yellow(),
                Span::raw(achievement.title.clone()).bold(),
            ]));
            lines.push(Line::from(format!("   {}", achievement.description)));
            lines.push(Line::default());
        }

        lines.push(Line::from("Certifications").bold().cyan());
        for cert in &portfolio.certifications {
            lines.push(Line::from(format!("  • {cert}")));
        }
        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Achievements", Self::text(portfolio), scroll);
    }
}
