use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span, Text},
    Frame,
};

use crate::data::Portfolio;
use crate::ui_utils::render_text_page;

#[derive(Debug, Default)]
pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }

    pub fn text(portfolio: &Portfolio) -> Text<'static> {
        let profile = &portfolio.profile;
        let mut lines = vec![
            Line::from(profile.name.clone()).bold().blue().centered(),
            Line::from(profile.headline.clone()).centered(),
            Line::from(profile.focus.clone()).italic().centered(),
            Line::default(),
        ];

        let mut links: Vec<Span> = Vec::new();
        for link in &profile.links {
            links.push(Span::raw(format!("{}: ", link.label)).bold());
            links.push(Span::raw(link.url.trim_start_matches("mailto:").to_owned()).underlined());
            links.push(Span::raw("   "));
        }
        lines.push(Line::from(links).centered());
        lines.push(
            Line::from(vec![
                Span::raw("Press "),
                Span::raw("r").bold().yellow(),
                Span::raw(" to download my resume"),
            ])
            .centered(),
        );
        lines.push(Line::default());

        lines.push(Line::from("Professional Summary").bold().cyan());
        lines.push(Line::from(profile.summary.clone()));
        lines.push(Line::default());

        for group in &profile.skills {
            lines.push(Line::from(group.title.clone()).bold().cyan());
            lines.push(Line::from(group.items.clone()));
            lines.push(Line::default());
        }

        Text::from(lines)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, portfolio: &Portfolio, scroll: u16) {
        render_text_page(frame, area, "Home", Self::text(portfolio), scroll);
    }
}
