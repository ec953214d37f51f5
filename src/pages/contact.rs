use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

use crate::config::RelayMode;
use crate::data::Portfolio;
use crate::state::{ContactForm, Field, FormFocus, SubmissionStatus};
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct ContactPage;

impl ContactPage {
    pub fn new() -> Self {
        Self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        portfolio: &Portfolio,
        form: &ContactForm,
        editing: bool,
        relay_mode: RelayMode,
        throbber: &mut ThrobberState,
    ) {
        let title = match relay_mode {
            RelayMode::Live => "Get in Touch".to_string(),
            RelayMode::Simulated => "Get in Touch (demo mode)".to_string(),
        };
        let block = Block::bordered().title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(if form.status().is_idle() { 0 } else { 3 }),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(5),
            ],
        )
        .split(inner);

        Self::render_status(frame, rows[0], form.status());

        for (field, row) in Field::ALL.into_iter().zip(&rows[1..5]) {
            let focused = editing && form.focus.field() == Some(field);
            let label = format!("{} *", field.label());
            let mut value = form.fields().get(field).to_owned();
            if focused {
                value.push('▏');
            }
            let mut paragraph = Paragraph::new(value).block(focused_block(&label, focused));
            if field == Field::Message {
                paragraph = paragraph.wrap(Wrap { trim: false });
            }
            if form.is_in_flight() {
                paragraph = paragraph.dark_gray();
            }
            frame.render_widget(paragraph, *row);
        }

        Self::render_send(frame, rows[5], form, editing, throbber);
        Self::render_other_ways(frame, rows[6], portfolio);
    }

    fn render_status(frame: &mut Frame, area: Rect, status: &SubmissionStatus) {
        let (text, style) = match status {
            SubmissionStatus::Idle => return,
            SubmissionStatus::Success(m) => (format!("✓ {m}"), Style::new().green()),
            SubmissionStatus::Error(m) => (format!("✗ {m}"), Style::new().red()),
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().border_style(style)),
            area,
        );
    }

    fn render_send(
        frame: &mut Frame,
        area: Rect,
        form: &ContactForm,
        editing: bool,
        throbber: &mut ThrobberState,
    ) {
        let focused = editing && form.focus == FormFocus::Send;
        let block = focused_block("", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if form.is_in_flight() {
            let spinner = Throbber::default()
                .label("Sending...")
                .style(Style::new().dark_gray())
                .throbber_style(Style::new().yellow())
                .throbber_set(BRAILLE_SIX)
                .use_type(WhichUse::Spin);
            frame.render_stateful_widget(spinner, inner, throbber);
        } else {
            let style = if focused {
                Style::new().black().on_blue().bold()
            } else {
                Style::new().blue().bold()
            };
            frame.render_widget(
                Paragraph::new(Line::from(" Send Message ").style(style)).centered(),
                inner,
            );
        }
    }

    fn render_other_ways(frame: &mut Frame, area: Rect, portfolio: &Portfolio) {
        let lines: Vec<Line> = portfolio
            .profile
            .links
            .iter()
            .map(|link| {
                Line::from(vec![
                    Span::raw(format!("{:<10}", link.label)).bold(),
                    Span::raw(link.url.trim_start_matches("mailto:").to_owned()),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Other ways to connect")),
            area,
        );
    }
}
