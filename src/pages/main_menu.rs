use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Clear, List, ListState, Tabs},
    Frame,
};

use crate::section::{Section, SECTION_MENU};
use crate::ui_utils::centered_rect;

/// Terminals narrower than this get the compact header and overlay menu.
pub const COMPACT_WIDTH: u16 = 100;

#[derive(Debug, Default)]
pub struct MainMenu;

impl MainMenu {
    pub fn new() -> Self {
        Self
    }

    fn entry_label(idx: usize) -> String {
        let entry = &SECTION_MENU[idx];
        format!("{} {} {}", idx + 1, entry.icon, entry.label)
    }

    /// Full-width tab bar.
    pub fn render_tabs(&self, frame: &mut Frame, area: Rect, active: Section) {
        let titles: Vec<Line> = (0..SECTION_MENU.len())
            .map(|i| Line::from(Self::entry_label(i)))
            .collect();
        frame.render_widget(
            Tabs::new(titles)
                .block(Block::bordered())
                .select(active.menu_index())
                .style(Style::new().gray())
                .highlight_style(Style::new().white().on_blue().bold())
                .divider("|"),
            area,
        );
    }

    /// Header for narrow terminals: active section plus the menu hint.
    pub fn render_compact(&self, frame: &mut Frame, area: Rect, active: Section, menu_open: bool) {
        let icon = if menu_open { "✕" } else { "☰" };
        let line = Line::from(format!(
            "{icon} m: Menu  |  {} {}",
            active.entry().icon,
            active.label()
        ));
        frame.render_widget(Block::bordered().title(line.bold()), area);
    }

    /// Navigation overlay listing every section.
    pub fn render_overlay(&self, frame: &mut Frame, area: Rect, cursor: usize, active: Section) {
        let height = SECTION_MENU.len() as u16 + 2;
        let popup = centered_rect(area, 34, height);
        frame.render_widget(Clear, popup);

        let items: Vec<Line> = (0..SECTION_MENU.len())
            .map(|i| {
                let line = Line::from(Self::entry_label(i));
                if SECTION_MENU[i].section == active {
                    line.blue()
                } else {
                    line
                }
            })
            .collect();
        let mut state = ListState::default().with_selected(Some(cursor));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Menu").style(Style::new().green()))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            popup,
            &mut state,
        );
    }
}
