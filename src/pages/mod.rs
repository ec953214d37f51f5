pub mod achievements;
pub mod blog;
pub mod contact;
pub mod experience;
pub mod help;
pub mod home;
pub mod main_menu;
pub mod projects;
pub mod research;
pub mod volunteering;

use ratatui::{
    layout::Rect,
    text::Text,
    widgets::{Block, Paragraph, Wrap},
};

use crate::data::Portfolio;
use crate::section::Section;
use crate::state::BlogState;

/// The scrollable text of a section, if it has any.
///
/// For the blog this is the open post's reader; the list and the contact
/// form do not scroll.
fn scroll_text(
    section: Section,
    portfolio: &Portfolio,
    blog_state: &BlogState,
) -> Option<Text<'static>> {
    match section {
        Section::Home => Some(home::HomePage::text(portfolio)),
        Section::Projects => Some(projects::ProjectsPage::text(portfolio)),
        Section::Research => Some(research::ResearchPage::text(portfolio)),
        Section::Experience => Some(experience::ExperiencePage::text(portfolio)),
        Section::Volunteering => Some(volunteering::VolunteeringPage::text(portfolio)),
        Section::Achievements => Some(achievements::AchievementsPage::text(portfolio)),
        Section::Blog => blog_state
            .open
            .and_then(|idx| portfolio.posts.get(idx))
            .map(blog::BlogPage::reader_text),
        Section::Contact => None,
    }
}

/// Where the scrollable text of `section` lands inside the page area.
pub fn text_viewport(section: Section, blog_state: &BlogState, page_area: Rect) -> Rect {
    match section {
        Section::Blog if blog_state.is_open() => blog::BlogPage::reader_viewport(page_area),
        Section::Blog | Section::Contact => Rect::default(),
        _ => Block::bordered().inner(page_area),
    }
}

/// Largest scroll offset for `section` drawn into `viewport`: wrapped rows
/// beyond the visible height. Zero until a viewport is known.
pub fn max_scroll(
    section: Section,
    portfolio: &Portfolio,
    blog_state: &BlogState,
    viewport: Rect,
) -> u16 {
    let Some(text) = scroll_text(section, portfolio, blog_state) else {
        return 0;
    };
    let rows = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(viewport.width);
    u16::try_from(rows.saturating_sub(usize::from(viewport.height))).unwrap_or(u16::MAX)
}
