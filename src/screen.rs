use std::rc::Rc;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Block,
    Frame,
};
use throbber_widgets_tui::ThrobberState;

use crate::pages::achievements::AchievementsPage;
use crate::pages::blog::BlogPage;
use crate::pages::contact::ContactPage;
use crate::pages::experience::ExperiencePage;
use crate::pages::help::HelpPage;
use crate::pages::home::HomePage;
use crate::pages::main_menu::{MainMenu, COMPACT_WIDTH};
use crate::pages::projects::ProjectsPage;
use crate::pages::research::ResearchPage;
use crate::pages::volunteering::VolunteeringPage;
use crate::render_context::RenderContext;
use crate::section::Section;

#[derive(Debug, Default)]
pub struct Screen {
    main_menu: MainMenu,
    home: HomePage,
    projects: ProjectsPage,
    research: ResearchPage,
    experience: ExperiencePage,
    volunteering: VolunteeringPage,
    achievements: AchievementsPage,
    blog: BlogPage,
    contact: ContactPage,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header, page, status bar
    fn split(inner_area: Rect) -> Rc<[Rect]> {
        Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ],
        )
        .split(inner_area)
    }

    /// Area the active page gets in a frame of size `area`.
    pub fn page_area(area: Rect) -> Rect {
        Self::split(Block::bordered().inner(area))[1]
    }

    pub fn render(&self, frame: &mut Frame, ctx: &RenderContext, throbber: &mut ThrobberState) {
        let area = frame.area();
        let title = Line::from(format!("{} · Portfolio", ctx.portfolio.profile.name))
            .bold()
            .blue()
            .left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let vlayout = Self::split(inner_area);

        let active = ctx.tabs.active;
        if area.width < COMPACT_WIDTH {
            self.main_menu
                .render_compact(frame, vlayout[0], active, ctx.tabs.menu_open);
        } else {
            self.main_menu.render_tabs(frame, vlayout[0], active);
        }

        self.render_section(frame, vlayout[1], ctx, throbber);

        let status_line = Line::from(format!("{}  |  ?: Help  q: Quit", ctx.status))
            .on_dark_gray()
            .white();
        frame.render_widget(status_line, vlayout[2]);

        // Overlays, lowest first
        if active == Section::Blog {
            if let Some(post) = ctx.blog.open.and_then(|i| ctx.portfolio.posts.get(i)) {
                self.blog.render_reader(frame, vlayout[1], post, ctx.scroll);
            }
        }
        if ctx.tabs.menu_open {
            self.main_menu
                .render_overlay(frame, inner_area, ctx.tabs.menu_cursor, active);
        }
        if ctx.show_help {
            self.help.render(frame, inner_area);
        }
    }

    /// Dispatches on the active section; every variant renders exactly one page.
    fn render_section(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        throbber: &mut ThrobberState,
    ) {
        let portfolio = ctx.portfolio;
        match ctx.tabs.active {
            Section::Home => self.home.render(frame, area, portfolio, ctx.scroll),
            Section::Projects => self.projects.render(frame, area, portfolio, ctx.scroll),
            Section::Research => self.research.render(frame, area, portfolio, ctx.scroll),
            Section::Experience => self.experience.render(frame, area, portfolio, ctx.scroll),
            Section::Volunteering => self.volunteering.render(frame, area, portfolio, ctx.scroll),
            Section::Achievements => self.achievements.render(frame, area, portfolio, ctx.scroll),
            Section::Blog => self.blog.render(frame, area, portfolio, ctx.blog),
            Section::Contact => self.contact.render(
                frame,
                area,
                portfolio,
                ctx.contact,
                ctx.editing,
                ctx.relay_mode,
                throbber,
            ),
        }
    }
}
