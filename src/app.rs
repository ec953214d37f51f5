use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::{layout::Rect, DefaultTerminal, Frame};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info, warn};

use crate::async_task::TaskManager;
use crate::config::Settings;
use crate::data::Portfolio;
use crate::key_handler::{InputMode, KeyAction, KeyHandler};
use crate::pages;
use crate::relay::MessageRelay;
use crate::render_context::RenderContext;
use crate::resume;
use crate::screen::Screen;
use crate::section::Section;
use crate::state::{BlogState, ContactForm, FormFocus, ScrollState, TabState, PAGE_STEP};

/// How long the loop waits for input before running timers.
const TICK_RATE: Duration = Duration::from_millis(100);

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    portfolio: Portfolio,
    settings: Settings,
    tabs: TabState,
    contact: ContactForm,
    blog: BlogState,
    scroll: ScrollState,
    /// Where the scrollable text was last drawn.
    viewport: Rect,
    input_mode: InputMode,
    show_help: bool,
    status_message: String,
    relay: Arc<dyn MessageRelay>,
    tasks: TaskManager,
    throbber: ThrobberState,
}

impl App {
    pub fn new(settings: Settings, relay: Arc<dyn MessageRelay>) -> Self {
        let mut app = Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            portfolio: Portfolio::new(),
            settings,
            tabs: TabState::new(),
            contact: ContactForm::new(),
            blog: BlogState::new(),
            scroll: ScrollState::new(),
            viewport: Rect::default(),
            input_mode: InputMode::Navigation,
            show_help: false,
            status_message: String::new(),
            relay,
            tasks: TaskManager::new(),
            throbber: ThrobberState::default(),
        };
        app.status_message = app.hint();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let action = self
                .key_handler
                .handle_crossterm_events(self.input_mode, TICK_RATE)?;
            if action != KeyAction::None && self.handle_action(action) {
                self.quit();
            }
            self.tick(Instant::now());
        }
        info!("shutting down");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.fit_scroll(frame.area());
        let ctx = RenderContext {
            portfolio: &self.portfolio,
            tabs: &self.tabs,
            contact: &self.contact,
            blog: &self.blog,
            scroll: self.scroll.offset,
            editing: self.input_mode == InputMode::Editing,
            show_help: self.show_help,
            relay_mode: self.relay.mode(),
            status: &self.status_message,
        };
        self.screen.render(frame, &ctx, &mut self.throbber);
    }

    /// Records the text viewport for a frame of size `area` and keeps the
    /// scroll offset inside it.
    fn fit_scroll(&mut self, area: Rect) {
        let page = Screen::page_area(area);
        self.viewport = pages::text_viewport(self.tabs.active, &self.blog, page);
        self.scroll.clamp(self.max_scroll());
    }

    fn quit(&mut self) {
        self.running = false;
    }

    pub fn active_section(&self) -> Section {
        self.tabs.active
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn blog(&self) -> &BlogState {
        &self.blog
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn has_pending_delivery(&self) -> bool {
        self.tasks.has_pending()
    }

    /// Applies one user action. Returns `true` if the app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::Quit {
            return true;
        }
        let notice = self.dispatch(action);
        self.status_message = notice.unwrap_or_else(|| self.hint());
        false
    }

    /// Drains finished deliveries and fires due status clears.
    pub fn tick(&mut self, now: Instant) {
        while let Some(outcome) = self.tasks.try_recv() {
            self.contact.complete(outcome.id, outcome.result, now);
            self.status_message = self.hint();
        }
        self.contact.tick(now);
        if self.contact.is_in_flight() {
            self.throbber.calc_next();
        }
    }

    fn dispatch(&mut self, action: KeyAction) -> Option<String> {
        if self.show_help {
            if matches!(action, KeyAction::Help | KeyAction::Back) {
                self.show_help = false;
            }
            return None;
        }
        if action == KeyAction::Help {
            self.show_help = true;
            return None;
        }
        if self.tabs.menu_open {
            return self.dispatch_menu(action);
        }
        match self.input_mode {
            InputMode::Editing => self.dispatch_form(action),
            InputMode::Navigation => self.dispatch_navigation(action),
        }
    }

    fn dispatch_menu(&mut self, action: KeyAction) -> Option<String> {
        match action {
            KeyAction::NavigateUp => {
                self.tabs.menu_up();
            }
            KeyAction::NavigateDown => {
                self.tabs.menu_down();
            }
            KeyAction::Select => {
                self.tabs.confirm_menu();
                self.on_section_change();
            }
            KeyAction::JumpTo(idx) => self.select_section(Section::from_index(idx)),
            KeyAction::ToggleMenu | KeyAction::Back => self.tabs.toggle_menu(),
            _ => {}
        }
        None
    }

    fn dispatch_navigation(&mut self, action: KeyAction) -> Option<String> {
        match action {
            KeyAction::NextSection => self.select_section(self.tabs.active.next()),
            KeyAction::PrevSection => self.select_section(self.tabs.active.prev()),
            KeyAction::JumpTo(idx) => self.select_section(Section::from_index(idx)),
            KeyAction::ToggleMenu => self.tabs.toggle_menu(),
            KeyAction::Back => {
                if self.blog.close() {
                    self.scroll.reset();
                }
            }
            KeyAction::NavigateUp => {
                if self.tabs.active == Section::Blog && !self.blog.is_open() {
                    self.blog.navigate_up();
                } else {
                    self.scroll.scroll_up(1);
                }
            }
            KeyAction::NavigateDown => {
                if self.tabs.active == Section::Blog && !self.blog.is_open() {
                    self.blog.navigate_down(self.portfolio.posts.len());
                } else {
                    self.scroll.scroll_down(1, self.max_scroll());
                }
            }
            KeyAction::ScrollPageUp => self.scroll.scroll_up(PAGE_STEP),
            KeyAction::ScrollPageDown => self.scroll.scroll_down(PAGE_STEP, self.max_scroll()),
            KeyAction::Select => match self.tabs.active {
                Section::Blog if !self.blog.is_open() => {
                    if self.blog.open_selected(self.portfolio.posts.len()) {
                        self.scroll.reset();
                    }
                }
                Section::Contact => {
                    self.input_mode = InputMode::Editing;
                }
                _ => {}
            },
            KeyAction::DownloadResume if self.tabs.active == Section::Home => {
                return Some(self.download_resume());
            }
            _ => {}
        }
        None
    }

    fn dispatch_form(&mut self, action: KeyAction) -> Option<String> {
        match action {
            KeyAction::Back => {
                self.input_mode = InputMode::Navigation;
            }
            KeyAction::NextField => self.contact.focus_next(),
            KeyAction::PrevField => self.contact.focus_prev(),
            KeyAction::Submit => return self.try_submit(),
            KeyAction::Select => {
                if self.contact.focus == FormFocus::Send {
                    return self.try_submit();
                }
                self.contact.focus_next();
            }
            KeyAction::InputChar(c) => {
                if self.contact.is_in_flight() {
                    return Some("⟳ Sending, fields are locked".into());
                }
                if let Some(field) = self.contact.focus.field() {
                    self.contact.push_char(field, c);
                }
            }
            KeyAction::Backspace => {
                if self.contact.is_in_flight() {
                    return Some("⟳ Sending, fields are locked".into());
                }
                if let Some(field) = self.contact.focus.field() {
                    self.contact.pop_char(field);
                }
            }
            _ => {}
        }
        None
    }

    fn select_section(&mut self, section: Section) {
        self.tabs.select_section(section);
        self.on_section_change();
    }

    fn on_section_change(&mut self) {
        debug!(section = self.tabs.active.id(), "section selected");
        self.scroll.reset();
        self.blog.close();
        self.input_mode = InputMode::Navigation;
    }

    fn max_scroll(&self) -> u16 {
        pages::max_scroll(self.tabs.active, &self.portfolio, &self.blog, self.viewport)
    }

    /// Required-field check, then hand the submission to the relay worker.
    fn try_submit(&mut self) -> Option<String> {
        let missing = self.contact.fields().missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            return Some(format!("✗ Please fill in: {}", names.join(", ")));
        }

        match self.contact.submit(&self.settings.relay.recipient) {
            Some(submission) => {
                self.tasks.spawn_delivery(Arc::clone(&self.relay), submission);
                Some("⟳ Sending message...".into())
            }
            None => Some("⟳ Already sending, please wait".into()),
        }
    }

    fn download_resume(&self) -> String {
        match resume::download(self.settings.resume_path.as_deref()) {
            Ok(path) => format!("✓ Resume saved to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "resume download failed");
                format!("✗ {e}")
            }
        }
    }

    fn hint(&self) -> String {
        match (self.tabs.active, self.input_mode) {
            (Section::Contact, InputMode::Editing) => {
                if self.contact.is_in_flight() {
                    "⟳ Sending...".into()
                } else {
                    "Contact: Tab/↑↓ Field  ↵ Next/Send  Ctrl-S Send  Esc Done".into()
                }
            }
            (Section::Contact, InputMode::Navigation) => {
                "Contact: ↵ Edit form  ←→ Section  m Menu".into()
            }
            (Section::Blog, _) if self.blog.is_open() => "Blog: ↑↓ Scroll  Esc Close".into(),
            (Section::Blog, _) => "Blog: ↑↓ Select  ↵ Read  ←→ Section".into(),
            (Section::Home, _) => "Home: r Resume  ↑↓ Scroll  ←→ Section  m Menu".into(),
            (section, _) => format!("{}: ↑↓ Scroll  ←→ Section  m Menu", section.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelayMode;
    use crate::relay::{RelayError, RelayMessage, SimulatedRelay};
    use crate::state::{Field, SubmissionStatus};
    use crate::state::contact::{ERROR_MESSAGE, STATUS_DISPLAY, SUCCESS_MESSAGE};
    use ratatui::{backend::TestBackend, Terminal};

    struct FailingRelay;

    struct PanickingRelay;

    impl MessageRelay for PanickingRelay {
        fn deliver(&self, _message: &RelayMessage) -> Result<(), RelayError> {
            panic!("relay exploded");
        }

        fn mode(&self) -> RelayMode {
            RelayMode::Live
        }
    }

    impl MessageRelay for FailingRelay {
        fn deliver(&self, _message: &RelayMessage) -> Result<(), RelayError> {
            Err(RelayError::Rejected {
                status: 502,
                body: "upstream unavailable".into(),
            })
        }

        fn mode(&self) -> RelayMode {
            RelayMode::Live
        }
    }

    fn app_with(relay: Arc<dyn MessageRelay>) -> App {
        App::new(Settings::default(), relay)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(KeyAction::InputChar(c));
        }
    }

    /// Fills the form the way a user would: open the section, edit, tab through.
    fn fill_form(app: &mut App) {
        app.handle_action(KeyAction::JumpTo(Section::Contact.menu_index()));
        app.handle_action(KeyAction::Select);
        for value in ["Ava", "a@x.com", "Hi", "Hello"] {
            type_text(app, value);
            app.handle_action(KeyAction::NextField);
        }
    }

    /// Ticks until the delivery worker reports back.
    fn wait_for_delivery(app: &mut App, now: Instant) {
        for _ in 0..500 {
            app.tick(now);
            if !app.contact().is_in_flight() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("delivery did not finish");
    }

    #[test]
    fn test_starts_on_home() {
        let app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.input_mode(), InputMode::Navigation);
    }

    #[test]
    fn test_quit_action() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        assert!(app.handle_action(KeyAction::Quit));
    }

    #[test]
    fn test_successful_submission_flow() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        let now = Instant::now();
        fill_form(&mut app);
        assert_eq!(app.contact().fields().name, "Ava");
        assert_eq!(app.contact().focus, FormFocus::Send);

        app.handle_action(KeyAction::Select);
        assert!(app.contact().is_in_flight());
        assert!(app.has_pending_delivery());

        wait_for_delivery(&mut app, now);
        assert_eq!(
            app.contact().status(),
            &SubmissionStatus::Success(SUCCESS_MESSAGE.into())
        );
        assert!(app.contact().fields().is_empty());
        assert!(!app.contact().is_in_flight());

        app.tick(now + STATUS_DISPLAY);
        assert!(app.contact().status().is_idle());
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let mut app = app_with(Arc::new(FailingRelay));
        let now = Instant::now();
        fill_form(&mut app);

        app.handle_action(KeyAction::Submit);
        wait_for_delivery(&mut app, now);

        assert_eq!(
            app.contact().status(),
            &SubmissionStatus::Error(ERROR_MESSAGE.into())
        );
        let fields = app.contact().fields();
        assert_eq!(
            [&fields.name, &fields.email, &fields.subject, &fields.message],
            ["Ava", "a@x.com", "Hi", "Hello"]
        );
    }

    #[test]
    fn test_incomplete_form_is_not_submitted() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::JumpTo(Section::Contact.menu_index()));
        app.handle_action(KeyAction::Select);
        type_text(&mut app, "Ava");

        app.handle_action(KeyAction::Submit);
        assert!(!app.contact().is_in_flight());
        assert!(!app.has_pending_delivery());
        assert_eq!(
            app.status_message(),
            "✗ Please fill in: Email, Subject, Message"
        );
    }

    #[test]
    fn test_double_submit_dispatches_once() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::from_millis(200))));
        let now = Instant::now();
        fill_form(&mut app);

        app.handle_action(KeyAction::Submit);
        app.handle_action(KeyAction::Submit);
        assert_eq!(app.tasks.pending_count(), 1);
        assert_eq!(app.status_message(), "⟳ Already sending, please wait");

        wait_for_delivery(&mut app, now);
    }

    #[test]
    fn test_fields_locked_while_sending() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::from_millis(200))));
        let now = Instant::now();
        fill_form(&mut app);
        app.handle_action(KeyAction::Submit);

        app.handle_action(KeyAction::PrevField);
        app.handle_action(KeyAction::InputChar('!'));
        assert_eq!(app.contact().fields().message, "Hello");

        wait_for_delivery(&mut app, now);
    }

    #[test]
    fn test_navigation_allowed_while_sending() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::from_millis(200))));
        let now = Instant::now();
        fill_form(&mut app);
        app.handle_action(KeyAction::Submit);

        app.handle_action(KeyAction::Back);
        app.handle_action(KeyAction::NextSection);
        assert_eq!(app.active_section(), Section::Home);
        assert!(app.contact().is_in_flight());

        wait_for_delivery(&mut app, now);
        assert!(!app.contact().status().is_idle());
    }

    #[test]
    fn test_menu_selection_closes_overlay() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::ToggleMenu);
        assert!(app.tabs().menu_open);

        app.handle_action(KeyAction::NavigateDown);
        app.handle_action(KeyAction::Select);
        assert_eq!(app.active_section(), Section::Projects);
        assert!(!app.tabs().menu_open);
    }

    #[test]
    fn test_jump_out_of_range_goes_home() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::JumpTo(2));
        assert_eq!(app.active_section(), Section::Research);
        app.handle_action(KeyAction::JumpTo(8));
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn test_blog_open_and_close() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::JumpTo(Section::Blog.menu_index()));
        app.handle_action(KeyAction::NavigateDown);
        app.handle_action(KeyAction::Select);
        assert_eq!(app.blog().open, Some(1));

        app.handle_action(KeyAction::Back);
        assert!(!app.blog().is_open());

        // Leaving the section also closes an open post
        app.handle_action(KeyAction::Select);
        app.handle_action(KeyAction::NextSection);
        assert!(!app.blog().is_open());
    }

    #[test]
    fn test_help_swallows_actions() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::Help);
        app.handle_action(KeyAction::NextSection);
        assert_eq!(app.active_section(), Section::Home);
        app.handle_action(KeyAction::Back);
        app.handle_action(KeyAction::NextSection);
        assert_eq!(app.active_section(), Section::Projects);
    }

    #[test]
    fn test_resume_download_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            resume_path: Some(dir.path().join("missing.pdf")),
            ..Default::default()
        };
        let mut app = App::new(settings, Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::DownloadResume);
        assert!(app.status_message().starts_with("✗ resume not found"));
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        app.handle_action(KeyAction::JumpTo(Section::Contact.menu_index()));
        app.handle_action(KeyAction::Select);
        assert!(!app.handle_action(KeyAction::InputChar('q')));
        assert_eq!(app.contact().fields().get(Field::Name), "q");
    }

    fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> String {
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_narrow_terminal_reaches_end_of_page() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        app.handle_action(KeyAction::JumpTo(Section::Projects.menu_index()));

        let top = draw(&mut app, &mut terminal);
        assert!(!top.contains("[NAV2]"));

        for _ in 0..200 {
            app.handle_action(KeyAction::ScrollPageDown);
        }
        let bottom = draw(&mut app, &mut terminal);
        assert!(bottom.contains("[NAV2]"), "last project tags not drawn");
        assert_eq!(app.scroll.offset, app.max_scroll());
    }

    #[test]
    fn test_blog_reader_reaches_end_on_narrow_terminal() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        app.handle_action(KeyAction::JumpTo(Section::Blog.menu_index()));
        app.handle_action(KeyAction::Select);
        draw(&mut app, &mut terminal);

        for _ in 0..200 {
            app.handle_action(KeyAction::NavigateDown);
        }
        draw(&mut app, &mut terminal);
        assert!(app.scroll.offset > 0);
        assert_eq!(app.scroll.offset, app.max_scroll());
    }

    #[test]
    fn test_widening_terminal_pulls_scroll_back() {
        let mut app = app_with(Arc::new(SimulatedRelay::new(Duration::ZERO)));
        let mut narrow = Terminal::new(TestBackend::new(40, 20)).unwrap();
        app.handle_action(KeyAction::JumpTo(Section::Projects.menu_index()));
        draw(&mut app, &mut narrow);
        for _ in 0..200 {
            app.handle_action(KeyAction::ScrollPageDown);
        }
        draw(&mut app, &mut narrow);
        let narrow_offset = app.scroll.offset;

        let mut wide = Terminal::new(TestBackend::new(140, 50)).unwrap();
        draw(&mut app, &mut wide);
        assert!(app.scroll.offset < narrow_offset);
        assert_eq!(app.scroll.offset, app.max_scroll());
    }

    #[test]
    fn test_relay_panic_unlocks_form() {
        let mut app = app_with(Arc::new(PanickingRelay));
        let now = Instant::now();
        fill_form(&mut app);

        app.handle_action(KeyAction::Submit);
        wait_for_delivery(&mut app, now);

        assert!(!app.has_pending_delivery());
        assert_eq!(
            app.contact().status(),
            &SubmissionStatus::Error(ERROR_MESSAGE.into())
        );
        assert_eq!(app.contact().fields().name, "Ava");
    }
}
