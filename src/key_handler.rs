use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Back,
    NextSection,
    PrevSection,
    JumpTo(usize),
    ToggleMenu,
    NavigateUp,
    NavigateDown,
    ScrollPageUp,
    ScrollPageDown,
    Select,
    Submit,
    NextField,
    PrevField,
    DownloadResume,
    Help,
    InputChar(char),
    Backspace,
    None,
}

/// Whether keystrokes drive navigation or type into the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Navigation,
    Editing,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `tick` for an input event. Returns `KeyAction::None` when
    /// nothing arrived so the caller can run its timers.
    pub fn handle_crossterm_events(
        &mut self,
        mode: InputMode,
        tick: Duration,
    ) -> color_eyre::Result<KeyAction> {
        if !event::poll(tick)? {
            return Ok(KeyAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key, mode)),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&self, key: KeyEvent, mode: InputMode) -> KeyAction {
        if let (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) =
            (key.modifiers, key.code)
        {
            return KeyAction::Quit;
        }
        match mode {
            InputMode::Navigation => Self::navigation_key(key),
            InputMode::Editing => Self::editing_key(key),
        }
    }

    fn navigation_key(key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::Char('q')) => KeyAction::Quit,
            (_, KeyCode::Char('?')) => KeyAction::Help,
            (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Right | KeyCode::Char('l')) => {
                KeyAction::NextSection
            }
            (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) => {
                KeyAction::PrevSection
            }
            (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) => {
                KeyAction::JumpTo(c as usize - '1' as usize)
            }
            (KeyModifiers::NONE, KeyCode::Char('m')) => KeyAction::ToggleMenu,
            (KeyModifiers::NONE, KeyCode::Char('r')) => KeyAction::DownloadResume,
            (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => KeyAction::NavigateUp,
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => KeyAction::NavigateDown,
            (KeyModifiers::NONE, KeyCode::PageUp) => KeyAction::ScrollPageUp,
            (KeyModifiers::NONE, KeyCode::PageDown) => KeyAction::ScrollPageDown,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            _ => KeyAction::None,
        }
    }

    fn editing_key(key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (KeyModifiers::CONTROL, KeyCode::Char('s') | KeyCode::Char('S')) => KeyAction::Submit,
            (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Down) => KeyAction::NextField,
            (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => KeyAction::PrevField,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InputChar(c),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_keys() {
        let handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(key(KeyCode::Char('q')), InputMode::Navigation),
            KeyAction::Quit
        );
        assert_eq!(handler.on_key_event(ctrl('c'), InputMode::Navigation), KeyAction::Quit);
        assert_eq!(handler.on_key_event(ctrl('c'), InputMode::Editing), KeyAction::Quit);
    }

    #[test]
    fn test_q_types_while_editing() {
        let handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(key(KeyCode::Char('q')), InputMode::Editing),
            KeyAction::InputChar('q')
        );
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.on_key_event(shifted, InputMode::Editing),
            KeyAction::InputChar('A')
        );
    }

    #[test]
    fn test_number_keys_jump() {
        let handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(key(KeyCode::Char('1')), InputMode::Navigation),
            KeyAction::JumpTo(0)
        );
        assert_eq!(
            handler.on_key_event(key(KeyCode::Char('9')), InputMode::Navigation),
            KeyAction::JumpTo(8)
        );
    }

    #[test]
    fn test_section_cycling() {
        let handler = KeyHandler::new();
        assert_eq!(
            handler.on_key_event(key(KeyCode::Right), InputMode::Navigation),
            KeyAction::NextSection
        );
        assert_eq!(
            handler.on_key_event(key(KeyCode::Char('h')), InputMode::Navigation),
            KeyAction::PrevSection
        );
    }

    #[test]
    fn test_editing_keys() {
        let handler = KeyHandler::new();
        assert_eq!(handler.on_key_event(ctrl('s'), InputMode::Editing), KeyAction::Submit);
        assert_eq!(
            handler.on_key_event(key(KeyCode::Tab), InputMode::Editing),
            KeyAction::NextField
        );
        assert_eq!(
            handler.on_key_event(key(KeyCode::Up), InputMode::Editing),
            KeyAction::PrevField
        );
        assert_eq!(
            handler.on_key_event(key(KeyCode::Esc), InputMode::Editing),
            KeyAction::Back
        );
    }
}
