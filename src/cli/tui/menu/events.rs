use std::io;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::MenuAction;

/// Blocking source of terminal events
pub trait EventSource {
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads from the real terminal, blocking with no timeout
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Map a key press to a menu action. Releases and unbound keys map to nothing.
pub fn action_for(key: &KeyEvent) -> Option<MenuAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(MenuAction::Interrupt)
        }
        KeyCode::Up => Some(MenuAction::Up),
        KeyCode::Down => Some(MenuAction::Down),
        KeyCode::PageUp => Some(MenuAction::PageUp),
        KeyCode::PageDown => Some(MenuAction::PageDown),
        KeyCode::Home => Some(MenuAction::First),
        KeyCode::End => Some(MenuAction::Last),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('\r') | KeyCode::Char('\n') => {
            Some(MenuAction::Confirm)
        }
        _ => None,
    }
}
