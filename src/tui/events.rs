//! Event Handling - Keyboard input mapping

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::scroll::ScrollOp;

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusLeft,
    FocusRight,
    Up,
    Down,
    Confirm,
    Back,
    Scroll(ScrollOp),
    Resize(u16, u16),
}

impl Action {
    /// Map a terminal event to an action; `None` for anything unbound.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::from_key(key),
            Event::Resize(width, height) => Some(Self::Resize(*width, *height)),
            _ => None,
        }
    }

    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Quit),
                KeyCode::Char('d') => Some(Self::Scroll(ScrollOp::HalfPageDown)),
                KeyCode::Char('u') => Some(Self::Scroll(ScrollOp::HalfPageUp)),
                KeyCode::Char('f') => Some(Self::Scroll(ScrollOp::PageDown)),
                KeyCode::Char('b') => Some(Self::Scroll(ScrollOp::PageUp)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('[') | KeyCode::Left => Some(Self::FocusLeft),
            KeyCode::Char(']') | KeyCode::Right => Some(Self::FocusRight),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::Up),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::Down),
            KeyCode::Enter => Some(Self::Confirm),
            KeyCode::Esc => Some(Self::Back),
            KeyCode::PageDown => Some(Self::Scroll(ScrollOp::PageDown)),
            KeyCode::PageUp => Some(Self::Scroll(ScrollOp::PageUp)),
            KeyCode::Home | KeyCode::Char('g') => Some(Self::Scroll(ScrollOp::Top)),
            KeyCode::End | KeyCode::Char('G') => Some(Self::Scroll(ScrollOp::Bottom)),
            _ => None,
        }
    }
}
