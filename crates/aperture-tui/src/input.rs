use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    // Comparison slider
    NudgeLeft,
    NudgeRight,
    // Gallery strip
    SelectNextPhoto,
    SelectPrevPhoto,
    OpenLightbox,
    // Lightbox mode
    NextPhoto,
    PrevPhoto,
    CloseLightbox,
    // Hero headline
    SwapHeadlines,
    ToggleHeadline,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return Action::Quit;
    }

    if app.lightbox.is_open() {
        return handle_lightbox_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::PageDown, _) => Action::ScrollHalfPageDown,
        (KeyCode::PageUp, _) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::Char('G'), KeyModifiers::NONE) => {
            Action::JumpToBottom
        }
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::End, _) => Action::JumpToBottom,

        // Comparison slider
        (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            Action::NudgeLeft
        }
        (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            Action::NudgeRight
        }

        // Gallery
        (KeyCode::Tab, _) => Action::SelectNextPhoto,
        (KeyCode::BackTab, _) => Action::SelectPrevPhoto,
        (KeyCode::Enter, _) | (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenLightbox,

        // Headline
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::SwapHeadlines,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ToggleHeadline,

        _ => Action::None,
    }
}

fn handle_lightbox_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::CloseLightbox,
        KeyCode::Char('n') | KeyCode::Char('l') | KeyCode::Right => Action::NextPhoto,
        KeyCode::Char('p') | KeyCode::Char('h') | KeyCode::Left => Action::PrevPhoto,
        _ => Action::None,
    }
}
