use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::keymap::{self, KeymapContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Quit,
    Submit,
    ResetForm,
    ResetStatus,
    Back,
    Activate,
    FocusStep(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyDispatch {
    Action(KeyAction),
    Input(KeyEvent),
    None,
}

pub(crate) fn route(context: KeymapContext, key: &KeyEvent) -> KeyDispatch {
    if let Some(action) = keymap::classify_key(context, key) {
        return KeyDispatch::Action(action);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyDispatch::None;
    }
    KeyDispatch::Input(*key)
}

/// Applies a plain editing key to `buffer`; returns whether it changed.
pub(crate) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(ch);
            true
        }
        KeyCode::Backspace => buffer.pop().is_some(),
        KeyCode::Delete => {
            let changed = !buffer.is_empty();
            buffer.clear();
            changed
        }
        _ => false,
    }
}
