//! Key event handlers for different UI modes

use crate::device_list::RosterState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Editor if state.hex_entry_active() => handle_key_hex_entry(key),
        UiMode::Editor => handle_key_editor(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' again confirms, so "qq" quits
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Editors are modal: every key goes to the open popup
fn handle_key_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::EditorConfirm),
        InputKey::Esc => Some(Message::EditorCancel),

        InputKey::Left | InputKey::Char('h' | '-') => Some(Message::EditorAdjust(-1)),
        InputKey::Right | InputKey::Char('l' | '+') => Some(Message::EditorAdjust(1)),
        InputKey::PageUp => Some(Message::EditorCoarseStep { up: true }),
        InputKey::PageDown => Some(Message::EditorCoarseStep { up: false }),
        InputKey::Home => Some(Message::EditorJump { to_max: false }),
        InputKey::End => Some(Message::EditorJump { to_max: true }),

        InputKey::Tab | InputKey::BackTab => Some(Message::EditorSwitchTab),
        InputKey::Char('#') => Some(Message::EditorHexBegin),
        InputKey::Up | InputKey::Char('k') => Some(Message::EditorPrevChannel),
        InputKey::Down | InputKey::Char('j') => Some(Message::EditorNextChannel),

        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Typing into the color editor's hex field
fn handle_key_hex_entry(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::EditorHexApply),
        InputKey::Esc => Some(Message::EditorHexCancel),
        InputKey::Backspace => Some(Message::EditorHexBackspace),
        InputKey::Char(c) => Some(Message::EditorHexInput(c)),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => return Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        // A failed roster can be fetched again; a loaded one is never re-listed
        InputKey::Char('r') if matches!(state.devices.roster(), RosterState::Failed(_)) => {
            return Some(Message::LoadDevices);
        }
        InputKey::Up | InputKey::Char('k') => return Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => return Some(Message::SelectNext),
        InputKey::Char('R') => return Some(Message::RefreshAll),
        _ => {}
    }

    let device_id = state.devices.selected_id()?;
    match key {
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleDevice { device_id }),
        InputKey::Char('b') => Some(Message::OpenBrightnessEditor { device_id }),
        InputKey::Char('c') => Some(Message::OpenColorEditor { device_id }),
        InputKey::Char('r') => Some(Message::RefreshDevice { device_id }),
        _ => None,
    }
}
