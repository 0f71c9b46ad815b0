//! Modal editor handlers

use lumadeck_core::prelude::*;
use lumadeck_core::DeviceStatus;

use crate::device::DeviceOperation;
use crate::editor::{
    ActiveEditor, BrightnessContent, ColorContent, ColorTab, ColorValue, ModalSession,
};
use crate::state::AppState;

use super::{device::start_operation, UpdateResult};

pub fn handle_open_brightness(state: &mut AppState, device_id: &str) -> UpdateResult {
    open_editor(state, device_id, |status| {
        ActiveEditor::Brightness(ModalSession::open(
            device_id,
            BrightnessContent::new(status.brightness),
        ))
    })
}

pub fn handle_open_color(state: &mut AppState, device_id: &str) -> UpdateResult {
    open_editor(state, device_id, |status| {
        ActiveEditor::Color(ModalSession::open(
            device_id,
            ColorContent::from_status(status),
        ))
    })
}

/// Editors are seeded from the device's known status; without one the device
/// shows the precondition error instead.
fn open_editor<F>(state: &mut AppState, device_id: &str, build: F) -> UpdateResult
where
    F: FnOnce(&DeviceStatus) -> ActiveEditor,
{
    if state.editor.is_some() {
        debug!("Editor already open, ignoring open for {}", device_id);
        return UpdateResult::none();
    }

    let Some(device) = state.devices.get_mut(device_id) else {
        warn!("Editor requested for unknown device {}", device_id);
        return UpdateResult::none();
    };

    match device.require_status().copied() {
        Ok(status) => state.open_editor(build(&status)),
        Err(e) => device.fail_locally(&e),
    }
    UpdateResult::none()
}

pub fn handle_adjust(state: &mut AppState, delta: i32) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.adjust(delta);
    }
    UpdateResult::none()
}

/// Step by the configured coarse amount for the active value
pub fn handle_coarse_step(state: &mut AppState, up: bool) -> UpdateResult {
    let ui = &state.settings.ui;
    let Some(editor) = state.editor.as_mut() else {
        return UpdateResult::none();
    };

    let step = match &*editor {
        ActiveEditor::Brightness(_) => ui.brightness_step,
        ActiveEditor::Color(session) => match session.content().map(ColorContent::tab) {
            Some(ColorTab::Rgb) => ui.rgb_step,
            _ => ui.tone_step,
        },
    };
    let step = i32::from(step.max(1));
    editor.adjust(if up { step } else { -step });
    UpdateResult::none()
}

pub fn handle_jump(state: &mut AppState, to_max: bool) -> UpdateResult {
    if let Some(editor) = state.editor.as_mut() {
        editor.jump(to_max);
    }
    UpdateResult::none()
}

pub fn handle_switch_tab(state: &mut AppState) -> UpdateResult {
    if let Some(content) = color_content(state) {
        content.switch_tab();
    }
    UpdateResult::none()
}

pub fn handle_channel(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(content) = color_content(state) {
        if forward {
            content.next_channel();
        } else {
            content.prev_channel();
        }
    }
    UpdateResult::none()
}

pub fn handle_hex_begin(state: &mut AppState) -> UpdateResult {
    if let Some(content) = color_content(state) {
        content.begin_hex_entry();
    }
    UpdateResult::none()
}

pub fn handle_hex_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(content) = color_content(state) {
        content.push_hex_char(c);
    }
    UpdateResult::none()
}

pub fn handle_hex_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(content) = color_content(state) {
        content.pop_hex_char();
    }
    UpdateResult::none()
}

/// A rejected entry stays open with its error shown in the popup
pub fn handle_hex_apply(state: &mut AppState) -> UpdateResult {
    if let Some(content) = color_content(state) {
        if let Err(e) = content.apply_hex_entry() {
            debug!("Hex entry rejected: {}", e);
        }
    }
    UpdateResult::none()
}

pub fn handle_hex_cancel(state: &mut AppState) -> UpdateResult {
    if let Some(content) = color_content(state) {
        content.cancel_hex_entry();
    }
    UpdateResult::none()
}

fn color_content(state: &mut AppState) -> Option<&mut ColorContent> {
    match state.editor.as_mut()? {
        ActiveEditor::Color(session) => session.content_mut(),
        ActiveEditor::Brightness(_) => None,
    }
}

/// Close the editor and issue the write for its confirmed value
pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let Some(editor) = state.editor.take() else {
        return UpdateResult::none();
    };
    state.close_editor();

    let mut request = None;
    match editor {
        ActiveEditor::Brightness(mut session) => {
            session.confirm_with(|id, value| {
                request = Some((id.to_string(), DeviceOperation::SetBrightness(value)));
            });
        }
        ActiveEditor::Color(mut session) => {
            session.confirm_with(|id, value| {
                let operation = match value {
                    ColorValue::Tone(tone) => DeviceOperation::SetTone(tone),
                    ColorValue::Rgb(rgb) => DeviceOperation::SetRgb(rgb),
                };
                request = Some((id.to_string(), operation));
            });
        }
    }

    match request {
        Some((device_id, operation)) => start_operation(state, &device_id, operation),
        None => UpdateResult::none(),
    }
}
