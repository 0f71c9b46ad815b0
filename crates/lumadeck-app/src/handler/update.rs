//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{device, editor, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Roster Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadDevices => device::handle_load_devices(state),
        Message::DevicesLoaded { devices } => device::handle_devices_loaded(state, devices),
        Message::DevicesWithStatusLoaded { entries } => {
            device::handle_devices_with_status_loaded(state, entries)
        }
        Message::DevicesLoadFailed { error } => {
            state.devices.load_failed(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Device List Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            state.devices.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.devices.select_previous();
            UpdateResult::none()
        }
        Message::ToggleDevice { device_id } => device::handle_toggle(state, &device_id),
        Message::RefreshDevice { device_id } => device::handle_refresh(state, &device_id),
        Message::RefreshAll => device::handle_refresh_all(state),
        Message::OpenBrightnessEditor { device_id } => {
            editor::handle_open_brightness(state, &device_id)
        }
        Message::OpenColorEditor { device_id } => editor::handle_open_color(state, &device_id),

        // ─────────────────────────────────────────────────────────
        // Device Operation Completions
        // ─────────────────────────────────────────────────────────
        Message::DeviceStatusReceived { device_id, status } => {
            device::handle_status_received(state, &device_id, status)
        }
        Message::DeviceOperationFailed { device_id, error } => {
            device::handle_operation_failed(state, &device_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::EditorAdjust(delta) => editor::handle_adjust(state, delta),
        Message::EditorCoarseStep { up } => editor::handle_coarse_step(state, up),
        Message::EditorJump { to_max } => editor::handle_jump(state, to_max),
        Message::EditorSwitchTab => editor::handle_switch_tab(state),
        Message::EditorHexBegin => editor::handle_hex_begin(state),
        Message::EditorHexInput(c) => editor::handle_hex_input(state, c),
        Message::EditorHexBackspace => editor::handle_hex_backspace(state),
        Message::EditorHexApply => editor::handle_hex_apply(state),
        Message::EditorHexCancel => editor::handle_hex_cancel(state),
        Message::EditorNextChannel => editor::handle_channel(state, true),
        Message::EditorPrevChannel => editor::handle_channel(state, false),
        Message::EditorConfirm => editor::handle_confirm(state),
        Message::EditorCancel => {
            state.close_editor();
            UpdateResult::none()
        }
    }
}
