//! Tests for handler module

use std::sync::Arc;

use super::keys::handle_key;
use super::*;
use crate::config::Settings;
use crate::device::{Lifecycle, STATUS_UNKNOWN};
use crate::device_list::RosterState;
use crate::editor::{ActiveEditor, ColorTab};
use crate::engine::Engine;
use crate::input_key::InputKey;
use crate::state::{AppPhase, AppState, UiMode};
use lumadeck_core::{tone_to_color, DeviceInfo, DeviceStatus, Rgb};
use lumadeck_gateway::test_utils::{
    test_device, test_status, GatewayCall, ScriptedFailure, ScriptedGateway, ScriptedReply,
};

/// State with the given devices loaded and every refresh answered with `status`
fn loaded_state(ids: &[&str], status: Option<DeviceStatus>) -> AppState {
    let mut state = AppState::new();
    let devices = ids.iter().map(|id| DeviceInfo::new(*id, *id)).collect();
    update(&mut state, Message::DevicesLoaded { devices });
    if let Some(status) = status {
        for id in ids {
            update(
                &mut state,
                Message::DeviceStatusReceived {
                    device_id: id.to_string(),
                    status,
                },
            );
        }
    }
    state
}

fn lifecycle(state: &AppState, id: &str) -> Lifecycle {
    state.devices.get(id).unwrap().lifecycle().clone()
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_key_produces_request_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::Char('q'));
    assert!(matches!(result, Some(Message::RequestQuit)));
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = AppState::new();
    for mode in [UiMode::Normal, UiMode::Editor, UiMode::ConfirmDialog] {
        state.ui_mode = mode;
        let result = handle_key(&state, InputKey::CharCtrl('c'));
        assert!(matches!(result, Some(Message::Quit)), "mode {:?}", mode);
    }
}

#[test]
fn test_request_quit_with_requests_in_flight_shows_dialog() {
    let mut state = loaded_state(&["a"], None);
    update(&mut state, Message::RequestQuit);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    let result = handle_key(&state, InputKey::Char('y'));
    assert!(matches!(result, Some(Message::ConfirmQuit)));
    update(&mut state, Message::ConfirmQuit);
    assert!(state.should_quit());
}

#[test]
fn test_q_twice_quits_with_requests_in_flight() {
    let mut state = loaded_state(&["a"], None);
    press(&mut state, &[InputKey::Char('q')]);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    press(&mut state, &[InputKey::Char('q')]);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_device_keys_target_selected_device() {
    let mut state = loaded_state(&["a", "b"], Some(test_status()));
    update(&mut state, Message::SelectNext);

    let toggle = handle_key(&state, InputKey::Char(' '));
    assert!(matches!(toggle, Some(Message::ToggleDevice { ref device_id }) if device_id == "b"));

    let brightness = handle_key(&state, InputKey::Char('b'));
    assert!(
        matches!(brightness, Some(Message::OpenBrightnessEditor { ref device_id }) if device_id == "b")
    );

    let color = handle_key(&state, InputKey::Char('c'));
    assert!(matches!(color, Some(Message::OpenColorEditor { .. })));

    let refresh = handle_key(&state, InputKey::Char('r'));
    assert!(matches!(refresh, Some(Message::RefreshDevice { .. })));

    let all = handle_key(&state, InputKey::Char('R'));
    assert!(matches!(all, Some(Message::RefreshAll)));
}

#[test]
fn test_device_keys_need_a_device() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Enter).is_none());
    assert!(handle_key(&state, InputKey::Char('b')).is_none());
}

#[test]
fn test_r_retries_failed_roster() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::DevicesLoadFailed {
            error: "down".into(),
        },
    );
    let result = handle_key(&state, InputKey::Char('r'));
    assert!(matches!(result, Some(Message::LoadDevices)));
}

#[test]
fn test_editor_keys_are_modal() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::Editor;

    assert!(matches!(
        handle_key(&state, InputKey::Enter),
        Some(Message::EditorConfirm)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::EditorCancel)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Tab),
        Some(Message::EditorSwitchTab)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::PageDown),
        Some(Message::EditorCoarseStep { up: false })
    ));
    // 'q' does not quit while an editor is open
    assert!(handle_key(&state, InputKey::Char('q')).is_none());
}

// ─────────────────────────────────────────────────────────
// Roster
// ─────────────────────────────────────────────────────────

#[test]
fn test_load_devices_uses_configured_fetch_mode() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::LoadDevices);
    assert_eq!(
        result.action,
        Some(UpdateAction::ListDevices { with_status: false })
    );

    let mut settings = Settings::default();
    settings.gateway.combined_fetch = true;
    let mut state = AppState::with_settings(settings);
    let result = update(&mut state, Message::LoadDevices);
    assert_eq!(
        result.action,
        Some(UpdateAction::ListDevices { with_status: true })
    );
    assert_eq!(state.devices.roster(), &RosterState::Loading);
}

#[test]
fn test_devices_loaded_refreshes_each_device() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::DevicesLoaded {
            devices: vec![test_device("a", "Desk"), test_device("b", "Hall")],
        },
    );
    assert_eq!(
        result.action,
        Some(UpdateAction::RefreshDevices {
            device_ids: vec!["a".into(), "b".into()]
        })
    );
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Loading);
    assert_eq!(lifecycle(&state, "b"), Lifecycle::Loading);
}

#[test]
fn test_empty_roster_needs_no_refresh() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::DevicesLoaded { devices: vec![] });
    assert!(result.action.is_none());
    assert_eq!(state.devices.roster(), &RosterState::Loaded);
}

#[test]
fn test_roster_failure_is_single_list_error() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::DevicesLoadFailed {
            error: "Connection error: refused".into(),
        },
    );
    assert_eq!(
        state.devices.roster(),
        &RosterState::Failed("Connection error: refused".into())
    );
    assert!(state.devices.is_empty());
}

#[test]
fn test_refresh_all_never_relists() {
    let mut state = loaded_state(&["a", "b"], Some(test_status()));
    let result = update(&mut state, Message::RefreshAll);
    assert_eq!(
        result.action,
        Some(UpdateAction::RefreshDevices {
            device_ids: vec!["a".into(), "b".into()]
        })
    );
}

// ─────────────────────────────────────────────────────────
// Device operations
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_success_and_failure_scenario() {
    let mut state = loaded_state(&["a", "b"], None);

    update(
        &mut state,
        Message::DeviceStatusReceived {
            device_id: "a".into(),
            status: test_status(),
        },
    );
    update(
        &mut state,
        Message::DeviceOperationFailed {
            device_id: "b".into(),
            error: "device unreachable".into(),
        },
    );

    let a = state.devices.get("a").unwrap();
    assert_eq!(a.lifecycle(), &Lifecycle::Idle);
    assert_eq!(a.status(), Some(&test_status()));
    assert_eq!(a.preview_hex(), Some(tone_to_color(20).to_hex()));

    let b = state.devices.get("b").unwrap();
    assert_eq!(b.lifecycle(), &Lifecycle::Error("device unreachable".into()));
    assert!(b.status().is_none());
}

#[test]
fn test_toggle_sends_negation_and_response_is_authoritative() {
    let mut state = loaded_state(&["a"], Some(test_status()));

    let result = update(
        &mut state,
        Message::ToggleDevice {
            device_id: "a".into(),
        },
    );
    assert_eq!(
        result.action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetOnOff(false),
        })
    );
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Loading);

    // The light refused the change
    update(
        &mut state,
        Message::DeviceStatusReceived {
            device_id: "a".into(),
            status: test_status(),
        },
    );
    assert!(state.devices.get("a").unwrap().status().unwrap().is_on);
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Idle);
}

#[test]
fn test_toggle_without_status_is_visible_error() {
    let mut state = loaded_state(&["a"], None);
    update(
        &mut state,
        Message::DeviceOperationFailed {
            device_id: "a".into(),
            error: "boom".into(),
        },
    );

    let result = update(
        &mut state,
        Message::ToggleDevice {
            device_id: "a".into(),
        },
    );
    assert!(result.action.is_none());
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Error(STATUS_UNKNOWN.into()));
}

#[test]
fn test_completion_for_unknown_device_is_ignored() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    let result = update(
        &mut state,
        Message::DeviceStatusReceived {
            device_id: "zzz".into(),
            status: test_status(),
        },
    );
    assert!(result.action.is_none());
    assert_eq!(state.devices.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Editors
// ─────────────────────────────────────────────────────────

#[test]
fn test_brightness_editor_confirm_issues_write() {
    let mut state = loaded_state(&["a"], Some(test_status()));

    update(
        &mut state,
        Message::OpenBrightnessEditor {
            device_id: "a".into(),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Editor);

    update(&mut state, Message::EditorAdjust(5));
    update(&mut state, Message::EditorCoarseStep { up: true });
    // The device is untouched until confirm
    assert_eq!(state.devices.get("a").unwrap().status().unwrap().brightness, 40);

    let result = update(&mut state, Message::EditorConfirm);
    assert_eq!(
        result.action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetBrightness(55),
        })
    );
    assert!(state.editor.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Loading);
}

#[test]
fn test_editor_cancel_emits_nothing() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    update(
        &mut state,
        Message::OpenBrightnessEditor {
            device_id: "a".into(),
        },
    );
    update(&mut state, Message::EditorJump { to_max: true });

    let result = update(&mut state, Message::EditorCancel);
    assert!(result.action.is_none());
    assert!(state.editor.is_none());
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Idle);

    // Closing again is harmless
    let result = update(&mut state, Message::EditorCancel);
    assert!(result.action.is_none());
    let result = update(&mut state, Message::EditorConfirm);
    assert!(result.action.is_none());
}

#[test]
fn test_editor_needs_known_status() {
    let mut state = loaded_state(&["a"], None);
    update(
        &mut state,
        Message::DeviceOperationFailed {
            device_id: "a".into(),
            error: "boom".into(),
        },
    );
    update(
        &mut state,
        Message::OpenColorEditor {
            device_id: "a".into(),
        },
    );
    assert!(state.editor.is_none());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(lifecycle(&state, "a"), Lifecycle::Error(STATUS_UNKNOWN.into()));
}

#[test]
fn test_color_editor_keeps_rgb_across_tab_switches() {
    let status = DeviceStatus {
        use_rgb: true,
        ..test_status()
    };
    let mut state = loaded_state(&["a"], Some(status));
    update(
        &mut state,
        Message::OpenColorEditor {
            device_id: "a".into(),
        },
    );

    match state.editor.as_mut() {
        Some(ActiveEditor::Color(session)) => {
            let content = session.content_mut().unwrap();
            assert_eq!(content.tab(), ColorTab::Rgb);
            content.set_rgb_hex("#112233").unwrap();
        }
        other => panic!("expected color editor, got {:?}", other),
    }

    update(&mut state, Message::EditorSwitchTab);
    update(&mut state, Message::EditorJump { to_max: false });
    for _ in 0..75 {
        update(&mut state, Message::EditorAdjust(1));
    }
    update(&mut state, Message::EditorSwitchTab);

    let result = update(&mut state, Message::EditorConfirm);
    assert_eq!(
        result.action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetRgb(Rgb::new(0x11, 0x22, 0x33)),
        })
    );
}

#[test]
fn test_color_editor_confirms_tone_on_tone_tab() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    update(
        &mut state,
        Message::OpenColorEditor {
            device_id: "a".into(),
        },
    );
    update(&mut state, Message::EditorCoarseStep { up: true });

    let result = update(&mut state, Message::EditorConfirm);
    assert_eq!(
        result.action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetTone(30),
        })
    );
}

#[test]
fn test_rgb_coarse_step_uses_rgb_step() {
    let status = DeviceStatus {
        use_rgb: true,
        rgb: Rgb::new(0, 0, 0),
        ..test_status()
    };
    let mut state = loaded_state(&["a"], Some(status));
    update(
        &mut state,
        Message::OpenColorEditor {
            device_id: "a".into(),
        },
    );
    update(&mut state, Message::EditorNextChannel);
    update(&mut state, Message::EditorCoarseStep { up: true });

    let result = update(&mut state, Message::EditorConfirm);
    assert_eq!(
        result.action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetRgb(Rgb::new(0, 16, 0)),
        })
    );
}

fn open_color_editor(state: &mut AppState, id: &str) {
    update(
        state,
        Message::OpenColorEditor {
            device_id: id.into(),
        },
    );
}

/// Feed keys through the key handler the way the event loop does
fn press(state: &mut AppState, keys: &[InputKey]) {
    for key in keys {
        let mut next = Some(Message::Key(*key));
        while let Some(msg) = next {
            next = update(state, msg).message;
        }
    }
}

fn typed(text: &str) -> Vec<InputKey> {
    text.chars().map(InputKey::Char).collect()
}

#[test]
fn test_hex_entry_from_tone_tab_confirms_rgb() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    open_color_editor(&mut state, "a");

    press(&mut state, &typed("#112233"));
    assert!(state.hex_entry_active());
    // Enter applies the hex; the editor stays open
    press(&mut state, &[InputKey::Enter]);
    assert!(!state.hex_entry_active());
    assert_eq!(state.ui_mode, UiMode::Editor);

    let mut next = Some(Message::Key(InputKey::Enter));
    let mut action = None;
    while let Some(msg) = next {
        let result = update(&mut state, msg);
        next = result.message;
        action = action.or(result.action);
    }
    assert_eq!(
        action,
        Some(UpdateAction::RunDeviceOperation {
            device_id: "a".into(),
            operation: DeviceOperation::SetRgb(Rgb::new(0x11, 0x22, 0x33)),
        })
    );
}

#[test]
fn test_hex_entry_keys_are_text_not_commands() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    open_color_editor(&mut state, "a");
    press(&mut state, &[InputKey::Char('#')]);

    assert!(matches!(
        handle_key(&state, InputKey::Char('b')),
        Some(Message::EditorHexInput('b'))
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Backspace),
        Some(Message::EditorHexBackspace)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::EditorHexCancel)
    ));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_invalid_hex_entry_shows_error_and_stays_open() {
    let status = DeviceStatus {
        use_rgb: true,
        rgb: Rgb::new(1, 2, 3),
        ..test_status()
    };
    let mut state = loaded_state(&["a"], Some(status));
    open_color_editor(&mut state, "a");

    press(&mut state, &typed("#ff"));
    press(&mut state, &[InputKey::Enter]);

    match &state.editor {
        Some(ActiveEditor::Color(session)) => {
            let content = session.content().unwrap();
            assert_eq!(content.hex_input(), Some("#ff"));
            assert!(content.hex_error().unwrap().contains("Invalid color"));
            assert_eq!(content.rgb(), Rgb::new(1, 2, 3));
        }
        other => panic!("expected color editor, got {:?}", other),
    }

    // Esc leaves hex entry first, then closes the editor
    press(&mut state, &[InputKey::Backspace, InputKey::Esc]);
    assert!(!state.hex_entry_active());
    assert_eq!(state.ui_mode, UiMode::Editor);
    press(&mut state, &[InputKey::Esc]);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.editor.is_none());
}

#[test]
fn test_hash_key_is_ignored_in_brightness_editor() {
    let mut state = loaded_state(&["a"], Some(test_status()));
    update(
        &mut state,
        Message::OpenBrightnessEditor {
            device_id: "a".into(),
        },
    );
    press(&mut state, &[InputKey::Char('#')]);
    assert!(!state.hex_entry_active());
    assert!(matches!(state.editor, Some(ActiveEditor::Brightness(_))));
}

#[test]
fn test_second_editor_open_is_ignored() {
    let mut state = loaded_state(&["a", "b"], Some(test_status()));
    update(
        &mut state,
        Message::OpenBrightnessEditor {
            device_id: "a".into(),
        },
    );
    update(
        &mut state,
        Message::OpenColorEditor {
            device_id: "b".into(),
        },
    );
    match &state.editor {
        Some(ActiveEditor::Brightness(session)) => assert_eq!(session.device_id(), "a"),
        other => panic!("unexpected editor {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────
// Engine (async, against the scripted gateway)
// ─────────────────────────────────────────────────────────

async fn pump<G>(engine: &mut Engine<G>, count: usize)
where
    G: lumadeck_gateway::DeviceGateway + Send + Sync + 'static,
{
    for _ in 0..count {
        let msg = engine.next_message().await.unwrap();
        engine.process_message(msg);
    }
}

#[tokio::test]
async fn test_engine_loads_roster_then_refreshes() {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .with_device(test_device("a", "Desk"), Some(test_status()))
            .with_device(test_device("b", "Hall"), Some(test_status())),
    );
    gateway.push_reply(
        "b",
        ScriptedReply::Fail(ScriptedFailure::Api("device unreachable".into())),
    );

    let mut engine = Engine::new(Settings::default(), gateway.clone());
    engine.start();
    // Roster, then one completion per device
    pump(&mut engine, 3).await;

    assert_eq!(lifecycle(&engine.state, "a"), Lifecycle::Idle);
    assert_eq!(
        lifecycle(&engine.state, "b"),
        Lifecycle::Error("device unreachable".into())
    );
    assert_eq!(gateway.calls()[0], GatewayCall::ListDevices);
    assert_eq!(gateway.calls().len(), 3);
}

#[tokio::test]
async fn test_engine_combined_fetch_refreshes_only_missing() {
    let gateway = Arc::new(
        ScriptedGateway::new()
            .with_device(test_device("a", "Desk"), Some(test_status()))
            .with_device(test_device("b", "Hall"), None),
    );
    let mut settings = Settings::default();
    settings.gateway.combined_fetch = true;

    let mut engine = Engine::new(settings, gateway.clone());
    engine.start();
    pump(&mut engine, 2).await;

    assert_eq!(lifecycle(&engine.state, "a"), Lifecycle::Idle);
    assert!(matches!(lifecycle(&engine.state, "b"), Lifecycle::Error(_)));
    assert_eq!(
        gateway.calls(),
        vec![
            GatewayCall::ListDevicesWithStatus,
            GatewayCall::GetStatus("b".into())
        ]
    );
}

#[tokio::test]
async fn test_engine_last_arrival_wins() {
    let gateway =
        Arc::new(ScriptedGateway::new().with_device(test_device("a", "Desk"), Some(test_status())));
    let mut engine = Engine::new(Settings::default(), gateway.clone());
    engine.start();
    pump(&mut engine, 2).await;

    let first = gateway.push_gated(
        "a",
        ScriptedReply::Status(DeviceStatus {
            brightness: 10,
            ..test_status()
        }),
    );
    let second = gateway.push_gated(
        "a",
        ScriptedReply::Status(DeviceStatus {
            brightness: 100,
            ..test_status()
        }),
    );

    // Issue brightness 10, then brightness 100
    for messages in [
        [Message::EditorAdjust(-30), Message::EditorConfirm],
        [Message::EditorJump { to_max: true }, Message::EditorConfirm],
    ] {
        engine.process_message(Message::OpenBrightnessEditor {
            device_id: "a".into(),
        });
        for msg in messages {
            engine.process_message(msg);
        }
    }
    assert_eq!(engine.state.devices.get("a").unwrap().in_flight(), 2);

    // The later request is answered first
    second.release();
    pump(&mut engine, 1).await;
    let device = engine.state.devices.get("a").unwrap();
    assert_eq!(device.status().unwrap().brightness, 100);
    assert_eq!(device.in_flight(), 1);

    // The earlier request's answer lands last and wins
    first.release();
    pump(&mut engine, 1).await;
    let device = engine.state.devices.get("a").unwrap();
    assert_eq!(device.status().unwrap().brightness, 10);
    assert_eq!(device.in_flight(), 0);
    assert_eq!(device.lifecycle(), &Lifecycle::Idle);

    let calls = gateway.calls_for("a");
    assert_eq!(
        calls[calls.len() - 2..],
        [
            GatewayCall::SetBrightness("a".into(), 10),
            GatewayCall::SetBrightness("a".into(), 100)
        ]
    );
}

#[tokio::test]
async fn test_engine_drain_pending_processes_queued_messages() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut engine = Engine::new(Settings::default(), gateway);
    let tx = engine.msg_sender();
    tx.send(Message::Tick).await.unwrap();
    tx.send(Message::Tick).await.unwrap();

    assert_eq!(engine.drain_pending(), 2);
    assert_eq!(engine.state.tick, 2);
    assert_eq!(engine.drain_pending(), 0);
}
