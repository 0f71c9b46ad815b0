//! Main render/view function (View in TEA pattern)


use lumadeck_app::{ActiveEditor, AppState, UiMode};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::widgets::{self, modal_overlay};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; overlays are drawn over a dimmed list.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Device list
        Constraint::Length(2), // Status bar
    ])
    .split(area);

    frame.render_widget(
        widgets::Header::new(&state.settings.gateway.base_url),
        chunks[0],
    );
    frame.render_widget(
        widgets::DeviceList::new(&state.devices, state.tick)
            .focused(state.ui_mode == UiMode::Normal),
        chunks[1],
    );
    frame.render_widget(widgets::StatusBar::new(state), chunks[2]);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Editor => {
            if let Some(editor) = &state.editor {
                modal_overlay::dim_background(frame.buffer_mut(), chunks[1]);
                render_editor(frame, state, editor);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog_state {
                modal_overlay::dim_background(frame.buffer_mut(), chunks[1]);
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
    }
}

fn render_editor(frame: &mut Frame, state: &AppState, editor: &ActiveEditor) {
    let area = frame.area();
    let device_name = state
        .devices
        .get(editor.device_id())
        .map(|device| device.name())
        .unwrap_or_else(|| editor.device_id());

    match editor {
        ActiveEditor::Brightness(session) => {
            if let Some(content) = session.content() {
                frame.render_widget(widgets::BrightnessPopup::new(device_name, content), area);
            }
        }
        ActiveEditor::Color(session) => {
            if let Some(content) = session.content() {
                frame.render_widget(widgets::ColorPopup::new(device_name, content), area);
            }
        }
    }
}
