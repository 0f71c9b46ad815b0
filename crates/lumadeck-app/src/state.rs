//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::device_list::DeviceListController;
use crate::editor::ActiveEditor;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Device list
    #[default]
    Normal,

    /// A brightness or color editor popup is open
    Editor,

    /// Confirmation dialog (quit confirmation)
    ConfirmDialog,
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,
    pub devices: DeviceListController,

    /// Open editor; `Some` exactly when `ui_mode == UiMode::Editor`
    pub editor: Option<ActiveEditor>,

    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Spinner frame, advanced by `Message::Tick`
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            devices: DeviceListController::new(),
            editor: None,
            confirm_dialog_state: None,
            tick: 0,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Editor Helpers
    // ─────────────────────────────────────────────────────────

    pub fn open_editor(&mut self, editor: ActiveEditor) {
        self.editor = Some(editor);
        self.ui_mode = UiMode::Editor;
    }

    /// Close the open editor, if any. Safe to call repeatedly.
    pub fn close_editor(&mut self) {
        if let Some(mut editor) = self.editor.take() {
            editor.close();
        }
        if self.ui_mode == UiMode::Editor {
            self.ui_mode = UiMode::Normal;
        }
    }

    /// The color editor's hex field is taking keystrokes
    pub fn hex_entry_active(&self) -> bool {
        match &self.editor {
            Some(ActiveEditor::Color(session)) => session
                .content()
                .is_some_and(|content| content.hex_input().is_some()),
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit Helpers
    // ─────────────────────────────────────────────────────────

    /// Request quit; asks for confirmation while requests are in flight
    pub fn request_quit(&mut self) {
        let in_flight = self.devices.in_flight();
        if in_flight > 0 && self.settings.behavior.confirm_quit {
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(in_flight));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
