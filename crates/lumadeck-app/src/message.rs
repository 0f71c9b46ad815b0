//! Message types for the application (TEA pattern)

use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Quit immediately
    Quit,

    /// Confirm quit from the dialog
    ConfirmQuit,

    /// Cancel quit from the dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Roster Messages
    // ─────────────────────────────────────────────────────────
    /// Fetch the device roster
    LoadDevices,

    /// Roster-only fetch completed
    DevicesLoaded { devices: Vec<DeviceInfo> },

    /// Combined roster and status fetch completed
    DevicesWithStatusLoaded { entries: Vec<DeviceEntry> },

    /// Roster fetch failed
    DevicesLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Device List Messages
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,

    /// Flip power of a device based on its last known status
    ToggleDevice { device_id: String },

    /// Re-read one device's status
    RefreshDevice { device_id: String },

    /// Re-read every device's status (not a re-list)
    RefreshAll,

    OpenBrightnessEditor { device_id: String },
    OpenColorEditor { device_id: String },

    // ─────────────────────────────────────────────────────────
    // Device Operation Completions
    // ─────────────────────────────────────────────────────────
    /// An operation returned the device's authoritative status
    DeviceStatusReceived {
        device_id: String,
        status: DeviceStatus,
    },

    /// An operation failed
    DeviceOperationFailed { device_id: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Move the working value by a number of units
    EditorAdjust(i32),

    /// Move the working value by the configured coarse step
    EditorCoarseStep { up: bool },

    /// Jump to the minimum or maximum
    EditorJump { to_max: bool },

    EditorSwitchTab,

    /// Start typing a `#rrggbb` color on the RGB tab
    EditorHexBegin,
    EditorHexInput(char),
    EditorHexBackspace,
    /// Parse the typed hex into the RGB value
    EditorHexApply,
    /// Leave hex entry, keeping the editor open
    EditorHexCancel,

    EditorNextChannel,
    EditorPrevChannel,
    EditorConfirm,
    EditorCancel,
}
