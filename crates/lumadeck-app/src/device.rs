//! Per-device view-model
//!
//! A [`DeviceViewModel`] holds the last authoritative status of one light and
//! the lifecycle of its remote operations. Several operations may be in flight
//! at once; whichever completion arrives last decides what is shown.

use lumadeck_core::prelude::*;
use lumadeck_core::{preview_color, DeviceInfo, DeviceStatus, Rgb};

/// Message used when an action needs a status that isn't known
pub const STATUS_UNKNOWN: &str = "device status is not known yet";

/// Lifecycle of the device's remote operations
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    /// Last arrived completion was a failure; the message is shown verbatim
    Error(String),
    /// The service answered but could not reach the light
    Offline,
}

impl Lifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Lifecycle::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One remote call against a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOperation {
    Refresh,
    SetOnOff(bool),
    SetBrightness(u8),
    SetTone(u8),
    SetRgb(Rgb),
}

impl DeviceOperation {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            DeviceOperation::Refresh => "refresh",
            DeviceOperation::SetOnOff(_) => "set_on_off",
            DeviceOperation::SetBrightness(_) => "set_brightness",
            DeviceOperation::SetTone(_) => "set_tone",
            DeviceOperation::SetRgb(_) => "set_rgb",
        }
    }
}

/// View-model for one light
#[derive(Debug, Clone)]
pub struct DeviceViewModel {
    info: DeviceInfo,
    status: Option<DeviceStatus>,
    lifecycle: Lifecycle,
    in_flight: usize,
}

impl DeviceViewModel {
    pub fn new(info: DeviceInfo) -> Self {
        Self {
            info,
            status: None,
            lifecycle: Lifecycle::Idle,
            in_flight: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    /// Last status received, possibly stale after a failure
    pub fn status(&self) -> Option<&DeviceStatus> {
        self.status.as_ref()
    }

    /// Status that actions can be based on. `None` before the first load and
    /// while the service reports the light as unreachable.
    pub fn known_status(&self) -> Option<&DeviceStatus> {
        self.status.as_ref().filter(|status| status.is_online)
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Number of issued operations whose completion hasn't arrived
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn controls_enabled(&self) -> bool {
        self.known_status().is_some()
    }

    /// Draw muted: no usable status, or the last completion failed.
    /// A stale status stays visible and actionable.
    pub fn is_dimmed(&self) -> bool {
        !self.controls_enabled() || matches!(self.lifecycle, Lifecycle::Error(_))
    }

    /// `#rrggbb` swatch of the current color, if known
    pub fn preview_hex(&self) -> Option<String> {
        self.known_status().map(preview_color)
    }

    /// Mark an operation as issued
    pub fn begin(&mut self, operation: &DeviceOperation) {
        debug!("{}: {} started", self.info.id, operation.name());
        self.in_flight += 1;
        self.lifecycle = Lifecycle::Loading;
    }

    /// The operation that flips power relative to the last known status
    pub fn toggle_operation(&self) -> Result<DeviceOperation> {
        let status = self.require_status()?;
        Ok(DeviceOperation::SetOnOff(!status.is_on))
    }

    pub fn require_status(&self) -> Result<&DeviceStatus> {
        self.known_status()
            .ok_or_else(|| Error::precondition(STATUS_UNKNOWN))
    }

    /// Apply a successful completion. The returned status replaces the held
    /// one wholesale.
    pub fn apply_status(&mut self, status: DeviceStatus) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.lifecycle = if status.is_online {
            Lifecycle::Idle
        } else {
            Lifecycle::Offline
        };
        self.status = Some(status);
    }

    /// Apply a failed completion; the held status is kept.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let message = message.into();
        warn!("{}: operation failed: {}", self.info.id, message);
        self.lifecycle = Lifecycle::Error(message);
    }

    /// Surface an error that never reached the gateway
    pub fn fail_locally(&mut self, error: &Error) {
        self.lifecycle = Lifecycle::Error(error.to_string());
    }
}
