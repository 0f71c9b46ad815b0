//! Core domain types used across the application

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, TONE_MAX};

/// Lowest brightness a light accepts (0 is expressed through `is_on`)
pub const BRIGHTNESS_MIN: u8 = 1;

/// Highest brightness, in percent
pub const BRIGHTNESS_MAX: u8 = 100;

/// A light as listed by the light service.
///
/// Supplied once by the roster fetch; `id` identifies the device for the
/// whole session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DeviceInfo {
    /// Opaque device identifier
    pub id: String,

    /// User-assigned name
    pub name: String,
}

impl DeviceInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The full state of one light, as reported by the light service.
///
/// `color_tone` and `rgb` are alternative representations of the color;
/// `use_rgb` selects which one is in effect. The other keeps its last value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceStatus {
    /// False when the service could not reach the light. Every other field
    /// is meaningless in that case.
    #[serde(default = "default_online")]
    pub is_online: bool,

    pub is_on: bool,

    /// Percent, 1..=100
    pub brightness: u8,

    pub use_rgb: bool,

    /// Warm (0) to cool (100)
    pub color_tone: u8,

    pub rgb: Rgb,
}

fn default_online() -> bool {
    true
}

impl DeviceStatus {
    /// Force every field into its documented range.
    pub fn normalized(mut self) -> Self {
        self.brightness = self.brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
        self.color_tone = self.color_tone.min(TONE_MAX);
        self
    }
}

/// A roster entry from the combined list-with-status fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub info: DeviceInfo,
    pub status: Option<DeviceStatus>,
}

/// Clamp a requested brightness into 1..=100
pub fn clamp_brightness(value: i32) -> u8 {
    value.clamp(i32::from(BRIGHTNESS_MIN), i32::from(BRIGHTNESS_MAX)) as u8
}

/// Clamp a requested tone into 0..=100
pub fn clamp_tone(value: i32) -> u8 {
    value.clamp(0, i32::from(TONE_MAX)) as u8
}
