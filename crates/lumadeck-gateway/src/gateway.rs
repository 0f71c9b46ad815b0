//! The light service boundary
//!
//! Every call is one request/response. Write calls return the status the
//! light ended up in, which callers treat as ground truth.

use lumadeck_core::prelude::*;
use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus, Rgb};

/// Light service operations.
///
/// Failures are already normalized into [`Error`]: `Transport` for
/// connectivity, `Api` for service-reported messages, `DeviceNotFound` when
/// the id is unknown and `Protocol` for responses that could not be decoded.
#[trait_variant::make(DeviceGateway: Send)]
pub trait LocalDeviceGateway {
    /// List the lights on the account, in service order
    async fn list_devices(&self) -> Result<Vec<DeviceInfo>>;

    /// List the lights together with a freshly polled status for each.
    ///
    /// A `None` status means the service had nothing to report for that light.
    async fn list_devices_with_status(&self) -> Result<Vec<DeviceEntry>>;

    /// Read the current status of one light
    async fn get_status(&self, id: &str) -> Result<DeviceStatus>;

    /// Switch a light on or off
    async fn set_on_off(&self, id: &str, on: bool) -> Result<DeviceStatus>;

    /// Set brightness, 1..=100
    async fn set_brightness(&self, id: &str, brightness: u8) -> Result<DeviceStatus>;

    /// Set the color tone, 0..=100 (switches the light to tone mode)
    async fn set_tone(&self, id: &str, tone: u8) -> Result<DeviceStatus>;

    /// Set an RGB color (switches the light to RGB mode)
    async fn set_rgb(&self, id: &str, rgb: Rgb) -> Result<DeviceStatus>;
}
