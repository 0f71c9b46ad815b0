//! Test utilities for the gateway boundary
//!
//! [`ScriptedGateway`] stands in for the light service. Each device has a
//! simulated status that writes are applied to, and tests may queue explicit
//! replies per device to force failures or unexpected answers. A queued reply
//! can be gated so its response is held back until the test releases it.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus, Error, Result, Rgb};
use tokio::sync::oneshot;

use crate::gateway::DeviceGateway;

/// A status with power on, brightness 40, tone 20 and RGB black.
pub fn test_status() -> DeviceStatus {
    DeviceStatus {
        is_online: true,
        is_on: true,
        brightness: 40,
        use_rgb: false,
        color_tone: 20,
        rgb: Rgb::new(0, 0, 0),
    }
}

/// Creates a test device with the given id and name.
pub fn test_device(id: &str, name: &str) -> DeviceInfo {
    DeviceInfo::new(id, name)
}

/// One recorded gateway call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    ListDevices,
    ListDevicesWithStatus,
    GetStatus(String),
    SetOnOff(String, bool),
    SetBrightness(String, u8),
    SetTone(String, u8),
    SetRgb(String, Rgb),
}

impl GatewayCall {
    pub fn device_id(&self) -> Option<&str> {
        match self {
            GatewayCall::ListDevices | GatewayCall::ListDevicesWithStatus => None,
            GatewayCall::GetStatus(id)
            | GatewayCall::SetOnOff(id, _)
            | GatewayCall::SetBrightness(id, _)
            | GatewayCall::SetTone(id, _)
            | GatewayCall::SetRgb(id, _) => Some(id),
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(
            self,
            GatewayCall::SetOnOff(..)
                | GatewayCall::SetBrightness(..)
                | GatewayCall::SetTone(..)
                | GatewayCall::SetRgb(..)
        )
    }
}

/// A failure the scripted service should report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedFailure {
    Transport(String),
    Api(String),
    NotFound,
}

impl ScriptedFailure {
    fn into_error(self, device_id: Option<&str>) -> Error {
        match self {
            ScriptedFailure::Transport(message) => Error::transport(message),
            ScriptedFailure::Api(message) => Error::api(message),
            ScriptedFailure::NotFound => Error::device_not_found(device_id.unwrap_or_default()),
        }
    }
}

/// Answer for one queued per-device call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedReply {
    Status(DeviceStatus),
    Fail(ScriptedFailure),
}

/// Releases a reply queued with [`ScriptedGateway::push_gated`].
///
/// Dropping the gate releases it too.
#[derive(Debug)]
pub struct ReplyGate(oneshot::Sender<()>);

impl ReplyGate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

#[derive(Debug)]
struct Queued {
    reply: ScriptedReply,
    gate: Option<oneshot::Receiver<()>>,
}

#[derive(Debug, Default)]
struct Inner {
    devices: Vec<DeviceEntry>,
    roster_failure: Option<ScriptedFailure>,
    replies: HashMap<String, VecDeque<Queued>>,
    calls: Vec<GatewayCall>,
}

impl Inner {
    fn entry_mut(&mut self, id: &str) -> Option<&mut DeviceEntry> {
        self.devices.iter_mut().find(|entry| entry.info.id == id)
    }
}

/// In-memory light service for tests
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    inner: Mutex<Inner>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device to the roster. `None` means the service has no status for it.
    pub fn with_device(self, info: DeviceInfo, status: Option<DeviceStatus>) -> Self {
        self.lock().devices.push(DeviceEntry { info, status });
        self
    }

    /// Make every roster fetch fail
    pub fn fail_roster(&self, failure: ScriptedFailure) {
        self.lock().roster_failure = Some(failure);
    }

    /// Queue the answer for the next call about `device_id`
    pub fn push_reply(&self, device_id: &str, reply: ScriptedReply) {
        self.queue(device_id, reply, None);
    }

    /// Queue an answer that is only delivered once the returned gate is released
    pub fn push_gated(&self, device_id: &str, reply: ScriptedReply) -> ReplyGate {
        let (tx, rx) = oneshot::channel();
        self.queue(device_id, reply, Some(rx));
        ReplyGate(tx)
    }

    /// Every call made so far, in call order
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// Calls made about one device
    pub fn calls_for(&self, device_id: &str) -> Vec<GatewayCall> {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.device_id() == Some(device_id))
            .cloned()
            .collect()
    }

    /// Current simulated status of a device
    pub fn status_of(&self, device_id: &str) -> Option<DeviceStatus> {
        self.lock().entry_mut(device_id).and_then(|entry| entry.status)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn queue(&self, device_id: &str, reply: ScriptedReply, gate: Option<oneshot::Receiver<()>>) {
        self.lock()
            .replies
            .entry(device_id.to_string())
            .or_default()
            .push_back(Queued { reply, gate });
    }

    fn roster_call(&self, call: GatewayCall) -> Result<Vec<DeviceEntry>> {
        let mut inner = self.lock();
        inner.calls.push(call);
        if let Some(failure) = inner.roster_failure.clone() {
            return Err(failure.into_error(None));
        }
        Ok(inner.devices.clone())
    }

    /// Record the call, then either take a queued reply or answer from the
    /// simulated status. The lock is released before returning.
    fn begin(&self, call: GatewayCall) -> std::result::Result<Queued, Result<DeviceStatus>> {
        let mut inner = self.lock();
        inner.calls.push(call.clone());

        let id = call.device_id().unwrap_or_default().to_string();
        if let Some(queued) = inner.replies.get_mut(&id).and_then(VecDeque::pop_front) {
            return Ok(queued);
        }

        let Some(entry) = inner.entry_mut(&id) else {
            return Err(Err(Error::device_not_found(id)));
        };
        let Some(status) = entry.status.as_mut() else {
            return Err(Err(Error::api("the device did not respond")));
        };

        match call {
            GatewayCall::SetOnOff(_, on) => status.is_on = on,
            GatewayCall::SetBrightness(_, brightness) => status.brightness = brightness,
            GatewayCall::SetTone(_, tone) => {
                status.color_tone = tone;
                status.use_rgb = false;
            }
            GatewayCall::SetRgb(_, rgb) => {
                status.rgb = rgb;
                status.use_rgb = true;
            }
            _ => {}
        }
        Err(Ok(*status))
    }

    async fn device_call(&self, call: GatewayCall) -> Result<DeviceStatus> {
        let id = call.device_id().map(str::to_string);
        let queued = match self.begin(call) {
            Ok(queued) => queued,
            Err(result) => return result,
        };

        if let Some(gate) = queued.gate {
            // A dropped gate counts as released
            let _ = gate.await;
        }

        match queued.reply {
            ScriptedReply::Status(status) => Ok(status),
            ScriptedReply::Fail(failure) => Err(failure.into_error(id.as_deref())),
        }
    }
}

impl DeviceGateway for ScriptedGateway {
    async fn list_devices(&self) -> Result<Vec<DeviceInfo>> {
        let entries = self.roster_call(GatewayCall::ListDevices)?;
        Ok(entries.into_iter().map(|entry| entry.info).collect())
    }

    async fn list_devices_with_status(&self) -> Result<Vec<DeviceEntry>> {
        self.roster_call(GatewayCall::ListDevicesWithStatus)
    }

    async fn get_status(&self, id: &str) -> Result<DeviceStatus> {
        self.device_call(GatewayCall::GetStatus(id.to_string()))
            .await
    }

    async fn set_on_off(&self, id: &str, on: bool) -> Result<DeviceStatus> {
        self.device_call(GatewayCall::SetOnOff(id.to_string(), on))
            .await
    }

    async fn set_brightness(&self, id: &str, brightness: u8) -> Result<DeviceStatus> {
        self.device_call(GatewayCall::SetBrightness(id.to_string(), brightness))
            .await
    }

    async fn set_tone(&self, id: &str, tone: u8) -> Result<DeviceStatus> {
        self.device_call(GatewayCall::SetTone(id.to_string(), tone))
            .await
    }

    async fn set_rgb(&self, id: &str, rgb: Rgb) -> Result<DeviceStatus> {
        self.device_call(GatewayCall::SetRgb(id.to_string(), rgb))
            .await
    }
}
