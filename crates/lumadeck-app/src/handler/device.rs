//! Roster and device operation handlers

use lumadeck_core::prelude::*;
use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus};

use crate::device::DeviceOperation;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Issue a roster fetch
pub fn handle_load_devices(state: &mut AppState) -> UpdateResult {
    state.devices.begin_load();
    UpdateResult::action(UpdateAction::ListDevices {
        with_status: state.settings.gateway.combined_fetch,
    })
}

pub fn handle_devices_loaded(state: &mut AppState, devices: Vec<DeviceInfo>) -> UpdateResult {
    let ids = state.devices.load_succeeded(devices);
    refresh_devices(state, ids)
}

pub fn handle_devices_with_status_loaded(
    state: &mut AppState,
    entries: Vec<DeviceEntry>,
) -> UpdateResult {
    let ids = state.devices.load_succeeded_with_status(entries);
    refresh_devices(state, ids)
}

pub fn handle_refresh(state: &mut AppState, device_id: &str) -> UpdateResult {
    start_operation(state, device_id, DeviceOperation::Refresh)
}

pub fn handle_refresh_all(state: &mut AppState) -> UpdateResult {
    let ids = state.devices.ids();
    refresh_devices(state, ids)
}

pub fn handle_toggle(state: &mut AppState, device_id: &str) -> UpdateResult {
    let Some(device) = state.devices.get_mut(device_id) else {
        warn!("Toggle for unknown device {}", device_id);
        return UpdateResult::none();
    };

    match device.toggle_operation() {
        Ok(operation) => start_operation(state, device_id, operation),
        Err(e) => {
            device.fail_locally(&e);
            UpdateResult::none()
        }
    }
}

/// Start one remote operation: mark the device as loading and hand the call
/// to the event loop.
pub fn start_operation(
    state: &mut AppState,
    device_id: &str,
    operation: DeviceOperation,
) -> UpdateResult {
    let Some(device) = state.devices.get_mut(device_id) else {
        warn!("{} for unknown device {}", operation.name(), device_id);
        return UpdateResult::none();
    };

    device.begin(&operation);
    UpdateResult::action(UpdateAction::RunDeviceOperation {
        device_id: device_id.to_string(),
        operation,
    })
}

fn refresh_devices(state: &mut AppState, device_ids: Vec<String>) -> UpdateResult {
    if device_ids.is_empty() {
        return UpdateResult::none();
    }

    for id in &device_ids {
        if let Some(device) = state.devices.get_mut(id) {
            device.begin(&DeviceOperation::Refresh);
        }
    }
    UpdateResult::action(UpdateAction::RefreshDevices { device_ids })
}

pub fn handle_status_received(
    state: &mut AppState,
    device_id: &str,
    status: DeviceStatus,
) -> UpdateResult {
    match state.devices.get_mut(device_id) {
        Some(device) => device.apply_status(status),
        None => debug!("Status for unknown device {} dropped", device_id),
    }
    UpdateResult::none()
}

pub fn handle_operation_failed(
    state: &mut AppState,
    device_id: &str,
    error: String,
) -> UpdateResult {
    match state.devices.get_mut(device_id) {
        Some(device) => device.apply_failure(error),
        None => debug!("Failure for unknown device {} dropped: {}", device_id, error),
    }
    UpdateResult::none()
}
