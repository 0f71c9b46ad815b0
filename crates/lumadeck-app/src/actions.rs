//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every remote call runs in its own tokio task and reports back through the
//! message channel. Completions are applied in the order they arrive there.

use std::sync::Arc;

use lumadeck_core::prelude::*;
use lumadeck_core::DeviceStatus;
use lumadeck_gateway::DeviceGateway;
use tokio::sync::mpsc;

use crate::device::DeviceOperation;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning background tasks
pub fn handle_action<G>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, gateway: Arc<G>)
where
    G: DeviceGateway + Send + Sync + 'static,
{
    match action {
        UpdateAction::ListDevices { with_status } => {
            spawn_list_devices(gateway, msg_tx, with_status);
        }

        UpdateAction::RefreshDevices { device_ids } => {
            for device_id in device_ids {
                spawn_device_operation(
                    gateway.clone(),
                    msg_tx.clone(),
                    device_id,
                    DeviceOperation::Refresh,
                );
            }
        }

        UpdateAction::RunDeviceOperation {
            device_id,
            operation,
        } => {
            spawn_device_operation(gateway, msg_tx, device_id, operation);
        }
    }
}

fn spawn_list_devices<G>(gateway: Arc<G>, msg_tx: mpsc::Sender<Message>, with_status: bool)
where
    G: DeviceGateway + Send + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Fetching device list (with_status={})", with_status);
        let message = if with_status {
            match gateway.list_devices_with_status().await {
                Ok(entries) => Message::DevicesWithStatusLoaded { entries },
                Err(e) => Message::DevicesLoadFailed {
                    error: e.to_string(),
                },
            }
        } else {
            match gateway.list_devices().await {
                Ok(devices) => Message::DevicesLoaded { devices },
                Err(e) => Message::DevicesLoadFailed {
                    error: e.to_string(),
                },
            }
        };
        if let Err(e) = deliver(&msg_tx, message).await {
            debug!("Roster result dropped: {}", e);
        }
    });
}

fn spawn_device_operation<G>(
    gateway: Arc<G>,
    msg_tx: mpsc::Sender<Message>,
    device_id: String,
    operation: DeviceOperation,
) where
    G: DeviceGateway + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let result = perform_operation(gateway.as_ref(), &device_id, operation).await;
        let message = completion_message(device_id.clone(), result);
        if let Err(e) = deliver(&msg_tx, message).await {
            debug!("{}: completion dropped: {}", device_id, e);
        }
    });
}

/// Hand a result back to the engine. Fails once the engine has shut down.
async fn deliver(msg_tx: &mpsc::Sender<Message>, message: Message) -> Result<()> {
    msg_tx
        .send(message)
        .await
        .map_err(|_| Error::ChannelClosed)
}

/// Run one remote operation against the gateway
#[instrument(level = "debug", skip(gateway))]
pub async fn perform_operation<G>(
    gateway: &G,
    device_id: &str,
    operation: DeviceOperation,
) -> Result<DeviceStatus>
where
    G: DeviceGateway + Sync,
{
    debug!("{}: {}", device_id, operation.name());
    match operation {
        DeviceOperation::Refresh => gateway.get_status(device_id).await,
        DeviceOperation::SetOnOff(on) => gateway.set_on_off(device_id, on).await,
        DeviceOperation::SetBrightness(value) => gateway.set_brightness(device_id, value).await,
        DeviceOperation::SetTone(tone) => gateway.set_tone(device_id, tone).await,
        DeviceOperation::SetRgb(rgb) => gateway.set_rgb(device_id, rgb).await,
    }
}

/// Turn an operation result into its completion message
pub fn completion_message(device_id: String, result: Result<DeviceStatus>) -> Message {
    match result {
        Ok(status) => Message::DeviceStatusReceived { device_id, status },
        Err(e) => Message::DeviceOperationFailed {
            device_id,
            error: e.to_string(),
        },
    }
}
