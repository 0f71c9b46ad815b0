//! One-shot `--list` mode
//!
//! Fetches the roster, reads every device's status concurrently and prints
//! one JSON object per device (NDJSON) to stdout, in roster order.
//!
//! ```json
//! {"id":"a1","name":"Desk","status":{"is_online":true,"is_on":true,"brightness":40,"use_rgb":false,"color_tone":20,"rgb":[0,0,0]}}
//! {"id":"b2","name":"Porch","error":"the device did not respond"}
//! ```

use std::io::{self, Write};

use futures_util::future::join_all;
use lumadeck_core::prelude::*;
use lumadeck_core::DeviceStatus;
use lumadeck_gateway::DeviceGateway;
use serde::Serialize;

/// One output line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceRecord {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,

    /// Why the status read failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Roster plus one status read per device. A failed status read becomes
/// that record's `error`; a failed roster fetch fails the whole listing.
pub async fn collect_records<G>(gateway: &G) -> Result<Vec<DeviceRecord>>
where
    G: DeviceGateway + Sync,
{
    let devices = gateway.list_devices().await?;
    debug!("Listing {} devices", devices.len());

    let reads = devices.iter().map(|device| gateway.get_status(&device.id));
    let results = join_all(reads).await;

    Ok(devices
        .into_iter()
        .zip(results)
        .map(|(info, result)| match result {
            Ok(status) => DeviceRecord {
                id: info.id,
                name: info.name,
                status: Some(status),
                error: None,
            },
            Err(e) => {
                warn!("Status read for {} failed: {}", info.id, e);
                DeviceRecord {
                    id: info.id,
                    name: info.name,
                    status: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect())
}

/// Write records as NDJSON
pub fn write_records(records: &[DeviceRecord], out: &mut impl Write) -> Result<()> {
    for record in records {
        writeln!(out, "{}", serde_json::to_string(record)?)?;
    }
    out.flush()?;
    Ok(())
}

pub async fn run<G>(gateway: &G) -> Result<()>
where
    G: DeviceGateway + Sync,
{
    let records = collect_records(gateway).await?;
    write_records(&records, &mut io::stdout().lock()).context("Failed to write device records")
}
