//! Light service wire format
//!
//! Responses are JSON. Any object carrying an `"error"` key is a
//! service-reported failure, whatever the HTTP status. Status reads and
//! writes answer with an array of statuses, one per requested id.

use lumadeck_core::prelude::*;
use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus, DEVICE_NOT_FOUND_MESSAGE};
use serde::Deserialize;
use serde_json::Value;

/// Roster entry as sent by `/api/devices`
#[derive(Debug, Deserialize)]
struct WireDevice {
    id: String,
    name: String,
    #[serde(default)]
    status: Option<DeviceStatus>,
}

impl From<WireDevice> for DeviceEntry {
    fn from(wire: WireDevice) -> Self {
        DeviceEntry {
            info: DeviceInfo::new(wire.id, wire.name),
            status: wire.status.map(DeviceStatus::normalized),
        }
    }
}

/// Parse a response body and surface the service's error channel.
///
/// `device_id` is the id the request was about, used to turn the service's
/// "no device" message into [`Error::DeviceNotFound`].
pub fn parse_body(http_status: u16, body: &str, device_id: Option<&str>) -> Result<Value> {
    let is_success = (200..300).contains(&http_status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if is_success => {
            return Err(Error::protocol(format!("invalid JSON: {}", e)));
        }
        Err(_) => {
            return Err(Error::api(format!(
                "request failed with HTTP status {}",
                http_status
            )));
        }
    };

    if let Some(message) = error_message(&value) {
        return Err(match device_id {
            Some(id) if message == DEVICE_NOT_FOUND_MESSAGE => Error::device_not_found(id),
            _ => Error::api(message),
        });
    }

    if !is_success {
        return Err(Error::api(format!(
            "request failed with HTTP status {}",
            http_status
        )));
    }

    Ok(value)
}

/// Extract the message of an `{"error": ...}` payload
fn error_message(value: &Value) -> Option<String> {
    let error = value.as_object()?.get("error")?;
    Some(match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Decode the roster, keeping any embedded status
pub fn decode_roster(value: Value) -> Result<Vec<DeviceEntry>> {
    let devices: Vec<WireDevice> = serde_json::from_value(value)
        .map_err(|e| Error::protocol(format!("malformed device list: {}", e)))?;
    Ok(devices.into_iter().map(DeviceEntry::from).collect())
}

/// Decode a status array and return the first (only) status
pub fn decode_status(value: Value) -> Result<DeviceStatus> {
    let statuses: Vec<DeviceStatus> = serde_json::from_value(value)
        .map_err(|e| Error::protocol(format!("malformed status: {}", e)))?;
    statuses
        .into_iter()
        .next()
        .map(DeviceStatus::normalized)
        .ok_or_else(|| Error::protocol("empty status list"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumadeck_core::Rgb;

    const STATUS_JSON: &str = r#"[{"is_online":true,"is_on":true,"brightness":40,
        "color_tone":20,"use_rgb":false,"rgb":[0,0,0]}]"#;

    #[test]
    fn test_parse_body_passes_plain_values_through() {
        let value = parse_body(200, STATUS_JSON, Some("a")).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_error_envelope_becomes_api_error() {
        let err = parse_body(500, r#"{"error":"the device cannot be reached"}"#, Some("a"))
            .unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
        assert_eq!(err.to_string(), "the device cannot be reached");
    }

    #[test]
    fn test_error_envelope_wins_even_with_success_status() {
        let err = parse_body(200, r#"{"error":"bad"}"#, None).unwrap_err();
        assert_eq!(err.to_string(), "bad");
    }

    #[test]
    fn test_unknown_device_is_distinguishable() {
        let body = format!(r#"{{"error":"{}"}}"#, DEVICE_NOT_FOUND_MESSAGE);
        let err = parse_body(500, &body, Some("dev-9")).unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound { ref id } if id == "dev-9"));
    }

    #[test]
    fn test_non_json_failure_reports_http_status() {
        let err = parse_body(401, "Unauthorised.\n", None).unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_non_json_success_is_protocol_error() {
        let err = parse_body(200, "<html>", None).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_status_takes_first_entry() {
        let value = parse_body(200, STATUS_JSON, None).unwrap();
        let status = decode_status(value).unwrap();
        assert!(status.is_on);
        assert_eq!(status.brightness, 40);
        assert_eq!(status.rgb, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_decode_status_rejects_empty_list() {
        let err = decode_status(Value::Array(vec![])).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
    }

    #[test]
    fn test_decode_status_rejects_malformed_status() {
        let value: Value = serde_json::from_str(r#"[{"is_on":"yes"}]"#).unwrap();
        assert!(matches!(
            decode_status(value),
            Err(Error::Protocol { .. })
        ));
    }

    #[test]
    fn test_decode_status_normalizes_offline_zero_values() {
        let value: Value = serde_json::from_str(
            r#"[{"is_online":false,"is_on":false,"brightness":0,"color_tone":0,
                "use_rgb":false,"rgb":[0,0,0]}]"#,
        )
        .unwrap();
        let status = decode_status(value).unwrap();
        assert!(!status.is_online);
        assert_eq!(status.brightness, 1);
    }

    #[test]
    fn test_decode_roster_with_and_without_status() {
        let value: Value = serde_json::from_str(
            r#"[
                {"id":"a","name":"Desk","status":{"is_online":true,"is_on":false,
                  "brightness":70,"color_tone":50,"use_rgb":true,"rgb":[17,34,51]}},
                {"id":"b","name":"Hall"}
            ]"#,
        )
        .unwrap();
        let entries = decode_roster(value).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].info, DeviceInfo::new("a", "Desk"));
        assert_eq!(entries[0].status.map(|s| s.rgb), Some(Rgb::new(17, 34, 51)));
        assert_eq!(entries[1].info.name, "Hall");
        assert!(entries[1].status.is_none());
    }

    #[test]
    fn test_decode_roster_rejects_non_array() {
        let value: Value = serde_json::from_str(r#"{"devices":[]}"#).unwrap();
        assert!(matches!(decode_roster(value), Err(Error::Protocol { .. })));
    }
}
