//! Timestamp payload carried by both notifiers.

use crate::error::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;

/// Format of the human-readable `timestamp` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fallback used when the board serial number cannot be read.
pub const UNKNOWN_DEVICE: &str = "unknown-device";

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampPayload {
    /// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Seconds since the Unix epoch for the same instant
    pub unix_timestamp: i64,
    /// Free-form status message
    pub message: String,
    /// Board serial number, only sent when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl TimestampPayload {
    /// Capture the current local time.
    pub fn capture(message: impl Into<String>) -> Self {
        Self::at(Local::now(), message)
    }

    /// Build a payload for a given instant.
    pub fn at(time: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            unix_timestamp: time.timestamp(),
            message: message.into(),
            device_id: None,
        }
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Serialize to the compact JSON sent on the wire.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Read the board serial number from `/proc/cpuinfo`.
pub fn read_device_id() -> String {
    fs::read_to_string("/proc/cpuinfo")
        .ok()
        .and_then(|cpuinfo| parse_device_serial(&cpuinfo))
        .unwrap_or_else(|| {
            tracing::debug!("No serial number in /proc/cpuinfo, using fallback device id");
            UNKNOWN_DEVICE.to_string()
        })
}

/// Extract the value of the `Serial` line from cpuinfo text.
pub fn parse_device_serial(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter(|line| line.starts_with("Serial"))
        .find_map(|line| line.split_once(':'))
        .map(|(_, serial)| serial.trim().to_string())
        .filter(|serial| !serial.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    fn fixed_time() -> DateTime<Local> {
        let naive = NaiveDateTime::parse_from_str("2024-03-15 12:30:45", TIMESTAMP_FORMAT).unwrap();
        Local.from_local_datetime(&naive).earliest().unwrap()
    }

    #[test]
    fn test_payload_formats_both_representations() {
        let time = fixed_time();
        let payload = TimestampPayload::at(time, "Code is working!");

        assert_eq!(payload.timestamp, "2024-03-15 12:30:45");
        assert_eq!(payload.unix_timestamp, time.timestamp());
        assert_eq!(payload.device_id, None);
    }

    #[test]
    fn test_json_has_exactly_three_fields() {
        let json = TimestampPayload::at(fixed_time(), "Code is working!")
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert!(object["timestamp"].is_string());
        assert!(object["unix_timestamp"].is_i64());
        assert_eq!(object["message"], "Code is working!");
    }

    #[test]
    fn test_device_id_adds_one_field() {
        let json = TimestampPayload::at(fixed_time(), "Code is working!")
            .with_device_id("10000000abcdef01")
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_object().unwrap().len(), 4);
        assert_eq!(value["device_id"], "10000000abcdef01");
    }

    #[test]
    fn test_parse_device_serial() {
        let cpuinfo = "processor\t: 0\nHardware\t: BCM2835\nRevision\t: a02082\nSerial\t\t: 00000000deadbeef\nModel\t\t: Raspberry Pi 3 Model B Rev 1.2\n";
        assert_eq!(parse_device_serial(cpuinfo), Some("00000000deadbeef".to_string()));

        assert_eq!(parse_device_serial("processor\t: 0\nmodel name\t: x86\n"), None);
        assert_eq!(parse_device_serial("Serial\t\t: \n"), None);
    }
}
