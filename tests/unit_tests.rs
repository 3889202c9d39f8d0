use edge_probe::{
    error::ProbeError,
    http::PostRequest,
    payload::TIMESTAMP_FORMAT,
    thermal::read_temperature,
    NotifierConfig, RawSocketNotifier, TimestampPayload,
};
use chrono::{Local, NaiveDateTime, TimeZone};
use std::path::PathBuf;

/// Write `content` to a fresh file under the system temp directory.
fn temp_zone_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("edge_probe_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("Should create temp dir");
    let path = dir.join("temp");
    std::fs::write(&path, content).expect("Should write zone file");
    path
}

/// Test the payload JSON schema
#[test]
fn test_payload_json_schema() {
    let payload = TimestampPayload::capture("Code is working!");
    let json_str = payload.to_json().expect("Should serialize");
    let json_value: serde_json::Value = serde_json::from_str(&json_str).expect("Should parse JSON");
    let object = json_value.as_object().expect("Should be an object");

    assert_eq!(object.len(), 3);
    assert_eq!(object["message"], "Code is working!");

    // timestamp and unix_timestamp describe the same local instant
    let timestamp = object["timestamp"].as_str().expect("timestamp should be a string");
    let unix_timestamp = object["unix_timestamp"].as_i64().expect("unix_timestamp should be an integer");
    let naive = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
        .expect("timestamp should match YYYY-MM-DD HH:MM:SS");
    let candidates: Vec<i64> = Local
        .from_local_datetime(&naive)
        .earliest()
        .into_iter()
        .chain(Local.from_local_datetime(&naive).latest())
        .map(|t| t.timestamp())
        .collect();
    assert!(candidates.contains(&unix_timestamp), "{} not in {:?}", unix_timestamp, candidates);
}

/// Test that Content-Length always matches the body
#[test]
fn test_request_content_length() {
    let notifier = RawSocketNotifier::new(NotifierConfig::default());
    let payload = TimestampPayload::capture("Code is working!").with_device_id("unknown-device");
    let request = notifier.build_request(&payload).expect("Should build request");

    let bytes = request.to_bytes();
    let text = String::from_utf8(bytes).expect("Should be UTF-8");
    let (head, body) = text.split_once("\r\n\r\n").expect("Should have header terminator");

    assert!(head.contains(&format!("Content-Length: {}", body.len())));
    assert_eq!(body, payload.to_json().unwrap());

    let non_ascii = PostRequest::json("localhost", "/", r#"{"message":"°C"}"#);
    assert_eq!(non_ascii.content_length(), r#"{"message":"°C"}"#.len());
}

/// Test reading a sysfs-style temperature file
#[test]
fn test_temperature_file() {
    let path = temp_zone_file("ok", "36500\n");
    let temperature = read_temperature(&path).expect("Should read temperature");

    assert_eq!(temperature.millidegrees, 36500);
    assert_eq!(format!("CPU Temperature: {}", temperature), "CPU Temperature: 36.50°C");
}

/// Test error reporting for unreadable or malformed zones
#[test]
fn test_temperature_errors() {
    let missing = std::env::temp_dir().join("edge_probe_missing_zone/temp");
    let err = read_temperature(&missing).expect_err("Missing file should fail");
    assert!(matches!(err, ProbeError::Thermal { .. }));

    let path = temp_zone_file("garbage", "n/a\n");
    let err = read_temperature(&path).expect_err("Garbage should fail");
    assert!(matches!(err, ProbeError::Parse(_)));
}

/// Test ProbeError formatting
#[test]
fn test_probe_error_types() {
    let resolve = ProbeError::resolve_error("httpbin.org");
    assert!(format!("{}", resolve).contains("httpbin.org"));

    let parse = ProbeError::parse_error("thermal zone value");
    assert!(format!("{}", parse).contains("thermal zone value"));

    let io = std::io::Error::from(std::io::ErrorKind::NotFound);
    let thermal = ProbeError::thermal_error("/sys/class/thermal/thermal_zone0/temp", io);
    assert!(format!("{}", thermal).starts_with("/sys/class/thermal/thermal_zone0/temp"));
}
