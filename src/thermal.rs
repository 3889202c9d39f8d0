//! CPU temperature from the sysfs thermal zone.

use crate::config::ThermalConfig;
use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// A temperature reading as exposed by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    /// Millidegrees Celsius
    pub millidegrees: i64,
}

impl Temperature {
    pub fn from_millidegrees(millidegrees: i64) -> Self {
        Self { millidegrees }
    }

    pub fn celsius(&self) -> f64 {
        self.millidegrees as f64 / 1000.0
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°C", self.celsius())
    }
}

/// Read the temperature of the configured thermal zone.
pub fn read_cpu_temperature(config: &ThermalConfig) -> Result<Temperature> {
    read_temperature(&config.zone_path)
}

/// Read a sysfs temperature file holding a single integer in millidegrees.
pub fn read_temperature(path: impl AsRef<Path>) -> Result<Temperature> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ProbeError::thermal_error(path.display().to_string(), e))?;

    let temperature = parse_millidegrees(&content).map(Temperature::from_millidegrees)?;
    tracing::debug!(path = %path.display(), millidegrees = temperature.millidegrees, "Read thermal zone");

    Ok(temperature)
}

/// Parse the leading integer of a sysfs temperature file.
///
/// Leading whitespace is skipped and anything after the digits is ignored,
/// so `"36500abc"` reads as 36500.
pub fn parse_millidegrees(content: &str) -> Result<i64> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Err(ProbeError::parse_error("thermal zone: file is empty"));
    }

    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(ProbeError::parse_error(format!(
            "thermal zone value {:?}: no leading integer",
            trimmed.lines().next().unwrap_or_default()
        )));
    }

    let value = &trimmed[..sign_len + digits];
    value
        .parse::<i64>()
        .map_err(|e| ProbeError::parse_error(format!("thermal zone value {:?}: {}", value, e)))
}
