//! Static endpoint and sensor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the timestamp notifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Host the raw-socket notifier connects to
    pub host: String,
    /// Port the raw-socket notifier connects to
    pub port: u16,
    /// Request path for the raw-socket notifier
    pub path: String,
    /// Webhook URL for the client notifier
    pub webhook_url: String,
    /// Message carried in every payload
    pub message: String,
    /// Whether to attach the board serial number as `device_id`
    pub include_device_id: bool,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            path: crate::DEFAULT_PATH.to_string(),
            webhook_url: crate::DEFAULT_WEBHOOK_URL.to_string(),
            message: crate::DEFAULT_MESSAGE.to_string(),
            include_device_id: false,
        }
    }
}

impl NotifierConfig {
    /// Create a configuration targeting a custom host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = url.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_device_id(mut self, include: bool) -> Self {
        self.include_device_id = include;
        self
    }

    /// Get the `host:port` pair used for resolution.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration for the CPU temperature reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThermalConfig {
    /// Sysfs file holding the temperature in millidegrees Celsius
    pub zone_path: String,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            zone_path: crate::DEFAULT_THERMAL_ZONE.to_string(),
        }
    }
}

impl ThermalConfig {
    pub fn with_zone_path(mut self, path: impl Into<String>) -> Self {
        self.zone_path = path.into();
        self
    }
}
