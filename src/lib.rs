//! # Edge Probe - small diagnostics for edge devices
//!
//! Three one-shot utilities that run on a Raspberry Pi class board:
//!
//! - **Raw-socket notifier**: posts a JSON timestamp with a hand-built HTTP/1.1 request
//! - **Client notifier**: posts the same payload through `reqwest`
//! - **Temperature reader**: reads the CPU thermal zone from sysfs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edge_probe::{build_payload, send_timestamp, NotifierConfig, RawSocketNotifier};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = NotifierConfig::default();
//!     let payload = build_payload(&config);
//!     let notifier = RawSocketNotifier::new(config);
//!
//!     println!("{}", send_timestamp(&notifier, &payload).await);
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod notifier;
pub mod payload;
pub mod thermal;

// Re-export public API
pub use config::{NotifierConfig, ThermalConfig};
pub use error::{ProbeError, Result};
pub use notifier::{
    build_payload, send_timestamp, ClientNotifier, Delivery, Notifier, RawSocketNotifier,
    Rejection,
};
pub use payload::TimestampPayload;
pub use thermal::{read_cpu_temperature, Temperature};

/// Host the raw-socket notifier posts to
pub const DEFAULT_HOST: &str = "httpbin.org";

/// Plain HTTP port used by the raw-socket notifier
pub const DEFAULT_PORT: u16 = 80;

/// Request path on [`DEFAULT_HOST`]
pub const DEFAULT_PATH: &str = "/post";

/// Webhook used by the client notifier
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://webhook.site/6805d787-f0e8-4f13-b90f-84fe8719b06c";

/// Message carried in every payload
pub const DEFAULT_MESSAGE: &str = "Code is working!";

/// CPU thermal zone on Raspberry Pi boards
pub const DEFAULT_THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";
