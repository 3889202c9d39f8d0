//! Timestamp notifiers.
//!
//! Two delivery paths share one payload contract:
//!
//! - [`RawSocketNotifier`] resolves the host itself, writes a hand-built
//!   HTTP/1.1 request over a `TcpStream` and inspects the raw response.
//! - [`ClientNotifier`] hands the same payload to `reqwest`.
//!
//! Every attempt is single-shot. Failures are reported, never retried.

pub mod client;
pub mod raw;

pub use client::ClientNotifier;
pub use raw::RawSocketNotifier;

use crate::config::NotifierConfig;
use crate::error::{ProbeError, Result};
use crate::payload::{read_device_id, TimestampPayload};
use std::fmt;

/// Outcome of an attempt that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The server answered with status 200
    Delivered { timestamp: String },
    /// The server answered with anything else
    Rejected(Rejection),
}

/// What the server sent back instead of a 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Leading bytes of an unparsed response
    Response(String),
    /// Status code reported by the HTTP client
    Status(u16),
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Delivery::Delivered { .. })
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delivery::Delivered { timestamp } => {
                write!(f, "Timestamp sent successfully now: {}", timestamp)
            }
            Delivery::Rejected(Rejection::Response(preview)) => {
                write!(f, "Request failed. Response: {}", preview)
            }
            Delivery::Rejected(Rejection::Status(code)) => {
                write!(f, "Failed to send timestamp: {}", code)
            }
        }
    }
}

/// A single-attempt delivery mechanism for timestamp payloads.
pub trait Notifier {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Deliver `payload` once.
    fn notify(
        &self,
        payload: &TimestampPayload,
    ) -> impl std::future::Future<Output = Result<Delivery>> + Send;

    /// Human-readable line for a failed attempt.
    fn describe_error(&self, err: &ProbeError) -> String {
        format!("Error sending timestamp: {}", err)
    }
}

/// Build the payload described by `config`.
pub fn build_payload(config: &NotifierConfig) -> TimestampPayload {
    let payload = TimestampPayload::capture(config.message.as_str());
    if config.include_device_id {
        payload.with_device_id(read_device_id())
    } else {
        payload
    }
}

/// Deliver `payload` and turn the outcome into the line printed to the user.
pub async fn send_timestamp<N: Notifier>(notifier: &N, payload: &TimestampPayload) -> String {
    tracing::debug!(
        notifier = notifier.name(),
        timestamp = %payload.timestamp,
        unix_timestamp = payload.unix_timestamp,
        "Sending timestamp"
    );

    match notifier.notify(payload).await {
        Ok(delivery) => {
            if delivery.is_delivered() {
                tracing::info!(notifier = notifier.name(), "Timestamp delivered");
            } else {
                tracing::warn!(notifier = notifier.name(), outcome = ?delivery, "Timestamp rejected");
            }
            delivery.to_string()
        }
        Err(err) => {
            tracing::warn!(notifier = notifier.name(), error = %err, "Notification attempt failed");
            notifier.describe_error(&err)
        }
    }
}
