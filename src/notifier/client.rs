//! Delivery through `reqwest`.

use crate::config::NotifierConfig;
use crate::error::{ProbeError, Result};
use crate::notifier::{Delivery, Notifier, Rejection};
use crate::payload::TimestampPayload;
use reqwest::StatusCode;

/// Posts the payload as JSON to the configured webhook URL.
#[derive(Debug, Clone)]
pub struct ClientNotifier {
    client: reqwest::Client,
    config: NotifierConfig,
}

impl ClientNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_client(config: NotifierConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }
}

impl Notifier for ClientNotifier {
    fn name(&self) -> &'static str {
        "client"
    }

    async fn notify(&self, payload: &TimestampPayload) -> Result<Delivery> {
        let response = self
            .client
            .post(&self.config.webhook_url)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(url = %self.config.webhook_url, status = status.as_u16(), "Webhook answered");

        if status == StatusCode::OK {
            Ok(Delivery::Delivered {
                timestamp: payload.timestamp.clone(),
            })
        } else {
            Ok(Delivery::Rejected(Rejection::Status(status.as_u16())))
        }
    }

    fn describe_error(&self, err: &ProbeError) -> String {
        match err {
            ProbeError::Client(e) => format!("Error sending timestamp: {}", e),
            other => format!("Error sending timestamp: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_is_reported_unwrapped() {
        let notifier = ClientNotifier::new(NotifierConfig::default());
        let err = reqwest::Client::new()
            .post("not a url")
            .build()
            .unwrap_err();

        let message = notifier.describe_error(&ProbeError::from(err));
        assert!(message.starts_with("Error sending timestamp: builder error"), "got {}", message);
        assert!(!message.contains("HTTP client error"));
    }

    #[test]
    fn test_other_errors_keep_their_description() {
        let notifier = ClientNotifier::new(NotifierConfig::default());
        let message = notifier.describe_error(&ProbeError::parse_error("payload"));
        assert_eq!(message, "Error sending timestamp: Failed to parse payload");
    }
}
