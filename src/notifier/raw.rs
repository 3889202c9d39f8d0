//! Hand-built HTTP/1.1 delivery over a plain TCP connection.

use crate::config::NotifierConfig;
use crate::error::{ProbeError, Result};
use crate::http::response::expected_length;
use crate::http::{PostRequest, RawResponse};
use crate::notifier::{Delivery, Notifier, Rejection};
use crate::payload::TimestampPayload;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpStream};

/// Read chunk size
const BUFFER_SIZE: usize = 4096;

/// Upper bound on response bytes kept for inspection
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Posts the payload by writing raw HTTP to a `TcpStream`.
#[derive(Debug, Clone)]
pub struct RawSocketNotifier {
    config: NotifierConfig,
}

impl RawSocketNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Build the request that would be sent for `payload`.
    pub fn build_request(&self, payload: &TimestampPayload) -> Result<PostRequest> {
        Ok(PostRequest::json(
            self.config.host.as_str(),
            self.config.path.as_str(),
            payload.to_json()?,
        ))
    }

    /// Write the request and read the response on an open connection.
    async fn exchange(&self, stream: &mut TcpStream, request: &PostRequest) -> Result<RawResponse> {
        stream
            .write_all(&request.to_bytes())
            .await
            .map_err(ProbeError::Transmit)?;
        stream.flush().await.map_err(ProbeError::Transmit)?;

        tracing::trace!(bytes = request.content_length(), "Request body sent");

        read_response(stream).await
    }
}

impl Notifier for RawSocketNotifier {
    fn name(&self) -> &'static str {
        "raw-socket"
    }

    async fn notify(&self, payload: &TimestampPayload) -> Result<Delivery> {
        let request = self.build_request(payload)?;
        let addr = resolve_ipv4(&self.config.host, self.config.port).await?;

        tracing::debug!(host = %self.config.host, %addr, "Resolved host");

        let mut stream = TcpStream::connect(addr)
            .await
            .map_err(|e| ProbeError::connect_error(addr.to_string(), e))?;

        tracing::trace!(%addr, "Connected");

        // The stream is dropped, and the socket closed, on every path out of here.
        let response = self.exchange(&mut stream, &request).await?;

        tracing::debug!(
            bytes = response.len(),
            status = ?response.status_code(),
            "Response received"
        );

        if response.is_ok() {
            Ok(Delivery::Delivered {
                timestamp: payload.timestamp.clone(),
            })
        } else {
            Ok(Delivery::Rejected(Rejection::Response(response.preview())))
        }
    }

    fn describe_error(&self, err: &ProbeError) -> String {
        match err {
            ProbeError::Resolve(_) => "Error: no such host".to_string(),
            ProbeError::Connect { .. } => "Error connecting to server".to_string(),
            ProbeError::Transmit(_) => "Error sending request".to_string(),
            ProbeError::Receive(_) => "Error receiving response".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

/// Resolve `host` to its first IPv4 address.
pub async fn resolve_ipv4(host: &str, port: u16) -> Result<SocketAddr> {
    let mut addrs = lookup_host((host, port)).await.map_err(|e| {
        tracing::debug!(host, error = %e, "Host lookup failed");
        ProbeError::resolve_error(host)
    })?;

    addrs
        .find(SocketAddr::is_ipv4)
        .ok_or_else(|| ProbeError::resolve_error(host))
}

/// Read until the response is complete, the peer closes the connection, or
/// the size cap is hit.
///
/// A response is complete once its headers and `Content-Length` body bytes
/// have arrived, so servers that keep the connection open do not stall us.
async fn read_response(stream: &mut TcpStream) -> Result<RawResponse> {
    let mut buffer = Vec::with_capacity(BUFFER_SIZE);
    let mut chunk = [0u8; BUFFER_SIZE];

    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buffer.extend_from_slice(&chunk[..n]);
                if let Some(total) = expected_length(&buffer) {
                    if buffer.len() >= total {
                        tracing::trace!(bytes = buffer.len(), "Response complete");
                        break;
                    }
                }
                if buffer.len() >= MAX_RESPONSE_BYTES {
                    buffer.truncate(MAX_RESPONSE_BYTES);
                    tracing::debug!("Response exceeds inspection limit, truncating");
                    break;
                }
            }
            Err(e) if buffer.is_empty() => return Err(ProbeError::Receive(e)),
            Err(e) => {
                tracing::debug!(error = %e, received = buffer.len(), "Read ended early");
                break;
            }
        }
    }

    Ok(RawResponse::new(buffer))
}
