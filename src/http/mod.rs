//! Minimal HTTP/1.1 wire types for the raw-socket notifier.
//!
//! - **`request`**: builds the outbound POST request byte-for-byte
//! - **`response`**: holds the raw bytes read back and inspects the status line
//!
//! No parsing beyond what the notifier needs: the request is written once and
//! the response is only checked for a `200` status line.

pub mod request;
pub mod response;

pub use request::PostRequest;
pub use response::RawResponse;

/// Protocol version used on the request line and matched in responses.
pub const HTTP_VERSION: &str = "HTTP/1.1";
