//! Error handling for the edge probe crate.

/// A specialized `Result` type for edge probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// The main error type for edge probe operations.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Hostname could not be resolved to an IPv4 address
    #[error("no such host: {0}")]
    Resolve(String),

    /// TCP connection to the resolved address failed
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the request to the socket failed
    #[error("failed to send request: {0}")]
    Transmit(#[source] std::io::Error),

    /// Reading the response failed before any byte arrived
    #[error("failed to receive response: {0}")]
    Receive(#[source] std::io::Error),

    /// The HTTP client library reported an error
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Payload serialization failed
    #[error("payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),

    /// The thermal zone file could not be read
    #[error("{path}: {source}")]
    Thermal {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Sysfs content was not in the expected format
    #[error("Failed to parse {0}")]
    Parse(String),
}

impl ProbeError {
    /// Create a new host resolution error
    pub fn resolve_error(host: impl Into<String>) -> Self {
        Self::Resolve(host.into())
    }

    /// Create a new connection error
    pub fn connect_error(addr: impl Into<String>, source: std::io::Error) -> Self {
        Self::Connect {
            addr: addr.into(),
            source,
        }
    }

    /// Create a new thermal zone read error
    pub fn thermal_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Thermal {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
