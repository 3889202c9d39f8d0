use crate::http::HTTP_VERSION;

/// Media type of every body this crate sends.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// A fully specified HTTP/1.1 POST request.
///
/// Headers are emitted in a fixed order: `Host`, `Content-Type`,
/// `Content-Length`, `Connection`. `Content-Length` is always derived from the
/// body so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
    path: String,
    host: String,
    body: String,
}

impl PostRequest {
    /// Create a JSON POST request for `path` on `host`.
    pub fn json(host: impl Into<String>, path: impl Into<String>, body: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path },
            host: host.into(),
            body: body.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Byte length of the body, as advertised in `Content-Length`.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }

    /// Header name/value pairs in wire order.
    pub fn headers(&self) -> [(&'static str, String); 4] {
        [
            ("Host", self.host.clone()),
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
            ("Content-Length", self.content_length().to_string()),
            ("Connection", "close".to_string()),
        ]
    }

    /// Serialize the request into the bytes written to the socket.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(128 + self.body.len());

        // Request line
        buffer.extend_from_slice(format!("POST {} {}\r\n", self.path, HTTP_VERSION).as_bytes());

        for (key, value) in self.headers() {
            buffer.extend_from_slice(format!("{}: {}\r\n", key, value).as_bytes());
        }

        // End of headers
        buffer.extend_from_slice(b"\r\n");
        buffer.extend_from_slice(self.body.as_bytes());

        buffer
    }
}
