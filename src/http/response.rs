use crate::http::HTTP_VERSION;

/// Number of response bytes shown in failure diagnostics.
pub const PREVIEW_LEN: usize = 100;

/// Bytes read back from the server, kept unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    bytes: Vec<u8>,
}

impl RawResponse {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the response carries an `HTTP/1.1 200` status line.
    pub fn is_ok(&self) -> bool {
        let marker = format!("{} 200", HTTP_VERSION);
        self.bytes
            .windows(marker.len())
            .any(|window| window == marker.as_bytes())
    }

    /// Best-effort status code from the first line, for logging.
    pub fn status_code(&self) -> Option<u16> {
        let line_end = self
            .bytes
            .windows(2)
            .position(|window| window == b"\r\n")
            .unwrap_or(self.bytes.len());
        let status_line = std::str::from_utf8(&self.bytes[..line_end]).ok()?;

        let mut parts = status_line.splitn(3, ' ');
        let version = parts.next()?;
        if !version.starts_with("HTTP/") {
            return None;
        }
        parts.next()?.parse().ok()
    }

    /// Text found in the first [`PREVIEW_LEN`] bytes.
    ///
    /// Invalid sequences and a character cut by the limit are dropped, so the
    /// result never exceeds [`PREVIEW_LEN`] bytes.
    pub fn preview(&self) -> String {
        let end = self.bytes.len().min(PREVIEW_LEN);
        let mut preview = String::with_capacity(end);
        let mut rest = &self.bytes[..end];

        loop {
            match std::str::from_utf8(rest) {
                Ok(text) => {
                    preview.push_str(text);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    preview.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(invalid) => rest = &after[invalid..],
                        None => break,
                    }
                }
            }
        }

        preview
    }
}

/// Total size of a response once its headers are in `bytes`, when they say.
///
/// Known when the headers carry `Content-Length`, or when the status
/// (1xx, 204, 304) forbids a body. `None` means the body runs until close.
pub fn expected_length(bytes: &[u8]) -> Option<usize> {
    let header_end = bytes.windows(4).position(|window| window == b"\r\n\r\n")? + 4;
    let head = std::str::from_utf8(&bytes[..header_end]).ok()?;
    let mut lines = head.lines();

    let status = lines
        .next()
        .and_then(|line| line.split(' ').nth(1))
        .and_then(|code| code.parse::<u16>().ok());
    if matches!(status, Some(100..=199 | 204 | 304)) {
        return Some(header_end);
    }

    lines
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .map(|content_length| header_end + content_length)
}
