use super::headers::{constant_headers, header_pairs};
use crate::error::{BridgeError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use url::Url;

/// One way of getting a calculation body from the server.
///
/// Implementations are tried in order by the fallback loop in
/// [`super::fetch_with_transports`]; each owns its own connection handling
/// and timeout enforcement. All implementations must send the identical
/// URL and header set so a fallback attempt is a true re-issue.
#[async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &'static str;

    /// Perform one GET against `url` and return the complete body.
    ///
    /// Non-200 status maps to [`BridgeError::UnexpectedStatus`]; anything
    /// below the HTTP layer (connect, DNS, timeout, truncated read) maps to
    /// [`BridgeError::TransportFailure`]. A half-received body is an error,
    /// never a partial result.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/* ===========================
PRIMARY: reqwest
=========================== */

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| BridgeError::TransportFailure {
                transport: "reqwest",
                message: format!("failed to build client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .headers(constant_headers())
            .send()
            .await
            .map_err(|e| BridgeError::TransportFailure {
                transport: self.name(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        debug!(transport = self.name(), status, "received response");
        if status != 200 {
            return Err(BridgeError::UnexpectedStatus(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| BridgeError::TransportFailure {
                transport: self.name(),
                message: format!("failed to read body: {e}"),
            })?;
        debug!(transport = self.name(), body_len = body.len(), "body complete");
        Ok(body)
    }
}

/* ===========================
SECONDARY: raw HTTP/1.0 socket
=========================== */

/// Minimal HTTP/1.0 client over a plain TCP socket.
///
/// Speaking 1.0 with `Connection: close` keeps body framing trivial: the
/// server cannot use chunked encoding and EOF delimits the body. Good
/// enough for a plaintext localhost endpoint, and independent of the
/// primary client's connection machinery.
pub struct RawHttpTransport {
    timeout: Duration,
}

impl RawHttpTransport {
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    fn failure(&self, message: String) -> BridgeError {
        BridgeError::TransportFailure {
            transport: self.name(),
            message,
        }
    }

    async fn exchange(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|_| BridgeError::InvalidEndpoint(url.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| BridgeError::InvalidEndpoint(url.to_string()))?
            .to_string();
        let port = parsed.port_or_known_default().unwrap_or(80);

        let mut target = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            target.push('?');
            target.push_str(query);
        }

        let mut stream = TcpStream::connect((host.as_str(), port))
            .await
            .map_err(|e| self.failure(format!("connect failed: {e}")))?;

        let mut request = format!("GET {target} HTTP/1.0\r\nHost: {host}:{port}\r\n");
        for (name, value) in header_pairs() {
            request.push_str(name);
            request.push_str(": ");
            request.push_str(value);
            request.push_str("\r\n");
        }
        request.push_str("Connection: close\r\n\r\n");

        stream
            .write_all(request.as_bytes())
            .await
            .map_err(|e| self.failure(format!("write failed: {e}")))?;

        let mut raw = Vec::new();
        stream
            .read_to_end(&mut raw)
            .await
            .map_err(|e| self.failure(format!("read failed: {e}")))?;

        let (status, body) = parse_response(&raw).map_err(|m| self.failure(m))?;
        debug!(transport = self.name(), status, "received response");
        if status != 200 {
            return Err(BridgeError::UnexpectedStatus(status));
        }
        debug!(transport = self.name(), body_len = body.len(), "body complete");
        Ok(body)
    }
}

#[async_trait]
impl Transport for RawHttpTransport {
    fn name(&self) -> &'static str {
        "raw-http"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        tokio::time::timeout(self.timeout, self.exchange(url))
            .await
            .map_err(|_| self.failure("request timed out".to_string()))?
    }
}

/// Split a raw HTTP/1.x response into status code and body.
fn parse_response(raw: &[u8]) -> std::result::Result<(u16, String), String> {
    let text = String::from_utf8_lossy(raw);
    let (head, body) = text
        .split_once("\r\n\r\n")
        .ok_or_else(|| "malformed response: missing header terminator".to_string())?;

    let status_line = head.lines().next().unwrap_or("");
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| format!("malformed status line: {status_line:?}"))?;

    Ok((status, body.to_string()))
}
