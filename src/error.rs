use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// The server answered, but not with 200.
    #[error("server responded with status: {0}")]
    UnexpectedStatus(u16),

    /// A single transport attempt failed below the HTTP layer
    /// (connect, DNS, timeout, truncated body).
    #[error("{transport} transport failed: {message}")]
    TransportFailure {
        transport: &'static str,
        message: String,
    },

    /// Every configured transport was tried and none produced a body.
    /// Intermediate failures are kept for diagnostics; the display message
    /// carries the final one.
    #[error("all {attempted} transports failed. last error: {last}")]
    AllTransportsFailed {
        attempted: usize,
        failures: Vec<String>,
        last: String,
    },

    /// A request arrived on a channel name outside the trusted list.
    #[error("unauthorized channel: {0}")]
    UnauthorizedChannel(String),

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
