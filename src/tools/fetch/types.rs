use serde::Serialize;

/// Result of a fetch operation including telemetry metadata.
///
/// Contains the response body plus metadata about how it was obtained:
/// which transport succeeded, how long the whole sequence took, and how
/// many transports were attempted before one worked.
#[derive(Debug, Clone, Serialize)]
pub struct FetchOutcome {
    /// The full response body, accumulated before resolving.
    pub body: String,
    /// Name of the transport that succeeded.
    pub transport_used: String,
    /// Total duration in milliseconds, across all attempts.
    pub duration_ms: u64,
    /// Number of transport attempts, including the successful one.
    pub attempts: usize,
}

impl FetchOutcome {
    /// Consume the outcome and return just the body.
    pub fn into_body(self) -> String {
        self.body
    }
}
