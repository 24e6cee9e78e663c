mod headers;
mod transport;

pub mod types;


pub use transport::{RawHttpTransport, ReqwestTransport, Transport};
pub use types::FetchOutcome;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use std::time::Instant;
use tracing::{debug, warn};

/// Fetch a calculation result for an item id from the local server.
///
/// Tries the default transports in order (reqwest, then a raw HTTP/1.0
/// socket) and returns the body of the first 200 response. The two physical
/// attempts are strictly sequential; the fallback only starts after the
/// primary attempt has settled.
///
/// # Examples
/// ```no_run
/// # async fn example() -> itembridge::Result<()> {
/// let body = itembridge::tools::fetch::fetch_calculated_item("item-42").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
pub async fn fetch_calculated_item(item_id: &str) -> Result<String> {
    fetch_calculated_item_with(item_id, &BridgeConfig::default())
        .await
        .map(FetchOutcome::into_body)
}

/// Fetch with explicit connection settings, keeping the telemetry.
///
/// Use this when the caller needs to know which transport worked or wants a
/// non-default host, port, or timeout.
pub async fn fetch_calculated_item_with(
    item_id: &str,
    cfg: &BridgeConfig,
) -> Result<FetchOutcome> {
    let url = cfg.endpoint_url(item_id)?;
    let transports = default_transports(cfg)?;
    fetch_with_transports(url.as_str(), &transports).await
}

/// Default transport order: reqwest first, raw HTTP/1.0 socket second.
pub fn default_transports(cfg: &BridgeConfig) -> Result<Vec<Box<dyn Transport>>> {
    Ok(vec![
        Box::new(ReqwestTransport::new(cfg.timeout_ms)?),
        Box::new(RawHttpTransport::new(cfg.timeout_ms)),
    ])
}

/// Try transports in order until one succeeds.
///
/// Every failure is collected; if no transport produces a body the whole
/// operation fails with [`BridgeError::AllTransportsFailed`], whose message
/// embeds the last transport's failure.
pub async fn fetch_with_transports(
    url: &str,
    transports: &[Box<dyn Transport>],
) -> Result<FetchOutcome> {
    debug!(url, "fetching item calculation");
    let start = Instant::now();
    let mut failures = Vec::new();

    for (idx, transport) in transports.iter().enumerate() {
        debug!(transport = transport.name(), attempt = idx + 1, "trying transport");

        match transport.fetch(url).await {
            Ok(body) => {
                debug!(
                    transport = transport.name(),
                    body_len = body.len(),
                    "transport succeeded"
                );
                return Ok(FetchOutcome {
                    body,
                    transport_used: transport.name().to_string(),
                    duration_ms: start.elapsed().as_millis() as u64,
                    attempts: idx + 1,
                });
            }
            Err(e) => {
                warn!(transport = transport.name(), error = %e, "transport failed");
                failures.push(format!("{}: {}", transport.name(), e));
            }
        }
    }

    let last = failures
        .last()
        .cloned()
        .unwrap_or_else(|| "no transports configured".to_string());
    Err(BridgeError::AllTransportsFailed {
        attempted: transports.len(),
        failures,
        last,
    })
}
