use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 49090;
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection settings for the local calculation server.
///
/// The defaults match the server's fixed listen address
/// (`http://localhost:49090`). The timeout applies to each transport
/// attempt individually, not to the whole fallback sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub host: String,
    pub port: u16,
    pub timeout_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl BridgeConfig {
    /// Build the `calculate_item` endpoint for an item id.
    ///
    /// The id goes through the query-pair API, so ids containing `&`, `#`
    /// or spaces are percent-encoded instead of corrupting the query string.
    pub fn endpoint_url(&self, item_id: &str) -> Result<Url> {
        let base = format!("http://{}:{}/calculate_item", self.host, self.port);
        let mut url = Url::parse(&base).map_err(|_| BridgeError::InvalidEndpoint(base.clone()))?;
        url.query_pairs_mut().append_pair("item", item_id);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 49090);
        assert_eq!(cfg.timeout_ms, 10_000);
    }

    #[test]
    fn endpoint_embeds_item_id() {
        let cfg = BridgeConfig::default();
        let url = cfg.endpoint_url("abc123").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:49090/calculate_item?item=abc123"
        );
    }

    #[test]
    fn endpoint_percent_encodes_reserved_characters() {
        let cfg = BridgeConfig::default();
        let url = cfg.endpoint_url("a&b #c").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:49090/calculate_item?item=a%26b+%23c"
        );
        // Round-trips back to the raw id
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, "a&b #c");
    }

    #[test]
    fn endpoint_respects_custom_host_and_port() {
        let cfg = BridgeConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            timeout_ms: 1_000,
        };
        let url = cfg.endpoint_url("x").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/calculate_item?item=x");
    }
}
