//! Named-channel boundary for hosts embedding the bridge.
//!
//! A desktop host forwards renderer-originated requests here by channel
//! name. The trusted list is the capability check: anything not on it is
//! rejected before any work happens. Hosts expose [`allowed_channels`] to
//! their own bridge layer instead of re-validating per call.

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::tools::fetch;

/// Channel that proxies an item id to the local calculation server.
pub const FETCH_CALCULATE_ITEM: &str = "fetch-calculate-item";

const ALLOWED_CHANNELS: [&str; 1] = [FETCH_CALCULATE_ITEM];

/// Channels a host may expose across its trust boundary.
pub fn allowed_channels() -> &'static [&'static str] {
    &ALLOWED_CHANNELS
}

/// Dispatch a request arriving on a named channel.
///
/// The argument is the channel's single string payload; for
/// [`FETCH_CALCULATE_ITEM`] that's the item id, and the reply is the
/// calculation body.
pub async fn invoke(channel: &str, arg: &str, cfg: &BridgeConfig) -> Result<String> {
    match channel {
        FETCH_CALCULATE_ITEM => fetch::fetch_calculated_item_with(arg, cfg)
            .await
            .map(|outcome| outcome.body),
        other => Err(BridgeError::UnauthorizedChannel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    #[test]
    fn fetch_channel_is_trusted() {
        assert!(allowed_channels().contains(&FETCH_CALCULATE_ITEM));
    }

    #[tokio::test]
    async fn fetch_channel_forwards_item_id_and_returns_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let _ = tx.send(String::from_utf8_lossy(&buf[..n]).to_string());
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\nConnection: close\r\n\r\nresult")
                .await
                .unwrap();
            socket.shutdown().await.ok();
        });

        let cfg = BridgeConfig {
            host: "127.0.0.1".to_string(),
            port,
            timeout_ms: 2_000,
        };
        let body = invoke(FETCH_CALCULATE_ITEM, "a&b c", &cfg).await.unwrap();
        assert_eq!(body, "result");

        // The id crosses the channel percent-encoded, not raw
        let request = rx.await.unwrap();
        let request_line = request.lines().next().unwrap().to_string();
        assert!(
            request_line.contains("/calculate_item?item=a%26b+c"),
            "unexpected request line: {request_line}"
        );
    }

    #[tokio::test]
    async fn unknown_channel_is_rejected() {
        let cfg = BridgeConfig::default();
        let err = invoke("open-dev-tools", "x", &cfg).await.unwrap_err();
        assert!(err.to_string().contains("open-dev-tools"));
        match err {
            BridgeError::UnauthorizedChannel(name) => assert_eq!(name, "open-dev-tools"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
