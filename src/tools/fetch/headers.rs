use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

pub(crate) const ACCEPT_VALUE: &str = "text/plain, */*";
pub(crate) const USER_AGENT_VALUE: &str = "itembridge/0.1";

/// Header pairs every transport sends, in wire order.
///
/// Transports must send an identical header set so a fallback attempt is a
/// true re-issue of the same request.
pub(crate) fn header_pairs() -> [(&'static str, &'static str); 2] {
    [("Accept", ACCEPT_VALUE), ("User-Agent", USER_AGENT_VALUE)]
}

/// The same pairs as a reqwest header map.
pub(crate) fn constant_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers
}
