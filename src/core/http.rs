//! HTTP utilities for ESPN API communication

use crate::{Result, ESPN_S2_ENV_VAR, ESPN_SWID_ENV_VAR};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, USER_AGENT};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Build cookie headers from `ESPN_SWID` and `ESPN_S2`, if present.
///
/// Returns `Ok(None)` when either env var is missing (public leagues).
pub fn maybe_cookie_header_map() -> Result<Option<HeaderMap>> {
    let swid = std::env::var(ESPN_SWID_ENV_VAR).ok();
    let s2 = std::env::var(ESPN_S2_ENV_VAR).ok();
    if let (Some(swid), Some(s2)) = (swid, s2) {
        let mut h = HeaderMap::new();
        let cookie = format!("SWID={}; espn_s2={}", swid, s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        Ok(Some(h))
    } else {
        Ok(None)
    }
}

/// Headers sent with every league request: JSON accept, a browser user agent
/// (ESPN rejects some non-browser agents) and cookies when configured.
pub fn league_request_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    if let Some(cookies) = maybe_cookie_header_map()? {
        h.extend(cookies);
    }
    Ok(h)
}
