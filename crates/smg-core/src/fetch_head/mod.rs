//! HTTP HEAD probing.
//!
//! Uses the curl crate (libcurl) to issue a HEAD request and capture the
//! `Last-Modified` response header. Redirects are followed; the whole probe
//! is bounded by the configured timeout.

mod parse;

use anyhow::{Context, Result};
use std::str;

use crate::config::SmgConfig;

/// Result of a HEAD request: the metadata the sitemap pipeline cares about.
#[derive(Debug, Clone)]
pub struct HeadResult {
    /// Final HTTP status code (after redirects).
    pub status: u32,
    /// `Last-Modified` value if present, verbatim.
    pub last_modified: Option<String>,
}

/// Performs a HEAD request and returns parsed metadata.
///
/// Follows redirects and tolerates any status code: servers answer HEAD with
/// 404 or 405 and still include usable headers, so status handling is left to
/// the caller. Only transport-level failures (DNS, connect, timeout) are
/// errors.
pub fn probe(url: &str, cfg: &SmgConfig) -> Result<HeadResult> {
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.nobody(true)?; // HEAD request
    easy.follow_location(true)?;
    easy.max_redirections(cfg.max_redirections)?;
    easy.connect_timeout(cfg.connect_timeout())?;
    easy.timeout(cfg.head_timeout())?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.perform().context("HEAD request failed")?;
    }

    let status = easy.response_code().context("no response code")?;
    tracing::debug!("HEAD {} -> HTTP {}", url, status);

    Ok(HeadResult {
        status,
        last_modified: parse::last_modified(&headers),
    })
}
