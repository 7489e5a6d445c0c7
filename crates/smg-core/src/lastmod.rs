//! Last-modification date resolution.
//!
//! Turns a URL into a `YYYY-MM-DD` date string: HEAD-probe the URL, parse its
//! `Last-Modified` header as an RFC 1123 GMT timestamp, and keep the date
//! part. Every failure mode (transport error, timeout, missing or malformed
//! header) degrades to the current local date after warning the operator, so
//! the caller always gets a usable date and never an error.

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use crate::config::SmgConfig;
use crate::fetch_head;

/// Why a URL fell back to the current date. Collapsed before returning;
/// callers only ever see the resulting date string.
#[derive(Debug, Error)]
enum LastModError {
    #[error("HEAD probe failed: {0:#}")]
    Probe(anyhow::Error),
    #[error("no Last-Modified header")]
    MissingHeader,
    #[error("malformed Last-Modified value '{0}'")]
    MalformedDate(String),
}

/// Resolves the last-modification date of `url` as `YYYY-MM-DD`.
///
/// Never fails: any per-URL error is reported as a warning and replaced by
/// today's local date. No retries are made.
pub fn resolve(url: &str, cfg: &SmgConfig) -> String {
    match header_date(url, cfg) {
        Ok(date) => date,
        Err(err) => {
            eprintln!("Warning: could not fetch {} - {}", url, err);
            tracing::warn!("using current date for {}: {}", url, err);
            today()
        }
    }
}

fn header_date(url: &str, cfg: &SmgConfig) -> Result<String, LastModError> {
    let head = fetch_head::probe(url, cfg).map_err(LastModError::Probe)?;
    let raw = head.last_modified.ok_or(LastModError::MissingHeader)?;
    parse_http_date(&raw).ok_or(LastModError::MalformedDate(raw))
}

/// Parses an RFC 1123 timestamp (`Wed, 21 Oct 2015 07:28:00 GMT`) into
/// `YYYY-MM-DD`. The zone label must be the literal `GMT`; anything else is
/// treated as malformed so the caller takes the fallback path.
fn parse_http_date(value: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(value.trim(), "%a, %d %b %Y %H:%M:%S GMT")
        .ok()
        .map(|dt| dt.date().format("%Y-%m-%d").to_string())
}

/// Current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
