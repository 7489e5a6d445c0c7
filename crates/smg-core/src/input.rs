//! URL list input.
//!
//! Reads a newline-delimited text file of URLs. Blank lines and lines whose
//! first non-whitespace character is `#` are skipped. Remaining lines are
//! trimmed and kept in file order, verbatim — no deduplication, no sorting,
//! no URL validation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads the URL list at `path`.
///
/// Fails if the file does not exist or cannot be read; the caller is expected
/// to abort without writing any output in that case.
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read URL list '{}'", path.display()))?;

    let urls = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    Ok(urls)
}
