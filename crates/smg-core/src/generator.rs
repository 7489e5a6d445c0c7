//! End-to-end sitemap generation pipeline.
//!
//! Single linear pass: read the URL list, resolve each URL's last-modified
//! date in input order (one HEAD at a time, no parallelism), accumulate the
//! document, then write it once. Per-URL fetch failures are absorbed by the
//! resolver; only a missing input file or a failed output write abort the run.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::SmgConfig;
use crate::input;
use crate::lastmod;
use crate::sitemap::{SitemapDocument, SitemapKind};

/// Generates a sitemap (or sitemap index) for the URL list at `list_path`,
/// writing the document to its fixed filename under `out_dir`. Returns the
/// path of the written file.
pub fn generate(
    list_path: &Path,
    kind: SitemapKind,
    out_dir: &Path,
    cfg: &SmgConfig,
) -> Result<PathBuf> {
    let urls = input::read_url_list(list_path)?;
    tracing::info!(
        "generating {} from {} ({} URLs)",
        kind.output_filename(),
        list_path.display(),
        urls.len()
    );

    let mut doc = SitemapDocument::new(kind);
    for url in urls {
        match kind {
            SitemapKind::Urlset => println!("Processing: {url}"),
            SitemapKind::Index => println!("Querying sitemap: {url}"),
        }
        let date = lastmod::resolve(&url, cfg);
        doc.push(url, date);
    }

    let count = doc.len();
    let path = doc.write(out_dir)?;
    tracing::info!("wrote {} entries to {}", count, path.display());
    Ok(path)
}
