//! `smg index <file>` – generate sitemap_index.xml in the current directory.

use anyhow::Result;
use smg_core::config::SmgConfig;
use smg_core::generator;
use smg_core::sitemap::SitemapKind;
use std::path::Path;

pub fn run_index(file: &Path, cfg: &SmgConfig) -> Result<()> {
    let out_dir = std::env::current_dir()?;
    let out = generator::generate(file, SitemapKind::Index, &out_dir, cfg)?;
    println!(
        "\nSuccess: {} has been generated.",
        out.file_name().unwrap_or_default().to_string_lossy()
    );
    Ok(())
}
