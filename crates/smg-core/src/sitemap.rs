//! Sitemap document building and serialization.
//!
//! Builds either a plain sitemap or a sitemap index per the sitemaps.org 0.9
//! schema. The two shapes differ only in element names and output filename:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2024-01-15</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! (index mode substitutes `sitemapindex`/`sitemap` for `urlset`/`url` and
//! writes `sitemap_index.xml` instead of `sitemap.xml`.)

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Which of the two sitemaps.org document shapes to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// Plain sitemap: `urlset` root with `url` entries, written to `sitemap.xml`.
    Urlset,
    /// Sitemap index: `sitemapindex` root with `sitemap` entries, written to
    /// `sitemap_index.xml`.
    Index,
}

impl SitemapKind {
    pub fn root_tag(self) -> &'static str {
        match self {
            SitemapKind::Urlset => "urlset",
            SitemapKind::Index => "sitemapindex",
        }
    }

    pub fn entry_tag(self) -> &'static str {
        match self {
            SitemapKind::Urlset => "url",
            SitemapKind::Index => "sitemap",
        }
    }

    pub fn output_filename(self) -> &'static str {
        match self {
            SitemapKind::Urlset => "sitemap.xml",
            SitemapKind::Index => "sitemap_index.xml",
        }
    }
}

/// One record: the URL verbatim plus its resolved `YYYY-MM-DD` date.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

/// Ordered sitemap document; entry order is insertion order.
#[derive(Debug)]
pub struct SitemapDocument {
    kind: SitemapKind,
    entries: Vec<SitemapEntry>,
}

impl SitemapDocument {
    pub fn new(kind: SitemapKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, loc: impl Into<String>, lastmod: impl Into<String>) {
        self.entries.push(SitemapEntry {
            loc: loc.into(),
            lastmod: lastmod.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes with a UTF-8 XML declaration and 2-space indentation.
    pub fn into_xml(self) -> String {
        let root = self.kind.root_tag();
        let entry_tag = self.kind.entry_tag();

        let mut xml = String::with_capacity(256 + 128 * self.entries.len());
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push('<');
        xml.push_str(root);
        xml.push_str(" xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.entries {
            xml.push_str("  <");
            xml.push_str(entry_tag);
            xml.push_str(">\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod);
            xml.push_str("</lastmod>\n  </");
            xml.push_str(entry_tag);
            xml.push_str(">\n");
        }

        xml.push_str("</");
        xml.push_str(root);
        xml.push_str(">\n");
        xml
    }

    /// Writes the document to its fixed filename under `dir`, overwriting any
    /// existing file. Write failures are fatal and propagate to the caller.
    pub fn write(self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.kind.output_filename());
        let xml = self.into_xml();
        fs::write(&path, xml)
            .with_context(|| format!("failed to write sitemap to {}", path.display()))?;
        Ok(path)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
