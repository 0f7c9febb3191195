//! Corpus construction from a directory of HTML pages

use super::scanner::{scan_pages, ScanOptions};
use crate::error::Result;
use crate::graph::{extract_links, Corpus};
use std::fs;
use std::path::Path;

/// Crawl `root` for pages and build the corpus of links between them.
///
/// Page identifiers are paths relative to `root`. Links to files that were
/// not scanned, and links from a page to itself, are discarded.
pub fn crawl(root: &Path, options: &ScanOptions) -> Result<Corpus> {
    let pages = scan_pages(root, options)?;
    tracing::info!("Found {} pages under {}", pages.len(), root.display());

    let mut raw = Vec::with_capacity(pages.len());
    for page in pages {
        let bytes = fs::read(&page.path)?;
        let content = String::from_utf8_lossy(&bytes);
        let links = extract_links(&content, &page.relative_path);
        tracing::debug!("{}: {} links", page.relative_path, links.len());
        raw.push((page.relative_path, links));
    }

    let corpus = Corpus::from_links(raw);
    tracing::debug!(
        "Corpus has {} pages, {} links",
        corpus.len(),
        corpus.link_count()
    );
    Ok(corpus)
}
