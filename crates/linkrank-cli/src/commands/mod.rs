//! CLI command handlers

pub mod corpus;
pub mod rank;
pub mod transition;

use linkrank_core::{crawl, Config, Corpus, ScanOptions};
use std::path::Path;

/// Crawl `dir` using the pattern override or the configured one
pub(crate) fn load_corpus(dir: &Path, pattern: Option<&str>, config: &Config) -> anyhow::Result<Corpus> {
    let options = match pattern {
        Some(pattern) => ScanOptions::with_pattern(pattern),
        None => config.scan.scan_options(),
    };
    let corpus = crawl(dir, &options)?;
    tracing::debug!("Loaded {} pages from {}", corpus.len(), dir.display());
    Ok(corpus)
}
