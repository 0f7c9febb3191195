//! Linkrank Core Library
//!
//! PageRank for a directory of hyperlinked HTML pages.
//!
//! # Features
//! - Corpus construction from `<a href>` links between local pages
//! - Random-surfer transition model with uniform jumps from dangling pages
//! - Sampling estimator (random walk with visit counting)
//! - Iterative estimator (fixed-point iteration of the PageRank recurrence)

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod rank;

pub use config::{Config, RankConfig, ScanConfig};
pub use error::{Error, LinkRankError, Result};
pub use graph::{extract_links, Corpus, Page};
pub use index::{crawl, scan_pages, ScanOptions, ScanResult};
pub use rank::{
    iterate_pagerank, iterate_pagerank_with, rank, sample_pagerank, sample_pagerank_with,
    transition, Convergence, Distribution, Method, RandomSampler, Ranking, WeightedSampler,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
