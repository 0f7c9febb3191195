//! Crawling pipeline
//!
//! Directory scanning and corpus construction.

mod crawl;
mod scanner;

pub use crawl::crawl;
pub use scanner::*;
