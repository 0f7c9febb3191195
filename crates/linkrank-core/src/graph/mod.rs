//! Page graph and link extraction

mod corpus;
mod link_extractor;

pub use corpus::{Corpus, Page};
pub use link_extractor::extract_links;
