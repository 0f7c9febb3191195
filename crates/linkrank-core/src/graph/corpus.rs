//! The page graph shared read-only by every estimator

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Page identifier (path relative to the crawled directory)
pub type Page = String;

/// Immutable mapping from each page to the pages it links to.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. Pages are kept in sorted order so that every pass over the
/// corpus visits them in the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl Corpus {
    /// Build a corpus from raw `(page, outgoing links)` pairs.
    ///
    /// Links pointing outside the set of pages and self-links are dropped.
    /// A page listed more than once has its links merged.
    pub fn from_links<I, P, L, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<Page>,
        L: IntoIterator<Item = T>,
        T: Into<Page>,
    {
        let mut raw: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, targets) in pages {
            raw.entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }

        let known: BTreeSet<Page> = raw.keys().cloned().collect();
        let mut dropped = 0usize;

        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let before = targets.len();
                let kept: BTreeSet<Page> = targets
                    .into_iter()
                    .filter(|t| *t != page && known.contains(t))
                    .collect();
                dropped += before - kept.len();
                (page, kept)
            })
            .collect();

        if dropped > 0 {
            tracing::debug!("Dropped {} self or out-of-corpus links", dropped);
        }

        Self { links }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Pages in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.links.keys()
    }

    /// Outgoing links of `page`, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Page, &BTreeSet<Page>)> + '_ {
        self.links.iter()
    }

    /// Pages without outgoing links
    pub fn dangling_pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    /// Total number of links across all pages
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_links_drops_self_and_external() {
        let corpus = Corpus::from_links([
            ("a.html", vec!["a.html", "b.html", "missing.html"]),
            ("b.html", vec!["a.html"]),
        ]);

        assert_eq!(corpus.len(), 2);
        let a_links: Vec<&str> = corpus.links("a.html").unwrap().iter().map(|s| s.as_str()).collect();
        assert_eq!(a_links, vec!["b.html"]);
        assert_eq!(corpus.link_count(), 2);
    }

    #[test]
    fn test_duplicate_pages_merge() {
        let corpus = Corpus::from_links([
            ("a", vec!["b"]),
            ("b", vec![]),
            ("a", vec!["c"]),
            ("c", vec![]),
        ]);

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.links("a").unwrap().len(), 2);
    }

    #[test]
    fn test_dangling_pages() {
        let corpus = Corpus::from_links([("a", vec![]), ("b", vec!["a"]), ("c", vec![])]);
        let dangling: Vec<&Page> = corpus.dangling_pages().collect();
        assert_eq!(dangling, vec!["a", "c"]);
    }

    #[test]
    fn test_pages_sorted() {
        let corpus = Corpus::from_links([("c", Vec::<&str>::new()), ("a", vec![]), ("b", vec![])]);
        let pages: Vec<&Page> = corpus.pages().collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty() {
        let corpus = Corpus::default();
        assert!(corpus.is_empty());
        assert!(!corpus.contains("a"));
        assert!(corpus.links("a").is_none());
    }
}
