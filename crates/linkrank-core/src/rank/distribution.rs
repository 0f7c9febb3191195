//! Probability distributions over the pages of a corpus

use crate::graph::{Corpus, Page};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Mapping from page to probability.
///
/// Values sum to 1.0 (within floating-point tolerance) and every page of
/// the corpus it was computed from appears exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    values: BTreeMap<Page, f64>,
}

impl Distribution {
    /// Uniform distribution over every page of `corpus`
    pub fn uniform(corpus: &Corpus) -> Self {
        let p = 1.0 / corpus.len() as f64;
        corpus.pages().map(|page| (page.clone(), p)).collect()
    }

    /// Pair each page of `corpus` with the value at the same position
    pub(crate) fn from_values(corpus: &Corpus, values: Vec<f64>) -> Self {
        debug_assert_eq!(corpus.len(), values.len());
        corpus.pages().cloned().zip(values).collect()
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.values.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in page order
    pub fn iter(&self) -> impl Iterator<Item = (&Page, f64)> + '_ {
        self.values.iter().map(|(page, p)| (page, *p))
    }

    /// Sum of all probabilities
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Entries sorted by descending probability, ties broken by page
    pub fn ranked(&self) -> Vec<(&Page, f64)> {
        let mut entries: Vec<(&Page, f64)> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    /// Largest absolute per-page difference to `other`.
    ///
    /// Pages missing from one side count as probability zero.
    pub fn max_difference(&self, other: &Distribution) -> f64 {
        self.values
            .keys()
            .chain(other.values.keys())
            .map(|page| {
                (self.get(page).unwrap_or(0.0) - other.get(page).unwrap_or(0.0)).abs()
            })
            .fold(0.0, f64::max)
    }

    pub fn into_inner(self) -> BTreeMap<Page, f64> {
        self.values
    }
}

impl FromIterator<(Page, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (Page, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a Page, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, Page, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
