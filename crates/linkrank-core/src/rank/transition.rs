//! Random-surfer transition model

use super::{check_corpus, check_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::{Corpus, Page};
use std::collections::BTreeSet;

/// Probability distribution over which page a random surfer visits after
/// `page`.
///
/// With probability `damping_factor` the surfer follows one of the links
/// on `page`, chosen uniformly; otherwise it jumps to any page of the
/// corpus. A page without links sends the surfer to every page with
/// equal probability.
pub fn transition(corpus: &Corpus, page: &str, damping_factor: f64) -> Result<Distribution> {
    check_corpus(corpus)?;
    check_damping(damping_factor)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::InvalidPage(page.to_string()))?;

    Ok(Distribution::from_values(
        corpus,
        transition_weights(corpus, links, damping_factor),
    ))
}

/// Transition probabilities from a page with outgoing `links`, in corpus
/// page order. Inputs are assumed valid.
pub(crate) fn transition_weights(
    corpus: &Corpus,
    links: &BTreeSet<Page>,
    damping_factor: f64,
) -> Vec<f64> {
    let n = corpus.len() as f64;

    if links.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }

    let jump = (1.0 - damping_factor) / n;
    let follow = damping_factor / links.len() as f64;

    corpus
        .pages()
        .map(|q| if links.contains(q) { jump + follow } else { jump })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_corpus() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn test_follow_and_jump_terms() {
        let corpus = sample_corpus();
        let d = transition(&corpus, "2.html", 0.85).unwrap();

        assert!((d.get("1.html").unwrap() - 0.4625).abs() < 1e-12);
        assert!((d.get("2.html").unwrap() - 0.0375).abs() < 1e-12);
        assert!((d.get("3.html").unwrap() - 0.4625).abs() < 1e-12);
        assert!((d.get("4.html").unwrap() - 0.0375).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_page_is_uniform() {
        let corpus = Corpus::from_links([("A", vec![]), ("B", vec!["A"])]);
        let d = transition(&corpus, "A", 0.85).unwrap();

        assert_eq!(d.get("A"), Some(0.5));
        assert_eq!(d.get("B"), Some(0.5));
    }

    #[test]
    fn test_mass_conserved_for_every_page() {
        let corpus = sample_corpus();
        for page in corpus.pages() {
            let d = transition(&corpus, page, 0.85).unwrap();
            assert_eq!(d.len(), corpus.len());
            assert!((d.total() - 1.0).abs() < 1e-9, "page {}", page);
        }
    }

    #[test]
    fn test_unknown_page() {
        let corpus = sample_corpus();
        let err = transition(&corpus, "9.html", 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidPage(ref p) if p == "9.html"));
    }

    #[test]
    fn test_invalid_damping() {
        let corpus = sample_corpus();
        for d in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = transition(&corpus, "1.html", d).unwrap_err();
            assert!(matches!(err, LinkRankError::InvalidDamping(_)));
        }
    }

    #[test]
    fn test_empty_corpus() {
        let err = transition(&Corpus::default(), "1.html", 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::EmptyCorpus));
    }
}
