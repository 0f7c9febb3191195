//! Random-walk (Monte Carlo) PageRank estimate

use super::sampler::{RandomSampler, WeightedSampler};
use super::transition::transition_weights;
use super::{check_corpus, check_damping, Distribution};
use crate::error::{LinkRankError, Result};
use crate::graph::{Corpus, Page};
use std::collections::BTreeSet;

/// Estimate PageRank by walking `samples` steps of the random-surfer chain
/// and counting how often each page is visited.
///
/// Uses a generator seeded from the operating system, so two calls
/// generally return different (but statistically consistent) values.
pub fn sample_pagerank(corpus: &Corpus, damping_factor: f64, samples: usize) -> Result<Distribution> {
    sample_pagerank_with(
        corpus,
        damping_factor,
        samples,
        &mut RandomSampler::from_entropy(),
    )
}

/// `sample_pagerank` drawing pages through an explicit sampler.
///
/// The first page is drawn uniformly; every following page is drawn from
/// the transition distribution of the page drawn before it.
pub fn sample_pagerank_with<S: WeightedSampler>(
    corpus: &Corpus,
    damping_factor: f64,
    samples: usize,
    sampler: &mut S,
) -> Result<Distribution> {
    check_corpus(corpus)?;
    check_damping(damping_factor)?;
    if samples == 0 {
        return Err(LinkRankError::InvalidSampleCount(samples));
    }

    // Outgoing links by page position, matching the weight vector order
    let outgoing: Vec<&BTreeSet<Page>> = corpus.iter().map(|(_, links)| links).collect();
    let mut visits = vec![0usize; outgoing.len()];
    let mut weights = vec![1.0 / outgoing.len() as f64; outgoing.len()];

    for _ in 0..samples {
        let current = sampler.sample(&weights)?;
        visits[current] += 1;
        weights = transition_weights(corpus, outgoing[current], damping_factor);
    }

    tracing::info!("Sampled {} steps over {} pages", samples, outgoing.len());

    let n = samples as f64;
    Ok(Distribution::from_values(
        corpus,
        visits.into_iter().map(|count| count as f64 / n).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the heaviest index, first one on ties
    struct Greedy;

    impl WeightedSampler for Greedy {
        fn sample(&mut self, weights: &[f64]) -> Result<usize> {
            let mut best = 0;
            for (i, w) in weights.iter().enumerate() {
                if *w > weights[best] {
                    best = i;
                }
            }
            Ok(best)
        }
    }

    fn cycle() -> Corpus {
        Corpus::from_links([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])])
    }

    #[test]
    fn test_walk_follows_transition_model() {
        // Uniform start picks A, then the single link is always heaviest.
        let ranks = sample_pagerank_with(&cycle(), 0.85, 6, &mut Greedy).unwrap();

        assert_eq!(ranks.get("A"), Some(2.0 / 6.0));
        assert_eq!(ranks.get("B"), Some(2.0 / 6.0));
        assert_eq!(ranks.get("C"), Some(2.0 / 6.0));
    }

    #[test]
    fn test_walk_leaves_dangling_page_uniformly() {
        // A -> B, B has no links: the greedy walk goes A, B, then the
        // uniform row from B sends it back to the first page.
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec![])]);
        let ranks = sample_pagerank_with(&corpus, 0.85, 4, &mut Greedy).unwrap();

        assert_eq!(ranks.get("A"), Some(0.5));
        assert_eq!(ranks.get("B"), Some(0.5));
    }

    #[test]
    fn test_single_sample() {
        let ranks = sample_pagerank_with(&cycle(), 0.85, 1, &mut Greedy).unwrap();
        assert_eq!(ranks.get("A"), Some(1.0));
        assert_eq!(ranks.get("B"), Some(0.0));
        assert!((ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_page_corpus() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]);
        for n in [1, 10, 1000] {
            let ranks = sample_pagerank(&corpus, 0.85, n).unwrap();
            assert_eq!(ranks.get("A"), Some(1.0));
        }
    }

    #[test]
    fn test_sums_to_one() {
        let corpus = Corpus::from_links([
            ("1", vec!["2", "3"]),
            ("2", vec!["3"]),
            ("3", vec![]),
            ("4", vec!["1"]),
        ]);
        let mut sampler = RandomSampler::seeded(3);
        for n in [1, 7, 500] {
            let ranks = sample_pagerank_with(&corpus, 0.85, n, &mut sampler).unwrap();
            assert_eq!(ranks.len(), 4);
            assert!((ranks.total() - 1.0).abs() < 1e-9);
            assert!(ranks.iter().all(|(_, p)| (0.0..=1.0).contains(&p)));
        }
    }

    #[test]
    fn test_seeded_runs_match() {
        let a = sample_pagerank_with(&cycle(), 0.85, 1000, &mut RandomSampler::seeded(9)).unwrap();
        let b = sample_pagerank_with(&cycle(), 0.85, 1000, &mut RandomSampler::seeded(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_samples_rejected() {
        let err = sample_pagerank(&cycle(), 0.85, 0).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidSampleCount(0)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            sample_pagerank(&Corpus::default(), 0.85, 10),
            Err(LinkRankError::EmptyCorpus)
        ));
        assert!(matches!(
            sample_pagerank(&cycle(), 1.0, 10),
            Err(LinkRankError::InvalidDamping(_))
        ));
    }
}
