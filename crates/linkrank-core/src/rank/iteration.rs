//! Fixed-point (power iteration) PageRank

use super::{check_corpus, check_damping, check_iteration_params, Distribution};
use crate::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use std::collections::HashMap;

/// Result of running the iteration to convergence
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence {
    pub ranks: Distribution,
    /// Full passes over the corpus
    pub iterations: usize,
    /// Largest per-page change in the final pass
    pub delta: f64,
}

/// Compute PageRank by repeatedly applying the PageRank recurrence until
/// no page changes by more than the default tolerance.
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: f64) -> Result<Distribution> {
    iterate_pagerank_with(corpus, damping_factor, DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
        .map(|c| c.ranks)
}

/// Iterate until the largest per-page change of a pass is `<= tolerance`.
///
/// At least one pass always runs. Fails with `NotConverged` once
/// `max_iterations` passes have run without reaching the tolerance.
pub fn iterate_pagerank_with(
    corpus: &Corpus,
    damping_factor: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Convergence> {
    check_corpus(corpus)?;
    check_damping(damping_factor)?;
    check_iteration_params(tolerance, max_iterations)?;

    let graph = DenseGraph::new(corpus);
    let n = graph.len() as f64;
    let teleport = (1.0 - damping_factor) / n;

    let mut ranks = vec![1.0 / n; graph.len()];
    let mut next = vec![0.0; graph.len()];
    let mut iterations = 0;

    loop {
        iterations += 1;

        // Dangling pages spread their rank over every page
        let dangling_share: f64 =
            graph.dangling.iter().map(|&i| ranks[i]).sum::<f64>() / n;

        let mut delta: f64 = 0.0;
        for (p, new_rank) in next.iter_mut().enumerate() {
            let linked: f64 = graph.incoming[p]
                .iter()
                .map(|&i| ranks[i] / graph.out_degree[i] as f64)
                .sum();

            *new_rank = teleport + damping_factor * (linked + dangling_share);
            delta = delta.max((*new_rank - ranks[p]).abs());
        }

        std::mem::swap(&mut ranks, &mut next);
        tracing::trace!("Pass {}: max change {}", iterations, delta);

        if delta <= tolerance {
            tracing::info!(
                "Converged after {} passes (max change {})",
                iterations,
                delta
            );
            return Ok(Convergence {
                ranks: Distribution::from_values(corpus, ranks),
                iterations,
                delta,
            });
        }

        if iterations >= max_iterations {
            return Err(LinkRankError::NotConverged { iterations, delta });
        }
    }
}

/// Index-based view of the corpus: page `i` is the `i`th page in corpus
/// order.
struct DenseGraph {
    incoming: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
    dangling: Vec<usize>,
}

impl DenseGraph {
    fn new(corpus: &Corpus) -> Self {
        let index: HashMap<&str, usize> = corpus
            .pages()
            .enumerate()
            .map(|(i, page)| (page.as_str(), i))
            .collect();

        let mut incoming = vec![Vec::new(); corpus.len()];
        let mut out_degree = vec![0usize; corpus.len()];
        let mut dangling = Vec::new();

        for (src, (_, targets)) in corpus.iter().enumerate() {
            out_degree[src] = targets.len();
            if targets.is_empty() {
                dangling.push(src);
            }
            for target in targets {
                if let Some(&tgt) = index.get(target.as_str()) {
                    incoming[tgt].push(src);
                }
            }
        }

        Self {
            incoming,
            out_degree,
            dangling,
        }
    }

    fn len(&self) -> usize {
        self.out_degree.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64, tol: f64) {
        let actual = actual.expect("page missing");
        assert!(
            (actual - expected).abs() < tol,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_cycle_is_uniform() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();

        for page in ["A", "B", "C"] {
            assert_close(ranks.get(page), 1.0 / 3.0, 1e-9);
        }
    }

    #[test]
    fn test_dangling_mass_is_redistributed() {
        // B -> A, A has no links: without redistribution the total would leak.
        let corpus = Corpus::from_links([("A", vec![]), ("B", vec!["A"])]);
        let c = iterate_pagerank_with(&corpus, 0.85, 1e-12, 10_000).unwrap();

        assert!((c.ranks.total() - 1.0).abs() < 1e-9);
        // Stationary solution: A = (1 + d) / (2 + d), B = 1 / (2 + d)
        assert_close(c.ranks.get("A"), 1.85 / 2.85, 1e-9);
        assert_close(c.ranks.get("B"), 1.0 / 2.85, 1e-9);
    }

    #[test]
    fn test_hub_page_ranks_highest() {
        let corpus = Corpus::from_links([
            ("hub", vec!["a"]),
            ("a", vec!["hub"]),
            ("b", vec!["hub"]),
            ("c", vec!["hub"]),
        ]);
        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        let ranked = ranks.ranked();

        assert_eq!(ranked[0].0, "hub");
        assert_eq!(ranked[1].0, "a");
        assert!((ranks.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]);
        for d in [0.1, 0.5, 0.85, 0.99] {
            let ranks = iterate_pagerank(&corpus, d).unwrap();
            assert_close(ranks.get("A"), 1.0, 1e-12);
        }
    }

    #[test]
    fn test_always_runs_one_pass() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])]);
        let c = iterate_pagerank_with(&corpus, 0.85, f64::INFINITY, 5).unwrap();
        assert_eq!(c.iterations, 1);
    }

    #[test]
    fn test_deterministic() {
        let corpus = Corpus::from_links([
            ("1", vec!["2", "3"]),
            ("2", vec!["3"]),
            ("3", vec![]),
            ("4", vec!["1", "3"]),
        ]);
        let a = iterate_pagerank(&corpus, 0.85).unwrap();
        let b = iterate_pagerank(&corpus, 0.85).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_iteration_cap() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec![]), ("C", vec!["A", "B"])]);
        let err = iterate_pagerank_with(&corpus, 0.85, 0.0, 2).unwrap_err();
        assert!(matches!(err, LinkRankError::NotConverged { iterations: 2, .. }));
    }

    #[test]
    fn test_invalid_tolerance() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]);
        assert!(matches!(
            iterate_pagerank_with(&corpus, 0.85, -1.0, 10),
            Err(LinkRankError::Config(_))
        ));
        assert!(matches!(
            iterate_pagerank_with(&corpus, 0.85, 0.001, 0),
            Err(LinkRankError::Config(_))
        ));
    }

    #[test]
    fn test_empty_corpus() {
        assert!(matches!(
            iterate_pagerank(&Corpus::default(), 0.85),
            Err(LinkRankError::EmptyCorpus)
        ));
    }
}
