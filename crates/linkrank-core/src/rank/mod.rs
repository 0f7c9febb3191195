//! PageRank estimators
//!
//! Provides:
//! - The random-surfer transition model shared by both estimators
//! - A sampling estimator that walks the chain and counts visits
//! - An iterative estimator that solves the PageRank recurrence

mod distribution;
mod iteration;
mod sampler;
mod sampling;
mod transition;

pub use distribution::Distribution;
pub use iteration::{iterate_pagerank, iterate_pagerank_with, Convergence};
pub use sampler::{RandomSampler, WeightedSampler};
pub use sampling::{sample_pagerank, sample_pagerank_with};
pub use transition::transition;

use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which estimator to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Sample,
    Iterate,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Sample => "sample",
            Method::Iterate => "iterate",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ranks produced by one estimator run
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub method: Method,
    pub ranks: Distribution,
    /// Steps of the random walk (sampling only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Passes until convergence (iteration only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
}

/// Run `method` on `corpus` with the parameters from `config`
pub fn rank(corpus: &Corpus, method: Method, config: &RankConfig) -> Result<Ranking> {
    config.validate()?;

    match method {
        Method::Sample => {
            let mut sampler = RandomSampler::from_seed_option(config.seed);
            let ranks =
                sample_pagerank_with(corpus, config.damping_factor, config.samples, &mut sampler)?;
            Ok(Ranking {
                method,
                ranks,
                samples: Some(config.samples),
                iterations: None,
            })
        }
        Method::Iterate => {
            let convergence = iterate_pagerank_with(
                corpus,
                config.damping_factor,
                config.tolerance,
                config.max_iterations,
            )?;
            Ok(Ranking {
                method,
                ranks: convergence.ranks,
                samples: None,
                iterations: Some(convergence.iterations),
            })
        }
    }
}

pub(crate) fn check_corpus(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(LinkRankError::EmptyCorpus);
    }
    Ok(())
}

/// Damping must lie strictly inside (0, 1); NaN is rejected too.
pub(crate) fn check_damping(damping_factor: f64) -> Result<()> {
    if damping_factor > 0.0 && damping_factor < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidDamping(damping_factor))
    }
}

/// Tolerance must be a non-negative number and at least one pass allowed.
pub(crate) fn check_iteration_params(tolerance: f64, max_iterations: usize) -> Result<()> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(LinkRankError::Config(format!(
            "tolerance must be non-negative, got {}",
            tolerance
        )));
    }
    if max_iterations == 0 {
        return Err(LinkRankError::Config(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    Ok(())
}
