//! Rank command

use crate::app::{OutputFormat, RankArgs};
use crate::output::{format_sections, Section};
use anyhow::Result;
use linkrank_core::{rank, Config};

pub fn run(args: RankArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let mut rank_config = config.rank.clone();
    if let Some(damping) = args.damping {
        rank_config.damping_factor = damping;
    }
    if let Some(samples) = args.samples {
        rank_config.samples = samples;
    }
    if let Some(tolerance) = args.tolerance {
        rank_config.tolerance = tolerance;
    }
    if let Some(max_iterations) = args.max_iterations {
        rank_config.max_iterations = max_iterations;
    }
    if args.seed.is_some() {
        rank_config.seed = args.seed;
    }
    rank_config.validate()?;

    let corpus = super::load_corpus(&args.dir, args.pattern.as_deref(), config)?;

    let rankings = args
        .method
        .methods()
        .iter()
        .map(|&method| rank(&corpus, method, &rank_config))
        .collect::<linkrank_core::Result<Vec<_>>>()?;

    let sections: Vec<Section<'_>> = rankings
        .iter()
        .map(|r| Section::from_ranking(r, args.sort))
        .collect();

    print!("{}", format_sections(&sections, format));
    Ok(())
}
