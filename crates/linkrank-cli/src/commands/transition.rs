//! Transition command

use crate::app::{OutputFormat, TransitionArgs};
use crate::output::{format_sections, Section};
use anyhow::Result;
use linkrank_core::{transition, Config};

pub fn run(args: TransitionArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let damping = args.damping.unwrap_or(config.rank.damping_factor);
    let corpus = super::load_corpus(&args.dir, args.pattern.as_deref(), config)?;
    let dist = transition(&corpus, &args.page, damping)?;

    let section = Section::transition(&args.page, damping, &dist);
    print!("{}", format_sections(&[section], format));
    Ok(())
}
