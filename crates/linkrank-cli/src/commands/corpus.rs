//! Corpus command

use crate::app::{CorpusArgs, OutputFormat};
use anyhow::Result;
use linkrank_core::Config;

pub fn run(args: CorpusArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let corpus = super::load_corpus(&args.dir, args.pattern.as_deref(), config)?;
    let dangling = corpus.dangling_pages().count();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "pages": corpus,
                "stats": {
                    "page_count": corpus.len(),
                    "link_count": corpus.link_count(),
                    "dangling_count": dangling,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            for (page, links) in corpus.iter() {
                let targets: Vec<&str> = links.iter().map(String::as_str).collect();
                println!("{} -> {}", page, targets.join(", "));
            }
            println!();
            println!("Pages:           {}", corpus.len());
            println!("Links:           {}", corpus.link_count());
            println!("Dangling pages:  {}", dangling);
        }
    }
    Ok(())
}
