//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;
pub mod xml;

use crate::app::{OutputFormat, SortOrder};
use linkrank_core::{Distribution, Method, Page, Ranking};

/// One block of per-page values to print
pub struct Section<'a> {
    /// Machine-readable label: the estimator, or `transition`
    pub name: &'static str,
    pub title: String,
    pub samples: Option<usize>,
    pub iterations: Option<usize>,
    pub entries: Vec<(&'a Page, f64)>,
}

impl<'a> Section<'a> {
    pub fn from_ranking(ranking: &'a Ranking, sort: SortOrder) -> Self {
        let title = match ranking.method {
            Method::Sample => format!(
                "PageRank Results from Sampling (n = {})",
                ranking.samples.unwrap_or_default()
            ),
            Method::Iterate => "PageRank Results from Iteration".to_string(),
        };

        Self {
            name: ranking.method.as_str(),
            title,
            samples: ranking.samples,
            iterations: ranking.iterations,
            entries: sorted_entries(&ranking.ranks, sort),
        }
    }

    pub fn transition(page: &str, damping: f64, dist: &'a Distribution) -> Self {
        Self {
            name: "transition",
            title: format!("Transition Probabilities from {} (d = {})", page, damping),
            samples: None,
            iterations: None,
            entries: sorted_entries(dist, SortOrder::Page),
        }
    }
}

fn sorted_entries(dist: &Distribution, sort: SortOrder) -> Vec<(&Page, f64)> {
    match sort {
        SortOrder::Page => dist.iter().collect(),
        SortOrder::Rank => dist.ranked(),
    }
}

/// Format sections in the requested output format
pub fn format_sections(sections: &[Section<'_>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_sections(sections),
        OutputFormat::Csv => csv::format_sections(sections),
        OutputFormat::Xml => xml::format_sections(sections),
        OutputFormat::Md => markdown::format_sections(sections),
        OutputFormat::Cli => terminal::format_sections(sections),
    }
}
