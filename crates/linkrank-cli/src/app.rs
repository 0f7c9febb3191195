//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::Method;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "PageRank for a directory of linked HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the pages of a directory
    Rank(RankArgs),

    /// Show where a random surfer goes next from one page
    Transition(TransitionArgs),

    /// Show the link graph of a directory
    Corpus(CorpusArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Directory holding the pages
    pub dir: PathBuf,

    /// Estimator to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: MethodArg,

    /// Damping factor, strictly between 0 and 1
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Random-walk steps for the sampling estimator
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold for the iterative estimator
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Maximum passes of the iterative estimator
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Glob pattern for page files
    #[arg(long)]
    pub pattern: Option<String>,

    /// Order of the printed pages
    #[arg(long, value_enum, default_value = "page")]
    pub sort: SortOrder,
}

#[derive(Args)]
pub struct TransitionArgs {
    /// Directory holding the pages
    pub dir: PathBuf,

    /// Current page, relative to the directory
    pub page: String,

    /// Damping factor, strictly between 0 and 1
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Glob pattern for page files
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Directory holding the pages
    pub dir: PathBuf,

    /// Glob pattern for page files
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Sample,
    Iterate,
    Both,
}

impl MethodArg {
    pub fn methods(self) -> &'static [Method] {
        match self {
            MethodArg::Sample => &[Method::Sample],
            MethodArg::Iterate => &[Method::Iterate],
            MethodArg::Both => &[Method::Sample, Method::Iterate],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Alphabetical by page
    Page,
    /// Highest rank first
    Rank,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
    Xml,
}
