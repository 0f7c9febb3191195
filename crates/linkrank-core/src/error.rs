//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Page not in corpus: {0}")]
    InvalidPage(String),

    #[error("Invalid damping factor: {0} (must be strictly between 0 and 1)")]
    InvalidDamping(f64),

    #[error("Corpus contains no pages")]
    EmptyCorpus,

    #[error("Invalid sample count: {0} (must be at least 1)")]
    InvalidSampleCount(usize),

    #[error("Iteration did not converge after {iterations} passes (last change {delta})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("Invalid sampling weights: {0}")]
    Weights(#[from] rand::distributions::WeightedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyCorpus | Self::InvalidPage(_) => exit_codes::NOT_FOUND,
            Self::InvalidDamping(_)
            | Self::InvalidSampleCount(_)
            | Self::Config(_)
            | Self::GlobPattern(_) => exit_codes::INVALID_INPUT,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
