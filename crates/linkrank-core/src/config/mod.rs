//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::index::{ScanOptions, DEFAULT_PAGE_PATTERN};
use crate::rank;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Probability of following a link rather than jumping to a random page
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// Random-walk steps taken by the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Largest per-page change at which the iteration counts as converged
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Safety cap on iteration passes
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Estimator parameters
    #[serde(default)]
    pub rank: RankConfig,

    /// Which files of a directory count as pages
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Parameters shared by the estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping_factor")]
    pub damping_factor: f64,

    /// Sample count for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Convergence threshold for the iterative estimator
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the sampling estimator; random when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping_factor(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

impl RankConfig {
    /// Check every parameter is usable by the estimators
    pub fn validate(&self) -> Result<()> {
        rank::check_damping(self.damping_factor)?;
        if self.samples == 0 {
            return Err(LinkRankError::InvalidSampleCount(self.samples));
        }
        rank::check_iteration_params(self.tolerance, self.max_iterations)
    }
}

fn default_damping_factor() -> f64 {
    DEFAULT_DAMPING_FACTOR
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

/// Page discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob pattern for page files, relative to the crawled directory
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
        }
    }
}

impl ScanConfig {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::with_pattern(self.pattern.clone())
    }
}

fn default_pattern() -> String {
    DEFAULT_PAGE_PATTERN.to_string()
}

impl Config {
    /// Load config from default path, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        let mut config = if path.exists() {
            Self::from_yaml(&std::fs::read_to_string(&path)?)?
        } else {
            Config::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load config from an explicit path, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LinkRankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_yaml(&content)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_DAMPING`, `LINKRANK_SAMPLES` and `LINKRANK_SEED`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LINKRANK_DAMPING") {
            self.rank.damping_factor = parse_env("LINKRANK_DAMPING", &value)?;
        }
        if let Some(value) = lookup("LINKRANK_SAMPLES") {
            self.rank.samples = parse_env("LINKRANK_SAMPLES", &value)?;
        }
        if let Some(value) = lookup("LINKRANK_SEED") {
            self.rank.seed = Some(parse_env("LINKRANK_SEED", &value)?);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LinkRankError::Config(format!("invalid value for {}: {:?}", key, value)))
}
