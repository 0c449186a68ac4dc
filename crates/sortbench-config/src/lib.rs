//! Configuration system for SortBench.
//!
//! Load suite configuration from TOML or YAML files to control which datasets
//! are generated, which algorithms run, the trial plan and report outputs
//! without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sortbench_config::SuiteConfig;
//! use sortbench_sort::Algorithm;
//!
//! let config = SuiteConfig::from_toml_str(r#"
//!     datasets_dir = "data"
//!     seed = 7
//!     algorithms = ["insertion", "selection"]
//!
//!     [trials]
//!     trial_count = 20
//!     warmup_count = 5
//!
//!     [output]
//!     csv = "results.csv"
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.algorithms, vec![Algorithm::Insertion, Algorithm::Selection]);
//! assert_eq!(config.trials.trial_count, Some(20));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sortbench_config::SuiteConfig;
//!
//! let config = SuiteConfig::load("sortbench.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! assert_eq!(config.seed, 42);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sortbench_sort::Algorithm;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub use sortbench_datasets::DEFAULT_SEED;

/// Main suite configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SuiteConfig {
    /// Directory holding the dataset CSV files.
    #[serde(default = "default_datasets_dir")]
    pub datasets_dir: PathBuf,

    /// Seed for dataset generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Regenerate datasets even when the files already exist.
    #[serde(default)]
    pub regenerate: bool,

    /// Algorithms to benchmark, in reporting order.
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,

    /// Trial plan overrides.
    #[serde(default)]
    pub trials: TrialConfig,

    /// Report outputs.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_datasets_dir() -> PathBuf {
    PathBuf::from("datasets")
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            datasets_dir: default_datasets_dir(),
            seed: DEFAULT_SEED,
            regenerate: false,
            algorithms: default_algorithms(),
            trials: TrialConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, fails to parse, or is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one algorithm must be configured".to_string(),
            ));
        }
        let trials = self.trials.effective_trial_count();
        let warmup = self.trials.effective_warmup_count();
        if trials <= warmup {
            return Err(ConfigError::Invalid(format!(
                "trial_count ({}) must exceed warmup_count ({})",
                trials, warmup
            )));
        }
        Ok(())
    }

    /// Sets the datasets directory.
    pub fn with_datasets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.datasets_dir = dir.into();
        self
    }

    /// Sets the generation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the algorithms to benchmark.
    pub fn with_algorithms(mut self, algorithms: impl Into<Vec<Algorithm>>) -> Self {
        self.algorithms = algorithms.into();
        self
    }

    /// Sets the CSV report path.
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.csv = Some(path.into());
        self
    }
}

/// Trial plan overrides; unset fields fall back to the benchmark defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TrialConfig {
    /// Total trials per benchmark, warm-up included.
    pub trial_count: Option<usize>,

    /// Leading trials whose timings are discarded.
    pub warmup_count: Option<usize>,
}

impl TrialConfig {
    /// Trials per benchmark when `trial_count` is unset.
    pub const DEFAULT_TRIAL_COUNT: usize = 10;

    /// Warm-up trials when `warmup_count` is unset.
    pub const DEFAULT_WARMUP_COUNT: usize = 3;

    /// Configured trial count, or the default.
    pub fn effective_trial_count(&self) -> usize {
        self.trial_count.unwrap_or(Self::DEFAULT_TRIAL_COUNT)
    }

    /// Configured warm-up count, or the default.
    pub fn effective_warmup_count(&self) -> usize {
        self.warmup_count.unwrap_or(Self::DEFAULT_WARMUP_COUNT)
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Path of the `;`-delimited CSV report.
    pub csv: Option<PathBuf>,

    /// Path of the Markdown report.
    pub markdown: Option<PathBuf>,
}
