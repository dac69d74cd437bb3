//! Application configuration loaded from `config/{env}.yaml`
//!
//! A missing config file falls back to built-in defaults; a present but
//! malformed file fails fast with a parse error.

use crate::bench::SuiteConfig;
use crate::core_types::Value;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub benchmark: BenchmarkConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "algolab.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

/// Benchmark suite parameters, overridable per environment.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub repetitions: usize,
    pub warmup: usize,
    pub min_value: Value,
    pub max_value: Value,
    /// Fixed RNG seed for reproducible inputs; omit to seed from entropy.
    pub seed: Option<u64>,
    pub output_path: String,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        let suite = SuiteConfig::default();
        Self {
            sizes: suite.sizes,
            repetitions: suite.repetitions,
            warmup: suite.warmup,
            min_value: suite.min_value,
            max_value: suite.max_value,
            seed: None,
            output_path: crate::csv_io::DEFAULT_RESULTS_PATH.to_string(),
        }
    }
}

impl BenchmarkConfig {
    pub fn suite_config(&self) -> SuiteConfig {
        SuiteConfig {
            sizes: self.sizes.clone(),
            repetitions: self.repetitions,
            warmup: self.warmup,
            min_value: self.min_value,
            max_value: self.max_value,
            seed: self.seed,
        }
    }
}

impl AppConfig {
    /// Load `config/{env}.yaml`. Absent file -> defaults; malformed file ->
    /// error with the offending path attached.
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        match fs::read_to_string(&config_path) {
            Ok(content) => serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse config file {}", config_path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", config_path))
            }
        }
    }
}
