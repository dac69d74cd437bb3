//! algolab - benchmark runner
//!
//! Thin caller around the library core:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌───────────────┐    ┌─────────┐
//! │  Config  │───▶│ Generator │───▶│ Sort / Search │───▶│ Results │
//! │  (YAML)  │    │  (seeded) │    │  (timed runs) │    │  (CSV)  │
//! └──────────┘    └───────────┘    └───────────────┘    └─────────┘
//! ```
//!
//! All algorithmic logic lives in the library; this binary only parses
//! arguments, wires up logging, runs the suite, and exports the table.

use algolab::config::AppConfig;
use anyhow::{Context, Result};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn get_arg(name: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == name && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

/// Parse a comma-separated size list like `--sizes 1000,5000,10000`.
fn parse_sizes(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .with_context(|| format!("invalid size '{}'", s))
        })
        .collect()
}

fn main() -> Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env)?;
    let _log_guard = algolab::logging::init_logging(&config);

    if let Some(raw) = get_arg("--sizes") {
        config.benchmark.sizes = parse_sizes(&raw)?;
    }
    if let Some(raw) = get_arg("--reps") {
        config.benchmark.repetitions = raw
            .parse()
            .with_context(|| format!("invalid repetition count '{}'", raw))?;
    }
    if let Some(raw) = get_arg("--seed") {
        config.benchmark.seed = Some(
            raw.parse()
                .with_context(|| format!("invalid seed '{}'", raw))?,
        );
    }
    if let Some(path) = get_arg("--output") {
        config.benchmark.output_path = path;
    }

    tracing::info!(
        "starting benchmark suite: sizes={:?} repetitions={} warmup={}",
        config.benchmark.sizes,
        config.benchmark.repetitions,
        config.benchmark.warmup
    );

    let rows = algolab::run_suite(&config.benchmark.suite_config());

    algolab::write_results(&rows, &config.benchmark.output_path)
        .context("benchmark results export failed")?;
    tracing::info!(
        "wrote {} result rows to {}",
        rows.len(),
        config.benchmark.output_path
    );

    Ok(())
}
