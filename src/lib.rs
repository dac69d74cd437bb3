//! algolab - classical sorting/searching algorithm laboratory
//!
//! Generates integer arrays under configurable size/range/uniqueness
//! policies, applies classical sorting and searching algorithms to them,
//! and measures their running-time behavior.
//!
//! # Modules
//!
//! - [`core_types`] - Fundamental aliases (`Value`, element-count ceiling)
//! - [`generator`] - Random arrays per a generation policy, seedable RNG
//! - [`sort`] - Five instrumented in-place sorting algorithms
//! - [`search`] - Linear and binary search
//! - [`bench`] - Timed batches, summary statistics, the full suite sweep
//! - [`csv_io`] - Results-table CSV export
//! - [`config`] - YAML application config
//! - [`logging`] - Tracing subscriber setup

pub mod core_types;

pub mod bench;
pub mod config;
pub mod csv_io;
pub mod generator;
pub mod logging;
pub mod search;
pub mod sort;

// Convenient re-exports at crate root
pub use bench::{BenchmarkRow, RunStats, SuiteConfig, run_batch, run_once, run_suite};
pub use core_types::{MAX_ELEMENTS, Value};
pub use csv_io::{ExportError, write_results};
pub use generator::{ArrayGenerator, GenerationPolicy, SizeMode};
pub use search::{binary_search, linear_search};
pub use sort::{
    SortCounters, bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
