//! CSV I/O - results table export
//!
//! The one genuine I/O fault in the system lives here: failure to open or
//! write the output file surfaces as [`ExportError`] instead of being
//! swallowed.

use crate::bench::BenchmarkRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub const RESULTS_HEADER: &str = "algorithm,n,mean_ms,stddev_ms,min_ms,max_ms";
pub const DEFAULT_RESULTS_PATH: &str = "results.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write results to {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Write the results table: header line, then one row per (algorithm, size)
/// in the order the rows were accumulated. Numeric fields use fixed
/// 6-decimal formatting.
pub fn write_results(rows: &[BenchmarkRow], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", RESULTS_HEADER).map_err(io_err)?;
    for row in rows {
        writeln!(
            out,
            "{},{},{:.6},{:.6},{:.6},{:.6}",
            row.algorithm,
            row.n,
            row.stats.mean_ms,
            row.stats.stddev_ms,
            row.stats.min_ms,
            row.stats.max_ms
        )
        .map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::RunStats;

    fn sample_rows() -> Vec<BenchmarkRow> {
        vec![
            BenchmarkRow {
                algorithm: "bubble",
                n: 100,
                stats: RunStats {
                    mean_ms: 1.5,
                    stddev_ms: 0.25,
                    min_ms: 1.0,
                    max_ms: 2.0,
                },
            },
            BenchmarkRow {
                algorithm: "binary_search",
                n: 100,
                stats: RunStats {
                    mean_ms: 0.001,
                    stddev_ms: 0.0,
                    min_ms: 0.001,
                    max_ms: 0.001,
                },
            },
        ]
    }

    #[test]
    fn test_results_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        write_results(&sample_rows(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], RESULTS_HEADER);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "bubble,100,1.500000,0.250000,1.000000,2.000000");
        assert_eq!(
            lines[2],
            "binary_search,100,0.001000,0.000000,0.001000,0.001000"
        );
    }

    #[test]
    fn test_unwritable_path_surfaces_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("results.csv");
        let err = write_results(&sample_rows(), &path).unwrap_err();
        assert!(err.to_string().contains("failed to write results"));
    }
}
