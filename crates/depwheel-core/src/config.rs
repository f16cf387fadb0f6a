//! Core data types and configuration for a depwheel run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for a scan run.
///
/// All paths travel through this struct; the pipeline reads no ambient
/// process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root of the directory tree to scan.
    #[serde(default)]
    pub root_path: String,
    /// Working directory the frontend and data file are deployed to.
    /// Defaults to `<system temp>/depwheel` when unset.
    pub output_dir: Option<String>,
    /// Skip the browser launch after deployment.
    #[serde(default)]
    pub no_open: bool,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            output_dir: None,
            no_open: false,
            verbose: false,
            quiet: false,
        }
    }
}

/// The serialized artifact — matches the schema the viewer page expects.
///
/// `matrix[i][j] == 1` means the class at `package_names[i]` declares a
/// dependency on the class at `package_names[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelData {
    #[serde(rename = "packageNames")]
    pub package_names: Vec<String>,
    pub matrix: Vec<Vec<u8>>,
}

/// Result of a pipeline run, handed back to the caller for reporting.
///
/// Only `data` reaches the output artifact; the rest is run bookkeeping.
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub data: WheelData,
    /// Source files enumerated by the scan (matching the fixed extension).
    pub files_scanned: usize,
    /// Records created from a scanned file's declaration line.
    pub classes_from_files: usize,
    /// Records synthesised for referenced-but-unscanned names.
    pub placeholders: usize,
    /// Number of 1 entries in the matrix.
    pub edges: usize,
    /// Per-phase wall time in seconds.
    pub timings: HashMap<String, f64>,
    pub total_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_config_defaults() {
        let cfg = ScanConfig::default();
        assert!(cfg.root_path.is_empty());
        assert!(cfg.output_dir.is_none());
        assert!(!cfg.no_open);
        assert!(!cfg.quiet);
    }

    #[test]
    fn wheel_data_field_names() {
        let data = WheelData {
            package_names: vec!["A".to_string()],
            matrix: vec![vec![0]],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"packageNames\""));
        assert!(json.contains("\"matrix\""));
    }

    #[test]
    fn wheel_data_roundtrip() {
        let data = WheelData {
            package_names: vec!["A".to_string(), "B".to_string()],
            matrix: vec![vec![0, 1], vec![0, 0]],
        };
        let json = serde_json::to_string_pretty(&data).unwrap();
        let parsed: WheelData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
