//! Sequential phase orchestrator with timing.

use std::collections::HashMap;
use std::error::Error;
use std::time::Instant;

use crate::config::{ScanConfig, ScanReport};
use crate::output::build_report;
use crate::phases;
use crate::registry::Registry;

/// Phase labels for progress reporting.
const PHASE_LABELS: &[(&str, &str)] = &[
    ("scan", "Scanning source files"),
    ("matrix", "Building adjacency matrix"),
];

/// Progress callback type: (phase_name, label).
pub type ProgressCallback = Box<dyn FnMut(&str, &str)>;

/// Execute the two-phase pipeline and return the result.
///
/// The run is one linear pass: enumerate → extract → sort → build matrix.
/// Any scan failure aborts the whole run; the matrix phase cannot fail.
pub fn run_pipeline(
    config: &ScanConfig,
    mut progress_callback: Option<ProgressCallback>,
) -> Result<ScanReport, Box<dyn Error>> {
    let mut timings: HashMap<String, f64> = HashMap::new();
    let total_start = Instant::now();

    report_phase(&mut progress_callback, "scan");
    let start = Instant::now();
    let mut registry = Registry::new();
    let outcome = phases::scan::run_scan_phase(config, &mut registry)?;
    timings.insert("scan".to_string(), start.elapsed().as_secs_f64());

    report_phase(&mut progress_callback, "matrix");
    let start = Instant::now();
    let data = phases::matrix::run_matrix_phase(&registry);
    timings.insert("matrix".to_string(), start.elapsed().as_secs_f64());

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

    Ok(build_report(&outcome, data, timings, total_ms))
}

fn report_phase(callback: &mut Option<ProgressCallback>, name: &str) {
    if let Some(cb) = callback.as_mut() {
        let label = PHASE_LABELS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, l)| *l)
            .unwrap_or(name);
        cb(name, label);
    }
}
