//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use depwheel_core::config::{ScanConfig, ScanReport, WheelData};
use depwheel_core::phases::scan::ScanOutcome;
use depwheel_core::registry::Registry;

/// Resolve `tests/fixtures/{name}` relative to the workspace root.
pub fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir)
        .join("../../tests/fixtures")
        .join(name)
        .canonicalize()
        .unwrap_or_else(|_| {
            Path::new(manifest_dir)
                .join("../../tests/fixtures")
                .join(name)
        })
}

/// Default config pointing at a fixture directory.
pub fn config_for(fixture_name: &str) -> ScanConfig {
    ScanConfig {
        root_path: fixture_path(fixture_name).to_string_lossy().to_string(),
        ..Default::default()
    }
}

/// Run the scan phase on a fixture directory.
pub fn run_scan(fixture_name: &str) -> (Registry, ScanOutcome) {
    let config = config_for(fixture_name);
    let mut registry = Registry::new();
    let outcome = depwheel_core::phases::scan::run_scan_phase(&config, &mut registry)
        .expect("scan phase should succeed on fixtures");
    (registry, outcome)
}

/// Run the full pipeline on a fixture directory.
pub fn run_pipeline_on(fixture_name: &str) -> ScanReport {
    let config = config_for(fixture_name);
    depwheel_core::pipeline::run_pipeline(&config, None)
        .expect("pipeline should succeed on fixtures")
}

/// Registry record names in their current order.
pub fn registry_names(registry: &Registry) -> Vec<String> {
    registry.records().iter().map(|r| r.name.clone()).collect()
}

/// Matrix row for a named class.
pub fn row_for<'a>(data: &'a WheelData, name: &str) -> &'a [u8] {
    let i = data
        .package_names
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("{name} not in packageNames"));
    &data.matrix[i]
}
