//! Phase 2: Project the sorted registry into the adjacency matrix.

use std::collections::HashMap;

use crate::config::WheelData;
use crate::registry::Registry;

/// Run the matrix phase: Registry → WheelData.
///
/// Pure transform over the already-sorted registry; expects
/// `sort_by_name` to have run. Tokens with no matching name contribute no
/// column; only the empty token can be one, since every non-empty token
/// became a record during the scan.
pub fn run_matrix_phase(registry: &Registry) -> WheelData {
    let package_names: Vec<String> = registry
        .records()
        .iter()
        .map(|r| r.name.clone())
        .collect();

    let index: HashMap<&str, usize> = package_names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut matrix = Vec::with_capacity(package_names.len());
    for record in registry.records() {
        let mut row = vec![0u8; package_names.len()];
        for dep in &record.dependencies {
            if let Some(&col) = index.get(dep.as_str()) {
                row[col] = 1;
            }
        }
        matrix.push(row);
    }

    WheelData {
        package_names,
        matrix,
    }
}
