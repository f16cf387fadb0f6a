//! Phase 1: Walk the source tree and extract class declarations.

use std::error::Error;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::extract::DeclarationMatcher;
use crate::registry::{ClassRecord, Registry};

/// Extension of the source files the scan considers. Exact match.
const SOURCE_EXTENSION: &str = "js";

/// Counters produced by the scan phase.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Files with the source extension that were read.
    pub files_scanned: usize,
    /// Records created from a file's declaration line.
    pub classes_from_files: usize,
    /// Placeholder records created for referenced-but-unscanned names.
    pub placeholders: usize,
}

/// Run the scan phase: enumerate files, extract declarations, sort the
/// registry.
///
/// Every I/O failure is fatal: a walk error, a file that vanishes between
/// enumeration and read, or content that is not valid UTF-8 all abort the
/// run with no partial registry.
pub fn run_scan_phase(
    config: &ScanConfig,
    registry: &mut Registry,
) -> Result<ScanOutcome, Box<dyn Error>> {
    let root = Path::new(&config.root_path);
    if !root.is_dir() {
        return Err(format!("source directory not found: {}", root.display()).into());
    }

    let matcher = DeclarationMatcher::new();
    let mut outcome = ScanOutcome::default();

    // Sorted traversal keeps first-occurrence-wins deduplication
    // reproducible across platforms.
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXTENSION) {
            continue;
        }

        outcome.files_scanned += 1;
        let content = std::fs::read_to_string(path)?;

        // Only the first declaration line in a file counts.
        for line in content.lines() {
            if let Some(dependencies) = matcher.extract(line) {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();

                // The file's own record goes in first, so a class naming
                // itself as a dependency never turns into a placeholder.
                if registry.insert(ClassRecord {
                    name,
                    dependencies: dependencies.clone(),
                }) {
                    outcome.classes_from_files += 1;
                }

                // Empty tokens never seed placeholders; they stay only in
                // the owning record's dependency list.
                for dep in dependencies.iter().filter(|d| !d.is_empty()) {
                    if registry.ensure_placeholder(dep) {
                        outcome.placeholders += 1;
                    }
                }
                break;
            }
        }
    }

    registry.sort_by_name();
    log::debug!(
        "scan: {} files, {} classes, {} placeholders",
        outcome.files_scanned,
        outcome.classes_from_files,
        outcome.placeholders
    );

    Ok(outcome)
}
