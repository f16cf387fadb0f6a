//! Data-file rendering for the dependency wheel frontend.

use std::collections::HashMap;
use std::path::Path;

use crate::config::{ScanReport, WheelData};
use crate::phases::scan::ScanOutcome;

/// Build the ScanReport from the pipeline products.
pub fn build_report(
    outcome: &ScanOutcome,
    data: WheelData,
    timings: HashMap<String, f64>,
    total_ms: f64,
) -> ScanReport {
    let edges = data
        .matrix
        .iter()
        .flatten()
        .filter(|&&cell| cell == 1)
        .count();

    ScanReport {
        data,
        files_scanned: outcome.files_scanned,
        classes_from_files: outcome.classes_from_files,
        placeholders: outcome.placeholders,
        edges,
        timings,
        total_ms,
    }
}

/// Render the adjacency data as the JavaScript source the viewer loads.
///
/// The viewer expects a global assignment, not bare JSON: the literal text
/// `var data = ` followed by the indented JSON object and a closing `;`.
pub fn render_data_js(data: &WheelData) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(format!("var data = {json};"))
}

/// Write the data file the viewer script expects to load.
pub fn write_data_file(data: &WheelData, output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = render_data_js(data).map_err(std::io::Error::other)?;
    std::fs::write(output_path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> WheelData {
        WheelData {
            package_names: vec!["A".to_string(), "B".to_string()],
            matrix: vec![vec![0, 1], vec![0, 0]],
        }
    }

    #[test]
    fn rendered_text_is_an_assignment() {
        let text = render_data_js(&sample_data()).unwrap();
        assert!(text.starts_with("var data = {"));
        assert!(text.ends_with(";"));
        assert!(text.contains("\"packageNames\""));
    }

    #[test]
    fn rendered_json_parses_back() {
        let data = sample_data();
        let text = render_data_js(&data).unwrap();
        let json = text
            .strip_prefix("var data = ")
            .and_then(|t| t.strip_suffix(';'))
            .unwrap();
        let parsed: WheelData = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn write_creates_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/dir/data.js");
        write_data_file(&sample_data(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("var data = "));
    }

    #[test]
    fn report_counts_edges() {
        let report = build_report(
            &ScanOutcome {
                files_scanned: 2,
                classes_from_files: 2,
                placeholders: 0,
            },
            sample_data(),
            HashMap::new(),
            1.0,
        );
        assert_eq!(report.edges, 1);
        assert_eq!(report.files_scanned, 2);
    }
}
