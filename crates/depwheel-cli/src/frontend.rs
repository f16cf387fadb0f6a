//! Static viewer deployment and browser launch.
//!
//! The viewer is a self-contained page embedded at compile time and copied
//! byte-for-byte into the working directory next to `data.js`. Its only
//! contract with the pipeline is the data file's name and shape.

use std::fs;
use std::io;
use std::path::Path;

/// Viewer assets deployed unmodified into the working directory.
const ASSETS: &[(&str, &str)] = &[
    ("index.html", include_str!("../assets/index.html")),
    ("wheel.js", include_str!("../assets/wheel.js")),
];

/// Remove everything inside the working directory, creating it if missing.
pub fn clear_working_dir(dir: &Path) -> io::Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Write the embedded viewer files into the working directory.
pub fn deploy_assets(dir: &Path) -> io::Result<()> {
    for (name, contents) in ASSETS {
        fs::write(dir.join(name), contents)?;
    }
    Ok(())
}

/// Open the deployed page in the default browser.
///
/// A launch failure is reported but never fails the run; the artifacts are
/// already on disk at this point.
pub fn open_viewer(dir: &Path) {
    let page = dir.join("index.html");
    if let Err(e) = open::that(&page) {
        eprintln!("Could not open {}: {e}", page.display());
    }
}
