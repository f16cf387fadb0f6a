//! Depwheel CLI — scan a JavaScript tree and open the dependency wheel.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use depwheel_core::config::{ScanConfig, WheelData};
use depwheel_core::output::write_data_file;
use depwheel_core::pipeline;

mod frontend;

/// Name of the data file the viewer page loads.
const DATA_FILE: &str = "data.js";

#[derive(Parser)]
#[command(
    name = "depwheel",
    about = "Depwheel - Visualise class dependencies as an interactive dependency wheel"
)]
struct Cli {
    /// Directory tree to scan for class declarations
    path: PathBuf,

    /// Working directory for the viewer and data file (cleared on every run)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Do not open the browser after deployment
    #[arg(long)]
    no_open: bool,

    /// Show per-phase timing breakdown
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let root_path = cli.path.canonicalize().unwrap_or(cli.path);
    let out_dir = cli
        .out_dir
        .unwrap_or_else(|| std::env::temp_dir().join("depwheel"));

    let config = ScanConfig {
        root_path: root_path.to_string_lossy().to_string(),
        output_dir: Some(out_dir.to_string_lossy().to_string()),
        no_open: cli.no_open,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    if cli.quiet {
        run_quiet(&config, &out_dir);
    } else {
        run_with_progress(&config, &out_dir, cli.verbose);
    }
}

fn run_quiet(config: &ScanConfig, out_dir: &Path) {
    let report = match pipeline::run_pipeline(config, None) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Scan failed: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = deploy(&report.data, out_dir) {
        eprintln!("Error deploying viewer: {e}");
        std::process::exit(1);
    }
    if !config.no_open {
        frontend::open_viewer(out_dir);
    }
}

fn run_with_progress(config: &ScanConfig, out_dir: &Path, verbose: bool) {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message("Initialising...");
    pb.enable_steady_tick(std::time::Duration::from_millis(80));

    let progress: pipeline::ProgressCallback = {
        let pb = pb.clone();
        Box::new(move |_name, label| {
            pb.set_message(label.to_string());
        })
    };

    let start = Instant::now();
    let report = match pipeline::run_pipeline(config, Some(progress)) {
        Ok(r) => r,
        Err(e) => {
            pb.finish_and_clear();
            eprintln!("Scan failed: {e}");
            std::process::exit(1);
        }
    };
    pb.finish_and_clear();

    if let Err(e) = deploy(&report.data, out_dir) {
        eprintln!("Error deploying viewer: {e}");
        std::process::exit(1);
    }

    // Summary
    println!(
        "\n{}  Depwheel: {}",
        style("✓").green().bold(),
        style(
            Path::new(&config.root_path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default()
        )
        .bold()
    );
    println!("  {:<14} {}", "Files:", report.files_scanned);
    println!("  {:<14} {}", "Classes:", report.data.package_names.len());
    println!("  {:<14} {}", "Placeholders:", report.placeholders);
    println!("  {:<14} {}", "Dependencies:", report.edges);

    let duration = start.elapsed();
    println!(
        "  {:<14} {:.1}ms",
        "Duration:",
        duration.as_secs_f64() * 1000.0
    );

    if verbose {
        println!("\n  Phase Timings:");
        let mut timings: Vec<_> = report.timings.iter().collect();
        timings.sort_by(|a, b| a.0.cmp(b.0));
        for (phase, secs) in timings {
            println!("    {:<14} {:.1}ms", phase, secs * 1000.0);
        }
    }

    println!(
        "\n  {} {}",
        style("Viewer deployed to:").green(),
        out_dir.display()
    );

    if !config.no_open {
        frontend::open_viewer(out_dir);
    }
}

/// Clear the working directory, deploy the embedded viewer, write the data
/// file. Runs strictly after the pipeline so a failed scan leaves the
/// previous deployment untouched.
fn deploy(data: &WheelData, out_dir: &Path) -> std::io::Result<()> {
    frontend::clear_working_dir(out_dir)?;
    frontend::deploy_assets(out_dir)?;
    write_data_file(data, &out_dir.join(DATA_FILE))
}
