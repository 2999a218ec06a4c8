use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scan_eval::compare::run_comparison;
use scan_eval::config::CompareConfig;
use scan_eval::types::RunSummary;

#[derive(Parser, Debug)]
#[command(
    name = "seg_compare",
    about = "Compare two segmentation model versions side by side in an HTML report"
)]
struct Args {
    /// Config file overriding the compiled defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of dataset images (jpg/jpeg).
    #[arg(long)]
    images_dir: Option<PathBuf>,
    /// Directory of model A masks (png, matched to images by stem).
    #[arg(long)]
    masks_a_dir: Option<PathBuf>,
    /// Directory of model B masks (png, matched to images by stem).
    #[arg(long)]
    masks_b_dir: Option<PathBuf>,
    /// Directory receiving the report and its results subdirectory.
    #[arg(long)]
    reports_dir: Option<PathBuf>,
    /// Name of the results subdirectory under the reports dir.
    #[arg(long)]
    results_subdir: Option<String>,
    /// Optional path for a JSON run summary.
    #[arg(long)]
    summary_out: Option<PathBuf>,
}

impl Args {
    /// Flags override whatever the config file provided.
    fn apply_to(&self, cfg: &mut CompareConfig) {
        if let Some(v) = &self.images_dir {
            cfg.images_dir = v.clone();
        }
        if let Some(v) = &self.masks_a_dir {
            cfg.masks_a_dir = v.clone();
        }
        if let Some(v) = &self.masks_b_dir {
            cfg.masks_b_dir = v.clone();
        }
        if let Some(v) = &self.reports_dir {
            cfg.reports_dir = v.clone();
        }
        if let Some(v) = &self.results_subdir {
            cfg.results_subdir = v.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => CompareConfig::from_path(path)
            .with_context(|| format!("read config {}", path.display()))?,
        None => CompareConfig::load(),
    };
    args.apply_to(&mut cfg);
    cfg.warn_if_missing_inputs();

    let summary = run_comparison(&cfg)?;
    println!(
        "Comparison complete: {} rendered, {} skipped of {} matched",
        summary.entries_rendered, summary.entries_skipped, summary.entries_matched
    );

    if let Some(path) = &args.summary_out {
        write_summary(&summary, path)?;
    }
    Ok(())
}

fn write_summary(summary: &RunSummary, path: &PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(summary).context("serialize run summary")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    println!("Wrote run summary to {}", path.display());
    Ok(())
}
