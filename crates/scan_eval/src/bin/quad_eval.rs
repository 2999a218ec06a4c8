use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use scan_eval::config::QuadEvalConfig;
use scan_eval::detect::HeuristicQuadDetector;
use scan_eval::quad_eval::run_quad_eval;
use scan_eval::types::RunSummary;

#[derive(Parser, Debug)]
#[command(
    name = "quad_eval",
    about = "Render quad-detection overlays for a dataset and build an HTML report"
)]
struct Args {
    /// Config file overriding the compiled defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory of dataset images (jpg/jpeg).
    #[arg(long)]
    images_dir: Option<PathBuf>,
    /// Directory of masks (png, matched to images by stem).
    #[arg(long)]
    masks_dir: Option<PathBuf>,
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
    fn apply_to(&self, cfg: &mut QuadEvalConfig) {
        if let Some(v) = &self.images_dir {
            cfg.images_dir = v.clone();
        }
        if let Some(v) = &self.masks_dir {
            cfg.masks_dir = v.clone();
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
        Some(path) => QuadEvalConfig::from_path(path)
            .with_context(|| format!("read config {}", path.display()))?,
        None => QuadEvalConfig::load(),
    };
    args.apply_to(&mut cfg);
    cfg.warn_if_missing_inputs();

    let mut detector = HeuristicQuadDetector;
    let summary = run_quad_eval(&cfg, &mut detector)?;
    println!(
        "Evaluation complete: {} rendered, {} skipped of {} matched",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_loaded_config() {
        let args = Args::try_parse_from([
            "quad_eval",
            "--images-dir",
            "data/imgs",
            "--masks-dir",
            "data/masks",
            "--reports-dir",
            "out/reports",
            "--results-subdir",
            "rendered",
        ])
        .unwrap();
        let mut cfg = QuadEvalConfig::default();
        args.apply_to(&mut cfg);
        assert_eq!(cfg.images_dir, PathBuf::from("data/imgs"));
        assert_eq!(cfg.masks_dir, PathBuf::from("data/masks"));
        assert_eq!(cfg.reports_dir, PathBuf::from("out/reports"));
        assert_eq!(cfg.results_subdir, "rendered");
    }

    #[test]
    fn absent_flags_leave_the_config_untouched() {
        let args = Args::try_parse_from(["quad_eval"]).unwrap();
        let mut cfg = QuadEvalConfig::default();
        args.apply_to(&mut cfg);
        let defaults = QuadEvalConfig::default();
        assert_eq!(cfg.images_dir, defaults.images_dir);
        assert_eq!(cfg.masks_dir, defaults.masks_dir);
        assert_eq!(cfg.reports_dir, defaults.reports_dir);
        assert_eq!(cfg.results_subdir, defaults.results_subdir);
    }
}
