//! Two-model segmentation comparison.

use crate::config::CompareConfig;
use crate::dataset::{load_image, load_mask, match_entries, save_image, Entry};
use crate::report::{ReportBuilder, REPORT_TITLE};
use crate::types::{EvalError, EvalResult, RunSummary};
use image::{DynamicImage, RgbImage};
use overlay_core::compose::overlay_mask;
use std::fs;

/// Report filename for comparison runs.
pub const REPORT_FILE: &str = "segmentation-comparison.html";

/// Render the input plus one overlay per model version for every matched
/// entry. All three assets are read before the first write, so an
/// undecodable image or mask skips the whole entry; partial triples never
/// reach disk.
pub fn run_comparison(cfg: &CompareConfig) -> EvalResult<RunSummary> {
    let results_dir = cfg.reports_dir.join(&cfg.results_subdir);
    fs::create_dir_all(&results_dir).map_err(|e| EvalError::Io {
        path: results_dir.clone(),
        source: e,
    })?;

    let entries = match_entries(&cfg.images_dir, &[&cfg.masks_a_dir, &cfg.masks_b_dir])?;
    let mut report = ReportBuilder::new(REPORT_TITLE);
    let mut summary = RunSummary {
        entries_matched: entries.len(),
        ..Default::default()
    };

    for entry in &entries {
        println!("Processing {}...", entry.name);
        let (input, mask_a, mask_b) = match read_assets(entry) {
            Ok(assets) => assets,
            Err(e) => {
                eprintln!("Skipping {}: {e}", entry.name);
                summary.record_skip(&entry.name, e.to_string());
                continue;
            }
        };

        let input_name = format!("{}_input.jpg", entry.name);
        let a_name = format!("{}_modelA.jpg", entry.name);
        let b_name = format!("{}_modelB.jpg", entry.name);
        save_image(&input, &results_dir.join(&input_name))?;
        save_image(&overlay_mask(&input, &mask_a), &results_dir.join(&a_name))?;
        save_image(&overlay_mask(&input, &mask_b), &results_dir.join(&b_name))?;

        report.push_triple(
            &entry.name,
            &format!("{}/{}", cfg.results_subdir, input_name),
            &format!("{}/{}", cfg.results_subdir, a_name),
            &format!("{}/{}", cfg.results_subdir, b_name),
        );
        summary.entries_rendered += 1;
    }

    let report_path = cfg.reports_dir.join(REPORT_FILE);
    report.write_to(&report_path)?;
    println!("Done! report at: {}", report_path.display());
    summary.report_path = report_path;
    Ok(summary)
}

fn read_assets(entry: &Entry) -> EvalResult<(RgbImage, DynamicImage, DynamicImage)> {
    let input = load_image(&entry.image_path)?;
    let mask_a = load_mask(&entry.mask_paths[0])?;
    let mask_b = load_mask(&entry.mask_paths[1])?;
    Ok((input, mask_a, mask_b))
}
