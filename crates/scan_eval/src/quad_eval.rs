//! Single-model quad-detection evaluation.

use crate::config::QuadEvalConfig;
use crate::dataset::{load_image, load_mask, match_entries, save_image, Entry};
use crate::detect::QuadDetector;
use crate::report::{ReportBuilder, REPORT_TITLE};
use crate::types::{EvalError, EvalResult, RunSummary};
use image::{DynamicImage, GenericImageView, RgbImage};
use overlay_core::compose::overlay_mask;
use overlay_core::quad::draw_quad;
use std::fs;

/// Report filename for quad evaluation runs.
pub const REPORT_FILE: &str = "index.html";

/// Run the evaluation: one overlay plus detected quad per matched entry, then
/// a single HTML report written at the end. Decode failures skip the entry
/// and are recorded in the summary; write failures abort the run.
pub fn run_quad_eval(
    cfg: &QuadEvalConfig,
    detector: &mut dyn QuadDetector,
) -> EvalResult<RunSummary> {
    let results_dir = cfg.reports_dir.join(&cfg.results_subdir);
    fs::create_dir_all(&results_dir).map_err(|e| EvalError::Io {
        path: results_dir.clone(),
        source: e,
    })?;

    let entries = match_entries(&cfg.images_dir, &[&cfg.masks_dir])?;
    let mut report = ReportBuilder::new(REPORT_TITLE);
    let mut summary = RunSummary {
        entries_matched: entries.len(),
        ..Default::default()
    };

    for entry in &entries {
        println!("Processing {}...", entry.name);
        let (input, mask) = match read_assets(entry) {
            Ok(assets) => assets,
            Err(e) => {
                eprintln!("Skipping {}: {e}", entry.name);
                summary.record_skip(&entry.name, e.to_string());
                continue;
            }
        };

        let quad = detector
            .detect(&mask, false)
            .map(|q| q.scaled_to(mask.dimensions(), input.dimensions()));

        let input_name = format!("{}_input.jpg", entry.name);
        let output_name = format!("{}_output.jpg", entry.name);
        save_image(&input, &results_dir.join(&input_name))?;

        let mut output = overlay_mask(&input, &mask);
        if let Some(quad) = &quad {
            draw_quad(&mut output, quad);
        }
        save_image(&output, &results_dir.join(&output_name))?;

        report.push_pair(
            &entry.name,
            &format!("{}/{}", cfg.results_subdir, input_name),
            &format!("{}/{}", cfg.results_subdir, output_name),
        );
        summary.entries_rendered += 1;
    }

    let report_path = cfg.reports_dir.join(REPORT_FILE);
    report.write_to(&report_path)?;
    println!("Done! report at: {}", report_path.display());
    summary.report_path = report_path;
    Ok(summary)
}

fn read_assets(entry: &Entry) -> EvalResult<(RgbImage, DynamicImage)> {
    let input = load_image(&entry.image_path)?;
    let mask = load_mask(&entry.mask_paths[0])?;
    Ok((input, mask))
}
