//! Dataset entry matching and asset I/O.

use crate::types::{EvalError, EvalResult};
use image::{DynamicImage, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted for dataset input images.
const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];
/// On-disk format expected for masks.
const MASK_EXTENSION: &str = "png";

/// One dataset sample: an image plus the mask(s) required for it, matched by
/// file stem. Constructed only when every required mask exists; `mask_paths`
/// follows the order of the mask directories passed to [`match_entries`].
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub image_path: PathBuf,
    pub mask_paths: Vec<PathBuf>,
}

/// Enumerate jpg/jpeg images under `images_dir` and pair each with a
/// stem-named png in every mask directory. Candidates missing any mask are
/// silently dropped. Entries come back sorted by name.
pub fn match_entries(images_dir: &Path, mask_dirs: &[&Path]) -> EvalResult<Vec<Entry>> {
    let listing = fs::read_dir(images_dir).map_err(|e| EvalError::Io {
        path: images_dir.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for item in listing {
        let Ok(item) = item else { continue };
        let path = item.path();
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let mask_paths: Vec<PathBuf> = mask_dirs
            .iter()
            .map(|dir| dir.join(format!("{stem}.{MASK_EXTENSION}")))
            .collect();
        if mask_paths.iter().all(|p| p.exists()) {
            entries.push(Entry {
                name: stem.to_string(),
                image_path: path,
                mask_paths,
            });
        }
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Decode a dataset image to RGB.
pub fn load_image(path: &Path) -> EvalResult<RgbImage> {
    let img = image::open(path).map_err(|e| EvalError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.into_rgb8())
}

/// Decode a mask preserving its on-disk channel layout.
pub fn load_mask(path: &Path) -> EvalResult<DynamicImage> {
    image::open(path).map_err(|e| EvalError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Encode an image to `path`; the format follows the extension.
pub fn save_image(img: &RgbImage, path: &Path) -> EvalResult<()> {
    img.save(path).map_err(|e| EvalError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
