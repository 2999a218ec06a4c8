//! Harness configuration: compiled defaults overlaid by an optional TOML file.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_NAME: &str = "scan-eval.toml";
/// Environment variable pointing at an alternate config file.
pub const CONFIG_ENV_VAR: &str = "SCAN_EVAL_CONFIG";

/// Directories for a quad-evaluation run.
#[derive(Debug, Clone)]
pub struct QuadEvalConfig {
    pub images_dir: PathBuf,
    pub masks_dir: PathBuf,
    /// Directory receiving the report; rendered images go to its
    /// `results_subdir`, which is also the relative prefix in img tags.
    pub reports_dir: PathBuf,
    pub results_subdir: String,
}

impl Default for QuadEvalConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("evaluation/dataset/images"),
            masks_dir: PathBuf::from("evaluation/dataset/masks"),
            reports_dir: PathBuf::from("evaluation/reports"),
            results_subdir: "results".to_string(),
        }
    }
}

/// Directories for a two-model segmentation comparison run.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub images_dir: PathBuf,
    pub masks_a_dir: PathBuf,
    pub masks_b_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub results_subdir: String,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("evaluation/dataset/images/val-dataset-v2.1"),
            masks_a_dir: PathBuf::from("evaluation/dataset/masks/v1.1.0"),
            masks_b_dir: PathBuf::from("evaluation/dataset/masks/v1.2.0"),
            reports_dir: PathBuf::from("evaluation/reports"),
            results_subdir: "results".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    quad_eval: Option<QuadEvalSection>,
    compare: Option<CompareSection>,
}

#[derive(Debug, Deserialize, Default)]
struct QuadEvalSection {
    images_dir: Option<String>,
    masks_dir: Option<String>,
    reports_dir: Option<String>,
    results_subdir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct CompareSection {
    images_dir: Option<String>,
    masks_a_dir: Option<String>,
    masks_b_dir: Option<String>,
    reports_dir: Option<String>,
    results_subdir: Option<String>,
}

impl QuadEvalConfig {
    /// Defaults overlaid by the config file named by `SCAN_EVAL_CONFIG` or
    /// found in the working directory, when one exists.
    pub fn load() -> Self {
        Self::from_path(&config_path()).unwrap_or_default()
    }

    /// `None` when the file is absent or unparsable.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file = read_config_file(path)?;
        let section = file.quad_eval.unwrap_or_default();
        let mut cfg = Self::default();
        if let Some(v) = section.images_dir {
            cfg.images_dir = PathBuf::from(v);
        }
        if let Some(v) = section.masks_dir {
            cfg.masks_dir = PathBuf::from(v);
        }
        if let Some(v) = section.reports_dir {
            cfg.reports_dir = PathBuf::from(v);
        }
        if let Some(v) = section.results_subdir {
            cfg.results_subdir = v;
        }
        Some(cfg)
    }

    pub fn warn_if_missing_inputs(&self) {
        if !self.images_dir.is_dir() {
            eprintln!(
                "scan-eval config: images dir {} does not exist",
                self.images_dir.display()
            );
        }
        if !self.masks_dir.is_dir() {
            eprintln!(
                "scan-eval config: masks dir {} does not exist",
                self.masks_dir.display()
            );
        }
    }
}

impl CompareConfig {
    /// Defaults overlaid by the config file named by `SCAN_EVAL_CONFIG` or
    /// found in the working directory, when one exists.
    pub fn load() -> Self {
        Self::from_path(&config_path()).unwrap_or_default()
    }

    /// `None` when the file is absent or unparsable.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file = read_config_file(path)?;
        let section = file.compare.unwrap_or_default();
        let mut cfg = Self::default();
        if let Some(v) = section.images_dir {
            cfg.images_dir = PathBuf::from(v);
        }
        if let Some(v) = section.masks_a_dir {
            cfg.masks_a_dir = PathBuf::from(v);
        }
        if let Some(v) = section.masks_b_dir {
            cfg.masks_b_dir = PathBuf::from(v);
        }
        if let Some(v) = section.reports_dir {
            cfg.reports_dir = PathBuf::from(v);
        }
        if let Some(v) = section.results_subdir {
            cfg.results_subdir = v;
        }
        Some(cfg)
    }

    pub fn warn_if_missing_inputs(&self) {
        if !self.images_dir.is_dir() {
            eprintln!(
                "scan-eval config: images dir {} does not exist",
                self.images_dir.display()
            );
        }
        for (label, dir) in [("masks A", &self.masks_a_dir), ("masks B", &self.masks_b_dir)] {
            if !dir.is_dir() {
                eprintln!("scan-eval config: {label} dir {} does not exist", dir.display());
            }
        }
    }
}

fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME))
}

fn read_config_file(path: &Path) -> Option<ConfigFile> {
    if !path.exists() {
        return None;
    }
    let raw = std::fs::read_to_string(path).ok()?;
    toml::from_str(&raw).ok()
}
