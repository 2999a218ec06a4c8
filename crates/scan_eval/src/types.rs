//! Error and run-summary types for the evaluation harness.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image decode error at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image write error at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// One entry dropped mid-run because an asset failed to decode.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// Counters and skip records for one driver run. Skips cover decode failures
/// only; candidates without a full mask set never become entries and are not
/// counted here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub entries_matched: usize,
    pub entries_rendered: usize,
    pub entries_skipped: usize,
    pub skipped: Vec<SkippedEntry>,
    pub report_path: PathBuf,
}

impl RunSummary {
    pub(crate) fn record_skip(&mut self, name: &str, reason: String) {
        self.entries_skipped += 1;
        self.skipped.push(SkippedEntry {
            name: name.to_string(),
            reason,
        });
    }
}
