//! scan_eval: batch visual evaluation for document scan models.
//!
//! Matches dataset images to mask files by stem, renders mask overlays (and
//! detected quads), and assembles static HTML reports for human review.

pub mod compare;
pub mod config;
pub mod dataset;
pub mod detect;
pub mod quad_eval;
pub mod report;
pub mod types;

pub mod prelude {
    pub use crate::compare::run_comparison;
    pub use crate::config::{CompareConfig, QuadEvalConfig};
    pub use crate::dataset::{match_entries, Entry};
    pub use crate::detect::{HeuristicQuadDetector, QuadDetector};
    pub use crate::quad_eval::run_quad_eval;
    pub use crate::report::ReportBuilder;
    pub use crate::types::{EvalError, EvalResult, RunSummary, SkippedEntry};
}
