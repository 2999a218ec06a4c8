//! Static HTML report assembly.

use crate::types::{EvalError, EvalResult};
use std::fs;
use std::path::Path;

/// Page heading used by both report variants.
pub const REPORT_TITLE: &str = "Dataset Evaluation";

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8" />
    <title>Dataset Evaluation</title>
    <style>
        body { font-family: sans-serif; padding: 20px; }
        img { max-width: 400px; margin-right: 20px; }
        .row { display: flex; gap: 20px; align-items: flex-start; }
        .entry { margin-bottom: 40px; }
    </style>
</head>
<body>
"#;

const HTML_TAIL: &str = "</body>\n</html>\n";

/// Accumulates per-entry fragments in insertion order and renders the final
/// report page in one piece. Entry names are expected to be filesystem-safe;
/// no HTML escaping is applied.
pub struct ReportBuilder {
    title: String,
    fragments: Vec<String>,
}

impl ReportBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fragments: Vec::new(),
        }
    }

    /// Two-image row: input next to rendered output.
    pub fn push_pair(&mut self, name: &str, input_src: &str, output_src: &str) {
        self.fragments.push(format!(
            r#"    <div class="entry">
        <h3>{name}</h3>
        <div class="row">
            <img src="{input_src}" />
            <img src="{output_src}" />
        </div>
    </div>
"#
        ));
    }

    /// Three-image row: input next to the two model overlays.
    pub fn push_triple(&mut self, name: &str, input_src: &str, a_src: &str, b_src: &str) {
        self.fragments.push(format!(
            r#"    <div class="entry">
        <h3>{name}</h3>
        <div class="row">
            <div><img src="{input_src}" /></div>
            <div><img src="{a_src}" /></div>
            <div><img src="{b_src}" /></div>
        </div>
    </div>
"#
        ));
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the whole page.
    pub fn render(&self) -> String {
        let mut html = String::from(HTML_HEAD);
        html.push_str("    <h1>");
        html.push_str(&self.title);
        html.push_str("</h1>\n");
        for fragment in &self.fragments {
            html.push_str(fragment);
        }
        html.push_str(HTML_TAIL);
        html
    }

    /// Write the rendered page in one shot.
    pub fn write_to(&self, path: &Path) -> EvalResult<()> {
        fs::write(path, self.render()).map_err(|e| EvalError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
