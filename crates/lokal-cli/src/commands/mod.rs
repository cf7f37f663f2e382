//! CLI command implementations.

use std::fs::read_to_string;
use std::path::Path;

use lokal::LanguageTable;
use miette::{miette, IntoDiagnostic, Result};

use crate::output::TableDiagnostic;

mod check;
mod coverage;
mod eval;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};

/// Read and parse a language-table file.
///
/// JSON syntax errors surface as span-carrying diagnostics.
fn load_table(path: &Path) -> Result<LanguageTable> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read table file {:?}: {}", path, e))?;

    match serde_json::from_str(&content) {
        Ok(table) => Ok(table),
        Err(e) => {
            let diagnostic = TableDiagnostic::from_json_error(path, &content, &e);
            Err(diagnostic.into())
        }
    }
}
