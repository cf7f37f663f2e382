//! Coverage command implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::table::{format_coverage_table, LanguageCoverage};

use super::load_table;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Base language file (e.g., en.json).
    #[arg(long)]
    pub base: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing language-table files. Defaults to the base file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let base_table = load_table(&args.base)?;
    let base_names: HashSet<String> = base_table.keys().map(str::to_string).collect();
    let base_count = base_names.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.base.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    // Collect coverage data for each language
    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{}.json", lang));

        let (translated_names, mut missing): (HashSet<String>, Vec<String>) = if lang_file.exists()
        {
            let table = load_table(&lang_file)?;
            let translated: HashSet<String> = table.keys().map(str::to_string).collect();
            let missing: Vec<String> = base_names
                .iter()
                .filter(|name| !translated.contains(*name))
                .cloned()
                .collect();
            (translated, missing)
        } else {
            // File doesn't exist - all keys are missing
            (HashSet::new(), base_names.iter().cloned().collect())
        };
        missing.sort_unstable();

        let translated_count = base_names.intersection(&translated_names).count();

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: translated_count,
            missing,
        });
    }

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: base_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(base_count, &coverage_data);
        println!("{}", table);

        // Print missing keys per language
        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {}", name);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
