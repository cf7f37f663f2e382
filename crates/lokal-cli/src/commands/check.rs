//! Implementation of the `lokal check` command.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use clap::Args;
use lokal::parser::parse_template;
use lokal::{validate_table, LanguageTable};
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_table;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Language-table files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Base table to validate keys, plural forms, and placeholders against
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for check results.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    findings: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, verbose: bool) -> Result<i32> {
    // A missing or malformed base file is fatal; the files under check
    // produce findings instead.
    let base = match &args.base {
        Some(path) => Some(load_table(path)?),
        None => None,
    };

    let mut reports: Vec<FileReport> = Vec::new();

    for path in &args.files {
        let table = load_table(path)?;
        let language = language_code(path);

        let findings = match &base {
            Some(base) => validate_table(base, &language, &table)
                .iter()
                .map(ToString::to_string)
                .collect(),
            None => template_findings(&table),
        };

        if verbose && !args.json && findings.is_empty() {
            println!("{} {}", "ok".green(), path.display());
        }

        reports.push(FileReport {
            file: path.display().to_string(),
            findings,
        });
    }

    let any_findings = reports.iter().any(|report| !report.findings.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&reports).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        for report in &reports {
            for finding in &report.findings {
                println!("{} {}: {}", "warning:".yellow(), report.file, finding);
            }
        }
    }

    if any_findings {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Language code for a table file, taken from the file stem.
fn language_code(path: &Path) -> String {
    path.file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_string()
}

/// Template syntax findings for a table without a base to compare against.
fn template_findings(table: &LanguageTable) -> Vec<String> {
    let mut findings = Vec::new();

    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();

    for key in keys {
        let Some(entry) = table.get(key) else {
            continue;
        };
        for template in entry.templates() {
            if let Err(err) = parse_template(template) {
                findings.push(format!("key '{key}': {err}"));
            }
        }
    }

    findings
}
