//! Implementation of the `lokal eval` command.

use std::collections::HashMap;
use std::path::PathBuf;

use lokal::{DirProvider, Translator, Value};
use serde::Serialize;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Language code for evaluation (e.g., en, ru, pl)
    #[arg(long, required = true)]
    pub lang: String,

    /// Directory containing language-table files
    #[arg(long, required = true)]
    pub translations: PathBuf,

    /// Translation key to resolve
    #[arg(long, required = true)]
    pub key: String,

    /// Count for plural-form selection
    #[arg(long)]
    pub count: Option<i64>,

    /// Arguments in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let mut translator =
        Translator::with_language(DirProvider::new(args.translations), args.lang.as_str());

    // Convert parameters to HashMap<String, Value>
    let params: HashMap<String, Value> = args
        .params
        .into_iter()
        .map(|(k, v)| {
            // Try parsing as i64 first, fall back to String
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else {
                Value::from(v)
            };
            (k, value)
        })
        .collect();

    // Translation is total: failures come back as marker-decorated strings.
    let result = translator.translate(args.key.as_str(), args.count, params);

    if args.json {
        let output = EvalResult { result };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
