//! Cross-language table validation.
//!
//! Validation is developer tooling: resolution never consults these
//! results. The CLI surfaces them; library users can run them in CI.

use std::collections::BTreeSet;

use crate::engine::error::LoadWarning;
use crate::engine::plural::required_form_count;
use crate::parser::ast::{Placeholder, Segment};
use crate::parser::{ParseError, parse_template};
use crate::types::{LanguageTable, TranslationEntry};

/// Validate a translation table against the base table.
///
/// Checks for:
/// - Keys in the translation that do not exist in the base table
/// - Plural entries with fewer forms than the language's rule selects from
/// - Named placeholders the base entry's templates do not reference
/// - Templates that fail to parse
///
/// Warnings are ordered by key.
///
/// # Example
///
/// ```
/// use lokal::{LanguageTable, validate_table};
///
/// let base: LanguageTable = [("hello", "Hello!")].into_iter().collect();
/// let ru: LanguageTable = [("hello", "Привет!"), ("extra", "Лишнее")]
///     .into_iter()
///     .collect();
///
/// let warnings = validate_table(&base, "ru", &ru);
/// assert_eq!(warnings.len(), 1); // "extra" not in base
/// ```
pub fn validate_table(
    base: &LanguageTable,
    language: &str,
    table: &LanguageTable,
) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();

    for key in keys {
        let Some(entry) = table.get(key) else {
            continue;
        };

        let Some(base_entry) = base.get(key) else {
            warnings.push(LoadWarning::UnknownKey {
                key: key.to_string(),
                language: language.to_string(),
            });
            continue;
        };

        if let TranslationEntry::Plural(forms) = entry {
            let required = required_form_count(language);
            if forms.len() < required {
                warnings.push(LoadWarning::InsufficientForms {
                    key: key.to_string(),
                    language: language.to_string(),
                    required,
                    provided: forms.len(),
                });
            }
        }

        let placeholders = match named_placeholders(entry) {
            Ok(placeholders) => placeholders,
            Err(err) => {
                warnings.push(LoadWarning::InvalidTemplate {
                    key: key.to_string(),
                    language: language.to_string(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        // An unparseable base template cannot anchor a placeholder check.
        let Ok(base_placeholders) = named_placeholders(base_entry) else {
            continue;
        };

        for placeholder in placeholders.difference(&base_placeholders) {
            warnings.push(LoadWarning::PlaceholderMismatch {
                key: key.to_string(),
                language: language.to_string(),
                placeholder: placeholder.clone(),
            });
        }
    }

    warnings
}

/// Collect the named placeholders across all of an entry's templates.
fn named_placeholders(entry: &TranslationEntry) -> Result<BTreeSet<String>, ParseError> {
    let mut names = BTreeSet::new();
    for template in entry.templates() {
        let parsed = parse_template(template)?;
        for segment in &parsed.segments {
            if let Segment::Placeholder(Placeholder::Named(name)) = segment {
                names.insert(name.clone());
            }
        }
    }
    Ok(names)
}
