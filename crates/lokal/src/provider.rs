//! Language-data providers.
//!
//! A provider turns a language code into a `LanguageTable`. The engine
//! depends only on this capability, not on any storage format; the
//! implementations here cover in-memory configuration and one-JSON-file-
//! per-language directories.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::engine::LoadError;
use crate::types::LanguageTable;

/// Source of language tables.
pub trait TableProvider {
    /// Fetch the table for a language code.
    fn load_table(&self, code: &str) -> Result<LanguageTable, LoadError>;
}

/// In-memory provider: a fixed mapping from language code to table.
///
/// # Example
///
/// ```
/// use lokal::{StaticProvider, TableProvider};
///
/// let provider = StaticProvider::new()
///     .with_table("en", [("hello", "Hello!")].into_iter().collect());
///
/// assert!(provider.load_table("en").is_ok());
/// assert!(provider.load_table("ru").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    tables: HashMap<String, LanguageTable>,
}

impl StaticProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table for a language code, consuming and returning the
    /// provider for chaining.
    pub fn with_table(mut self, code: impl Into<String>, table: LanguageTable) -> Self {
        self.tables.insert(code.into(), table);
        self
    }

    /// Add a table for a language code.
    pub fn insert(&mut self, code: impl Into<String>, table: LanguageTable) {
        self.tables.insert(code.into(), table);
    }
}

impl TableProvider for StaticProvider {
    fn load_table(&self, code: &str) -> Result<LanguageTable, LoadError> {
        self.tables
            .get(code)
            .cloned()
            .ok_or_else(|| LoadError::UnknownLanguage {
                code: code.to_string(),
            })
    }
}

/// Directory provider: reads `<dir>/<code>.json` per language.
///
/// The file format is the table's serde form: an object mapping each key to
/// a template string or a list of plural-form templates.
#[derive(Debug, Clone)]
pub struct DirProvider {
    dir: PathBuf,
}

impl DirProvider {
    /// Create a provider over a directory of `<code>.json` files.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TableProvider for DirProvider {
    fn load_table(&self, code: &str) -> Result<LanguageTable, LoadError> {
        let path = self.dir.join(format!("{code}.json"));
        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::UnknownLanguage {
                    code: code.to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|err| LoadError::Malformed {
            code: code.to_string(),
            message: err.to_string(),
        })
    }
}
