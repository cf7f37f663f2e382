//! Language-table resolution and base-table caching.

use std::sync::Arc;

use crate::provider::TableProvider;
use crate::types::LanguageTable;

/// The language whose table is the universal fallback.
pub const BASE_LANGUAGE: &str = "en";

/// Resolves language codes to tables through a provider.
///
/// The store owns the base-table cache: the base table is fetched at most
/// once per store, and every failed load falls back to it, so callers never
/// receive a missing table, only a possibly-degraded one. Tables are shared
/// via `Arc`; loading the base language returns the cached base table
/// itself, not a copy.
pub struct LanguageStore {
    provider: Box<dyn TableProvider + Send + Sync>,
    base_language: String,
    base: Option<Arc<LanguageTable>>,
}

impl LanguageStore {
    /// Create a store over `provider` with the default base language.
    pub fn new(provider: impl TableProvider + Send + Sync + 'static) -> Self {
        Self::with_base_language(provider, BASE_LANGUAGE)
    }

    /// Create a store with an explicit base language.
    pub fn with_base_language(
        provider: impl TableProvider + Send + Sync + 'static,
        base_language: impl Into<String>,
    ) -> Self {
        Self {
            provider: Box::new(provider),
            base_language: base_language.into(),
            base: None,
        }
    }

    /// The base language code.
    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    /// Load and cache the base table. Idempotent.
    ///
    /// A provider failure logs a diagnostic and caches an empty table;
    /// subsequent lookups then behave as if every key is missing.
    pub fn load_base(&mut self) -> Arc<LanguageTable> {
        if let Some(base) = &self.base {
            return Arc::clone(base);
        }
        let table = match self.provider.load_table(&self.base_language) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                tracing::error!(
                    "failed to load base translation table '{}': {}",
                    self.base_language,
                    err
                );
                Arc::new(LanguageTable::default())
            }
        };
        self.base = Some(Arc::clone(&table));
        table
    }

    /// Load the table for a language code.
    ///
    /// The base language returns the cached base table. Any failure for
    /// another language logs a diagnostic and returns the base table
    /// instead.
    pub fn load(&mut self, code: &str) -> Arc<LanguageTable> {
        if code == self.base_language {
            return self.load_base();
        }
        match self.provider.load_table(code) {
            Ok(table) => Arc::new(table),
            Err(err) => {
                tracing::warn!(
                    "no translation table for '{}', falling back to '{}': {}",
                    code,
                    self.base_language,
                    err
                );
                self.load_base()
            }
        }
    }
}
