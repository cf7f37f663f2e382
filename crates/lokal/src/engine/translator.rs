//! The translation-resolution engine.
//!
//! `Translator` is the user-facing API for language selection and key
//! resolution. `translate` is a total function: every failure mode produces
//! a decorated string, never an error, so display code can always render
//! its result.

use std::collections::HashMap;
use std::sync::Arc;

use bon::Builder;

use crate::engine::interpolate::format_template;
use crate::engine::plural::select_form;
use crate::engine::store::{BASE_LANGUAGE, LanguageStore};
use crate::provider::TableProvider;
use crate::types::{LanguageTable, TranslationEntry, Value};

/// The translation-resolution engine.
///
/// A `Translator` holds the active language and its cached table, and
/// resolves keys against the active table with fallback to the base table.
///
/// # Example
///
/// ```
/// use lokal::{LanguageStore, StaticProvider, Translator, args};
///
/// let provider = StaticProvider::new()
///     .with_table("en", [("hello", "Hello, {name}!")].into_iter().collect());
///
/// let mut translator = Translator::builder()
///     .store(LanguageStore::new(provider))
///     .language("en")
///     .build();
///
/// assert_eq!(
///     translator.translate("hello", None, args! { "name" => "Ada" }),
///     "Hello, Ada!",
/// );
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Translator {
    /// Active language code (e.g., "en", "ru", "pl").
    #[builder(default = BASE_LANGUAGE.to_string())]
    language: String,

    /// Resolves language codes to tables and owns the base-table cache.
    store: LanguageStore,

    /// Cached table for the active language, loaded lazily on first use.
    #[builder(skip)]
    active: Option<Arc<LanguageTable>>,
}

impl Translator {
    /// Create a translator over `provider` with the default base language.
    pub fn new(provider: impl TableProvider + Send + Sync + 'static) -> Self {
        Translator::builder().store(LanguageStore::new(provider)).build()
    }

    /// Create a translator with an initial active language.
    pub fn with_language(
        provider: impl TableProvider + Send + Sync + 'static,
        language: impl Into<String>,
    ) -> Self {
        Translator::builder()
            .store(LanguageStore::new(provider))
            .language(language.into())
            .build()
    }

    /// Get the active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the language store (read-only).
    pub fn store(&self) -> &LanguageStore {
        &self.store
    }

    /// Switch the active language and load its table.
    ///
    /// The transition is unconditional: unknown codes are valid input and
    /// resolve to the base table with a logged diagnostic. Switching back
    /// to a language re-fetches its table from the provider.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        let table = self.store.load(&self.language);
        self.active = Some(table);
    }

    /// Resolve and format a translation.
    ///
    /// Lookup order: active table, base table, then the key text itself as
    /// a literal one-form template. Non-string keys pass through as their
    /// textual form with no lookup. When the resolved entry is plural, the
    /// form is selected by the active language's rule with `count`
    /// (absent count selects with zero); a provided `count` is also
    /// available to the template as the `count` argument.
    ///
    /// Failure modes decorate the returned string instead of erroring:
    /// missing keys wrap the formatted text in a warning marker, and
    /// interpolation failures wrap the unformatted template in a
    /// format-error marker. The format-error marker takes precedence; the
    /// two are mutually exclusive.
    pub fn translate(
        &mut self,
        key: impl Into<Value>,
        count: Option<i64>,
        args: HashMap<String, Value>,
    ) -> String {
        let key = key.into();
        let Value::String(key) = key else {
            return key.to_string();
        };

        let (entry, is_missing) = self.resolve_entry(&key);

        let mut args = args;
        if let Some(n) = count {
            args.insert("count".to_string(), Value::Number(n));
        }

        let template = match &entry {
            TranslationEntry::Template(text) => text.as_str(),
            TranslationEntry::Plural(forms) => {
                select_form(&self.language, count.unwrap_or(0), forms)
            }
        };

        match format_template(template, &args) {
            Ok(text) => {
                if is_missing {
                    missing_marker(&text)
                } else {
                    text
                }
            }
            Err(_) => format_error_marker(template),
        }
    }

    /// Look up a key along the fallback chain.
    ///
    /// Returns the entry and whether the key was missing from both tables.
    fn resolve_entry(&mut self, key: &str) -> (TranslationEntry, bool) {
        let active = self.active_table();
        if let Some(entry) = active.get(key) {
            return (entry.clone(), false);
        }
        if let Some(entry) = self.store.load_base().get(key) {
            return (entry.clone(), false);
        }
        (TranslationEntry::Template(key.to_string()), true)
    }

    /// The active table, loading it on first use when `set_language` was
    /// never called.
    fn active_table(&mut self) -> Arc<LanguageTable> {
        if let Some(table) = &self.active {
            return Arc::clone(table);
        }
        let table = self.store.load(&self.language);
        self.active = Some(Arc::clone(&table));
        table
    }
}

// Marker formats are a compatibility contract with existing consumers;
// both strings must stay byte-identical.

/// Wrap a missing-key result in the warning marker.
fn missing_marker(text: &str) -> String {
    format!("<span style='color: red;'>⚠️{text}⚠️</span>")
}

/// Wrap an unformatted template in the format-error marker.
fn format_error_marker(template: &str) -> String {
    format!("<span style='color: red;'>[FMT_ERR] {template}</span>")
}
