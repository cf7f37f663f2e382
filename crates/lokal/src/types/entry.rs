//! Translation entries and per-language tables.

use std::collections::HashMap;
use std::slice;

use serde::{Deserialize, Serialize};

/// A single translation entry: one template, or an ordered list of
/// plural-form templates.
///
/// Plural forms are positional; which index a count selects is defined per
/// language family by the plural-rule selector. The untagged serde
/// representation keeps the on-disk shape as plain "string or list of
/// strings":
///
/// ```
/// use lokal::TranslationEntry;
///
/// let single: TranslationEntry = serde_json::from_str(r#""Hello, {name}!""#).unwrap();
/// assert!(!single.is_plural());
///
/// let plural: TranslationEntry =
///     serde_json::from_str(r#"["{count} apple", "{count} apples"]"#).unwrap();
/// assert!(plural.is_plural());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationEntry {
    /// A single template string.
    Template(String),

    /// Ordered plural-form templates.
    Plural(Vec<String>),
}

impl TranslationEntry {
    /// Create a single-template entry.
    pub fn template(text: impl Into<String>) -> Self {
        TranslationEntry::Template(text.into())
    }

    /// Create a plural entry from an ordered list of form templates.
    pub fn plural<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TranslationEntry::Plural(forms.into_iter().map(Into::into).collect())
    }

    /// Whether this entry carries plural forms.
    pub fn is_plural(&self) -> bool {
        matches!(self, TranslationEntry::Plural(_))
    }

    /// All template strings in this entry: one for `Template`, every form
    /// for `Plural`.
    pub fn templates(&self) -> &[String] {
        match self {
            TranslationEntry::Template(text) => slice::from_ref(text),
            TranslationEntry::Plural(forms) => forms,
        }
    }
}

impl From<&str> for TranslationEntry {
    fn from(text: &str) -> Self {
        TranslationEntry::Template(text.to_string())
    }
}

impl From<String> for TranslationEntry {
    fn from(text: String) -> Self {
        TranslationEntry::Template(text)
    }
}

impl From<Vec<String>> for TranslationEntry {
    fn from(forms: Vec<String>) -> Self {
        TranslationEntry::Plural(forms)
    }
}

/// Mapping from translation key to entry for one language.
///
/// Tables are immutable once loaded by the engine; reloading a language
/// replaces its table wholesale. The construction methods exist for
/// providers and tests.
///
/// # Example
///
/// ```
/// use lokal::{LanguageTable, TranslationEntry};
///
/// let table: LanguageTable = [
///     ("hello", TranslationEntry::template("Hello, {name}!")),
///     ("apples", TranslationEntry::plural(["{count} apple", "{count} apples"])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.len(), 2);
/// assert!(table.contains_key("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    entries: HashMap<String, TranslationEntry>,
}

impl LanguageTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by key.
    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// Insert an entry, replacing any previous entry for the key.
    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<TranslationEntry>) {
        self.entries.insert(key.into(), entry.into());
    }

    /// Whether the table has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageTable
where
    K: Into<String>,
    V: Into<TranslationEntry>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, entry)| (key.into(), entry.into()))
            .collect();
        Self { entries }
    }
}
