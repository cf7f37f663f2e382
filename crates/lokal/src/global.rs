//! Process-wide translator state.
//!
//! Provides thread-safe access to a shared `Translator` instance, so
//! application code can call `translate` without threading an engine handle
//! through every call site. A single lock serializes language switches
//! against concurrent translation.

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use crate::engine::Translator;
use crate::provider::{StaticProvider, TableProvider};
use crate::types::Value;

static GLOBAL_TRANSLATOR: LazyLock<RwLock<Translator>> =
    LazyLock::new(|| RwLock::new(Translator::new(StaticProvider::new())));

/// Provides read access to the global translator.
pub fn with_translator<T>(f: impl FnOnce(&Translator) -> T) -> T {
    let guard = GLOBAL_TRANSLATOR
        .read()
        .expect("global translator lock poisoned");
    f(&guard)
}

/// Provides write access to the global translator.
pub fn with_translator_mut<T>(f: impl FnOnce(&mut Translator) -> T) -> T {
    let mut guard = GLOBAL_TRANSLATOR
        .write()
        .expect("global translator lock poisoned");
    f(&mut guard)
}

/// Replace the global translator with a fresh engine over `provider`.
///
/// Resets the active language to the base language and clears all cached
/// tables. Until a provider is installed, the global translator has no
/// data: base loading degrades to an empty table and every lookup is
/// marked missing.
pub fn install_provider(provider: impl TableProvider + Send + Sync + 'static) {
    with_translator_mut(|translator| *translator = Translator::new(provider));
}

/// Sets the current language for the global translator.
pub fn set_current_language(language: impl Into<String>) {
    with_translator_mut(|translator| translator.set_language(language));
}

/// Returns the current language of the global translator.
pub fn current_language() -> String {
    with_translator(|translator| translator.language().to_owned())
}

/// Translate through the global translator.
///
/// See [`Translator::translate`] for resolution semantics.
pub fn translate(key: impl Into<Value>, count: Option<i64>, args: HashMap<String, Value>) -> String {
    with_translator_mut(|translator| translator.translate(key, count, args))
}
