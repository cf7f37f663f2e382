//! Integration tests for the resolution engine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lokal::{LanguageTable, LoadError, StaticProvider, TableProvider, TranslationEntry, Translator, args};

fn en_table() -> LanguageTable {
    [
        ("welcome", TranslationEntry::template("Welcome, {name}!")),
        ("farewell", TranslationEntry::template("Goodbye, {name}!")),
        ("error_msg", TranslationEntry::template("Error: {error}")),
        (
            "apples",
            TranslationEntry::plural(["{count} apple", "{count} apples"]),
        ),
        ("lives", TranslationEntry::plural(["one life", "many lives"])),
    ]
    .into_iter()
    .collect()
}

fn ru_table() -> LanguageTable {
    [
        (
            "welcome",
            TranslationEntry::template("Добро пожаловать, {name}!"),
        ),
        (
            "apples",
            TranslationEntry::plural(["{count} яблоко", "{count} яблока", "{count} яблок"]),
        ),
    ]
    .into_iter()
    .collect()
}

fn provider() -> StaticProvider {
    StaticProvider::new()
        .with_table("en", en_table())
        .with_table("ru", ru_table())
}

// =========================================================================
// Basic Resolution
// =========================================================================

#[test]
fn default_language_is_base() {
    let translator = Translator::new(provider());
    assert_eq!(translator.language(), "en");
}

#[test]
fn active_table_lookup_with_interpolation() {
    let mut translator = Translator::with_language(provider(), "ru");
    assert_eq!(
        translator.translate("welcome", None, args! { "name" => "Ихтиандр" }),
        "Добро пожаловать, Ихтиандр!"
    );
}

#[test]
fn translate_without_set_language_uses_base() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("welcome", None, args! { "name" => "Aquaman" }),
        "Welcome, Aquaman!"
    );
}

#[test]
fn numeric_arguments_format_via_display() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("error_msg", None, args! { "error" => 404 }),
        "Error: 404"
    );
}

// =========================================================================
// Fallback Chain
// =========================================================================

#[test]
fn missing_key_in_active_falls_back_to_base() {
    let mut translator = Translator::with_language(provider(), "ru");
    // "farewell" exists only in the base table; fallback is not "missing".
    assert_eq!(
        translator.translate("farewell", None, args! { "name" => "Ada" }),
        "Goodbye, Ada!"
    );
}

#[test]
fn unknown_language_resolves_through_base() {
    let mut translator = Translator::with_language(provider(), "xx");
    assert_eq!(
        translator.translate("welcome", None, args! { "name" => "Ada" }),
        "Welcome, Ada!"
    );
}

#[test]
fn missing_key_is_marked() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("missing_key", None, args! {}),
        "<span style='color: red;'>⚠️missing_key⚠️</span>"
    );
}

// =========================================================================
// Plural Selection
// =========================================================================

#[test]
fn plural_selection_in_base_language() {
    let mut translator = Translator::new(provider());
    assert_eq!(translator.translate("apples", Some(1), args! {}), "1 apple");
    assert_eq!(translator.translate("apples", Some(5), args! {}), "5 apples");
}

#[test]
fn plural_selection_in_active_language() {
    let mut translator = Translator::with_language(provider(), "ru");
    assert_eq!(translator.translate("apples", Some(1), args! {}), "1 яблоко");
    assert_eq!(translator.translate("apples", Some(3), args! {}), "3 яблока");
    assert_eq!(
        translator.translate("apples", Some(10), args! {}),
        "10 яблок"
    );
    assert_eq!(
        translator.translate("apples", Some(21), args! {}),
        "21 яблоко"
    );
}

#[test]
fn plural_without_count_selects_with_zero() {
    let mut translator = Translator::new(provider());
    // No count: selection runs with n = 0, and "count" is not injected.
    assert_eq!(
        translator.translate("lives", None, args! {}),
        "many lives"
    );
}

#[test]
fn count_overrides_a_caller_supplied_argument() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("apples", Some(2), args! { "count" => 99 }),
        "2 apples"
    );
}

// =========================================================================
// Markers
// =========================================================================

#[test]
fn format_error_wraps_unformatted_template() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("error_msg", None, args! {}),
        "<span style='color: red;'>[FMT_ERR] Error: {error}</span>"
    );
}

#[test]
fn format_error_takes_precedence_over_missing() {
    // "error_msg" resolves only through the base table and its placeholder
    // is unsupplied: the format-error marker wins, not the missing marker.
    let mut translator = Translator::with_language(provider(), "ru");
    assert_eq!(
        translator.translate("error_msg", None, args! {}),
        "<span style='color: red;'>[FMT_ERR] Error: {error}</span>"
    );
}

#[test]
fn missing_key_with_placeholder_is_a_format_error() {
    let mut translator = Translator::new(provider());
    assert_eq!(
        translator.translate("missing {x}", None, args! {}),
        "<span style='color: red;'>[FMT_ERR] missing {x}</span>"
    );
}

#[test]
fn non_string_key_passes_through() {
    let mut translator = Translator::new(provider());
    assert_eq!(translator.translate(42, None, args! {}), "42");
    assert_eq!(translator.translate(2.5, None, args! {}), "2.5");
}

// =========================================================================
// State Behavior
// =========================================================================

#[test]
fn translation_is_idempotent() {
    let mut translator = Translator::with_language(provider(), "ru");
    let first = translator.translate("apples", Some(3), args! {});
    let second = translator.translate("apples", Some(3), args! {});
    assert_eq!(first, second);
}

#[test]
fn language_round_trip_restores_behavior() {
    let mut translator = Translator::with_language(provider(), "ru");
    let before = translator.translate("apples", Some(3), args! {});

    translator.set_language("en");
    assert_eq!(translator.translate("apples", Some(3), args! {}), "3 apples");

    translator.set_language("ru");
    assert_eq!(translator.translate("apples", Some(3), args! {}), before);
}

#[test]
fn degraded_base_marks_every_key_missing() {
    let mut translator = Translator::new(StaticProvider::new());
    assert_eq!(
        translator.translate("welcome", None, args! {}),
        "<span style='color: red;'>⚠️welcome⚠️</span>"
    );
}

// =========================================================================
// Load Counting
// =========================================================================

/// Serves the base table only, counting every provider fetch.
struct CountingProvider {
    loads: Arc<AtomicUsize>,
}

impl TableProvider for CountingProvider {
    fn load_table(&self, code: &str) -> Result<LanguageTable, LoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if code == "en" {
            Ok(en_table())
        } else {
            Err(LoadError::UnknownLanguage {
                code: code.to_string(),
            })
        }
    }
}

#[test]
fn base_table_is_fetched_at_most_once() {
    let loads = Arc::new(AtomicUsize::new(0));
    let mut translator = Translator::new(CountingProvider {
        loads: Arc::clone(&loads),
    });

    translator.set_language("en");
    translator.translate("missing_one", None, args! {});
    translator.translate("missing_two", None, args! {});

    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_language_load_reuses_cached_base() {
    let loads = Arc::new(AtomicUsize::new(0));
    let mut translator = Translator::new(CountingProvider {
        loads: Arc::clone(&loads),
    });

    // One failed fetch for "ru", one fetch for the base table.
    translator.set_language("ru");
    assert_eq!(loads.load(Ordering::SeqCst), 2);

    // Lookups fall back to the cached base without new fetches.
    translator.translate("welcome", None, args! { "name" => "Ada" });
    translator.translate("nope", None, args! {});
    assert_eq!(loads.load(Ordering::SeqCst), 2);
}
