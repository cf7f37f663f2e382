//! Provider and language-store tests.

use std::fs;
use std::sync::Arc;

use lokal::{
    DirProvider, LanguageStore, LanguageTable, LoadError, StaticProvider, TableProvider,
    TranslationEntry,
};
use tempfile::tempdir;

// =========================================================================
// StaticProvider
// =========================================================================

#[test]
fn static_provider_round_trip() {
    let table: LanguageTable = [("hello", "Hello!")].into_iter().collect();
    let provider = StaticProvider::new().with_table("en", table.clone());

    assert_eq!(provider.load_table("en").unwrap(), table);
}

#[test]
fn static_provider_unknown_language() {
    let provider = StaticProvider::new();
    let err = provider.load_table("ru").unwrap_err();
    assert!(matches!(err, LoadError::UnknownLanguage { code } if code == "ru"));
}

// =========================================================================
// DirProvider
// =========================================================================

#[test]
fn dir_provider_reads_json_tables() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{
            "hello": "Hello, {name}!",
            "apples": ["{count} apple", "{count} apples"]
        }"#,
    )
    .unwrap();

    let provider = DirProvider::new(dir.path());
    let table = provider.load_table("en").unwrap();

    let expected: LanguageTable = [
        ("hello", TranslationEntry::template("Hello, {name}!")),
        (
            "apples",
            TranslationEntry::plural(["{count} apple", "{count} apples"]),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(table, expected);
}

#[test]
fn dir_provider_missing_file_is_unknown_language() {
    let dir = tempdir().unwrap();
    let provider = DirProvider::new(dir.path());

    let err = provider.load_table("ru").unwrap_err();
    assert!(matches!(err, LoadError::UnknownLanguage { code } if code == "ru"));
}

#[test]
fn dir_provider_malformed_json_is_malformed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("en.json"), "{ not json").unwrap();

    let provider = DirProvider::new(dir.path());
    let err = provider.load_table("en").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { code, .. } if code == "en"));
}

// =========================================================================
// LanguageStore
// =========================================================================

#[test]
fn store_base_load_is_shared_not_copied() {
    let table: LanguageTable = [("hello", "Hello!")].into_iter().collect();
    let mut store = LanguageStore::new(StaticProvider::new().with_table("en", table));

    let via_code = store.load("en");
    let via_base = store.load_base();
    assert!(Arc::ptr_eq(&via_code, &via_base));
}

#[test]
fn store_failed_load_returns_base() {
    let table: LanguageTable = [("hello", "Hello!")].into_iter().collect();
    let mut store = LanguageStore::new(StaticProvider::new().with_table("en", table));

    let fallback = store.load("xx");
    assert!(fallback.contains_key("hello"));
    assert!(Arc::ptr_eq(&fallback, &store.load_base()));
}

#[test]
fn store_degrades_to_empty_base() {
    let mut store = LanguageStore::new(StaticProvider::new());
    assert!(store.load_base().is_empty());
    assert!(store.load("ru").is_empty());
}

#[test]
fn store_custom_base_language() {
    let table: LanguageTable = [("hello", "Bonjour!")].into_iter().collect();
    let mut store =
        LanguageStore::with_base_language(StaticProvider::new().with_table("fr", table), "fr");

    assert_eq!(store.base_language(), "fr");
    assert!(store.load("fr").contains_key("hello"));
    assert!(store.load("en").contains_key("hello"));
}
