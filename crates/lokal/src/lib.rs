pub mod engine;
pub mod global;
pub mod parser;
pub mod provider;
pub mod types;

pub use engine::{
    BASE_LANGUAGE, FormatError, LanguageStore, LoadError, LoadWarning, Translator,
    format_template, interpolate, required_form_count, select_form, validate_table,
};
pub use global::{
    current_language, install_provider, set_current_language, translate, with_translator,
    with_translator_mut,
};
pub use provider::{DirProvider, StaticProvider, TableProvider};
pub use types::{LanguageTable, TranslationEntry, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use lokal::{Value, args};
///
/// let a = args! { "count" => 3, "name" => "Alice" };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["count"].as_number(), Some(3));
/// assert_eq!(a["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
