//! The translation-resolution engine.
//!
//! This module provides key resolution with fallback, per-language
//! plural-form selection, and template interpolation with visible error
//! markers.

mod error;
mod interpolate;
mod plural;
mod store;
mod translator;
mod validate;

pub use error::{FormatError, LoadError, LoadWarning};
pub use interpolate::{format_template, interpolate};
pub use plural::{required_form_count, select_form};
pub use store::{BASE_LANGUAGE, LanguageStore};
pub use translator::Translator;
pub use validate::validate_table;
