//! Error and warning types for the translation engine.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading a language table from a provider.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No table exists for the requested language code.
    #[error("no translation table for language '{code}'")]
    UnknownLanguage { code: String },

    /// File I/O error while reading table data.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table data exists but cannot be decoded.
    #[error("malformed table for language '{code}': {message}")]
    Malformed { code: String, message: String },
}

/// An interpolation failure.
///
/// `translate` never surfaces these; it converts them into the format-error
/// marker wrapping the unformatted template.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A named placeholder has no corresponding argument.
    #[error("no argument named '{name}'")]
    MissingArgument { name: String },

    /// A positional placeholder indexes past the supplied positional
    /// arguments. The translate surface supplies named arguments only, so
    /// every positional placeholder fails this way.
    #[error("positional index {index} out of range")]
    PositionalOutOfRange { index: usize },

    /// The template itself does not parse.
    #[error(transparent)]
    Template(#[from] ParseError),
}

/// Non-fatal findings from validating a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// Key present in the translation but not in the base table.
    #[error("key '{key}' in '{language}' does not exist in the base table")]
    UnknownKey { key: String, language: String },

    /// A plural entry has fewer forms than the language's rule selects from.
    #[error("key '{key}' in '{language}' has {provided} plural forms, the rule selects from {required}")]
    InsufficientForms {
        key: String,
        language: String,
        required: usize,
        provided: usize,
    },

    /// A translation template references a named placeholder the base
    /// template does not.
    #[error("key '{key}' in '{language}' uses placeholder '{placeholder}' absent from the base template")]
    PlaceholderMismatch {
        key: String,
        language: String,
        placeholder: String,
    },

    /// A template fails to parse.
    #[error("key '{key}' in '{language}' has an invalid template: {message}")]
    InvalidTemplate {
        key: String,
        language: String,
        message: String,
    },
}
