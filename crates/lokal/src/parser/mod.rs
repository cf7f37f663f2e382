//! Parsing of translation templates.

pub mod ast;
mod error;
mod template;

pub use error::ParseError;
pub use template::parse_template;
