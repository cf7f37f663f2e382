//! Placeholder substitution over parsed templates.

use std::collections::HashMap;

use crate::engine::error::FormatError;
use crate::parser::ast::{Placeholder, Segment, Template};
use crate::parser::parse_template;
use crate::types::Value;

/// Substitute named arguments into a parsed template.
///
/// Each named placeholder is replaced by the `Display` form of the
/// corresponding argument. The translate surface supplies named arguments
/// only, so positional placeholders (`{0}`, `{}`) always index out of
/// range.
pub fn interpolate(
    template: &Template,
    args: &HashMap<String, Value>,
) -> Result<String, FormatError> {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(Placeholder::Named(name)) => {
                let value = args.get(name).ok_or_else(|| FormatError::MissingArgument {
                    name: name.clone(),
                })?;
                output.push_str(&value.to_string());
            }
            Segment::Placeholder(Placeholder::Positional(index)) => {
                return Err(FormatError::PositionalOutOfRange { index: *index });
            }
            Segment::Placeholder(Placeholder::Auto) => {
                return Err(FormatError::PositionalOutOfRange { index: 0 });
            }
        }
    }
    Ok(output)
}

/// Parse and interpolate in one step.
///
/// This is the engine's single fallible format path: template syntax errors
/// and substitution failures both surface as `FormatError`.
///
/// # Example
///
/// ```
/// use lokal::{args, format_template};
///
/// let text = format_template("Hello, {name}!", &args! { "name" => "Ada" }).unwrap();
/// assert_eq!(text, "Hello, Ada!");
/// ```
pub fn format_template(
    template: &str,
    args: &HashMap<String, Value>,
) -> Result<String, FormatError> {
    let template = parse_template(template)?;
    interpolate(&template, args)
}
