//! Template string parser using winnow.
//!
//! Parses translation templates into an AST. Handles:
//! - Literal text segments
//! - Placeholders: `{name}`, `{0}`, `{}`
//! - Escape sequences: {{ }}
//!
//! A lone `}`, an unterminated `{`, or unsupported placeholder content is a
//! parse error; the resolution engine turns such errors into format-error
//! markers rather than panicking.

use winnow::combinator::{alt, delimited, empty, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

use super::ast::{Placeholder, Segment, Template};
use super::error::ParseError;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => Ok(t),
        Ok(_) | Err(_) => Err(error_at(input, remaining)),
    }
}

/// Build a `ParseError` pointing at the first unconsumed character.
fn error_at(original: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    let message = match remaining.chars().next() {
        Some('}') => "unmatched '}'".to_string(),
        Some('{') => "unterminated or invalid placeholder".to_string(),
        Some(c) => format!("unexpected character '{c}'"),
        None => "unexpected end of input".to_string(),
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    // Merge adjacent literals
    let merged = merge_literals(segments);

    Ok(Template { segments: merged })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_char)).parse_next(input)
}

/// Parse escape sequences: {{ -> {, }} -> }
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "{{".value(Segment::Literal("{".to_string())),
        "}}".value(Segment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

/// Parse a single literal character (not { or }).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['{', '}'])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: { content }
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited('{', placeholder_content, '}')
        .map(Segment::Placeholder)
        .parse_next(input)
}

/// Parse the content inside a placeholder.
///
/// The empty alternative must come last so `{name}` is not parsed as an
/// auto placeholder followed by garbage.
fn placeholder_content(input: &mut &str) -> ModalResult<Placeholder> {
    alt((positional_index, named_reference, auto_positional)).parse_next(input)
}

/// Parse an explicit positional index: `0`, `1`, ...
fn positional_index(input: &mut &str) -> ModalResult<Placeholder> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse::<usize>)
        .map(Placeholder::Positional)
        .parse_next(input)
}

/// Parse a named reference: an identifier.
fn named_reference(input: &mut &str) -> ModalResult<Placeholder> {
    (one_of(is_ident_start), take_while(0.., is_ident_cont))
        .take()
        .map(|name: &str| Placeholder::Named(name.to_string()))
        .parse_next(input)
}

/// Parse an empty placeholder body as an auto-numbered positional.
fn auto_positional(input: &mut &str) -> ModalResult<Placeholder> {
    empty.value(Placeholder::Auto).parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
