//! Template parser tests.

use lokal::parser::ast::{Placeholder, Segment};
use lokal::parser::{ParseError, parse_template};

// =========================================================================
// Literals and Placeholders
// =========================================================================

#[test]
fn empty_template() {
    let template = parse_template("").unwrap();
    assert!(template.segments.is_empty());
}

#[test]
fn literal_only() {
    let template = parse_template("plain text").unwrap();
    assert_eq!(
        template.segments,
        vec![Segment::Literal("plain text".to_string())]
    );
}

#[test]
fn named_placeholder_between_literals() {
    let template = parse_template("Hello, {name}!").unwrap();
    assert_eq!(
        template.segments,
        vec![
            Segment::Literal("Hello, ".to_string()),
            Segment::Placeholder(Placeholder::Named("name".to_string())),
            Segment::Literal("!".to_string()),
        ]
    );
}

#[test]
fn multiple_placeholders() {
    let template = parse_template("{greeting}, {name}").unwrap();
    assert_eq!(
        template.segments,
        vec![
            Segment::Placeholder(Placeholder::Named("greeting".to_string())),
            Segment::Literal(", ".to_string()),
            Segment::Placeholder(Placeholder::Named("name".to_string())),
        ]
    );
}

#[test]
fn positional_placeholder() {
    let template = parse_template("{0}").unwrap();
    assert_eq!(
        template.segments,
        vec![Segment::Placeholder(Placeholder::Positional(0))]
    );
}

#[test]
fn auto_placeholder() {
    let template = parse_template("{}").unwrap();
    assert_eq!(template.segments, vec![Segment::Placeholder(Placeholder::Auto)]);
}

// =========================================================================
// Escapes
// =========================================================================

#[test]
fn escaped_braces_are_literals() {
    let template = parse_template("{{}}").unwrap();
    assert_eq!(template.segments, vec![Segment::Literal("{}".to_string())]);
}

#[test]
fn escaped_placeholder_is_not_interpolated() {
    let template = parse_template("{{name}}").unwrap();
    assert_eq!(
        template.segments,
        vec![Segment::Literal("{name}".to_string())]
    );
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn lone_closing_brace_is_an_error() {
    let err = parse_template("a}b").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Syntax {
            line: 1,
            column: 2,
            ..
        }
    ));
}

#[test]
fn unterminated_placeholder_is_an_error() {
    assert!(parse_template("hello {name").is_err());
}

#[test]
fn invalid_placeholder_content_is_an_error() {
    assert!(parse_template("{bad-name}").is_err());
    assert!(parse_template("{ name }").is_err());
    assert!(parse_template("{name:>5}").is_err());
}
