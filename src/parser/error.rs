//! Parse errors, converted from raw pest errors into domain terms.

use thiserror::Error;

use crate::parser::Span;
use crate::parser::builder::Rule;

/// Parser error with location and the offending source.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub source: String,
}

/// Specific kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },

    #[error("expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, source: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            source: source.into(),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "parse error at {}..{}: {}",
            self.span.0.start, self.span.0.end, self.kind
        )
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Convert a pest error into a human-readable [`ParseError`].
pub(super) fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: format_found_rules(&negatives),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, span, source)
}

/// Group expected rules into higher-level concepts.
fn format_expected_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "something else".to_string();
    }

    let mut concepts: Vec<&str> = Vec::new();
    let add = |concept: &'static str, concepts: &mut Vec<&str>| {
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    };

    for rule in rules {
        match rule {
            Rule::integer | Rule::float | Rule::boolean | Rule::string | Rule::nil => {
                add("literal", &mut concepts)
            }
            Rule::ident => add("identifier", &mut concepts),
            Rule::EOI => add("end of input", &mut concepts),
            _ => add("expression", &mut concepts),
        }
    }

    if concepts.len() == 1 {
        concepts[0].to_string()
    } else {
        let last = concepts.pop().unwrap();
        format!("{} or {}", concepts.join(", "), last)
    }
}

fn format_found_rules(rules: &[Rule]) -> String {
    match rules.first() {
        None => "unexpected token".to_string(),
        Some(Rule::ident) => "identifier".to_string(),
        Some(Rule::integer) => "integer".to_string(),
        Some(Rule::float) => "floating-point number".to_string(),
        Some(Rule::boolean) => "boolean".to_string(),
        Some(Rule::string) => "string".to_string(),
        Some(Rule::nil) => "nil".to_string(),
        Some(Rule::EOI) => "end of input".to_string(),
        Some(other) => format!("{other:?}"),
    }
}
