//! Formula parser: grammar, AST and parse-error types.
//!
//! The rest of the engine treats this module as a black box with the
//! contract `text -> Expr | ParseError`. The formatter also uses it as a
//! reparse oracle when searching for a minimal parenthesization.

mod ast;
mod builder;
pub mod error;
mod syntax;

pub use ast::{AccessStep, Expr, Literal};
pub use builder::{DEFAULT_MAX_PARSE_DEPTH, Rule, parse, parse_with_max_depth};
pub use error::{ParseError, ParseErrorKind};
pub use syntax::{BinaryOp, Span, UnaryOp};
