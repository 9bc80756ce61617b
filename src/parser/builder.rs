//! Lowers the pest parse tree into the [`Expr`] AST.

use pest::Parser;
use pest::iterators::Pair;

use crate::parser::ast::{AccessStep, Expr, Literal};
use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::syntax::{BinaryOp, UnaryOp};

#[derive(pest_derive::Parser)]
#[grammar = "parser/grammar.pest"]
struct FormulaParser;

/// Default cap on nested sub-expressions (parentheses, indexes, call
/// arguments, ternary branches) accepted by the parser.
pub const DEFAULT_MAX_PARSE_DEPTH: usize = 500;

/// Parse a formula into an expression tree.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_PARSE_DEPTH)
}

/// Parse with a custom nesting-depth cap, for callers handling untrusted
/// input with tighter limits.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ParseError> {
    let mut pairs = FormulaParser::parse(Rule::program, source)
        .map_err(|err| convert_pest_error(err, source))?;
    let program = pairs.next().expect("successful parse produces a program");
    let expression = program
        .into_inner()
        .next()
        .expect("program contains an expression");

    let builder = Builder { source, max_depth };
    builder.build(expression, 0)
}

struct Builder<'s> {
    source: &'s str,
    max_depth: usize,
}

impl Builder<'_> {
    fn build(&self, pair: Pair<'_, Rule>, depth: usize) -> Result<Expr, ParseError> {
        // Depth is counted per nested `expression`, which every bracketed or
        // branching construct re-enters. Operator chains fold iteratively and
        // do not grow it.
        let depth = if pair.as_rule() == Rule::expression {
            if depth >= self.max_depth {
                return Err(ParseError::new(
                    ParseErrorKind::MaxDepthExceeded {
                        depth,
                        max_depth: self.max_depth,
                    },
                    pair.as_span().into(),
                    self.source,
                ));
            }
            depth + 1
        } else {
            depth
        };

        match pair.as_rule() {
            Rule::expression => {
                let inner = pair.into_inner().next().expect("expression wraps ternary");
                self.build(inner, depth)
            }

            Rule::ternary => {
                let mut inner = pair.into_inner();
                let head = self.build(inner.next().expect("ternary head"), depth)?;
                match (inner.next(), inner.next()) {
                    (Some(if_true), Some(if_false)) => Ok(Expr::Ternary {
                        cond: Box::new(head),
                        if_true: Box::new(self.build(if_true, depth)?),
                        if_false: Box::new(self.build(if_false, depth)?),
                    }),
                    _ => Ok(head),
                }
            }

            Rule::logic_or
            | Rule::logic_and
            | Rule::comparison
            | Rule::bit_or
            | Rule::bit_xor
            | Rule::bit_and
            | Rule::shift
            | Rule::additive
            | Rule::multiplicative => {
                // Left-associative operator chain.
                let mut inner = pair.into_inner();
                let mut expr = self.build(inner.next().expect("left operand"), depth)?;
                while let Some(op_pair) = inner.next() {
                    let op = binary_op(op_pair.as_rule());
                    let right = self.build(inner.next().expect("right operand"), depth)?;
                    expr = Expr::Binary {
                        op,
                        left: Box::new(expr),
                        right: Box::new(right),
                    };
                }
                Ok(expr)
            }

            Rule::power => {
                // Right-associative: `2 ^ 3 ^ 2` is `2 ^ (3 ^ 2)`.
                let mut inner = pair.into_inner();
                let base = self.build(inner.next().expect("power base"), depth)?;
                match inner.next() {
                    Some(op_pair) => {
                        debug_assert_eq!(op_pair.as_rule(), Rule::op_pow);
                        let exponent = self.build(inner.next().expect("exponent"), depth)?;
                        Ok(Expr::Binary {
                            op: BinaryOp::Pow,
                            left: Box::new(base),
                            right: Box::new(exponent),
                        })
                    }
                    None => Ok(base),
                }
            }

            Rule::unary => {
                let mut pairs: Vec<Pair<'_, Rule>> = pair.into_inner().collect();
                let operand = pairs.pop().expect("unary wraps a postfix expression");
                let mut expr = self.build(operand, depth)?;
                for op_pair in pairs.into_iter().rev() {
                    let op = match op_pair.as_rule() {
                        Rule::op_not => UnaryOp::Not,
                        Rule::op_bnot => UnaryOp::BitNot,
                        rule => unreachable!("unexpected prefix operator {rule:?}"),
                    };
                    expr = Expr::Unary {
                        op,
                        expr: Box::new(expr),
                    };
                }
                Ok(expr)
            }

            Rule::postfix => {
                let mut inner = pair.into_inner();
                let mut expr = self.build(inner.next().expect("postfix base"), depth)?;
                for bang in inner {
                    debug_assert_eq!(bang.as_rule(), Rule::bang);
                    expr = Expr::Unary {
                        op: UnaryOp::Factorial,
                        expr: Box::new(expr),
                    };
                }
                Ok(expr)
            }

            Rule::grouped => {
                let inner = pair.into_inner().next().expect("grouped expression");
                self.build(inner, depth)
            }

            Rule::func_call => {
                let mut inner = pair.into_inner();
                let name = inner.next().expect("function name").as_str().to_string();
                let args = inner
                    .map(|arg| self.build(arg, depth))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Expr::Call { name, args })
            }

            Rule::access => {
                let mut steps = Vec::new();
                for step in pair.into_inner() {
                    match step.as_rule() {
                        Rule::ident => steps.push(AccessStep::Name(step.as_str().to_string())),
                        Rule::field => {
                            let name = step.into_inner().next().expect("field name");
                            steps.push(AccessStep::Name(name.as_str().to_string()));
                        }
                        Rule::index => {
                            let index = step.into_inner().next().expect("index expression");
                            steps.push(AccessStep::Index(self.build(index, depth)?));
                        }
                        rule => unreachable!("unexpected access step {rule:?}"),
                    }
                }
                Ok(Expr::Access(steps))
            }

            Rule::integer => {
                let text = pair.as_str();
                let value = text.parse::<i64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                        },
                        pair.as_span().into(),
                        self.source,
                    )
                })?;
                Ok(Expr::Literal(Literal::Int(value)))
            }

            Rule::float => {
                let text = pair.as_str();
                let value = text.parse::<f64>().map_err(|_| {
                    ParseError::new(
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                        },
                        pair.as_span().into(),
                        self.source,
                    )
                })?;
                Ok(Expr::Literal(Literal::Float(value)))
            }

            Rule::string => {
                let inner = pair.into_inner().next().expect("string body");
                Ok(Expr::Literal(Literal::Str(unescape(inner.as_str()))))
            }

            Rule::boolean => Ok(Expr::Literal(Literal::Bool(pair.as_str() == "true"))),

            Rule::nil => Ok(Expr::Literal(Literal::Nil)),

            rule => unreachable!("unexpected rule {rule:?} in parse tree"),
        }
    }
}

fn binary_op(rule: Rule) -> BinaryOp {
    match rule {
        Rule::op_add => BinaryOp::Add,
        Rule::op_sub => BinaryOp::Sub,
        Rule::op_mul => BinaryOp::Mul,
        Rule::op_div => BinaryOp::Div,
        Rule::op_pow => BinaryOp::Pow,
        Rule::op_band => BinaryOp::BitAnd,
        Rule::op_bor => BinaryOp::BitOr,
        Rule::op_bxor => BinaryOp::BitXor,
        Rule::op_shl => BinaryOp::Shl,
        Rule::op_shr => BinaryOp::Shr,
        Rule::op_eq => BinaryOp::Eq,
        Rule::op_neq => BinaryOp::Neq,
        Rule::op_gt => BinaryOp::Gt,
        Rule::op_gte => BinaryOp::Gte,
        Rule::op_lt => BinaryOp::Lt,
        Rule::op_lte => BinaryOp::Lte,
        Rule::op_and => BinaryOp::And,
        Rule::op_or => BinaryOp::Or,
        rule => unreachable!("rule {rule:?} is not a binary operator"),
    }
}

/// Resolve backslash escapes in a string literal body.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                // `\"`, `\\` and any unrecognized escape keep the escaped char.
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
