//! Runtime values and caller-supplied scopes.

use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

/// A runtime value produced by evaluation or supplied through a [`Scope`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Nil,
    /// An ordered sequence, indexable with `[expr]`.
    Seq(Vec<Value>),
    /// A nested scope, accessible with `.name`.
    Map(Scope),
}

impl Value {
    /// Human-readable kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Nil => "nil",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
        }
    }

    /// Numeric view: integers widen to floats, everything else is `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Generalized truthiness: only `false` and `nil` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Nil)
    }
}

/// Host ordering: numeric kinds compare numerically across Int/Float,
/// like kinds compare naturally, everything else is incomparable.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
            (Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
            (Value::Int(l), Value::Float(r)) => (*l as f64).partial_cmp(r),
            (Value::Float(l), Value::Int(r)) => l.partial_cmp(&(*r as f64)),
            (Value::Str(l), Value::Str(r)) => Some(l.cmp(r)),
            (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
            (Value::Nil, Value::Nil) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Nil => write!(f, "nil"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(scope) => {
                write!(f, "{{")?;
                for (i, (name, value)) in scope.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl From<Scope> for Value {
    fn from(scope: Scope) -> Self {
        Value::Map(scope)
    }
}

/// A caller-supplied mapping from variable name to value.
///
/// Scopes nest (a value may itself be a [`Value::Map`]) and are never
/// mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scope(BTreeMap<String, Value>);

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    ///
    /// ```
    /// use formulon::Scope;
    ///
    /// let scope = Scope::new().with("a", 1).with("b", 2.5);
    /// assert!(scope.get("a").is_some());
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Scope {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn truthiness_only_exempts_false_and_nil() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Nil.is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::Str(String::new()).is_truthy());
        assert!(Value::Float(0.0).is_truthy());
    }

    #[test]
    fn ordering_is_numeric_across_int_and_float() {
        assert!(Value::Int(2) < Value::Float(2.5));
        assert!(Value::Float(3.0) > Value::Int(2));
        assert_eq!(
            Value::Int(2).partial_cmp(&Value::Float(2.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn mixed_kinds_are_incomparable() {
        assert_eq!(Value::Int(1).partial_cmp(&Value::Str("1".into())), None);
        assert_eq!(Value::Bool(true).partial_cmp(&Value::Int(1)), None);
    }

    #[test]
    fn scope_builder_nests() {
        let scope = Scope::new().with("a", Scope::new().with("b", 42));
        let Some(Value::Map(inner)) = scope.get("a") else {
            panic!("expected nested map");
        };
        assert_eq!(inner.get("b"), Some(&Value::Int(42)));
    }
}
