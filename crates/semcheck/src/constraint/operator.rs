//! Operator types for version constraints

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// Recognized operator spellings, longest first so `>=` is never split into
/// `>` followed by `=`.
const OPERATOR_SPELLINGS: &[(&str, Operator)] = &[
    ("!=", Operator::NotEqual),
    (">=", Operator::GreaterThanOrEqual),
    ("=>", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("=<", Operator::LessThanOrEqual),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
    ("=", Operator::Equal),
];

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=, =>)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=, =<)
    LessThanOrEqual,
}

impl Operator {
    /// Split a leading operator off `input`.
    ///
    /// Returns the matched operator (Equal when none is present) and the rest
    /// of the text, untrimmed.
    pub fn split_leading(input: &str) -> (Self, &str) {
        for (spelling, op) in OPERATOR_SPELLINGS {
            if let Some(rest) = input.strip_prefix(*spelling) {
                return (*op, rest);
            }
        }
        (Operator::Equal, input)
    }

    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
        }
    }

    /// Get all supported operator spellings, including synonyms
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "!=", ">", "<", ">=", "<=", "=>", "=<"]
    }

    /// Apply the operator to an already computed ordering of `candidate`
    /// relative to the constraint operand.
    pub fn accepts(&self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;

        match self {
            Operator::Equal => ordering == Equal,
            Operator::NotEqual => ordering != Equal,
            Operator::GreaterThan => ordering == Greater,
            Operator::GreaterThanOrEqual => ordering != Less,
            Operator::LessThan => ordering == Less,
            Operator::LessThanOrEqual => ordering != Greater,
        }
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Operator::Equal);
        }
        OPERATOR_SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, op)| *op)
            .ok_or_else(|| ParseError::InvalidOperator {
                constraint: s.to_string(),
                operator: s.to_string(),
            })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
