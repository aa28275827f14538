//! Error type shared by version and constraint parsing

use thiserror::Error;

/// Error returned when a version or constraint expression cannot be parsed.
///
/// Every variant carries the substring that caused the failure so callers can
/// point at the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty constraint expression")]
    EmptyExpression,
    #[error("Empty constraint group in \"{expression}\"")]
    EmptyGroup { expression: String },
    #[error("Empty constraint in group \"{group}\"")]
    EmptyConstraint { group: String },
    #[error("Invalid operator \"{operator}\" in constraint \"{constraint}\"")]
    InvalidOperator { constraint: String, operator: String },
    #[error("Invalid version string \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
    #[error("Could not parse version constraint {constraint}: {reason}")]
    InvalidConstraint { constraint: String, reason: String },
}

impl ParseError {
    pub(crate) fn invalid_version(version: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidVersion {
            version: version.to_string(),
            reason: reason.into(),
        }
    }

    /// The substring that failed to parse.
    pub fn offending(&self) -> &str {
        match self {
            ParseError::EmptyExpression => "",
            ParseError::EmptyGroup { expression } => expression,
            ParseError::EmptyConstraint { group } => group,
            ParseError::InvalidOperator { constraint, .. } => constraint,
            ParseError::InvalidVersion { version, .. } => version,
            ParseError::InvalidConstraint { constraint, .. } => constraint,
        }
    }
}
