//! Single version constraint implementation

use std::fmt;
use std::str::FromStr;

use super::Operator;
use crate::{ParseError, Version};

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '!', '~', '^'];

/// A single version constraint (e.g., ">= 1.0.0")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    operator: Operator,
    version: Version,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(operator: Operator, version: Version) -> Self {
        Constraint { operator, version }
    }

    /// Parse one primitive constraint such as `>= 1.2`, `!=4.1` or `v1.2`.
    ///
    /// The input must already be free of hyphen and caret ranges and of the
    /// `||` and `,` separators.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let constraint = input.trim();
        if constraint.is_empty() {
            return Err(ParseError::InvalidConstraint {
                constraint: constraint.to_string(),
                reason: "empty constraint".to_string(),
            });
        }

        let (operator, rest) = Operator::split_leading(constraint);
        let rest = rest.trim_start();

        // Whatever survives the longest operator match must start the version
        if rest.starts_with(OPERATOR_CHARS) {
            let end = constraint
                .find(|c: char| c.is_ascii_alphanumeric())
                .unwrap_or(constraint.len());
            return Err(ParseError::InvalidOperator {
                constraint: constraint.to_string(),
                operator: constraint[..end].trim().to_string(),
            });
        }

        if rest.is_empty() {
            return Err(ParseError::InvalidConstraint {
                constraint: constraint.to_string(),
                reason: "missing version".to_string(),
            });
        }

        let version = Version::parse(rest).map_err(|err| ParseError::InvalidConstraint {
            constraint: constraint.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Constraint { operator, version })
    }

    /// Get the operator
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the version operand
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Check whether `version` satisfies this constraint.
    pub fn check(&self, version: &Version) -> bool {
        self.operator.accepts(version.cmp(&self.version))
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    #[test]
    fn test_parse_constraint() {
        let cases = [
            (">= 1.2", Operator::GreaterThanOrEqual, "1.2.0"),
            ("1.0", Operator::Equal, "1.0.0"),
            ("<= 1.2", Operator::LessThanOrEqual, "1.2.0"),
            ("=< 1.2", Operator::LessThanOrEqual, "1.2.0"),
            ("=> 1.2", Operator::GreaterThanOrEqual, "1.2.0"),
            ("v1.2", Operator::Equal, "1.2.0"),
            ("=1.5", Operator::Equal, "1.5.0"),
            ("> 1.3", Operator::GreaterThan, "1.3.0"),
            ("< 1.4.1", Operator::LessThan, "1.4.1"),
            ("!=4.1", Operator::NotEqual, "4.1.0"),
            ("  >=   V2  ", Operator::GreaterThanOrEqual, "2.0.0"),
            (">=1.2.0-beta.1+foo", Operator::GreaterThanOrEqual, "1.2.0-beta.1+foo"),
        ];

        for (input, operator, version) in cases {
            let constraint = Constraint::parse(input).unwrap();
            assert_eq!(constraint.operator(), operator, "operator for {:?}", input);
            assert_eq!(constraint.version().to_string(), version, "version for {:?}", input);
        }
    }

    #[test]
    fn test_parse_constraint_fails() {
        for input in ["foo", "", "   ", ">=", ">= bar", "~1.2", "^1.2", "==1.2", "<>1.0", "1.x", "*"] {
            assert!(Constraint::parse(input).is_err(), "expected {:?} to fail", input);
        }
    }

    #[test]
    fn test_parse_constraint_error_kinds() {
        assert_eq!(
            Constraint::parse("~> 1.2").unwrap_err(),
            ParseError::InvalidOperator {
                constraint: "~> 1.2".to_string(),
                operator: "~>".to_string(),
            }
        );
        assert_eq!(
            Constraint::parse("<>1.0").unwrap_err(),
            ParseError::InvalidOperator {
                constraint: "<>1.0".to_string(),
                operator: "<>".to_string(),
            }
        );
        assert_eq!(
            Constraint::parse(">= ").unwrap_err(),
            ParseError::InvalidConstraint {
                constraint: ">=".to_string(),
                reason: "missing version".to_string(),
            }
        );

        let err = Constraint::parse(">= bar").unwrap_err();
        assert_eq!(err.offending(), ">= bar");
        assert!(matches!(err, ParseError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_constraint_check() {
        let cases = [
            ("= 2.0", "1.2.3", false),
            ("= 2.0", "2.0.0", true),
            ("4.1", "4.1.0", true),
            ("!=4.1", "4.1.0", false),
            ("!=4.1", "5.1.0", true),
            (">1.1", "4.1.0", true),
            (">1.1", "1.1.0", false),
            ("<1.1", "0.1.0", true),
            ("<1.1", "1.1.0", false),
            ("<1.1", "1.1.1", false),
            (">=1.1", "4.1.0", true),
            (">=1.1", "1.1.0", true),
            (">=1.1", "0.0.9", false),
            ("<=1.1", "0.1.0", true),
            ("<=1.1", "1.1.0", true),
            ("<=1.1", "1.1.1", false),
        ];

        for (constraint, version, expected) in cases {
            let c = Constraint::parse(constraint).unwrap();
            assert_eq!(c.check(&v(version)), expected, "{} against {}", constraint, version);
        }
    }

    #[test]
    fn test_check_prerelease_and_build() {
        assert!(Constraint::parse("<1.2.3").unwrap().check(&v("1.2.3-beta")));
        assert!(Constraint::parse(">1.2").unwrap().check(&v("1.3.0-beta")));
        assert!(Constraint::parse("=1.2.3+a").unwrap().check(&v("1.2.3+b")));
        assert!(!Constraint::parse("1.2.3").unwrap().check(&v("1.2.3-rc.1")));
    }

    #[test]
    fn test_not_equal_negates_equal() {
        let versions = ["0.9.0", "1.0.0", "1.0.0-alpha", "1.0.0+meta", "1.0.1", "2.0.0"];
        for operand in ["1.0", "1.0.0-alpha", "2"] {
            let eq = Constraint::parse(&format!("={}", operand)).unwrap();
            let ne = Constraint::parse(&format!("!={}", operand)).unwrap();
            for version in versions {
                let version = v(version);
                assert_eq!(eq.check(&version), !ne.check(&version));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Constraint::parse("=>1.2").unwrap().to_string(), ">= 1.2.0");
        assert_eq!(Constraint::parse("v1").unwrap().to_string(), "= 1.0.0");
        assert_eq!(
            Constraint::new(Operator::LessThan, Version::new(2, 0, 0)).to_string(),
            "< 2.0.0"
        );
    }
}
