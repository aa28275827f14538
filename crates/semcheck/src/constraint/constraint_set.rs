//! ConstraintSet - disjunction of conjunctive constraint groups

use std::fmt;
use std::str::FromStr;

use super::Constraint;
use crate::rewrite::{rewrite_carets, rewrite_range};
use crate::{ParseError, Version};

const OR_SEPARATOR: &str = "||";
const AND_SEPARATOR: char = ',';

/// A parsed constraint expression such as `>=1.1, <2 || ^3.x`.
///
/// Groups are OR-ed together; the constraints inside a group are AND-ed.
/// Every group holds at least one constraint and a set holds at least one
/// group. The set is immutable once built and can be checked against any
/// number of versions, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    groups: Vec<Vec<Constraint>>,
}

impl ConstraintSet {
    /// Parse a full constraint expression.
    ///
    /// Hyphen and caret ranges are desugared on the whole expression before it
    /// is split on `||` and then on `,`. Parsing stops at the first invalid
    /// group or constraint.
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        let rewritten = rewrite_carets(&rewrite_range(expression));
        let rewritten = rewritten.trim();

        if rewritten.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut groups = Vec::new();
        for (index, group) in rewritten.split(OR_SEPARATOR).enumerate() {
            let group = group.trim();
            log::trace!("Split group {}: \"{}\"", index, group);
            if group.is_empty() {
                return Err(ParseError::EmptyGroup {
                    expression: expression.trim().to_string(),
                });
            }

            let constraints = group
                .split(AND_SEPARATOR)
                .map(|token| {
                    if token.trim().is_empty() {
                        Err(ParseError::EmptyConstraint {
                            group: group.to_string(),
                        })
                    } else {
                        Constraint::parse(token)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            groups.push(constraints);
        }

        log::debug!(
            "Parsed constraint \"{}\" into {} group(s), {} constraint(s)",
            expression.trim(),
            groups.len(),
            groups.iter().map(Vec::len).sum::<usize>()
        );

        Ok(ConstraintSet { groups })
    }

    /// Check whether `version` satisfies at least one group in full.
    pub fn check(&self, version: &Version) -> bool {
        self.groups.iter().any(|group| {
            debug_assert!(!group.is_empty(), "constraint group must not be empty");
            group.iter().all(|constraint| constraint.check(version))
        })
    }

    /// The OR-groups, each a list of AND-ed constraints
    pub fn groups(&self) -> &[Vec<Constraint>] {
        &self.groups
    }

    /// Number of OR-groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always false for a successfully parsed set
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromStr for ConstraintSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintSet::parse(s)
    }
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self
            .groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect();

        write!(f, "{}", groups.join(" || "))
    }
}
