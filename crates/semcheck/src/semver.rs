//! Semver facade providing one-call version checks

use crate::{ConstraintSet, ParseError, Version};

/// Main facade for constraint checks on raw strings
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint expression.
    ///
    /// Unparsable input on either side never satisfies anything.
    pub fn satisfies(version: &str, constraints: &str) -> bool {
        let version = match Version::parse(version) {
            Ok(v) => v,
            Err(err) => {
                log::debug!("Rejecting version: {}", err);
                return false;
            }
        };

        let set = match ConstraintSet::parse(constraints) {
            Ok(c) => c,
            Err(err) => {
                log::debug!("Rejecting constraint: {}", err);
                return false;
            }
        };

        set.check(&version)
    }

    /// Parse constraints and return a reusable representation.
    pub fn parse_constraints(constraints: &str) -> Result<ConstraintSet, ParseError> {
        ConstraintSet::parse(constraints)
    }

    /// Check a version against pre-parsed constraints.
    pub fn satisfies_parsed(version: &str, constraints: &ConstraintSet) -> bool {
        Version::parse(version).is_ok_and(|v| constraints.check(&v))
    }
}
