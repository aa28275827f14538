//! Version comparison utilities

use std::cmp::Ordering;

use crate::{Operator, ParseError, Version};

/// Comparator for comparing version strings
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, "=", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> Result<bool, ParseError> {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using any recognized operator spelling
    pub fn compare(version1: &str, operator: &str, version2: &str) -> Result<bool, ParseError> {
        let operator: Operator = operator.parse()?;
        Ok(operator.accepts(Self::ordering(version1, version2)?))
    }

    /// Total ordering of version1 relative to version2
    pub fn ordering(version1: &str, version2: &str) -> Result<Ordering, ParseError> {
        let a = Version::parse(version1)?;
        let b = Version::parse(version2)?;
        Ok(a.cmp(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_than() {
        assert!(Comparator::greater_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::greater_than("1.25.0", "1.25.0-rc.1").unwrap());
    }

    #[test]
    fn test_greater_than_or_equal_to() {
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::greater_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(!Comparator::greater_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_less_than() {
        assert!(!Comparator::less_than("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::less_than("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than("1.25.0", "1.26.0").unwrap());
        assert!(Comparator::less_than("1.0.0-alpha", "1.0.0-alpha.1").unwrap());
    }

    #[test]
    fn test_less_than_or_equal_to() {
        assert!(!Comparator::less_than_or_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::less_than_or_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_equal_to() {
        assert!(!Comparator::equal_to("1.25.0", "1.24.0").unwrap());
        assert!(Comparator::equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25", "v1.25.0").unwrap());
        assert!(Comparator::equal_to("1.25.0+a", "1.25.0+b").unwrap());
    }

    #[test]
    fn test_not_equal_to() {
        assert!(Comparator::not_equal_to("1.25.0", "1.24.0").unwrap());
        assert!(!Comparator::not_equal_to("1.25.0", "1.25.0").unwrap());
        assert!(Comparator::not_equal_to("1.25.0", "1.26.0").unwrap());
    }

    #[test]
    fn test_compare_synonyms() {
        assert!(Comparator::compare("1.25.0", "=>", "1.25.0").unwrap());
        assert!(Comparator::compare("1.25.0", "=<", "1.26.0").unwrap());
        assert!(Comparator::compare("1.25.0", "", "1.25").unwrap());
    }

    #[test]
    fn test_compare_errors() {
        assert!(matches!(
            Comparator::compare("1.0.0", "<>", "1.0.0"),
            Err(ParseError::InvalidOperator { .. })
        ));
        assert!(matches!(
            Comparator::less_than("foo", "1.0.0"),
            Err(ParseError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert_eq!(Comparator::ordering("1.2", "1.2.0").unwrap(), Ordering::Equal);
        assert_eq!(Comparator::ordering("2.0.0", "10.0.0").unwrap(), Ordering::Less);
    }
}
