//! Version constraint matching
//!
//! This crate answers one question: does a version satisfy a constraint
//! expression such as `">=1.2, <2 || ^3.x"`? Expressions support the
//! comparison operators `=`, `!=`, `>`, `>=`, `<`, `<=` (plus the `=>` and
//! `=<` spellings), hyphen ranges (`1.2 - 2`), caret ranges with wildcards
//! (`^1.x`), `,` for AND and `||` for OR.
//!
//! ```
//! use semcheck::{ConstraintSet, Version};
//!
//! let set = ConstraintSet::parse(">=1.1, <2, !=1.2.3 || > 3").unwrap();
//! assert!(set.check(&Version::parse("3.1.2").unwrap()));
//! assert!(!set.check(&Version::parse("1.2.3").unwrap()));
//! ```

pub mod constraint;
mod comparator;
mod error;
pub mod rewrite;
mod semver;
mod version;

pub use comparator::Comparator;
pub use constraint::{Constraint, ConstraintSet, Operator};
pub use error::ParseError;
pub use semver::Semver;
pub use version::{Identifier, Version};
